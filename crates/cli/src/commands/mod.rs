pub mod classify;
pub mod describe;
pub mod init;
pub mod replay;
pub mod status;
