//! runwatch CLI: the main entry point.
//!
//! Commands:
//! - `replay`  : Drive a script of task-loop events through the gateway
//! - `classify`: Show the key and text a failure would produce
//! - `describe`: Show the sentence for a planned action
//! - `init`    : Write the default config file
//! - `status`  : Show the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use runwatch_config::AppConfig;

mod commands;

use commands::replay::OutputFormat;

#[derive(Parser)]
#[command(
    name = "runwatch",
    about = "runwatch: see what an autonomous task loop would tell its user",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of ~/.runwatch/config.toml
    #[arg(short, long, global = true, env = "RUNWATCH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON-lines event script (`-` reads stdin)
    Replay {
        script: String,

        /// Output format for delivered notifications
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Classify a failure and print its key and display text
    Classify {
        /// Transport error with this HTTP status
        #[arg(long, conflicts_with_all = ["text", "unknown"])]
        status: Option<u16>,

        /// A plain string failure
        #[arg(long, conflicts_with = "unknown")]
        text: Option<String>,

        /// A failure of unrecognised shape
        #[arg(long)]
        unknown: bool,
    },

    /// Print the status sentence for a planned action
    Describe {
        /// Action tag (search, wikipedia, image, code, ...)
        #[arg(short, long)]
        action: Option<String>,

        /// Action argument (query or prompt)
        #[arg(long)]
        arg: Option<String>,
    },

    /// Write the default configuration file
    Init,

    /// Show the effective configuration
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_with_env(path),
        None => AppConfig::load(),
    };

    // Initialize tracing; stdout is reserved for notifications
    let level = match (&config, cli.verbose) {
        (_, true) => "debug".to_string(),
        (Ok(config), false) => config.log_level.clone(),
        (Err(_), false) => "info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = config.map_err(|e| format!("Failed to load config: {e}"))?;
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    match cli.command {
        Commands::Replay { script, format } => commands::replay::run(&config, &script, format).await?,
        Commands::Classify {
            status,
            text,
            unknown,
        } => commands::classify::run(&config, status, text, unknown),
        Commands::Describe { action, arg } => commands::describe::run(action, arg),
        Commands::Init => commands::init::run(&config_path)?,
        Commands::Status => commands::status::run(&config, &config_path),
    }

    Ok(())
}
