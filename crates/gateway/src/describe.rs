//! Human sentences for planned actions.

use runwatch_core::{ActionKind, PlannedAction};

pub const GENERATING_RESPONSE: &str = "🧠 Generating response...";
pub const WRITING_CODE: &str = "💻 Writing code...";

/// Describe what the task loop is about to do.
///
/// Absent or unrecognised actions fall back to the generic sentence. `code`
/// ignores its argument; the other known actions embed it (or `""`).
pub fn describe_action(action: &PlannedAction) -> String {
    let arg = action.arg_or_empty();
    match &action.action {
        Some(ActionKind::Search) => format!("🌐 Searching the web for \"{arg}\"..."),
        Some(ActionKind::Wikipedia) => format!("🌐 Searching Wikipedia for \"{arg}\"..."),
        Some(ActionKind::Image) => format!("🎨 Generating an image with prompt: \"{arg}\"..."),
        Some(ActionKind::Code) => WRITING_CODE.to_string(),
        Some(ActionKind::Other(_)) | None => GENERATING_RESPONSE.to_string(),
    }
}
