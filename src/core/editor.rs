use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Platform default: $EDITOR, then $VISUAL, then notepad/nano.
pub fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` in `requested` (or the default editor), falling back to the
/// default when the requested one fails. Returns the editor that succeeded.
pub fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<String> {
    let fallback = default_editor();
    let first = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    debug!(editor = %first, file = %path.display(), "launching editor");
    if matches!(Command::new(&first).arg(path).status(), Ok(s) if s.success()) {
        return Ok(first);
    }

    if first != fallback {
        crate::ui::messages::warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            first, fallback
        ));
        if matches!(Command::new(&fallback).arg(path).status(), Ok(s) if s.success()) {
            return Ok(fallback);
        }
    }

    Err(AppError::Other(format!(
        "failed to edit {} with '{}'",
        path.display(),
        first
    )))
}
