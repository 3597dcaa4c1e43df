//! Output + activity-log bookkeeping shared by the one-shot commands and
//! the interactive session.

use crate::context::AppContext;
use crate::models::outcome::{SaveOutcome, SyncOutcome};
use crate::ui::messages::{info, success, warning};
use crate::ui::render::print_summary;
use std::fmt;

pub fn saved(ctx: &AppContext, outcome: &SaveOutcome) {
    match outcome {
        SaveOutcome::Saved { path, created, entry } => {
            let sections: Vec<&str> = entry.sections().map(|(s, _)| s.label()).collect();
            let target = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            success(format!(
                "Entry saved to {} ({})",
                path.display(),
                sections.join(", ")
            ));
            if *created {
                info("Started a new log for today.");
            }
            ctx.record(
                "save",
                &target,
                &format!("Entry {} saved", entry.timestamp.format("%H:%M")),
            );
        }
        SaveOutcome::NothingToSave => {
            warning("Nothing to save: write something first.");
        }
    }
}

pub fn summary(ctx: &AppContext, text: &str) {
    success("Summary ready (copy & send):");
    print_summary(text);
    ctx.record("summary", &ctx.cfg.model, "Summary generated");
}

pub fn synced(ctx: &AppContext, outcome: SyncOutcome) {
    match outcome {
        SyncOutcome::NoChanges => {
            info("Nothing to commit: the log repository is up to date.");
            ctx.record("sync", "", "No changes");
        }
        SyncOutcome::Synced => {
            success("Committed & pushed.");
            ctx.record("sync", "", "Committed and pushed");
        }
    }
}

/// Record a failed operation as `<op>_failed`.
pub fn failed(ctx: &AppContext, operation: &str, err: &impl fmt::Display) {
    ctx.record(&format!("{operation}_failed"), "", &err.to_string());
}
