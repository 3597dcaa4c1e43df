use crate::cli::commands::report;
use crate::context::AppContext;
use crate::core::worker::{Completion, JobKind};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Stage, commit and push the log repository.
pub async fn handle(ctx: &AppContext) -> AppResult<()> {
    let (mut session, mut rx) = ctx.session()?;
    session.start_sync(ctx.now())?;
    info(format!("Syncing {}…", ctx.cfg.repo_dir_path().display()));

    match session.wait_for(&mut rx, JobKind::Sync).await {
        Some(Completion::Sync(Ok(outcome))) => {
            report::synced(ctx, outcome);
            Ok(())
        }
        Some(Completion::Sync(Err(e))) => {
            report::failed(ctx, "sync", &e);
            Err(e.into())
        }
        _ => Err(AppError::Other("sync task ended without a result".into())),
    }
}
