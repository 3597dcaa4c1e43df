use crate::cli::commands::report;
use crate::context::AppContext;
use crate::core::worker::{Completion, JobKind};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Summarize today's log and print the result.
pub async fn handle(ctx: &AppContext) -> AppResult<()> {
    let (mut session, mut rx) = ctx.session()?;
    session.start_summary(ctx.now())?;
    info(format!("Asking {} for a summary…", ctx.cfg.model));

    match session.wait_for(&mut rx, JobKind::Summary).await {
        Some(Completion::Summary(Ok(text))) => {
            report::summary(ctx, &text);
            Ok(())
        }
        Some(Completion::Summary(Err(e))) => {
            report::failed(ctx, "summary", &e);
            Err(e.into())
        }
        _ => Err(AppError::Other("summary task ended without a result".into())),
    }
}
