use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Backup { file, force } = cmd {
        let dest = expand_tilde(file);
        let count = BackupLogic::backup(&ctx.store(), &dest, *force)?;
        success(format!("📦 Archived {} log file(s) into {}", count, dest.display()));
        ctx.record(
            "backup",
            &dest.to_string_lossy(),
            &format!("{count} file(s) archived"),
        );
    }

    Ok(())
}
