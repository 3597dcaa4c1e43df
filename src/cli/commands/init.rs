use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (kept if it already exists)
///  - the activity database
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let path = &ctx.config_path;

    println!("⚙️  Initializing dwlog…");
    if path.exists() {
        info(format!("Config file already present: {}", path.display()));
    } else {
        ctx.cfg.save(path)?;
        success(format!("Config file : {}", path.display()));
    }

    let db_path = ctx.cfg.database_path();
    ctx.open_db()?;
    success(format!("Database    : {}", db_path.display()));
    info(format!("Log directory: {}", ctx.cfg.log_dir_path().display()));

    ctx.record(
        "init",
        &db_path.to_string_lossy(),
        "Configuration and database initialized",
    );

    println!("🎉 dwlog initialization completed!");
    Ok(())
}
