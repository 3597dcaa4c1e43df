use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::editor::edit_file;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = &ctx.config_path;

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", ctx.cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                warning(format!(
                    "{} does not exist yet, writing defaults first",
                    path.display()
                ));
                ctx.cfg.save(path)?;
            }
            let used = edit_file(path, editor.as_deref())?;
            success(format!(
                "Configuration file edited successfully using '{}'",
                used
            ));
        }
    }

    Ok(())
}
