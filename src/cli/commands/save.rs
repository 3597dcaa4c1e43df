use crate::cli::commands::report;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::editor::edit_file;
use crate::errors::AppResult;
use crate::ui::template::{parse_template, render_template};
use std::fs;

/// Append an entry to today's log, from flags or from an editor template.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Save {
        progress,
        blockers,
        learnings,
        edit,
        editor,
    } = cmd
    {
        let now = ctx.now();
        let store = ctx.store();

        let [p, b, l] = if *edit {
            let path = std::env::temp_dir().join(format!(
                "dwlog-{}-{}.md",
                now.format("%Y-%m-%d"),
                std::process::id()
            ));
            fs::write(&path, render_template(store.marker(), now.date()))?;
            let edited = edit_file(&path, editor.as_deref()).and_then(|_| {
                fs::read_to_string(&path).map_err(Into::into)
            });
            let _ = fs::remove_file(&path);
            parse_template(&edited?)
        } else {
            [progress, blockers, learnings].map(|f| f.clone().unwrap_or_default())
        };

        let outcome = store.append_entry(&p, &b, &l, now)?;
        report::saved(ctx, &outcome);
    }

    Ok(())
}
