use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::ui::render::print_log;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Show { date, list } = cmd {
        let store = ctx.store();

        if *list {
            let days = store.list_days()?;
            if days.is_empty() {
                info(format!("No logs in {}", store.dir().display()));
            }
            for d in days {
                println!("{}  {}", d.format("%Y-%m-%d"), store.path_for(d).display());
            }
            return Ok(());
        }

        let day = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => ctx.now().date(),
        };

        match store.read_day(day)? {
            Some(content) => {
                header(store.path_for(day).display());
                print_log(&content);
            }
            None => info(format!("No log for {} yet.", day.format("%Y-%m-%d"))),
        }
    }

    Ok(())
}
