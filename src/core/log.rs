use crate::db::log::{LogRow, load_all};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::text::{strip_ansi, truncate};
use ansi_term::Colour;

/// Widest op+target column before truncation.
const OP_WIDTH: usize = 60;

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "summary" => Colour::Cyan,
        "sync" => Colour::Blue,
        "backup" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        other if other.ends_with("_failed") => Colour::Red,
        _ => Colour::White,
    }
}

/// Render rows as aligned, coloured lines (without trailing newline).
pub fn format_rows(entries: &[LogRow]) -> Vec<String> {
    let id_w = entries
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries.iter().map(|r| r.date.len()).max().unwrap_or(10);

    let op_targets: Vec<String> = entries
        .iter()
        .map(|r| {
            let raw = if r.target.is_empty() {
                r.operation.clone()
            } else {
                format!("{} ({})", r.operation, r.target)
            };
            truncate(&raw, OP_WIDTH)
        })
        .collect();
    let op_w = op_targets.iter().map(|s| s.chars().count()).max().unwrap_or(10);

    entries
        .iter()
        .zip(op_targets)
        .map(|(row, visible)| {
            let color = color_for_operation(&row.operation);

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                row.date,
                colored,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            )
        })
        .collect()
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_all(&pool.conn)?;
        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in format_rows(&entries) {
            println!("{line}");
        }
        Ok(())
    }
}
