//! Status lines printed by the command handlers and the session prompt.

use ansi_term::Colour;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn colour(self) -> Colour {
        match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        }
    }
}

/// `<coloured icon> <msg>`
pub fn format_line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{} {}", level.colour().bold().paint(level.icon()), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Level::Warning, msg));
}

/// Errors go to stderr so piped `show` output stays clean.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", format_line(Level::Error, msg));
}

/// Title line above a printed day file.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}\n", Colour::Blue.bold().paint(format!("== {msg} ==")));
}

/// Summary text between two rules, ready to copy into a status update.
pub fn framed(title: &str, text: &str) -> String {
    let rule = Colour::Fixed(8).paint("-".repeat(40));
    format!("{rule}\n{}\n{text}\n{rule}", Colour::Cyan.bold().paint(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::text::strip_ansi;

    #[test]
    fn line_is_icon_then_message() {
        assert_eq!(strip_ansi(&format_line(Level::Error, "boom")), "❌ boom");
        assert_eq!(strip_ansi(&format_line(Level::Success, 3)), "✅ 3");
    }

    #[test]
    fn framed_summary_keeps_text_verbatim() {
        let out = strip_ansi(&framed("Summary", "- shipped\n- reviewed"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "-".repeat(40));
        assert_eq!(lines[1], "Summary");
        assert_eq!(&lines[2..4], ["- shipped", "- reviewed"]);
        assert_eq!(lines[4], "-".repeat(40));
    }
}
