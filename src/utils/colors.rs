/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Colour for a section label of a log entry.
fn color_for_section(label: &str) -> &'static str {
    match label {
        "Progress" => GREEN,
        "Blockers" => YELLOW,
        "Learnings" => MAGENTA,
        _ => CYAN,
    }
}

/// Colourize one line of a daily log file for terminal display.
///
/// Only headings and rules are coloured; user text is printed as written.
pub fn colorize_log_line(line: &str) -> String {
    if let Some(label) = line.strip_prefix("### ") {
        format!("{BOLD}{}{label}{RESET}", color_for_section(label))
    } else if let Some(time) = line.strip_prefix("## ") {
        format!("{BOLD}{CYAN}{time}{RESET}")
    } else if line.starts_with("# ") {
        format!("{BOLD}{BLUE}{line}{RESET}")
    } else if line == "---" {
        format!("{GREY}{}{RESET}", "-".repeat(40))
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(colorize_log_line("Wrote design doc"), "Wrote design doc");
    }

    #[test]
    fn section_labels_get_their_colour() {
        let out = colorize_log_line("### Blockers");
        assert!(out.contains(YELLOW));
        assert!(out.contains("Blockers"));
    }
}
