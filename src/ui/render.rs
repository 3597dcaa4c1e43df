use crate::ui::messages::framed;
use crate::utils::colors::colorize_log_line;

/// Print a day file with coloured headings.
pub fn print_log(content: &str) {
    for line in content.lines() {
        println!("{}", colorize_log_line(line));
    }
}

/// Print a summary framed for copy & paste.
pub fn print_summary(text: &str) {
    println!("{}", framed("Summary", text));
}
