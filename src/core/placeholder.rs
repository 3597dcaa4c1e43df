//! Placeholder quotes pre-filled into empty input fields.
//!
//! A field is pre-populated with `"<marker> <quote>"`; if the user never
//! edits it, the trimmed text still starts with the marker and the field is
//! treated as empty.

use chrono::{Datelike, NaiveDate};

const QUOTES: &[&str] = &[
    "Small steps every day add up to big results.",
    "Done is better than perfect.",
    "Write it down before you forget it.",
    "Progress, not perfection.",
    "A blocker named is a blocker half solved.",
    "Every bug fixed is something learned.",
    "Ship it, then make it better.",
    "Focus on the next right thing.",
    "What you measure, you improve.",
    "Today's notes are tomorrow's answers.",
];

/// Quote for a given day; rotates deterministically through the list.
pub fn quote_for(date: NaiveDate) -> &'static str {
    let idx = date.num_days_from_ce().rem_euclid(QUOTES.len() as i32) as usize;
    QUOTES[idx]
}

/// Text to pre-fill into an empty field.
pub fn placeholder_for(marker: &str, date: NaiveDate) -> String {
    format!("{} {}", marker, quote_for(date))
}

/// True when `text` is untouched placeholder content.
///
/// An empty marker disables detection.
pub fn is_placeholder(marker: &str, text: &str) -> bool {
    !marker.is_empty() && text.trim().starts_with(marker)
}

/// Trim a raw field; `None` when it is blank or placeholder text.
pub fn clean_field(marker: &str, text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || is_placeholder(marker, trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}
