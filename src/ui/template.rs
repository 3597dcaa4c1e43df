//! Editor template used by `dwlog save --edit`.
//!
//! Each section starts with a `## <Label>` line and is pre-filled with a
//! placeholder quote; untouched sections are dropped by the store.

use crate::core::placeholder::placeholder_for;
use crate::models::entry::Section;
use chrono::NaiveDate;

pub fn render_template(marker: &str, date: NaiveDate) -> String {
    let mut out = String::new();
    for section in Section::ALL {
        out.push_str(&format!(
            "## {}\n{}\n\n",
            section.label(),
            placeholder_for(marker, date)
        ));
    }
    out
}

/// Split an edited template back into `[progress, blockers, learnings]`.
///
/// Text before the first section line is ignored.
pub fn parse_template(text: &str) -> [String; 3] {
    let mut fields: [Vec<&str>; 3] = Default::default();
    let mut current: Option<usize> = None;

    for line in text.lines() {
        let heading = line
            .strip_prefix("## ")
            .and_then(|label| Section::ALL.iter().position(|s| s.label() == label.trim()));

        match heading {
            Some(idx) => current = Some(idx),
            None => {
                if let Some(idx) = current {
                    fields[idx].push(line);
                }
            }
        }
    }

    fields.map(|lines| lines.join("\n").trim().to_string())
}
