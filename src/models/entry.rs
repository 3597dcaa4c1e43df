use crate::core::placeholder::clean_field;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// The three labeled blocks an entry may carry, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Progress,
    Blockers,
    Learnings,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Progress, Section::Blockers, Section::Learnings];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Progress => "Progress",
            Section::Blockers => "Blockers",
            Section::Learnings => "Learnings",
        }
    }

    /// Accept the label or a short alias (`did`, `challenges`, `learned`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "progress" | "p" | "did" | "done" => Some(Section::Progress),
            "blockers" | "b" | "challenges" | "blocked" => Some(Section::Blockers),
            "learnings" | "l" | "learned" | "til" => Some(Section::Learnings),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One timestamped save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub timestamp: NaiveDateTime,
    pub progress: Option<String>,
    pub blockers: Option<String>,
    pub learnings: Option<String>,
}

impl Entry {
    /// Build an entry from raw field text; `None` when every field is blank
    /// or placeholder text.
    pub fn from_fields(
        timestamp: NaiveDateTime,
        progress: &str,
        blockers: &str,
        learnings: &str,
        marker: &str,
    ) -> Option<Self> {
        let entry = Entry {
            timestamp,
            progress: clean_field(marker, progress),
            blockers: clean_field(marker, blockers),
            learnings: clean_field(marker, learnings),
        };
        (!entry.is_empty()).then_some(entry)
    }

    pub fn is_empty(&self) -> bool {
        self.progress.is_none() && self.blockers.is_none() && self.learnings.is_none()
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn get(&self, section: Section) -> Option<&str> {
        match section {
            Section::Progress => self.progress.as_deref(),
            Section::Blockers => self.blockers.as_deref(),
            Section::Learnings => self.learnings.as_deref(),
        }
    }

    /// Non-empty sections in file order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &str)> + '_ {
        Section::ALL
            .into_iter()
            .filter_map(|s| self.get(s).map(|text| (s, text)))
    }

    /// Markdown block appended to the day file.
    pub fn render(&self) -> String {
        let mut out = format!("---\n\n## {}\n\n", self.timestamp.format("%H:%M"));
        for (section, text) in self.sections() {
            out.push_str(&format!("### {}\n{}\n\n", section.label(), text));
        }
        out
    }
}

/// One-time heading written when a day file is created.
pub fn render_header(date: NaiveDate) -> String {
    format!("# {}\n\n", date.format("%Y-%m-%d"))
}
