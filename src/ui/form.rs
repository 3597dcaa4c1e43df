//! Line-driven form used by the interactive session.
//!
//! Fields are asked in order; each one ends at the first empty line, so an
//! immediate empty line leaves the field blank.

use crate::models::entry::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStep {
    /// Waiting for lines of this section.
    Ask(Section),
    /// All three fields collected: `[progress, blockers, learnings]`.
    Done([String; 3]),
}

#[derive(Debug, Default)]
pub struct Form {
    idx: usize,
    fields: [Vec<String>; 3],
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        Section::ALL[self.idx.min(2)]
    }

    pub fn feed(&mut self, line: &str) -> FormStep {
        if line.trim().is_empty() {
            self.idx += 1;
            if self.idx >= Section::ALL.len() {
                let fields = std::mem::take(&mut self.fields);
                self.idx = 0;
                return FormStep::Done(fields.map(|lines| lines.join("\n")));
            }
        } else {
            self.fields[self.idx].push(line.to_string());
        }
        FormStep::Ask(self.current())
    }
}

/// One-line save: `<section alias> <text>`, e.g. `did fixed the build`.
pub fn quick_fields(args: &str) -> Option<[String; 3]> {
    let (code, text) = args.trim().split_once(char::is_whitespace)?;
    let section = Section::from_code(code)?;
    let mut fields: [String; 3] = Default::default();
    let idx = Section::ALL.iter().position(|s| *s == section)?;
    fields[idx] = text.trim().to_string();
    Some(fields)
}
