//! Append-only store of per-day markdown files.

use crate::errors::AppResult;
use crate::models::entry::{Entry, render_header};
use crate::models::outcome::SaveOutcome;
use crate::utils::date::date_from_file_name;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct LogStore {
    dir: PathBuf,
    marker: String,
}

impl LogStore {
    pub fn new(dir: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            marker: marker.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// `<dir>/<YYYY-MM-DD>.md`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.md", date.format("%Y-%m-%d")))
    }

    /// Append one entry to the file for `now`'s date.
    ///
    /// Blank and placeholder fields are dropped; when nothing is left the
    /// call returns `NothingToSave` without touching the filesystem.
    pub fn append_entry(
        &self,
        progress: &str,
        blockers: &str,
        learnings: &str,
        now: NaiveDateTime,
    ) -> AppResult<SaveOutcome> {
        let Some(entry) = Entry::from_fields(now, progress, blockers, learnings, &self.marker)
        else {
            debug!("nothing to save, every field empty or placeholder");
            return Ok(SaveOutcome::NothingToSave);
        };

        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(entry.date());

        // an empty file (e.g. left by a failed first write) still needs its heading
        let mut file = OpenOptions::new().append(true).create(true).open(&path)?;
        let created = file.metadata()?.len() == 0;

        let mut block = String::new();
        if created {
            block.push_str(&render_header(entry.date()));
        }
        block.push_str(&entry.render());

        file.write_all(block.as_bytes())?;
        file.flush()?;

        info!(path = %path.display(), created, "entry appended");
        Ok(SaveOutcome::Saved {
            path,
            created,
            entry,
        })
    }

    /// Full content of `now`'s file, `None` if it has not been created yet.
    pub fn read_today(&self, now: NaiveDateTime) -> AppResult<Option<String>> {
        self.read_day(now.date())
    }

    pub fn read_day(&self, date: NaiveDate) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(date)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Dates that have a log file, ascending. A missing directory is empty.
    pub fn list_days(&self) -> AppResult<Vec<NaiveDate>> {
        let rd = match fs::read_dir(&self.dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut days = Vec::new();
        for item in rd {
            let item = item?;
            if !item.file_type()?.is_file() {
                continue;
            }
            if let Some(d) = item.file_name().to_str().and_then(date_from_file_name) {
                days.push(d);
            }
        }
        days.sort();
        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn store() -> (TempDir, LogStore) {
        let tmp = tempfile::tempdir().unwrap();
        let s = LogStore::new(tmp.path().join("logs"), "#");
        (tmp, s)
    }

    #[test]
    fn first_save_creates_file_with_header_and_single_entry() {
        let (_tmp, s) = store();
        let out = s
            .append_entry("Wrote design doc", "", "Learned X", at(2024, 1, 5, 9, 15))
            .unwrap();

        let SaveOutcome::Saved { path, created, .. } = out else {
            panic!("expected Saved");
        };
        assert!(created);
        assert_eq!(path.file_name().unwrap(), "2024-01-05.md");

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(
            content,
            "# 2024-01-05\n\n---\n\n## 09:15\n\n### Progress\nWrote design doc\n\n### Learnings\nLearned X\n\n"
        );
        assert!(!content.contains("Blockers"));
    }

    #[test]
    fn empty_leftover_file_still_gets_its_heading() {
        let (_tmp, s) = store();
        let path = s.path_for(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        fs::create_dir_all(s.dir()).unwrap();
        fs::write(&path, "").unwrap();

        let out = s.append_entry("work", "", "", at(2024, 1, 5, 9, 15)).unwrap();
        assert!(matches!(out, SaveOutcome::Saved { created: true, .. }));

        s.append_entry("more", "", "", at(2024, 1, 5, 9, 30)).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# 2024-01-05\n\n---\n\n## 09:15"));
        assert_eq!(content.matches("# 2024-01-05").count(), 1);
    }

    #[test]
    fn same_day_saves_share_one_header_in_order() {
        let (_tmp, s) = store();
        s.append_entry("morning", "", "", at(2024, 1, 5, 9, 15)).unwrap();
        let second = s
            .append_entry("", "afternoon", "", at(2024, 1, 5, 14, 30))
            .unwrap();
        assert!(matches!(second, SaveOutcome::Saved { created: false, .. }));

        let content = s.read_today(at(2024, 1, 5, 18, 0)).unwrap().unwrap();
        assert_eq!(content.matches("# 2024-01-05").count(), 1);
        assert_eq!(content.matches("---").count(), 2);
        let first = content.find("## 09:15").unwrap();
        let second = content.find("## 14:30").unwrap();
        assert!(first < second);
        assert!(content.find("morning").unwrap() < content.find("afternoon").unwrap());
    }

    #[test]
    fn existing_bytes_are_never_rewritten() {
        let (_tmp, s) = store();
        s.append_entry("one", "", "", at(2024, 1, 5, 9, 0)).unwrap();
        let before = s.read_day(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()).unwrap().unwrap();

        for (i, h) in [10, 11, 12].into_iter().enumerate() {
            s.append_entry(&format!("entry {i}"), "", "", at(2024, 1, 5, h, 0))
                .unwrap();
            let now = s.read_today(at(2024, 1, 5, h, 1)).unwrap().unwrap();
            assert!(now.starts_with(&before));
        }
    }

    #[test]
    fn empty_save_is_a_no_op_without_side_effects() {
        let (_tmp, s) = store();
        let out = s.append_entry("", "  ", "\n", at(2024, 1, 5, 9, 0)).unwrap();
        assert_eq!(out, SaveOutcome::NothingToSave);
        assert!(!s.dir().exists(), "directory must be created lazily");
    }

    #[test]
    fn placeholder_only_save_does_not_add_an_entry() {
        let (_tmp, s) = store();
        s.append_entry("real", "", "", at(2024, 1, 5, 9, 0)).unwrap();
        let before = s.read_today(at(2024, 1, 5, 9, 1)).unwrap();

        let out = s
            .append_entry(
                "# Small steps every day",
                "   # Done is better than perfect.",
                "",
                at(2024, 1, 5, 10, 0),
            )
            .unwrap();
        assert_eq!(out, SaveOutcome::NothingToSave);
        assert_eq!(s.read_today(at(2024, 1, 5, 10, 1)).unwrap(), before);
    }

    #[test]
    fn placeholder_fields_are_dropped_but_real_ones_kept() {
        let (_tmp, s) = store();
        s.append_entry("# quote", "stuck on CI", "# quote", at(2024, 1, 5, 9, 0))
            .unwrap();
        let content = s.read_today(at(2024, 1, 5, 9, 1)).unwrap().unwrap();
        assert!(content.contains("### Blockers\nstuck on CI"));
        assert!(!content.contains("quote"));
    }

    #[test]
    fn day_rollover_targets_a_new_file() {
        let (_tmp, s) = store();
        s.append_entry("late night", "", "", at(2024, 1, 5, 23, 59)).unwrap();
        let out = s.append_entry("after midnight", "", "", at(2024, 1, 6, 0, 1)).unwrap();
        assert!(matches!(out, SaveOutcome::Saved { created: true, .. }));

        let d1 = s.read_today(at(2024, 1, 5, 12, 0)).unwrap().unwrap();
        let d2 = s.read_today(at(2024, 1, 6, 12, 0)).unwrap().unwrap();
        assert!(!d1.contains("after midnight"));
        assert!(d2.starts_with("# 2024-01-06\n"));
        assert!(d2.contains("after midnight"));
    }

    #[test]
    fn read_today_without_file_is_absent() {
        let (_tmp, s) = store();
        assert_eq!(s.read_today(at(2024, 1, 5, 9, 0)).unwrap(), None);
    }

    #[test]
    fn list_days_is_sorted_and_ignores_other_files() {
        let (_tmp, s) = store();
        assert!(s.list_days().unwrap().is_empty());

        s.append_entry("b", "", "", at(2024, 1, 6, 9, 0)).unwrap();
        s.append_entry("a", "", "", at(2024, 1, 5, 9, 0)).unwrap();
        fs::write(s.dir().join("README.md"), "notes").unwrap();

        let days = s.list_days().unwrap();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()
            ]
        );
    }
}
