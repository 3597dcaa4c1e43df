//! Single owner of the user-visible state.
//!
//! `Session` does every log read/write itself and hands the slow calls to
//! the [`Worker`]. Completions come back on a [`CompletionReceiver`] kept
//! by the caller and are applied here, one at a time.

use crate::core::store::LogStore;
use crate::core::summarizer::Summarizer;
use crate::core::sync::{SyncClient, commit_message};
use crate::core::worker::{Completion, CompletionReceiver, Job, JobKind, Worker};
use crate::errors::{AppError, AppResult};
use crate::models::outcome::SaveOutcome;
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::sync::Arc;

pub struct Session {
    store: LogStore,
    worker: Worker,
    commit_prefix: String,
    in_flight: HashSet<JobKind>,
    summary: Option<String>,
}

impl Session {
    pub fn new(
        store: LogStore,
        summarizer: Arc<dyn Summarizer>,
        sync: SyncClient,
        commit_prefix: impl Into<String>,
    ) -> (Self, CompletionReceiver) {
        let (worker, rx) = Worker::new(summarizer, sync);
        (
            Self {
                store,
                worker,
                commit_prefix: commit_prefix.into(),
                in_flight: HashSet::new(),
                summary: None,
            },
            rx,
        )
    }

    pub fn save(
        &self,
        progress: &str,
        blockers: &str,
        learnings: &str,
        now: NaiveDateTime,
    ) -> AppResult<SaveOutcome> {
        self.store.append_entry(progress, blockers, learnings, now)
    }

    pub fn today(&self, now: NaiveDateTime) -> AppResult<Option<String>> {
        self.store.read_today(now)
    }

    /// Latest successful summary.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn is_busy(&self, kind: JobKind) -> bool {
        self.in_flight.contains(&kind)
    }

    fn claim(&mut self, kind: JobKind) -> AppResult<()> {
        if !self.in_flight.insert(kind) {
            return Err(AppError::Busy(kind.to_string()));
        }
        Ok(())
    }

    /// Send today's log to the summarizer in the background.
    pub fn start_summary(&mut self, now: NaiveDateTime) -> AppResult<()> {
        if self.is_busy(JobKind::Summary) {
            return Err(AppError::Busy(JobKind::Summary.to_string()));
        }
        let log_text = self
            .store
            .read_today(now)?
            .ok_or_else(|| AppError::NoLogForDate(now.date().format("%Y-%m-%d").to_string()))?;

        self.claim(JobKind::Summary)?;
        self.worker.submit(Job::Summarize { log_text });
        Ok(())
    }

    /// Stage, commit and push the log repository in the background.
    pub fn start_sync(&mut self, now: NaiveDateTime) -> AppResult<()> {
        self.claim(JobKind::Sync)?;
        let message = commit_message(&self.commit_prefix, now.date());
        self.worker.submit(Job::Sync { message });
        Ok(())
    }

    /// Record a finished job. A failed summary leaves the previous one in place.
    pub fn apply(&mut self, completion: &Completion) {
        self.in_flight.remove(&completion.kind());
        if let Completion::Summary(Ok(text)) = completion {
            self.summary = Some(text.clone());
        }
    }

    /// Receive completions until one of `kind` arrives, applying each.
    pub async fn wait_for(
        &mut self,
        rx: &mut CompletionReceiver,
        kind: JobKind,
    ) -> Option<Completion> {
        while let Some(c) = rx.recv().await {
            self.apply(&c);
            if c.kind() == kind {
                return Some(c);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sync::fake::FakeVcs;
    use crate::core::worker::fake::FakeSummarizer;
    use crate::errors::GatewayError;
    use crate::models::outcome::SyncOutcome;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn session(
        reply: Result<String, GatewayError>,
        vcs: Arc<FakeVcs>,
    ) -> (TempDir, Session, CompletionReceiver, Arc<FakeSummarizer>) {
        let tmp = tempfile::tempdir().unwrap();
        let fake = Arc::new(FakeSummarizer::replying(reply));
        let (s, rx) = Session::new(
            LogStore::new(tmp.path().join("logs"), "#"),
            fake.clone(),
            SyncClient::new(vcs, 100),
            "Daily log",
        );
        (tmp, s, rx, fake)
    }

    #[tokio::test]
    async fn summary_receives_todays_file_and_is_stored() {
        let (_tmp, mut s, mut rx, fake) =
            session(Ok("- wrote doc".into()), Arc::new(FakeVcs::healthy(false)));
        s.save("wrote doc", "", "", at(5, 9, 15)).unwrap();

        s.start_summary(at(5, 10, 0)).unwrap();
        assert!(s.is_busy(JobKind::Summary));

        let c = s.wait_for(&mut rx, JobKind::Summary).await.unwrap();
        assert_eq!(c, Completion::Summary(Ok("- wrote doc".into())));
        assert!(!s.is_busy(JobKind::Summary));
        assert_eq!(s.summary(), Some("- wrote doc"));
        assert!(fake.seen.lock().unwrap()[0].contains("### Progress\nwrote doc"));
    }

    #[tokio::test]
    async fn summary_without_log_is_refused_before_any_call() {
        let (_tmp, mut s, _rx, fake) =
            session(Ok("x".into()), Arc::new(FakeVcs::healthy(false)));
        let err = s.start_summary(at(5, 10, 0)).unwrap_err();
        assert!(matches!(err, AppError::NoLogForDate(d) if d == "2024-01-05"));
        assert!(!s.is_busy(JobKind::Summary));
        assert!(fake.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_summary_keeps_previous_text() {
        let (_tmp, mut s, mut rx, _fake) = session(
            Err(GatewayError::MissingCredential("GEMINI_API_KEY".into())),
            Arc::new(FakeVcs::healthy(false)),
        );
        s.apply(&Completion::Summary(Ok("old".into())));
        s.save("x", "", "", at(5, 9, 0)).unwrap();

        s.start_summary(at(5, 9, 1)).unwrap();
        let c = s.wait_for(&mut rx, JobKind::Summary).await.unwrap();
        assert!(matches!(c, Completion::Summary(Err(_))));
        assert_eq!(s.summary(), Some("old"));
    }

    #[tokio::test]
    async fn second_summary_while_in_flight_is_busy() {
        let (_tmp, mut s, mut rx, fake) =
            session(Ok("- one".into()), Arc::new(FakeVcs::healthy(false)));
        s.save("x", "", "", at(5, 9, 0)).unwrap();

        s.start_summary(at(5, 9, 1)).unwrap();
        assert!(matches!(s.start_summary(at(5, 9, 2)), Err(AppError::Busy(k)) if k == "Summary"));

        s.wait_for(&mut rx, JobKind::Summary).await.unwrap();
        s.start_summary(at(5, 9, 3)).unwrap();
        s.wait_for(&mut rx, JobKind::Summary).await.unwrap();
        assert_eq!(fake.seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn second_sync_while_in_flight_is_busy() {
        let vcs = Arc::new(FakeVcs::healthy(true));
        let (_tmp, mut s, mut rx, _fake) = session(Ok("x".into()), vcs.clone());

        s.start_sync(at(5, 18, 0)).unwrap();
        assert!(matches!(s.start_sync(at(5, 18, 0)), Err(AppError::Busy(_))));

        let c = s.wait_for(&mut rx, JobKind::Sync).await.unwrap();
        assert_eq!(c, Completion::Sync(Ok(SyncOutcome::Synced)));
        assert!(vcs.calls().contains(&"commit:Daily log: 2024-01-05".to_string()));

        // free again once the completion is applied
        s.start_sync(at(5, 18, 5)).unwrap();
        s.wait_for(&mut rx, JobKind::Sync).await.unwrap();
    }

    #[tokio::test]
    async fn sync_with_clean_tree_reports_no_changes() {
        let vcs = Arc::new(FakeVcs::healthy(false));
        let (_tmp, mut s, mut rx, _fake) = session(Ok("x".into()), vcs.clone());

        s.start_sync(at(5, 18, 0)).unwrap();
        let c = s.wait_for(&mut rx, JobKind::Sync).await.unwrap();
        assert_eq!(c, Completion::Sync(Ok(SyncOutcome::NoChanges)));
        assert!(!vcs.calls().contains(&"push".to_string()));
    }

    #[tokio::test]
    async fn summary_and_sync_run_independently() {
        let (_tmp, mut s, mut rx, _fake) =
            session(Ok("sum".into()), Arc::new(FakeVcs::healthy(true)));
        s.save("x", "", "", at(5, 9, 0)).unwrap();

        s.start_summary(at(5, 9, 1)).unwrap();
        s.start_sync(at(5, 9, 1)).unwrap();

        s.wait_for(&mut rx, JobKind::Sync).await.unwrap();
        if s.is_busy(JobKind::Summary) {
            s.wait_for(&mut rx, JobKind::Summary).await.unwrap();
        }
        assert_eq!(s.summary(), Some("sum"));
        assert!(!s.is_busy(JobKind::Sync));
    }
}
