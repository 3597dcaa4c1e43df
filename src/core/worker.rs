//! Background jobs for the slow integrations.
//!
//! Each job runs on its own tokio task and reports back through an mpsc
//! channel; only the receiving side touches user-visible state.

use crate::core::summarizer::Summarizer;
use crate::core::sync::SyncClient;
use crate::errors::{GatewayError, SyncError};
use crate::models::outcome::SyncOutcome;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    Summary,
    Sync,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::Summary => f.write_str("Summary"),
            JobKind::Sync => f.write_str("Sync"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Summarize { log_text: String },
    Sync { message: String },
}

impl Job {
    pub fn kind(&self) -> JobKind {
        match self {
            Job::Summarize { .. } => JobKind::Summary,
            Job::Sync { .. } => JobKind::Sync,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Summary(Result<String, GatewayError>),
    Sync(Result<SyncOutcome, SyncError>),
}

impl Completion {
    pub fn kind(&self) -> JobKind {
        match self {
            Completion::Summary(_) => JobKind::Summary,
            Completion::Sync(_) => JobKind::Sync,
        }
    }
}

pub type CompletionReceiver = UnboundedReceiver<Completion>;

pub struct Worker {
    summarizer: Arc<dyn Summarizer>,
    sync: SyncClient,
    tx: UnboundedSender<Completion>,
}

impl Worker {
    pub fn new(summarizer: Arc<dyn Summarizer>, sync: SyncClient) -> (Self, CompletionReceiver) {
        let (tx, rx) = unbounded_channel();
        (
            Self {
                summarizer,
                sync,
                tx,
            },
            rx,
        )
    }

    /// Start `job` in the background. Must be called inside a tokio runtime.
    ///
    /// A panic inside the job is turned into a failed completion.
    pub fn submit(&self, job: Job) -> JoinHandle<()> {
        let tx = self.tx.clone();
        debug!(kind = %job.kind(), "job submitted");

        match job {
            Job::Summarize { log_text } => {
                let summarizer = Arc::clone(&self.summarizer);
                tokio::spawn(async move {
                    let task =
                        tokio::spawn(async move { summarizer.summarize(&log_text).await });
                    let result = match task.await {
                        Ok(r) => r,
                        Err(e) => {
                            error!("summary task aborted: {e}");
                            Err(GatewayError::Task(e.to_string()))
                        }
                    };
                    // receiver gone means the session ended; nothing left to update
                    let _ = tx.send(Completion::Summary(result));
                })
            }
            Job::Sync { message } => {
                let sync = self.sync.clone();
                tokio::spawn(async move {
                    let task =
                        tokio::task::spawn_blocking(move || sync.sync_repository(&message));
                    let result = match task.await {
                        Ok(r) => r,
                        Err(e) => {
                            error!("sync task aborted: {e}");
                            Err(SyncError::Task(e.to_string()))
                        }
                    };
                    let _ = tx.send(Completion::Sync(result));
                })
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Canned [`Summarizer`] that records every log text it receives.
    pub struct FakeSummarizer {
        pub reply: Result<String, GatewayError>,
        pub seen: Mutex<Vec<String>>,
    }

    impl FakeSummarizer {
        pub fn replying(reply: Result<String, GatewayError>) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Summarizer for FakeSummarizer {
        async fn summarize(&self, log_text: &str) -> Result<String, GatewayError> {
            self.seen.lock().unwrap().push(log_text.to_string());
            self.reply.clone()
        }
    }

    /// Summarizer that always panics.
    pub struct PanickingSummarizer;

    #[async_trait]
    impl Summarizer for PanickingSummarizer {
        async fn summarize(&self, _log_text: &str) -> Result<String, GatewayError> {
            panic!("boom")
        }
    }
}
