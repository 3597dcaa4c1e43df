//! Stage / commit / push of the log repository.
//!
//! Version control is reached through the narrow [`VcsClient`] trait;
//! [`GitCli`] is the production implementation that shells out to `git`.

use crate::errors::SyncError;
use crate::models::outcome::SyncOutcome;
use crate::utils::text::truncate;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;
use tracing::{debug, info};

/// Captured result of one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    /// Human-readable reason for a failure: stderr, else stdout, else the exit code.
    pub fn diagnostic(&self) -> String {
        let err = self.stderr.trim();
        if !err.is_empty() {
            return err.to_string();
        }
        let out = self.stdout.trim();
        if !out.is_empty() {
            return out.to_string();
        }
        format!("exit code {}", self.exit_code)
    }
}

pub trait VcsClient: Send + Sync {
    /// Stage every change in the working directory.
    fn stage(&self) -> Result<CommandOutput, SyncError>;

    /// Whether the index differs from HEAD after staging.
    fn has_staged_changes(&self) -> Result<bool, SyncError>;

    fn commit(&self, message: &str) -> Result<CommandOutput, SyncError>;

    fn push(&self) -> Result<CommandOutput, SyncError>;
}

/// `git` shell-out rooted at a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_dir: PathBuf,
    remote: Option<String>,
    branch: Option<String>,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<PathBuf>, remote: Option<String>, branch: Option<String>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            remote,
            branch,
        }
    }

    fn execute(&self, args: &[&str]) -> Result<CommandOutput, SyncError> {
        debug!(?args, dir = %self.repo_dir.display(), "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            // never hang on a credential prompt
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GCM_INTERACTIVE", "never")
            .output()
            .map_err(|e| SyncError::Spawn(e.to_string()))?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

impl VcsClient for GitCli {
    fn stage(&self) -> Result<CommandOutput, SyncError> {
        self.execute(&["add", "--all"])
    }

    fn has_staged_changes(&self) -> Result<bool, SyncError> {
        let out = self.execute(&["diff", "--cached", "--quiet"])?;
        match out.exit_code {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(SyncError::Status(out.diagnostic())),
        }
    }

    fn commit(&self, message: &str) -> Result<CommandOutput, SyncError> {
        self.execute(&["commit", "-m", message])
    }

    fn push(&self) -> Result<CommandOutput, SyncError> {
        let mut args = vec!["push"];
        if let Some(remote) = &self.remote {
            args.push(remote);
            if let Some(branch) = &self.branch {
                args.push(branch);
            }
        }
        self.execute(&args)
    }
}

/// Commit message for a given day, e.g. `Daily log: 2024-01-05`.
pub fn commit_message(prefix: &str, date: NaiveDate) -> String {
    format!("{}: {}", prefix, date.format("%Y-%m-%d"))
}

#[derive(Clone)]
pub struct SyncClient {
    vcs: Arc<dyn VcsClient>,
    diagnostic_limit: usize,
}

impl SyncClient {
    pub fn new(vcs: Arc<dyn VcsClient>, diagnostic_limit: usize) -> Self {
        Self {
            vcs,
            diagnostic_limit,
        }
    }

    fn diag(&self, out: &CommandOutput) -> String {
        truncate(&out.diagnostic(), self.diagnostic_limit)
    }

    fn limit(&self, err: SyncError) -> SyncError {
        let n = self.diagnostic_limit;
        match err {
            SyncError::Stage(m) => SyncError::Stage(truncate(&m, n)),
            SyncError::Status(m) => SyncError::Status(truncate(&m, n)),
            SyncError::Commit(m) => SyncError::Commit(truncate(&m, n)),
            SyncError::Push(m) => SyncError::Push(truncate(&m, n)),
            SyncError::Spawn(m) => SyncError::Spawn(truncate(&m, n)),
            SyncError::Task(m) => SyncError::Task(truncate(&m, n)),
        }
    }

    /// Stage everything, commit with `message` and push.
    ///
    /// A clean index short-circuits to `NoChanges` before commit and push.
    /// The first failing step aborts the remaining ones.
    pub fn sync_repository(&self, message: &str) -> Result<SyncOutcome, SyncError> {
        let staged = self.vcs.stage().map_err(|e| self.limit(e))?;
        if !staged.success {
            return Err(SyncError::Stage(self.diag(&staged)));
        }

        if !self.vcs.has_staged_changes().map_err(|e| self.limit(e))? {
            info!("working tree clean, nothing to sync");
            return Ok(SyncOutcome::NoChanges);
        }

        let committed = self.vcs.commit(message).map_err(|e| self.limit(e))?;
        if !committed.success {
            return Err(SyncError::Commit(self.diag(&committed)));
        }

        let pushed = self.vcs.push().map_err(|e| self.limit(e))?;
        if !pushed.success {
            return Err(SyncError::Push(self.diag(&pushed)));
        }

        info!(%message, "log repository synced");
        Ok(SyncOutcome::Synced)
    }
}
