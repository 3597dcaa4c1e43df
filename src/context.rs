//! Everything a command handler needs, resolved once from CLI + config.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::store::LogStore;
use crate::core::summarizer::GeminiGateway;
use crate::core::sync::{GitCli, SyncClient};
use crate::core::worker::CompletionReceiver;
use crate::db::log::record;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDateTime;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

pub struct AppContext {
    pub cfg: Config,
    pub config_path: PathBuf,
    fixed_now: Option<NaiveDateTime>,
}

impl AppContext {
    pub fn new(cfg: Config, config_path: PathBuf, fixed_now: Option<NaiveDateTime>) -> Self {
        Self {
            cfg,
            config_path,
            fixed_now,
        }
    }

    /// Load the configuration and apply command-line overrides.
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
        let mut cfg = Config::load(Some(config_path.as_path()))?;

        if let Some(dir) = &cli.log_dir {
            cfg.log_dir = dir.clone();
        }
        if let Some(db) = &cli.db {
            cfg.database = db.clone();
        }

        let fixed_now = match &cli.now {
            Some(s) => Some(date::parse_datetime(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?),
            None => None,
        };

        Ok(Self::new(cfg, config_path, fixed_now))
    }

    /// Current time; re-read on every call so a long session rolls over at midnight.
    pub fn now(&self) -> NaiveDateTime {
        self.fixed_now.unwrap_or_else(date::now)
    }

    pub fn store(&self) -> LogStore {
        LogStore::new(self.cfg.log_dir_path(), self.cfg.placeholder_marker.clone())
    }

    pub fn session(&self) -> AppResult<(Session, CompletionReceiver)> {
        let gateway = GeminiGateway::new(self.cfg.gateway_config())?;
        let git = GitCli::new(
            self.cfg.repo_dir_path(),
            self.cfg.git_remote.clone(),
            self.cfg.git_branch.clone(),
        );
        Ok(Session::new(
            self.store(),
            Arc::new(gateway),
            SyncClient::new(Arc::new(git), self.cfg.diagnostic_limit),
            self.cfg.commit_prefix.clone(),
        ))
    }

    pub fn open_db(&self) -> AppResult<DbPool> {
        DbPool::open(&self.cfg.database_path())
    }

    /// Add a row to the activity log; failures are only reported as warnings.
    pub fn record(&self, operation: &str, target: &str, message: &str) {
        let result = self
            .open_db()
            .and_then(|pool| record(&pool.conn, operation, target, message));
        if let Err(e) = result {
            warn!("failed to write internal log: {e}");
        }
    }
}
