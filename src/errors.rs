//! Unified application error type.
//! All modules (store, gateway, sync, db, cli) return AppError to keep the
//! error handling consistent; gateway and sync keep their own enums so the
//! worker can ship them across the completion channel.

use std::io;
use thiserror::Error;

/// Failures of the text-generation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("API key missing: set the {0} environment variable")]
    MissingCredential(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("The service returned an empty summary")]
    EmptyResponse,

    #[error("Summary task failed: {0}")]
    Task(String),
}

/// Failures of the stage / commit / push sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("git add failed: {0}")]
    Stage(String),

    #[error("git status check failed: {0}")]
    Status(String),

    #[error("git commit failed: {0}")]
    Commit(String),

    #[error("git push failed: {0}")]
    Push(String),

    #[error("Failed to run git: {0}")]
    Spawn(String),

    #[error("Sync task failed: {0}")]
    Task(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Activity database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No log found for {0}, save an entry first")]
    NoLogForDate(String),

    // ---------------------------
    // Integrations
    // ---------------------------
    #[error("Summary error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    #[error("{0} is already running, wait for it to finish")]
    Busy(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
