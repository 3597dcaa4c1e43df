pub mod backup;
pub mod config;
pub mod init;
pub mod log;
pub mod report;
pub mod save;
pub mod session;
pub mod show;
pub mod summary;
pub mod sync;
