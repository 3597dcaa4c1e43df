//! Internal activity log kept in SQLite.

pub mod initialize;
pub mod log;
pub mod pool;
