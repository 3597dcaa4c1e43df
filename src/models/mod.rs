pub mod entry;
pub mod outcome;
