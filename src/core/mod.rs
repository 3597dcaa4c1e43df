pub mod backup;
pub mod editor;
pub mod log;
pub mod placeholder;
pub mod session;
pub mod store;
pub mod summarizer;
pub mod sync;
pub mod worker;
