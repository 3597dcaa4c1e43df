use crate::models::entry::Entry;
use std::path::PathBuf;

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The entry was appended to `path`; `created` when the day file was new.
    Saved {
        path: PathBuf,
        created: bool,
        entry: Entry,
    },
    /// Every field was empty or placeholder text; nothing was written.
    NothingToSave,
}

/// Result of a successful sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The working tree had nothing to commit; no push was attempted.
    NoChanges,
    /// Changes were committed and pushed.
    Synced,
}
