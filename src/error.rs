//! Sync engine error taxonomy.
//!
//! Failures surface as values for the presentation layer to render; nothing
//! here terminates the session. Load failures never reach this type at all:
//! the engine converts them to an empty-table fallback with a notice. Cell
//! parse failures coerce to defaults (zero, empty string, false) instead of
//! erroring.

use thiserror::Error;

use crate::store::StoreError;

/// Failures a sync-engine operation can report to its caller.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The session gate blocked the operation before any store call.
    #[error("not authenticated; unlock the session first")]
    NotAuthenticated,

    /// The write to the remote store failed. The cache is left untouched,
    /// nothing was partially applied, and the user must retry manually.
    #[error("saving '{table}' failed: {source}")]
    SaveTransport {
        table: &'static str,
        #[source]
        source: StoreError,
    },
}
