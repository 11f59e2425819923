//! Remote table store client.
//!
//! The store owns durable storage of all tables. The sync engine depends on
//! two facets only: a retryable read returning a header-included value grid,
//! and a write whose outcome is a binary success or a typed transport
//! failure within a bounded timeout. Writes are not assumed idempotent, so
//! callers issue at most one attempt per save.

mod http;

use thiserror::Error;

use crate::models::{Grid, TableKind};

pub use http::HttpTableStore;

/// Transport-level failures observable by the sync engine.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("request timed out after {0} seconds")]
    Timeout(u64),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed payload: {0}")]
    Payload(String),
}

/// Abstract remote table store.
#[allow(async_fn_in_trait)]
pub trait TableStore {
    /// Reads one table as a header-included grid. Safe to retry: reads have
    /// no side effects on the store.
    async fn read(&self, kind: TableKind) -> Result<Grid, StoreError>;

    /// Replaces one table's contents with the given header-included grid.
    /// Not guaranteed idempotent; call at most once per save action.
    async fn write(&self, kind: TableKind, grid: Grid) -> Result<(), StoreError>;
}
