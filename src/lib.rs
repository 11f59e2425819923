//! Agenda Pro core library.
//!
//! The sync round-trip behind the personal agenda dashboard: a session gate,
//! a per-session table cache, a remote table store client, and the sync
//! engine that loads, normalizes, saves, and invalidates the three record
//! sets (debts, meetings, tasks).

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod sync;

pub use cache::TableCache;
pub use config::{Config, ConfigError, StoreConfig};
pub use error::SyncError;
pub use models::{
    ColumnKind, ColumnSpec, EditBuffer, EditError, Grid, Row, Table, TableKind, TableSchema,
};
pub use session::SessionContext;
pub use store::{HttpTableStore, StoreError, TableStore};
pub use sync::{
    evaluate, Aggregate, AggregateValue, LoadOrigin, LoadResult, Predicate, SaveReport, SyncEngine,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
