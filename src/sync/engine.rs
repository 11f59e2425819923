//! The sync engine: load, save, and cache invalidation for each table.

use crate::error::SyncError;
use crate::models::{EditBuffer, Table, TableKind};
use crate::session::SessionContext;
use crate::store::TableStore;
use crate::sync::normalize::normalize_rows;

/// Where a loaded snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Fresh cache hit; no remote read was issued.
    Cache,
    /// Fetched from the remote store.
    Remote,
    /// The remote read failed or returned nothing; the snapshot is an empty
    /// table with the declared default columns. Informational only.
    Fallback(String),
}

/// Outcome of a load operation.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub table: Table,
    pub origin: LoadOrigin,
}

/// Outcome of a successful save.
#[derive(Debug, Clone)]
pub struct SaveReport {
    /// Data rows transmitted (header excluded).
    pub rows_written: usize,
    /// Fully-blank rows removed by normalization.
    pub rows_dropped: usize,
    /// Always true: the cache entry was invalidated, so the caller must
    /// re-load to observe the authoritative post-write state. The echoed
    /// edit buffer is not trusted because the store may reorder or reject
    /// rows silently.
    pub reload_required: bool,
}

/// Orchestrates the load / edit / save / invalidate round-trip against a
/// remote table store. Every operation requires an authenticated session
/// context and is rejected categorically otherwise.
#[derive(Debug)]
pub struct SyncEngine<S: TableStore> {
    store: S,
}

impl<S: TableStore> SyncEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads one table, preferring a fresh cached snapshot.
    ///
    /// On a cache miss the remote store is read once and the parsed snapshot
    /// cached. An unreachable store, a malformed payload, or an empty sheet
    /// falls back softly to an empty default-schema table so the caller can
    /// still render an editable grid; the fallback is cached like any other
    /// snapshot and surfaced through [`LoadOrigin::Fallback`].
    pub async fn load(
        &self,
        ctx: &mut SessionContext,
        kind: TableKind,
    ) -> Result<LoadResult, SyncError> {
        if !ctx.is_authenticated() {
            return Err(SyncError::NotAuthenticated);
        }

        if let Some(snapshot) = ctx.cache().get(kind) {
            return Ok(LoadResult {
                table: snapshot.clone(),
                origin: LoadOrigin::Cache,
            });
        }

        let (table, origin) = match self.store.read(kind).await {
            Ok(grid) if !grid.is_empty() => {
                let table = Table::from_grid(kind, &grid);
                tracing::debug!("loaded {} ({} rows)", kind, table.len());
                (table, LoadOrigin::Remote)
            }
            Ok(_) => {
                tracing::warn!("remote returned an empty payload for {}", kind);
                (
                    Table::empty(kind),
                    LoadOrigin::Fallback("empty payload".to_string()),
                )
            }
            Err(e) => {
                tracing::warn!("loading {} failed: {}", kind, e);
                (Table::empty(kind), LoadOrigin::Fallback(e.to_string()))
            }
        };

        ctx.cache_mut().put(table.clone());
        Ok(LoadResult { table, origin })
    }

    /// Persists an edit buffer to the remote store.
    ///
    /// Fully-blank rows are dropped, then date-like cells canonicalized,
    /// then the rows travel as a header-included grid in a single bounded
    /// write attempt (the store is not idempotent, so there is no automatic
    /// retry). On success the cache entry is invalidated so the next load
    /// re-fetches; on failure the cache is untouched and the stale-but-valid
    /// snapshot keeps rendering.
    pub async fn save(
        &self,
        ctx: &mut SessionContext,
        buffer: EditBuffer,
    ) -> Result<SaveReport, SyncError> {
        if !ctx.is_authenticated() {
            return Err(SyncError::NotAuthenticated);
        }

        let kind = buffer.kind();
        let normalized = normalize_rows(kind, buffer.into_rows());
        let rows_written = normalized.rows.len();
        let grid = Table::from_rows(kind, normalized.rows).to_grid();

        match self.store.write(kind, grid).await {
            Ok(()) => {
                ctx.cache_mut().invalidate(kind);
                tracing::debug!(
                    "saved {} ({} rows, {} blank dropped)",
                    kind,
                    rows_written,
                    normalized.dropped
                );
                Ok(SaveReport {
                    rows_written,
                    rows_dropped: normalized.dropped,
                    reload_required: true,
                })
            }
            Err(source) => Err(SyncError::SaveTransport {
                table: kind.worksheet(),
                source,
            }),
        }
    }

    /// Marks every cached table stale so the next loads re-fetch. The
    /// explicit-refresh analogue of the invalidation a save performs.
    pub fn refresh(&self, ctx: &mut SessionContext) -> Result<(), SyncError> {
        if !ctx.is_authenticated() {
            return Err(SyncError::NotAuthenticated);
        }
        ctx.cache_mut().invalidate_all();
        Ok(())
    }
}
