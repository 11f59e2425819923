//! Session-scoped table cache.
//!
//! Holds the last-fetched snapshot of each table so repeated reads within a
//! session skip the remote store. Invalidation is event-driven only: a
//! successful save or an explicit refresh marks entries stale, there is no
//! expiry timer.

use std::collections::HashMap;

use crate::models::{Table, TableKind};

#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: Table,
    fresh: bool,
}

/// Cache of the most recently fetched snapshot per table.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: HashMap<TableKind, CacheEntry>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached snapshot, but only while it is marked fresh.
    pub fn get(&self, kind: TableKind) -> Option<&Table> {
        self.entries
            .get(&kind)
            .filter(|e| e.fresh)
            .map(|e| &e.snapshot)
    }

    /// Stores a snapshot and marks it fresh, replacing any previous entry
    /// wholesale.
    pub fn put(&mut self, snapshot: Table) {
        self.entries.insert(
            snapshot.kind(),
            CacheEntry {
                snapshot,
                fresh: true,
            },
        );
    }

    /// Marks one table stale so the next read re-fetches.
    pub fn invalidate(&mut self, kind: TableKind) {
        if let Some(entry) = self.entries.get_mut(&kind) {
            entry.fresh = false;
        }
    }

    /// Marks every table stale.
    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.fresh = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_miss_when_empty() {
        let cache = TableCache::new();
        assert!(cache.get(TableKind::Debts).is_none());
    }

    #[test]
    fn test_put_then_get() {
        let mut cache = TableCache::new();
        cache.put(Table::empty(TableKind::Debts));

        assert!(cache.get(TableKind::Debts).is_some());
        assert!(cache.get(TableKind::Tasks).is_none());
    }

    #[test]
    fn test_invalidate_forces_miss() {
        let mut cache = TableCache::new();
        cache.put(Table::empty(TableKind::Tasks));
        cache.invalidate(TableKind::Tasks);

        assert!(cache.get(TableKind::Tasks).is_none());

        // a fresh put revives the entry
        cache.put(Table::empty(TableKind::Tasks));
        assert!(cache.get(TableKind::Tasks).is_some());
    }

    #[test]
    fn test_invalidate_all() {
        let mut cache = TableCache::new();
        for kind in TableKind::ALL {
            cache.put(Table::empty(kind));
        }
        cache.invalidate_all();

        for kind in TableKind::ALL {
            assert!(cache.get(kind).is_none());
        }
    }
}
