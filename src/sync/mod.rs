//! The sync round-trip core.
//!
//! Load pulls a snapshot (cache first, remote on miss, empty-table fallback
//! on failure), the presentation layer edits a buffer, save normalizes and
//! transmits it, then invalidates the cache so the next load observes the
//! authoritative post-write state.

mod aggregate;
mod engine;
mod normalize;

pub use aggregate::{
    evaluate, is_truthy, numeric_value, Aggregate, AggregateValue, Predicate, TRUTHY_TOKENS,
};
pub use engine::{LoadOrigin, LoadResult, SaveReport, SyncEngine};
pub use normalize::{canonical_date, normalize_rows, NormalizedRows};
