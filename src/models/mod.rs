//! Domain models: table schemas, snapshots, and edit buffers.

mod buffer;
mod schema;
mod table;

pub use buffer::{EditBuffer, EditError};
pub use schema::{ColumnKind, ColumnSpec, TableKind, TableSchema, DATE_KEYWORDS};
pub use table::{Grid, Row, Table};
