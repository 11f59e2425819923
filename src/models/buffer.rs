//! Edit buffers: working copies of a table awaiting a save.

use thiserror::Error;

use super::schema::TableKind;
use super::table::{Row, Table};

/// Errors from edit-buffer mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("table '{0}' has no column named '{1}'")]
    UnknownColumn(TableKind, String),
    #[error("row {0} is out of range (table has {1} rows)")]
    RowOutOfRange(usize, usize),
}

/// In-memory, not-yet-persisted working copy of a table's rows.
///
/// Mutations happen here; nothing reaches the remote store until the buffer
/// is handed to the sync engine's save operation.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    kind: TableKind,
    rows: Vec<Row>,
}

impl EditBuffer {
    pub fn from_table(table: &Table) -> Self {
        Self {
            kind: table.kind(),
            rows: table.rows().to_vec(),
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a blank row and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(Row::blank(self.kind.schema().width()));
        self.rows.len() - 1
    }

    /// Sets one cell by row index and column name.
    pub fn set_cell(
        &mut self,
        row: usize,
        column: &str,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        let idx = self
            .kind
            .schema()
            .column_index(column)
            .ok_or_else(|| EditError::UnknownColumn(self.kind, column.to_string()))?;
        let count = self.rows.len();
        let cell_row = self
            .rows
            .get_mut(row)
            .ok_or(EditError::RowOutOfRange(row, count))?;
        cell_row.set(idx, value);
        Ok(())
    }

    /// Removes one row.
    pub fn delete_row(&mut self, row: usize) -> Result<(), EditError> {
        if row >= self.rows.len() {
            return Err(EditError::RowOutOfRange(row, self.rows.len()));
        }
        self.rows.remove(row);
        Ok(())
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}
