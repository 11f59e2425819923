//! Table snapshots and rows.

use super::schema::{TableKind, TableSchema};

/// Header-included two-dimensional value grid, the transport format the
/// remote store reads and writes.
pub type Grid = Vec<Vec<String>>;

/// One row of a table. Cells are aligned with the table's declared schema;
/// an absent value is the empty string. Rows have no identity beyond their
/// position in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// A row of `width` empty cells.
    pub fn blank(width: usize) -> Self {
        Self {
            cells: vec![String::new(); width],
        }
    }

    /// Builds a row from raw cells, padding or truncating to `width`.
    pub fn from_cells(mut cells: Vec<String>, width: usize) -> Self {
        cells.resize(width, String::new());
        Self { cells }
    }

    pub fn get(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value.into();
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// True when every cell is empty or whitespace. Fully-blank rows are
    /// never persisted.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}

/// Snapshot of one record set: the declared schema plus an ordered sequence
/// of rows. Snapshots are replaced wholesale by the next successful load,
/// never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    kind: TableKind,
    rows: Vec<Row>,
}

impl Table {
    /// An empty table carrying exactly the declared default columns. Used
    /// as the soft-failure fallback so the caller can always render an
    /// editable grid.
    pub fn empty(kind: TableKind) -> Self {
        Self { kind, rows: Vec::new() }
    }

    pub fn from_rows(kind: TableKind, rows: Vec<Row>) -> Self {
        Self { kind, rows }
    }

    /// Parses a header-included grid against the declared schema.
    ///
    /// The first grid row is the header. Columns are matched to the schema
    /// by name; payload columns the schema does not declare are ignored,
    /// and declared columns missing from the payload come back blank. An
    /// empty grid yields an empty table.
    pub fn from_grid(kind: TableKind, grid: &[Vec<String>]) -> Self {
        let schema = kind.schema();
        let Some((header, data)) = grid.split_first() else {
            return Self::empty(kind);
        };

        // schema column -> payload column
        let mapping: Vec<Option<usize>> = schema
            .columns
            .iter()
            .map(|col| {
                header
                    .iter()
                    .position(|h| h.trim().eq_ignore_ascii_case(col.name))
            })
            .collect();

        let rows = data
            .iter()
            .map(|raw| {
                let cells = mapping
                    .iter()
                    .map(|slot| {
                        slot.and_then(|i| raw.get(i))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect();
                Row { cells }
            })
            .collect();

        Self { kind, rows }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.kind.schema()
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

    /// Cell value by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.schema().column_index(column)?;
        self.rows.get(row).map(|r| r.get(idx))
    }

    /// Serializes to the header-included grid the remote store expects.
    pub fn to_grid(&self) -> Grid {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.schema().column_names().map(String::from).collect());
        grid.extend(self.rows.iter().map(|r| r.cells.clone()));
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_from_grid_maps_columns_by_header_name() {
        let payload = grid(&[
            &["Tarea", "Prioridad", "Fecha Limite", "Completado"],
            &["Buy milk", "Alta", "2025-03-01", "False"],
        ]);
        let table = Table::from_grid(TableKind::Tasks, &payload);

        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, "Tarea"), Some("Buy milk"));
        assert_eq!(table.cell(0, "Completado"), Some("False"));
    }

    #[test]
    fn test_from_grid_tolerates_reordered_and_unknown_columns() {
        let payload = grid(&[
            &["Completado", "Extra", "tarea"],
            &["True", "noise", "Ship report"],
        ]);
        let table = Table::from_grid(TableKind::Tasks, &payload);

        assert_eq!(table.cell(0, "Tarea"), Some("Ship report"));
        assert_eq!(table.cell(0, "Completado"), Some("True"));
        // declared column missing from the payload comes back blank
        assert_eq!(table.cell(0, "Prioridad"), Some(""));
    }

    #[test]
    fn test_from_grid_empty_payload_yields_empty_table() {
        let table = Table::from_grid(TableKind::Debts, &[]);
        assert!(table.is_empty());
        assert_eq!(table.schema().width(), 5);
    }

    #[test]
    fn test_from_grid_header_only_yields_no_rows() {
        let payload = grid(&[&["Concepto", "Monto", "Tipo", "Persona", "Fecha"]]);
        let table = Table::from_grid(TableKind::Debts, &payload);
        assert!(table.is_empty());
    }

    #[test]
    fn test_row_blank_detection() {
        assert!(Row::from_cells(vec!["".into(), "  ".into()], 2).is_blank());
        assert!(!Row::from_cells(vec!["".into(), "x".into()], 2).is_blank());
    }

    #[test]
    fn test_short_payload_rows_are_padded() {
        let payload = grid(&[
            &["Asunto", "Fecha", "Hora", "Link", "Notas"],
            &["Standup", "2025-03-01"],
        ]);
        let table = Table::from_grid(TableKind::Meetings, &payload);
        assert_eq!(table.cell(0, "Hora"), Some(""));
        assert_eq!(table.cell(0, "Notas"), Some(""));
    }

    #[test]
    fn test_to_grid_puts_header_first() {
        let mut row = Row::blank(4);
        row.set(0, "Buy milk");
        let table = Table::from_rows(TableKind::Tasks, vec![row]);

        let grid = table.to_grid();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], ["Tarea", "Prioridad", "Fecha Limite", "Completado"]);
        assert_eq!(grid[1][0], "Buy milk");
    }
}
