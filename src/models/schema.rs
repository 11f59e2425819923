//! Per-table column schemas.
//!
//! The remote store is schema-less, so every cell travels as a string. The
//! declared schema is the single source of truth for which columns a table
//! has, how each cell is rendered for editing, and how it is normalized
//! before transmission. Column names are part of the external contract with
//! the existing worksheets and must not change.

use std::fmt;

/// Semantic kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Date,
    Time,
    Boolean,
    /// Free text constrained to a fixed option set when edited.
    Options(&'static [&'static str]),
}

/// Column name keywords that mark a column as date-like even when its
/// declared kind is not `Date`. Matches the worksheet naming convention.
pub const DATE_KEYWORDS: &[&str] = &["fecha", "limite", "date"];

/// One column in a table schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    /// Returns true if cells in this column are normalized as dates before
    /// a save: either the declared kind is `Date`, or the column name
    /// matches the date keyword convention.
    pub fn is_date_like(&self) -> bool {
        if self.kind == ColumnKind::Date {
            return true;
        }
        let lower = self.name.to_lowercase();
        DATE_KEYWORDS.iter().any(|kw| lower.contains(kw))
    }
}

/// Declared column set for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub columns: &'static [ColumnSpec],
}

impl TableSchema {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Declared column names, in order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// Index of a column by name. Matching is case-insensitive and ignores
    /// surrounding whitespace, since remote header rows are hand-edited.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(wanted))
    }

    /// Column spec by name.
    pub fn column(&self, name: &str) -> Option<&'static ColumnSpec> {
        self.column_index(name).map(|i| &self.columns[i])
    }
}

const DEBTS_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { name: "Concepto", kind: ColumnKind::Text },
    ColumnSpec { name: "Monto", kind: ColumnKind::Number },
    ColumnSpec { name: "Tipo", kind: ColumnKind::Options(&["Debo", "Me deben"]) },
    ColumnSpec { name: "Persona", kind: ColumnKind::Text },
    ColumnSpec { name: "Fecha", kind: ColumnKind::Date },
];

const MEETINGS_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { name: "Asunto", kind: ColumnKind::Text },
    ColumnSpec { name: "Fecha", kind: ColumnKind::Date },
    ColumnSpec { name: "Hora", kind: ColumnKind::Time },
    ColumnSpec { name: "Link", kind: ColumnKind::Text },
    ColumnSpec { name: "Notas", kind: ColumnKind::Text },
];

const TASKS_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { name: "Tarea", kind: ColumnKind::Text },
    ColumnSpec { name: "Prioridad", kind: ColumnKind::Options(&["Alta", "Media", "Baja"]) },
    ColumnSpec { name: "Fecha Limite", kind: ColumnKind::Date },
    ColumnSpec { name: "Completado", kind: ColumnKind::Boolean },
];

const DEBTS_SCHEMA: TableSchema = TableSchema { columns: DEBTS_COLUMNS };
const MEETINGS_SCHEMA: TableSchema = TableSchema { columns: MEETINGS_COLUMNS };
const TASKS_SCHEMA: TableSchema = TableSchema { columns: TASKS_COLUMNS };

/// The three record sets the dashboard manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Debts,
    Meetings,
    Tasks,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Debts, TableKind::Meetings, TableKind::Tasks];

    /// Worksheet name in the remote store.
    pub fn worksheet(&self) -> &'static str {
        match self {
            TableKind::Debts => "deudas",
            TableKind::Meetings => "reuniones",
            TableKind::Tasks => "tareas",
        }
    }

    /// Declared column schema.
    pub fn schema(&self) -> &'static TableSchema {
        match self {
            TableKind::Debts => &DEBTS_SCHEMA,
            TableKind::Meetings => &MEETINGS_SCHEMA,
            TableKind::Tasks => &TASKS_SCHEMA,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.worksheet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worksheet_names() {
        assert_eq!(TableKind::Debts.worksheet(), "deudas");
        assert_eq!(TableKind::Meetings.worksheet(), "reuniones");
        assert_eq!(TableKind::Tasks.worksheet(), "tareas");
    }

    #[test]
    fn test_declared_columns_match_remote_contract() {
        let names: Vec<_> = TableKind::Debts.schema().column_names().collect();
        assert_eq!(names, ["Concepto", "Monto", "Tipo", "Persona", "Fecha"]);

        let names: Vec<_> = TableKind::Meetings.schema().column_names().collect();
        assert_eq!(names, ["Asunto", "Fecha", "Hora", "Link", "Notas"]);

        let names: Vec<_> = TableKind::Tasks.schema().column_names().collect();
        assert_eq!(names, ["Tarea", "Prioridad", "Fecha Limite", "Completado"]);
    }

    #[test]
    fn test_column_index_is_lenient() {
        let schema = TableKind::Debts.schema();
        assert_eq!(schema.column_index("Monto"), Some(1));
        assert_eq!(schema.column_index("monto"), Some(1));
        assert_eq!(schema.column_index("  MONTO "), Some(1));
        assert_eq!(schema.column_index("Saldo"), None);
    }

    #[test]
    fn test_date_like_by_kind_and_by_name() {
        let debts = TableKind::Debts.schema();
        assert!(debts.column("Fecha").unwrap().is_date_like());
        assert!(!debts.column("Monto").unwrap().is_date_like());

        // "Fecha Limite" matches by keyword even independently of its kind
        let tasks = TableKind::Tasks.schema();
        assert!(tasks.column("Fecha Limite").unwrap().is_date_like());
        assert!(!tasks.column("Completado").unwrap().is_date_like());
    }
}
