//! Edit-buffer normalization applied before a save.
//!
//! Order matters: fully-blank rows are dropped first, then date-like cells
//! are canonicalized, so normalization never manufactures a date string for
//! a row that was about to disappear.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Row, TableKind};

/// Accepted input formats for date cells, tried in order. Output is always
/// ISO-8601 (`%Y-%m-%d`).
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d", "%d/%m/%y"];

/// Datetime shapes that sometimes come back from spreadsheet exports; the
/// time component is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Outcome of normalizing a buffer's rows.
#[derive(Debug)]
pub struct NormalizedRows {
    pub rows: Vec<Row>,
    /// Fully-blank rows removed.
    pub dropped: usize,
}

/// Parses a raw cell as a date and reformats it canonically. Returns `None`
/// when the cell does not parse as any accepted shape.
pub fn canonical_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date().format("%Y-%m-%d").to_string());
        }
    }
    None
}

/// Normalizes an edit buffer's rows for transmission: drops fully-blank
/// rows, then canonicalizes every date-like cell. Unparsable date cells
/// become empty strings rather than aborting the save.
pub fn normalize_rows(kind: TableKind, rows: Vec<Row>) -> NormalizedRows {
    let before = rows.len();
    let mut rows: Vec<Row> = rows.into_iter().filter(|r| !r.is_blank()).collect();
    let dropped = before - rows.len();

    let schema = kind.schema();
    for (idx, col) in schema.columns.iter().enumerate() {
        if !col.is_date_like() {
            continue;
        }
        for row in rows.iter_mut() {
            let raw = row.get(idx);
            if raw.trim().is_empty() {
                continue;
            }
            match canonical_date(raw) {
                Some(iso) => row.set(idx, iso),
                None => {
                    tracing::debug!(
                        "dropping unparsable {} value '{}' in column '{}'",
                        kind,
                        raw,
                        col.name
                    );
                    row.set(idx, "");
                }
            }
        }
    }

    NormalizedRows { rows, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Row;

    fn task_row(tarea: &str, fecha_limite: &str, completado: &str) -> Row {
        Row::from_cells(
            vec![
                tarea.to_string(),
                String::new(),
                fecha_limite.to_string(),
                completado.to_string(),
            ],
            4,
        )
    }

    #[test]
    fn test_canonical_date_formats() {
        assert_eq!(canonical_date("2025-03-09").as_deref(), Some("2025-03-09"));
        assert_eq!(canonical_date("09/03/2025").as_deref(), Some("2025-03-09"));
        assert_eq!(canonical_date("9-3-2025").as_deref(), Some("2025-03-09"));
        assert_eq!(
            canonical_date("2025-03-09 00:00:00").as_deref(),
            Some("2025-03-09")
        );
        assert_eq!(canonical_date(" 2025/03/09 ").as_deref(), Some("2025-03-09"));
    }

    #[test]
    fn test_canonical_date_rejects_garbage() {
        assert_eq!(canonical_date("soon"), None);
        assert_eq!(canonical_date("2025-13-45"), None);
        assert_eq!(canonical_date(""), None);
    }

    #[test]
    fn test_blank_rows_dropped_before_date_pass() {
        let rows = vec![
            task_row("Buy milk", "09/03/2025", "False"),
            task_row("", "", ""),
        ];
        let normalized = normalize_rows(TableKind::Tasks, rows);

        assert_eq!(normalized.dropped, 1);
        assert_eq!(normalized.rows.len(), 1);
        assert_eq!(normalized.rows[0].get(2), "2025-03-09");
    }

    #[test]
    fn test_unparsable_date_becomes_empty_not_error() {
        let rows = vec![task_row("Buy milk", "mañana", "False")];
        let normalized = normalize_rows(TableKind::Tasks, rows);

        assert_eq!(normalized.rows[0].get(2), "");
        // the rest of the row is untouched
        assert_eq!(normalized.rows[0].get(0), "Buy milk");
    }

    #[test]
    fn test_non_date_columns_untouched() {
        let rows = vec![task_row("09/03/2025", "", "False")];
        let normalized = normalize_rows(TableKind::Tasks, rows);

        // "Tarea" is a text column even when its content looks like a date
        assert_eq!(normalized.rows[0].get(0), "09/03/2025");
    }

    #[test]
    fn test_empty_date_cell_stays_empty() {
        let rows = vec![task_row("Buy milk", "", "False")];
        let normalized = normalize_rows(TableKind::Tasks, rows);
        assert_eq!(normalized.rows[0].get(2), "");
    }
}
