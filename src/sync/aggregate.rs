//! Summary aggregates over table snapshots.
//!
//! Pure reducers with explicit coercion rules for the schema-less remote
//! data: non-numeric cells reduce as zero, missing booleans as false, and
//! truthiness is decided by a fixed token set because upstream cells may
//! hold text ("True"/"False"), spreadsheet booleans, or 0/1.

use chrono::NaiveDate;

use crate::models::Table;
use crate::sync::normalize::canonical_date;

/// Tokens a cell may hold to count as true, compared case-insensitively.
pub const TRUTHY_TOKENS: &[&str] = &["true", "verdadero", "si", "sí", "yes", "1", "x"];

/// Row predicate used by filtered aggregates.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Cell equals a value, case-insensitively, ignoring whitespace.
    Equals { column: String, value: String },
    /// Cell holds one of the truthy tokens.
    Truthy { column: String },
    /// Cell is absent, blank, or holds a non-truthy token.
    Falsy { column: String },
    /// Cell is present and non-blank.
    NonBlank { column: String },
    /// Every inner predicate holds.
    All(Vec<Predicate>),
}

/// One aggregate over a table.
#[derive(Debug, Clone)]
pub enum Aggregate {
    /// Sum of a numeric column, optionally filtered.
    Sum {
        column: String,
        filter: Option<Predicate>,
    },
    /// Count of rows matching a predicate.
    Count(Predicate),
    /// Count of rows whose date column falls on the given day.
    CountOnDate { column: String, date: NaiveDate },
}

/// Aggregate result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregateValue {
    Sum(f64),
    Count(usize),
}

impl AggregateValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            AggregateValue::Sum(v) => *v,
            AggregateValue::Count(n) => *n as f64,
        }
    }
}

/// Coerces a raw cell to a number; anything unparsable counts as zero.
/// Tolerates currency prefixes and thousands separators.
pub fn numeric_value(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// True only when the cell case-insensitively equals a truthy token.
pub fn is_truthy(raw: &str) -> bool {
    let token = raw.trim().to_lowercase();
    TRUTHY_TOKENS.contains(&token.as_str())
}

fn matches(table: &Table, row: usize, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Equals { column, value } => table
            .cell(row, column)
            .map(|c| c.trim().eq_ignore_ascii_case(value.trim()))
            .unwrap_or(false),
        Predicate::Truthy { column } => {
            table.cell(row, column).map(is_truthy).unwrap_or(false)
        }
        Predicate::Falsy { column } => {
            !table.cell(row, column).map(is_truthy).unwrap_or(false)
        }
        Predicate::NonBlank { column } => table
            .cell(row, column)
            .map(|c| !c.trim().is_empty())
            .unwrap_or(false),
        Predicate::All(inner) => inner.iter().all(|p| matches(table, row, p)),
    }
}

/// Evaluates one aggregate over a snapshot. Pure: the table is untouched
/// and repeated evaluation yields identical results.
pub fn evaluate(table: &Table, aggregate: &Aggregate) -> AggregateValue {
    match aggregate {
        Aggregate::Sum { column, filter } => {
            let total = (0..table.len())
                .filter(|&row| {
                    filter
                        .as_ref()
                        .map(|p| matches(table, row, p))
                        .unwrap_or(true)
                })
                .map(|row| numeric_value(table.cell(row, column).unwrap_or("")))
                .sum();
            AggregateValue::Sum(total)
        }
        Aggregate::Count(predicate) => {
            let count = (0..table.len())
                .filter(|&row| matches(table, row, predicate))
                .count();
            AggregateValue::Count(count)
        }
        Aggregate::CountOnDate { column, date } => {
            let wanted = date.format("%Y-%m-%d").to_string();
            let count = (0..table.len())
                .filter(|&row| {
                    table
                        .cell(row, column)
                        .and_then(canonical_date)
                        .map(|d| d == wanted)
                        .unwrap_or(false)
                })
                .count();
            AggregateValue::Count(count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Table, TableKind};

    fn table(kind: TableKind, rows: &[&[&str]]) -> Table {
        let mut grid: Vec<Vec<String>> =
            vec![kind.schema().column_names().map(String::from).collect()];
        grid.extend(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect::<Vec<_>>()),
        );
        Table::from_grid(kind, &grid)
    }

    fn pending_tasks() -> Aggregate {
        Aggregate::Count(Predicate::All(vec![
            Predicate::Falsy {
                column: "Completado".to_string(),
            },
            Predicate::NonBlank {
                column: "Tarea".to_string(),
            },
        ]))
    }

    #[test]
    fn test_sum_coerces_non_numeric_to_zero() {
        // Monto "abc" reduces as 0, not an error
        let debts = table(
            TableKind::Debts,
            &[
                &["Rent", "100", "Debo", "Ana", ""],
                &["Typo", "abc", "Debo", "Ana", ""],
                &["Loan", "50", "Me deben", "Luis", ""],
            ],
        );
        let total = evaluate(
            &debts,
            &Aggregate::Sum {
                column: "Monto".to_string(),
                filter: Some(Predicate::Equals {
                    column: "Tipo".to_string(),
                    value: "Debo".to_string(),
                }),
            },
        );
        assert_eq!(total, AggregateValue::Sum(100.0));
    }

    #[test]
    fn test_sum_tolerates_currency_formatting() {
        let debts = table(
            TableKind::Debts,
            &[&["Rent", "$1,250.50", "Debo", "Ana", ""]],
        );
        let total = evaluate(
            &debts,
            &Aggregate::Sum {
                column: "Monto".to_string(),
                filter: None,
            },
        );
        assert_eq!(total, AggregateValue::Sum(1250.50));
    }

    #[test]
    fn test_pending_count_skips_blank_task_names() {
        let tasks = table(
            TableKind::Tasks,
            &[
                &["Buy milk", "", "", "False"],
                &["", "", "", ""],
            ],
        );
        assert_eq!(evaluate(&tasks, &pending_tasks()), AggregateValue::Count(1));
    }

    #[test]
    fn test_truthiness_tolerates_heterogeneous_raw_types() {
        let tasks = table(
            TableKind::Tasks,
            &[
                &["a", "", "", "True"],
                &["b", "", "", "1"],
                &["c", "", "", "x"],
                &["d", "", "", "FALSE"],
                &["e", "", "", "0"],
                &["f", "", "", ""],
            ],
        );
        // a, b, c are completed; d, e, f are pending
        assert_eq!(evaluate(&tasks, &pending_tasks()), AggregateValue::Count(3));
    }

    #[test]
    fn test_count_on_date_normalizes_before_comparing() {
        let meetings = table(
            TableKind::Meetings,
            &[
                &["Standup", "2025-03-09", "09:00", "", ""],
                &["Review", "09/03/2025", "15:00", "", ""],
                &["Planning", "2025-03-10", "10:00", "", ""],
                &["Broken", "someday", "", "", ""],
            ],
        );
        let count = evaluate(
            &meetings,
            &Aggregate::CountOnDate {
                column: "Fecha".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            },
        );
        assert_eq!(count, AggregateValue::Count(2));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let debts = table(TableKind::Debts, &[&["Rent", "100", "Debo", "Ana", ""]]);
        let spec = Aggregate::Sum {
            column: "Monto".to_string(),
            filter: None,
        };
        let before = debts.clone();

        let first = evaluate(&debts, &spec);
        let second = evaluate(&debts, &spec);

        assert_eq!(first, second);
        assert_eq!(debts, before);
    }
}
