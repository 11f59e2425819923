//! CLI commands: the presentation layer over the sync core.

pub mod config_cmd;
pub mod dashboard;
pub mod debts;
pub mod meetings;
pub mod refresh;
pub mod tasks;

pub use config_cmd::ConfigCommand;
pub use dashboard::DashboardCommand;
pub use debts::DebtsCommand;
pub use meetings::MeetingsCommand;
pub use refresh::RefreshCommand;
pub use tasks::TasksCommand;

use clap::ValueEnum;

use agenda_pro::{
    EditBuffer, LoadOrigin, LoadResult, SessionContext, SyncEngine, Table, TableStore,
};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints the informational notice when a load fell back to an empty table.
pub(crate) fn print_load_notice(result: &LoadResult) {
    if let LoadOrigin::Fallback(reason) = &result.origin {
        println!(
            "Note: could not load '{}' ({}); showing an empty table.",
            result.table.kind(),
            reason
        );
    }
}

/// Renders a table as aligned text with 1-based row numbers, the same
/// numbers row-addressed subcommands accept.
pub(crate) fn print_table(table: &Table) {
    if table.is_empty() {
        println!("(no rows)");
        return;
    }

    let headers: Vec<&str> = table.schema().column_names().collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in table.rows() {
        for (i, cell) in row.cells().iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let num_width = table.len().to_string().len().max(1);
    let mut header = format!("{:>nw$}", "#", nw = num_width);
    for (h, w) in headers.iter().zip(&widths) {
        header.push_str(&format!("  {:<width$}", h, width = *w));
    }
    println!("{}", header);
    println!("{}", "-".repeat(header.chars().count()));

    for (i, row) in table.rows().iter().enumerate() {
        let mut line = format!("{:>nw$}", i + 1, nw = num_width);
        for (cell, w) in row.cells().iter().zip(&widths) {
            line.push_str(&format!("  {:<width$}", cell, width = *w));
        }
        println!("{}", line.trim_end());
    }
}

/// Renders a table as its header-included JSON grid.
pub(crate) fn print_table_json(table: &Table) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&table.to_grid())?);
    Ok(())
}

/// Converts a user-facing 1-based row number into an index.
pub(crate) fn to_index(row: usize, len: usize) -> Result<usize, Box<dyn std::error::Error>> {
    if row == 0 || row > len {
        return Err(format!("row {} is out of range (table has {} rows)", row, len).into());
    }
    Ok(row - 1)
}

/// Saves an edit buffer, reports the outcome, and re-loads the table so the
/// user sees the authoritative post-write state.
pub(crate) async fn save_and_reload<S: TableStore>(
    ctx: &mut SessionContext,
    engine: &SyncEngine<S>,
    buffer: EditBuffer,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = buffer.kind();
    let report = engine.save(ctx, buffer).await?;

    if report.rows_dropped > 0 {
        println!("Dropped {} blank row(s).", report.rows_dropped);
    }
    println!("Saved {} row(s) to '{}'.", report.rows_written, kind);

    if report.reload_required {
        let result = engine.load(ctx, kind).await?;
        print_load_notice(&result);
        println!("'{}' now has {} row(s).", kind, result.table.len());
    }
    Ok(())
}
