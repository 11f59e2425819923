//! Meeting agenda commands.

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

use agenda_pro::{sync::canonical_date, EditBuffer, SessionContext, SyncEngine, Table, TableKind, TableStore};

use super::{
    print_load_notice, print_table, print_table_json, save_and_reload, to_index, OutputFormat,
};

#[derive(Args)]
pub struct MeetingsCommand {
    #[command(subcommand)]
    pub command: MeetingsSubcommand,
}

#[derive(Subcommand)]
pub enum MeetingsSubcommand {
    /// List all meetings
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the meetings scheduled for one day
    Day {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<NaiveDate>,
    },

    /// Add a meeting
    Add {
        /// Subject
        asunto: String,

        /// Date (e.g. 2025-03-09 or 09/03/2025)
        #[arg(long)]
        fecha: Option<String>,

        /// Time (e.g. 15:30)
        #[arg(long)]
        hora: Option<String>,

        /// Call link
        #[arg(long)]
        link: Option<String>,

        /// Notes
        #[arg(long)]
        notas: Option<String>,
    },

    /// Remove a meeting
    Remove {
        /// Row number as shown by `meetings list`
        row: usize,
    },

    /// Set one cell by row number and column name
    Set {
        /// Row number as shown by `meetings list`
        row: usize,
        /// Column name (Asunto, Fecha, Hora, Link, Notas)
        column: String,
        /// New value
        value: String,
    },
}

/// Prints the meetings whose `Fecha` falls on `date`, ordered as stored.
pub(crate) fn print_day(table: &Table, date: NaiveDate) {
    let wanted = date.format("%Y-%m-%d").to_string();
    let mut any = false;
    for row in 0..table.len() {
        let on_day = table
            .cell(row, "Fecha")
            .and_then(canonical_date)
            .map(|d| d == wanted)
            .unwrap_or(false);
        if !on_day {
            continue;
        }
        any = true;
        let hora = table.cell(row, "Hora").filter(|h| !h.trim().is_empty());
        let asunto = table.cell(row, "Asunto").unwrap_or("");
        match hora {
            Some(h) => println!("  {}  {}", h, asunto),
            None => println!("  --:--  {}", asunto),
        }
    }
    if !any {
        println!("  No meetings scheduled for {}.", wanted);
    }
}

impl MeetingsCommand {
    pub async fn run<S: TableStore>(
        &self,
        ctx: &mut SessionContext,
        engine: &SyncEngine<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let result = engine.load(ctx, TableKind::Meetings).await?;
        print_load_notice(&result);

        match &self.command {
            MeetingsSubcommand::List { format } => match format {
                OutputFormat::Text => {
                    print_table(&result.table);
                    Ok(())
                }
                OutputFormat::Json => print_table_json(&result.table),
            },

            MeetingsSubcommand::Day { date } => {
                let date = date.unwrap_or_else(|| Local::now().date_naive());
                println!("Meetings on {}:", date);
                print_day(&result.table, date);
                Ok(())
            }

            MeetingsSubcommand::Add {
                asunto,
                fecha,
                hora,
                link,
                notas,
            } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let row = buffer.add_row();
                buffer.set_cell(row, "Asunto", asunto)?;
                if let Some(f) = fecha {
                    buffer.set_cell(row, "Fecha", f)?;
                }
                if let Some(h) = hora {
                    buffer.set_cell(row, "Hora", h)?;
                }
                if let Some(l) = link {
                    buffer.set_cell(row, "Link", l)?;
                }
                if let Some(n) = notas {
                    buffer.set_cell(row, "Notas", n)?;
                }
                save_and_reload(ctx, engine, buffer).await
            }

            MeetingsSubcommand::Remove { row } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let idx = to_index(*row, buffer.len())?;
                buffer.delete_row(idx)?;
                save_and_reload(ctx, engine, buffer).await
            }

            MeetingsSubcommand::Set { row, column, value } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let idx = to_index(*row, buffer.len())?;
                buffer.set_cell(idx, column, value)?;
                save_and_reload(ctx, engine, buffer).await
            }
        }
    }
}
