//! Task list commands.

use clap::{Args, Subcommand};

use agenda_pro::{EditBuffer, SessionContext, SyncEngine, TableKind, TableStore};

use super::{
    print_load_notice, print_table, print_table_json, save_and_reload, to_index, OutputFormat,
};

#[derive(Args)]
pub struct TasksCommand {
    #[command(subcommand)]
    pub command: TasksSubcommand,
}

#[derive(Subcommand)]
pub enum TasksSubcommand {
    /// List all tasks
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a task
    Add {
        /// Task description
        tarea: String,

        /// Priority (Alta, Media, Baja)
        #[arg(long)]
        prioridad: Option<String>,

        /// Due date (e.g. 2025-03-09 or 09/03/2025)
        #[arg(long)]
        due: Option<String>,
    },

    /// Mark a task as completed
    Done {
        /// Row number as shown by `tasks list`
        row: usize,
    },

    /// Remove a task
    Remove {
        /// Row number as shown by `tasks list`
        row: usize,
    },

    /// Set one cell by row number and column name
    Set {
        /// Row number as shown by `tasks list`
        row: usize,
        /// Column name (Tarea, Prioridad, Fecha Limite, Completado)
        column: String,
        /// New value
        value: String,
    },
}

impl TasksCommand {
    pub async fn run<S: TableStore>(
        &self,
        ctx: &mut SessionContext,
        engine: &SyncEngine<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let result = engine.load(ctx, TableKind::Tasks).await?;
        print_load_notice(&result);

        match &self.command {
            TasksSubcommand::List { format } => match format {
                OutputFormat::Text => {
                    print_table(&result.table);
                    Ok(())
                }
                OutputFormat::Json => print_table_json(&result.table),
            },

            TasksSubcommand::Add {
                tarea,
                prioridad,
                due,
            } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let row = buffer.add_row();
                buffer.set_cell(row, "Tarea", tarea)?;
                if let Some(p) = prioridad {
                    buffer.set_cell(row, "Prioridad", p)?;
                }
                if let Some(d) = due {
                    buffer.set_cell(row, "Fecha Limite", d)?;
                }
                buffer.set_cell(row, "Completado", "False")?;
                save_and_reload(ctx, engine, buffer).await
            }

            TasksSubcommand::Done { row } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let idx = to_index(*row, buffer.len())?;
                buffer.set_cell(idx, "Completado", "True")?;
                save_and_reload(ctx, engine, buffer).await
            }

            TasksSubcommand::Remove { row } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let idx = to_index(*row, buffer.len())?;
                buffer.delete_row(idx)?;
                save_and_reload(ctx, engine, buffer).await
            }

            TasksSubcommand::Set { row, column, value } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let idx = to_index(*row, buffer.len())?;
                buffer.set_cell(idx, column, value)?;
                save_and_reload(ctx, engine, buffer).await
            }
        }
    }
}
