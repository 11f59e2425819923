//! Debt register commands.

use clap::{Args, Subcommand};

use agenda_pro::{
    evaluate, Aggregate, EditBuffer, Predicate, SessionContext, SyncEngine, TableKind, TableStore,
};

use super::{
    print_load_notice, print_table, print_table_json, save_and_reload, to_index, OutputFormat,
};

#[derive(Args)]
pub struct DebtsCommand {
    #[command(subcommand)]
    pub command: DebtsSubcommand,
}

#[derive(Subcommand)]
pub enum DebtsSubcommand {
    /// List all debts
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a debt entry
    Add {
        /// What the debt is for
        concepto: String,

        /// Amount
        #[arg(long)]
        monto: String,

        /// Direction: "Debo" (I owe) or "Me deben" (owed to me)
        #[arg(long, default_value = "Debo")]
        tipo: String,

        /// Counterparty
        #[arg(long)]
        persona: Option<String>,

        /// Date (e.g. 2025-03-09 or 09/03/2025)
        #[arg(long)]
        fecha: Option<String>,
    },

    /// Remove a debt entry
    Remove {
        /// Row number as shown by `debts list`
        row: usize,
    },

    /// Set one cell by row number and column name
    Set {
        /// Row number as shown by `debts list`
        row: usize,
        /// Column name (Concepto, Monto, Tipo, Persona, Fecha)
        column: String,
        /// New value
        value: String,
    },

    /// Show totals per direction
    Total,
}

impl DebtsCommand {
    pub async fn run<S: TableStore>(
        &self,
        ctx: &mut SessionContext,
        engine: &SyncEngine<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let result = engine.load(ctx, TableKind::Debts).await?;
        print_load_notice(&result);

        match &self.command {
            DebtsSubcommand::List { format } => match format {
                OutputFormat::Text => {
                    print_table(&result.table);
                    Ok(())
                }
                OutputFormat::Json => print_table_json(&result.table),
            },

            DebtsSubcommand::Add {
                concepto,
                monto,
                tipo,
                persona,
                fecha,
            } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let row = buffer.add_row();
                buffer.set_cell(row, "Concepto", concepto)?;
                buffer.set_cell(row, "Monto", monto)?;
                buffer.set_cell(row, "Tipo", tipo)?;
                if let Some(p) = persona {
                    buffer.set_cell(row, "Persona", p)?;
                }
                if let Some(f) = fecha {
                    buffer.set_cell(row, "Fecha", f)?;
                }
                save_and_reload(ctx, engine, buffer).await
            }

            DebtsSubcommand::Remove { row } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let idx = to_index(*row, buffer.len())?;
                buffer.delete_row(idx)?;
                save_and_reload(ctx, engine, buffer).await
            }

            DebtsSubcommand::Set { row, column, value } => {
                let mut buffer = EditBuffer::from_table(&result.table);
                let idx = to_index(*row, buffer.len())?;
                buffer.set_cell(idx, column, value)?;
                save_and_reload(ctx, engine, buffer).await
            }

            DebtsSubcommand::Total => {
                for tipo in ["Debo", "Me deben"] {
                    let total = evaluate(
                        &result.table,
                        &Aggregate::Sum {
                            column: "Monto".to_string(),
                            filter: Some(Predicate::Equals {
                                column: "Tipo".to_string(),
                                value: tipo.to_string(),
                            }),
                        },
                    );
                    println!("{}: ${:.2}", tipo, total.as_f64());
                }
                Ok(())
            }
        }
    }
}
