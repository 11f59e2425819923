//! The dashboard summary: debt banner, pending tasks, and the day's agenda.

use chrono::{Local, NaiveDate};
use clap::Args;

use agenda_pro::{
    evaluate, Aggregate, Predicate, SessionContext, SyncEngine, TableKind, TableStore,
};

use super::meetings::print_day;
use super::print_load_notice;

#[derive(Args)]
pub struct DashboardCommand {
    /// Day for the agenda pane (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    date: Option<NaiveDate>,
}

impl DashboardCommand {
    pub async fn run<S: TableStore>(
        &self,
        ctx: &mut SessionContext,
        engine: &SyncEngine<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let debts = engine.load(ctx, TableKind::Debts).await?;
        let meetings = engine.load(ctx, TableKind::Meetings).await?;
        let tasks = engine.load(ctx, TableKind::Tasks).await?;
        for result in [&debts, &meetings, &tasks] {
            print_load_notice(result);
        }

        let owed = evaluate(
            &debts.table,
            &Aggregate::Sum {
                column: "Monto".to_string(),
                filter: Some(Predicate::Equals {
                    column: "Tipo".to_string(),
                    value: "Debo".to_string(),
                }),
            },
        );
        let pending = evaluate(
            &tasks.table,
            &Aggregate::Count(Predicate::All(vec![
                Predicate::Falsy {
                    column: "Completado".to_string(),
                },
                Predicate::NonBlank {
                    column: "Tarea".to_string(),
                },
            ])),
        );

        let date = self.date.unwrap_or_else(|| Local::now().date_naive());

        println!("Agenda");
        println!("======\n");
        println!("Debt pending: ${:.2}", owed.as_f64());
        println!("Tasks pending: {}", pending.as_f64() as usize);
        println!();
        println!("Meetings on {}:", date);
        print_day(&meetings.table, date);

        Ok(())
    }
}
