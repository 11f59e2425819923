//! Explicit cache refresh.

use clap::Args;

use agenda_pro::{LoadOrigin, SessionContext, SyncEngine, TableKind, TableStore};

#[derive(Args)]
pub struct RefreshCommand {}

impl RefreshCommand {
    /// Discards every cached snapshot and re-fetches all three tables.
    pub async fn run<S: TableStore>(
        &self,
        ctx: &mut SessionContext,
        engine: &SyncEngine<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        engine.refresh(ctx)?;

        for kind in TableKind::ALL {
            let result = engine.load(ctx, kind).await?;
            match &result.origin {
                LoadOrigin::Fallback(reason) => {
                    println!("  ! {} unavailable ({})", kind, reason)
                }
                _ => println!("  - {}: {} row(s)", kind, result.table.len()),
            }
        }
        println!("Refreshed.");
        Ok(())
    }
}
