use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use agenda_pro::{Config, HttpTableStore, SessionContext, SyncEngine};

mod commands;

use commands::{
    ConfigCommand, DashboardCommand, DebtsCommand, MeetingsCommand, RefreshCommand, TasksCommand,
};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(version)]
#[command(about = "Personal agenda dashboard backed by a remote table store", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Access password (falls back to AGENDA_PASSWORD, then a prompt)
    #[arg(long, short, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard summary
    Dashboard(DashboardCommand),

    /// Manage the debt register
    Debts(DebtsCommand),

    /// Manage the meeting agenda
    Meetings(MeetingsCommand),

    /// Manage the task list
    Tasks(TasksCommand),

    /// Discard cached snapshots and re-fetch every table
    Refresh(RefreshCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agenda_pro=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config)?;

    // Configuration is readable without unlocking the session
    if let Commands::Config(cmd) = &cli.command {
        return cmd.run(&config);
    }

    let supplied = resolve_password(cli.password)?;
    let mut ctx = SessionContext::new(config.password.clone());
    if !ctx.authenticate(&supplied) {
        eprintln!("Access denied: wrong password.");
        std::process::exit(1);
    }

    let store = HttpTableStore::new(&config.store)?;
    let engine = SyncEngine::new(store);

    match &cli.command {
        Commands::Dashboard(cmd) => cmd.run(&mut ctx, &engine).await,
        Commands::Debts(cmd) => cmd.run(&mut ctx, &engine).await,
        Commands::Meetings(cmd) => cmd.run(&mut ctx, &engine).await,
        Commands::Tasks(cmd) => cmd.run(&mut ctx, &engine).await,
        Commands::Refresh(cmd) => cmd.run(&mut ctx, &engine).await,
        Commands::Config(_) => unreachable!("handled before authentication"),
    }
}

/// Password resolution: `--password` flag, then `AGENDA_PASSWORD`, then an
/// interactive prompt.
fn resolve_password(flag: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(password) = flag {
        return Ok(password);
    }
    if let Ok(password) = std::env::var("AGENDA_PASSWORD") {
        return Ok(password);
    }

    print!("Password: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
