use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use earlyjob::config::Config;
use earlyjob::error::Error;
use earlyjob::model::report::RunReport;
use earlyjob::model::signal::curated_signals;
use earlyjob::scheduler::Scheduler;
use earlyjob::service::ingest::IngestService;
use earlyjob::service::source::SourceConfig;
use earlyjob::startup;

#[derive(Parser)]
#[command(name = "earlyjob", about = "Job-alert ingestion service", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the scheduler and keep ingesting on the configured intervals
    Serve,
    /// Run a single job ingestion pass and print the report
    IngestJobs,
    /// Run a single hiring-signal ingestion pass and print the report
    IngestSignals,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let http = startup::build_http_client()?;
    startup::seed_rotation_state(&db).await?;

    let ingest = IngestService::new(db, http, SourceConfig::from_config(&config));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            tracing::info!("Starting ingestion scheduler");
            Scheduler::new(ingest).await?.start().await?;

            tokio::signal::ctrl_c()
                .await
                .map_err(|e| Error::InternalError(format!("Failed to listen for ctrl-c: {}", e)))?;
            tracing::info!("Shutting down");

            Ok(())
        }
        Command::IngestJobs => {
            let report = ingest.run_jobs().await;
            print_report(&report)
        }
        Command::IngestSignals => {
            let events = curated_signals();
            let report = ingest.run_signals(&events).await;
            print_report(&report)
        }
    }
}

/// Prints the run report for manual invocations; a failed run exits non-zero.
fn print_report<S: Serialize>(report: &RunReport<S>) -> Result<(), Error> {
    let serialized = serde_json::to_string_pretty(report)
        .map_err(|e| Error::InternalError(format!("Failed to serialize run report: {}", e)))?;

    println!("{}", serialized);

    if !report.success {
        std::process::exit(1);
    }

    Ok(())
}
