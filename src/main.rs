mod cli;
mod config;
mod error;
mod supervisor;

use clap::Parser;

use supervisor::{Supervisor, WorkerState};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = cli::Cli::parse();
    tracing::info!("qappctl starting");

    let config = config::load_config(&cli)?;
    tracing::info!(port = config.port, pid_file = %config.pid_file.display(), "Config loaded");

    let supervisor = Supervisor::new(config);

    match cli.command {
        cli::Commands::Start { .. } => {
            let outcome = supervisor.start()?;
            println!(
                "Worker started.\n  PID: {}\n  Log: {}",
                outcome.pid,
                outcome.log_file.display()
            );
        }
        cli::Commands::Stop { .. } => {
            let pid = supervisor.stop()?;
            println!("Worker stopped (PID {pid}).");
        }
        cli::Commands::Status { .. } => match supervisor.status()? {
            WorkerState::Running { pid } => println!("Worker running (PID {pid})."),
            WorkerState::Stopped => println!("Worker not running."),
            WorkerState::Stale { pid } => println!(
                "Worker not running, but {} still records PID {pid}. Remove the file to reconcile.",
                supervisor.pid_file_path().display()
            ),
        },
    }

    Ok(())
}
