use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qappctl", version, about = "Lifecycle manager for the question service worker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the worker as a detached background process
    Start {
        /// TCP port for the worker to listen on (default 8004)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to config file (overrides default search)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Stop the running worker
    Stop {
        /// Path to config file (overrides default search)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Report whether the worker is running
    Status {
        /// Path to config file (overrides default search)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Explicit config file path, if one was given on the command line.
    pub fn config_path(&self) -> Option<&PathBuf> {
        match &self.command {
            Commands::Start { config, .. }
            | Commands::Stop { config }
            | Commands::Status { config } => config.as_ref(),
        }
    }
}
