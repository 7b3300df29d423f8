use serde::Deserialize;
use std::path::PathBuf;

/// The TOML file structure for qappctl.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server: Option<ServerConfig>,
    pub worker: Option<WorkerConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub pid_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct WorkerConfig {
    pub program: Option<String>,
    /// Worker argument list. Any `{port}` placeholder is replaced with the
    /// resolved port at spawn time.
    pub args: Option<Vec<String>>,
    pub env_file: Option<PathBuf>,
    pub log_config: Option<PathBuf>,
}

impl ConfigFile {
    /// Flatten the sectioned TOML structure into a PartialConfig for merging.
    pub fn to_partial(self) -> PartialConfig {
        let server = self.server;
        let worker = self.worker;
        PartialConfig {
            port: server.as_ref().and_then(|s| s.port),
            pid_file: server.as_ref().and_then(|s| s.pid_file.clone()),
            log_dir: server.as_ref().and_then(|s| s.log_dir.clone()),
            worker_program: worker.as_ref().and_then(|w| w.program.clone()),
            worker_args: worker.as_ref().and_then(|w| w.args.clone()),
            env_file: worker.as_ref().and_then(|w| w.env_file.clone()),
            log_config: worker.as_ref().and_then(|w| w.log_config.clone()),
        }
    }
}

/// Fully-resolved runtime configuration. All fields have values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub pid_file: PathBuf,
    pub log_dir: PathBuf,
    pub worker_program: String,
    pub worker_args: Vec<String>,
    pub env_file: Option<PathBuf>,
    pub log_config: Option<PathBuf>,
}

impl AppConfig {
    /// Path of the append-only lifecycle event log, kept alongside the
    /// worker logs.
    pub fn event_log_path(&self) -> PathBuf {
        self.log_dir.join("events.jsonl")
    }
}

/// Partial config used during merge. All fields are Option so that
/// missing fields don't override lower-priority values.
#[derive(Debug, Clone, Default)]
pub struct PartialConfig {
    pub port: Option<u16>,
    pub pid_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub worker_program: Option<String>,
    pub worker_args: Option<Vec<String>>,
    pub env_file: Option<PathBuf>,
    pub log_config: Option<PathBuf>,
}
