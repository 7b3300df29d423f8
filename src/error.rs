use std::path::PathBuf;

/// Errors related to configuration loading and parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors related to worker lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum SupervisorError {
    #[error("Worker already running: PID file exists at {pid_file}")]
    AlreadyRunning { pid_file: PathBuf },

    #[error("Worker not running: no PID file at {pid_file}")]
    NotRunning { pid_file: PathBuf },

    #[error("Failed to signal worker process {pid}: {source}")]
    SignalFailed { pid: i32, source: nix::Error },

    #[error("Failed to spawn worker `{program}`: {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("PID file at {path} does not contain a process ID: {content:?}")]
    PidFileCorrupt { path: PathBuf, content: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
