//! Single-process lifecycle supervisor.
//!
//! Owns the PID file that records "one worker is running" and mediates all
//! transitions: [`Supervisor::start`] spawns a detached worker and records
//! its pid, [`Supervisor::stop`] signals it and clears the record, and
//! [`Supervisor::status`] probes liveness without side effects.
//!
//! This is the single entry point for lifecycle changes. No code should
//! touch the PID file directly -- always go through the `Supervisor`.

pub mod events;
pub mod pid_file;
pub mod probe;
pub mod spawn;

use std::path::{Path, PathBuf};

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use events::LifecycleEvent;
use pid_file::PidFile;

use crate::config::AppConfig;
use crate::error::SupervisorError;

/// Observed worker state, derived from the PID file and a liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// No PID file: no worker is owned by this supervisor.
    Stopped,
    /// PID file present and the recorded process is alive.
    Running { pid: i32 },
    /// PID file present but the recorded process is gone. Never repaired
    /// automatically; an operator must remove the marker by hand.
    Stale { pid: i32 },
}

/// Result of a successful start.
#[derive(Debug)]
pub struct StartOutcome {
    pub pid: i32,
    pub log_file: PathBuf,
}

/// Start, stop, and report the status of exactly one background worker,
/// with the PID file as the source of truth for ownership.
pub struct Supervisor {
    config: AppConfig,
    pid_file: PidFile,
}

impl Supervisor {
    pub fn new(config: AppConfig) -> Self {
        let pid_file = PidFile::new(config.pid_file.clone());
        Self { config, pid_file }
    }

    /// Spawn the worker and record its pid.
    ///
    /// Fails with [`SupervisorError::AlreadyRunning`] if a PID file exists,
    /// leaving the existing marker and any worker it refers to untouched.
    pub fn start(&self) -> Result<StartOutcome, SupervisorError> {
        if self.pid_file.exists() {
            return Err(SupervisorError::AlreadyRunning {
                pid_file: self.pid_file.path().to_path_buf(),
            });
        }

        let port = self.config.port;
        let (pid, log_file) = spawn::spawn_worker(&self.config, port)?;

        if let Err(e) = self.pid_file.write(pid) {
            // Lost the record race to a concurrent start: reclaim the
            // worker we just spawned so it is not orphaned unrecorded.
            let _ = kill(Pid::from_raw(pid), Signal::SIGTERM);
            return Err(e);
        }

        tracing::info!(pid, port, log_file = %log_file.display(), "Worker started");
        events::record(
            &self.config.event_log_path(),
            &LifecycleEvent::started(pid, port, &log_file),
        );

        Ok(StartOutcome { pid, log_file })
    }

    /// Signal the recorded worker with SIGTERM and clear the record.
    ///
    /// Fails with [`SupervisorError::NotRunning`] if no PID file exists.
    /// A failed signal delivery surfaces [`SupervisorError::SignalFailed`]
    /// and leaves the marker in place: a stale marker is never silently
    /// cleared, the operator reconciles it manually.
    pub fn stop(&self) -> Result<i32, SupervisorError> {
        let pid = self
            .pid_file
            .read()?
            .ok_or_else(|| SupervisorError::NotRunning {
                pid_file: self.pid_file.path().to_path_buf(),
            })?;

        kill(Pid::from_raw(pid), Signal::SIGTERM)
            .map_err(|source| SupervisorError::SignalFailed { pid, source })?;

        self.pid_file.remove()?;

        tracing::info!(pid, "Worker stopped");
        events::record(&self.config.event_log_path(), &LifecycleEvent::stopped(pid));

        Ok(pid)
    }

    /// Report the worker state. Read-only: never deletes or rewrites the
    /// PID file, even when the probe finds the recorded process dead.
    pub fn status(&self) -> Result<WorkerState, SupervisorError> {
        match self.pid_file.read()? {
            None => Ok(WorkerState::Stopped),
            Some(pid) if probe::is_alive(pid) => Ok(WorkerState::Running { pid }),
            Some(pid) => Ok(WorkerState::Stale { pid }),
        }
    }

    /// Path of the PID file owned by this supervisor.
    pub fn pid_file_path(&self) -> &Path {
        self.pid_file.path()
    }
}
