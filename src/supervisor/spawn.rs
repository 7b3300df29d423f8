//! Detached worker spawn.
//!
//! The worker runs in its own process group with stdin closed and combined
//! stdout/stderr redirected to a timestamped log file. The supervisor never
//! waits on the child: the spawn returns only the pid, and the worker
//! outlives the supervisor invocation.

use std::fs::{self, File};
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use chrono::Utc;

use crate::config::AppConfig;
use crate::error::SupervisorError;

/// Spawn the configured worker, detached, listening on `port`.
///
/// Creates the log directory if absent. Any `{port}` placeholder in the
/// configured worker args is substituted with the resolved port; the env
/// file and logging config, when configured, are passed through unmodified.
///
/// Returns the child pid and the path of its log file.
pub fn spawn_worker(config: &AppConfig, port: u16) -> Result<(i32, PathBuf), SupervisorError> {
    fs::create_dir_all(&config.log_dir)?;

    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let log_path = config.log_dir.join(format!("worker-{stamp}.log"));
    let log_file = File::create(&log_path)?;
    let log_file_err = log_file.try_clone()?;

    let args: Vec<String> = config
        .worker_args
        .iter()
        .map(|arg| arg.replace("{port}", &port.to_string()))
        .collect();

    let mut command = Command::new(&config.worker_program);
    command.args(&args);

    if let Some(env_file) = &config.env_file {
        command.arg("--env-file").arg(env_file);
    }
    if let Some(log_config) = &config.log_config {
        command.arg("--log-config").arg(log_config);
    }

    // Own process group: a SIGTERM aimed at the worker later must not hit
    // the supervisor's session, and the worker must survive the
    // supervisor's exit.
    let child = command
        .process_group(0)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log_file))
        .stderr(Stdio::from(log_file_err))
        .spawn()
        .map_err(|source| SupervisorError::SpawnFailed {
            program: config.worker_program.clone(),
            source,
        })?;

    Ok((child.id() as i32, log_path))
}
