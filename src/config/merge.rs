use super::schema::{AppConfig, PartialConfig};
use std::path::PathBuf;

impl PartialConfig {
    /// Merge self with a lower-priority fallback.
    /// Self's non-None values take precedence.
    /// For worker_args: REPLACE semantics (if self has Some, use it entirely).
    pub fn with_fallback(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            port: self.port.or(fallback.port),
            pid_file: self.pid_file.or(fallback.pid_file),
            log_dir: self.log_dir.or(fallback.log_dir),
            worker_program: self.worker_program.or(fallback.worker_program),
            worker_args: self.worker_args.or(fallback.worker_args),
            env_file: self.env_file.or(fallback.env_file),
            log_config: self.log_config.or(fallback.log_config),
        }
    }

    /// Convert to AppConfig, filling any remaining gaps with defaults.
    ///
    /// The env file default follows the worker's own convention: a `.env`
    /// in the working directory is passed through if present, otherwise
    /// nothing is passed.
    pub fn finalize(self) -> AppConfig {
        let env_file = self.env_file.or_else(|| {
            let dotenv = PathBuf::from(".env");
            dotenv.exists().then_some(dotenv)
        });

        AppConfig {
            port: self.port.unwrap_or(8004),
            pid_file: self.pid_file.unwrap_or_else(|| PathBuf::from("qappctl.pid")),
            log_dir: self.log_dir.unwrap_or_else(|| PathBuf::from("logs")),
            worker_program: self
                .worker_program
                .unwrap_or_else(|| "uvicorn".to_string()),
            worker_args: self.worker_args.unwrap_or_else(|| {
                vec![
                    "question_app.app:app".to_string(),
                    "--port".to_string(),
                    "{port}".to_string(),
                ]
            }),
            env_file,
            log_config: self.log_config,
        }
    }
}
