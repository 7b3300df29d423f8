pub mod merge;
pub mod schema;

pub use schema::*;

use crate::cli::{Cli, Commands};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Load configuration by merging global, local, and CLI sources.
/// Precedence: CLI > local config > global config > defaults.
///
/// Missing config files in the default search path are handled gracefully
/// (defaults apply). An explicit `--config` path is strict: the file must
/// exist and parse.
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    // Layer 1: Global config (~/.config/qappctl/qappctl.toml or platform equivalent)
    let global = load_global_config();

    // Layer 2: Local config. An explicit --config path replaces the default
    // search for ./qappctl.toml and must load successfully.
    let local = match cli.config_path() {
        Some(path) => load_explicit_config(path)?,
        None => load_toml_file(Path::new("qappctl.toml")).unwrap_or_default(),
    };

    // Layer 3: CLI args (converted to PartialConfig)
    let cli_partial = cli_to_partial(cli);

    // Merge: CLI > local > global > defaults
    let config = cli_partial
        .with_fallback(local)
        .with_fallback(global)
        .finalize();

    Ok(config)
}

/// Load a config file named explicitly on the command line.
/// Unlike the default search path, a missing or malformed file is an error.
pub fn load_explicit_config(path: &Path) -> Result<PartialConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config_file: ConfigFile =
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config_file.to_partial())
}

/// Load global config from the platform-specific config directory.
/// Returns empty PartialConfig if file not found.
fn load_global_config() -> PartialConfig {
    let path = global_config_path();
    match path {
        Some(p) => load_toml_file(&p).unwrap_or_default(),
        None => {
            tracing::debug!("Could not determine global config directory");
            PartialConfig::default()
        }
    }
}

/// Load and parse a TOML config file into a PartialConfig.
/// Returns None on file-not-found; logs and skips a malformed file.
fn load_toml_file(path: &Path) -> Option<PartialConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
            Ok(config_file) => {
                tracing::info!("Loaded config from {}", path.display());
                Some(config_file.to_partial())
            }
            Err(e) => {
                tracing::warn!("Config parse error in {}: {}", path.display(), e);
                None
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            None
        }
        Err(e) => {
            tracing::warn!("Failed to read config at {}: {}", path.display(), e);
            None
        }
    }
}

/// Resolve the platform-specific global config path.
/// Linux: ~/.config/qappctl/qappctl.toml
/// macOS: ~/Library/Application Support/qappctl/qappctl.toml
fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "qappctl")
        .map(|dirs| dirs.config_dir().join("qappctl.toml"))
}

/// Convert CLI arguments to a PartialConfig for merging.
fn cli_to_partial(cli: &Cli) -> PartialConfig {
    match &cli.command {
        Commands::Start { port, .. } => PartialConfig {
            port: *port,
            ..Default::default()
        },
        Commands::Stop { .. } | Commands::Status { .. } => PartialConfig::default(),
    }
}
