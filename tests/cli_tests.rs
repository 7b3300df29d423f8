use clap::{CommandFactory, Parser};
use qappctl::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_start_with_port() {
    let cli = Cli::parse_from(["qappctl", "start", "--port", "9000"]);
    match cli.command {
        Commands::Start { port, config } => {
            assert_eq!(port, Some(9000));
            assert_eq!(config, None);
        }
        other => panic!("expected Start, got {other:?}"),
    }
}

#[test]
fn test_start_without_port() {
    let cli = Cli::parse_from(["qappctl", "start"]);
    match cli.command {
        Commands::Start { port, .. } => assert_eq!(port, None),
        other => panic!("expected Start, got {other:?}"),
    }
}

#[test]
fn test_stop_takes_no_port() {
    let result = Cli::try_parse_from(["qappctl", "stop", "--port", "9000"]);
    assert!(result.is_err());
}

#[test]
fn test_config_path_accessor() {
    let cli = Cli::parse_from(["qappctl", "status", "--config", "/etc/qappctl.toml"]);
    assert_eq!(
        cli.config_path(),
        Some(&PathBuf::from("/etc/qappctl.toml"))
    );

    let cli = Cli::parse_from(["qappctl", "status"]);
    assert_eq!(cli.config_path(), None);
}

#[test]
fn test_invalid_port_rejected() {
    let result = Cli::try_parse_from(["qappctl", "start", "--port", "notaport"]);
    assert!(result.is_err());
}
