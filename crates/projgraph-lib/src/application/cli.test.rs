use super::*;
use crate::primitives::{ColorChoice, LogFormat};
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_analyze_with_options() {
    let cli = Cli::try_parse_from([
        "projgraph",
        "--color",
        "never",
        "-j",
        "8",
        "analyze",
        "src",
        "--format",
        "json",
        "--show-packages",
    ])
    .unwrap();

    assert_eq!(cli.config.color, ColorChoice::Never);
    assert_eq!(cli.config.jobs, 8);
    assert_eq!(
        cli.command,
        Some(Commands::Analyze {
            path: Some(PathBuf::from("src")),
            format: ReportFormat::Json,
            show_packages: true,
        })
    );
}

#[test]
fn test_analyze_defaults() {
    let cli = Cli::try_parse_from(["projgraph", "analyze"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Analyze {
            path: None,
            format: ReportFormat::Text,
            show_packages: false,
        })
    );
}

#[test]
fn test_log_format_alias() {
    let cli = Cli::try_parse_from(["projgraph", "--log-format", "yml", "version"]).unwrap();
    assert_eq!(cli.config.log_format, LogFormat::Yaml);
    assert_eq!(cli.command, Some(Commands::Version));
}

#[test]
fn test_no_command() {
    let config: CliConfig = Cli::try_parse_from(["projgraph"]).unwrap().into();
    assert!(config.command.is_none());
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["projgraph", "analyze", "--format", "xml"]).is_err());
}
