use clap::Parser;
use projgraph_lib::application::{AppConfig, Cli, CliConfig, Commands, EnvironmentConfig};
use projgraph_lib::primitives::{ColorChoice, LogFormat, LogLevel};
use projgraph_lib::report::ReportFormat;

fn env_of(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_vars(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
        .unwrap()
}

#[test]
fn test_cli_through_resolution() {
    let cli: CliConfig = Cli::try_parse_from([
        "projgraph",
        "--log-level",
        "3",
        "--log-format",
        "json",
        "analyze",
        "--format",
        "yaml",
    ])
    .unwrap()
    .into();

    let config = AppConfig::resolve(cli.app_config, &env_of(&[("CI", "1")])).unwrap();

    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.to_logger_config().level, LogLevel::Debug);
    // CI disables color when the command line does not ask for it
    assert_eq!(config.color, ColorChoice::Never);
    assert!(config.workdir.is_some());
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            format: ReportFormat::Yaml,
            ..
        })
    ));
}

#[test]
fn test_explicit_color_survives_ci() {
    let cli = Cli::try_parse_from(["projgraph", "--color", "always", "version"]).unwrap();

    let config = AppConfig::resolve(cli.config, &env_of(&[("CI", "1")])).unwrap();
    assert_eq!(config.color, ColorChoice::Always);
}

#[test]
fn test_zero_jobs_fails_resolution() {
    let cli = Cli::try_parse_from(["projgraph", "--jobs", "0", "analyze"]).unwrap();
    assert!(AppConfig::resolve(cli.config, &EnvironmentConfig::default()).is_err());
}
