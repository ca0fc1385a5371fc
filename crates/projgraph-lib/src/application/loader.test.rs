use super::*;
use crate::primitives::ColorChoice;
use std::fs;
use tempfile::TempDir;

fn env_of(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_vars(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_resolve_applies_environment_color() {
    let config = AppConfig::resolve(AppConfig::default(), &env_of(&[("NO_COLOR", "1")])).unwrap();
    assert_eq!(config.color, ColorChoice::Never);
    assert!(config.workdir.is_some());
}

#[test]
fn test_cli_color_beats_environment() {
    let cli = AppConfig {
        color: ColorChoice::Always,
        ..AppConfig::default()
    };
    let config = AppConfig::resolve(cli, &env_of(&[("NO_COLOR", "1")])).unwrap();
    assert_eq!(config.color, ColorChoice::Always);
}

#[test]
fn test_resolve_validates() {
    let cli = AppConfig {
        jobs: 0,
        ..AppConfig::default()
    };
    assert!(AppConfig::resolve(cli, &EnvironmentConfig::default()).is_err());
}

#[test]
fn test_missing_env_files_are_ignored() {
    let temp = TempDir::new().unwrap();
    assert!(load_env_files(temp.path()).is_ok());
}

#[test]
fn test_env_file_values_are_exported() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env"),
        "PROJGRAPH_LOADER_TEST_VALUE=from-dotenv\n",
    )
    .unwrap();

    load_env_files(temp.path()).unwrap();
    assert_eq!(
        std::env::var("PROJGRAPH_LOADER_TEST_VALUE").as_deref(),
        Ok("from-dotenv")
    );
}

#[test]
fn test_malformed_env_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env.local"), "this is not an assignment\n").unwrap();

    assert!(matches!(
        load_env_files(temp.path()),
        Err(ConfigError::EnvFileError { .. })
    ));
}
