use super::*;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.jobs, 4);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorChoice::Auto);
    assert!(config.workdir.is_none());
}

#[test]
fn test_config_merging() {
    let base = AppConfig {
        color: ColorChoice::Never,
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        log_level: 3,
        jobs: 16,
        log_format: LogFormat::Json,
        workdir: Some(PathBuf::from("/tmp")),
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.jobs, 16);
    assert_eq!(merged.log_format, LogFormat::Json);
    assert_eq!(merged.workdir, Some(PathBuf::from("/tmp")));
    // Default-valued fields in `other` leave the base untouched
    assert_eq!(merged.color, ColorChoice::Never);
}

#[test]
fn test_validate_rejects_zero_jobs() {
    let mut config = AppConfig {
        jobs: 0,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_validate_rejects_missing_workdir() {
    let temp = TempDir::new().unwrap();
    let mut config = AppConfig {
        workdir: Some(temp.path().join("missing")),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWorkDir { .. })
    ));
}

#[test]
fn test_validate_fills_workdir() {
    let mut config = AppConfig::default();
    config.validate().unwrap();
    assert!(config.workdir.is_some());
}

#[test]
fn test_resolve_path() {
    let config = AppConfig {
        workdir: Some(PathBuf::from("/work")),
        ..AppConfig::default()
    };

    assert_eq!(config.resolve_path(None), PathBuf::from("/work"));
    assert_eq!(
        config.resolve_path(Some(Path::new("src"))),
        PathBuf::from("/work/src")
    );
    assert_eq!(
        config.resolve_path(Some(Path::new("/elsewhere"))),
        PathBuf::from("/elsewhere")
    );
}

#[test]
fn test_logger_config_from_app_config() {
    let config = AppConfig {
        log_level: 2,
        log_output: LogOutput::Stdout,
        color: ColorChoice::Never,
        ..AppConfig::default()
    };

    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Info);
    assert_eq!(logger.output, LogOutput::Stdout);
    assert_eq!(logger.color, ColorChoice::Never);
}
