use super::*;

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant
                    .to_possible_value()
                    .expect("every variant has a possible value");
                let primary_name = possible_value.get_name();
                let parsed: $enum_type = primary_name
                    .parse()
                    .unwrap_or_else(|e| panic!("'{primary_name}' should parse: {e}"));
                assert_eq!(parsed, *variant);
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert_eq!(
                    parsed.ok(),
                    Some(*expected),
                    "wrong variant for input '{}'",
                    input
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorChoice, test_color_choice_completeness);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("fatal", LogLevel::Error),
        ("warn", LogLevel::Warning),
        ("warning", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
        ("verbose", LogLevel::Trace),
        ("TRACE", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    LogFormat,
    test_log_format_aliases,
    [
        ("text", LogFormat::Text),
        ("plain", LogFormat::Text),
        ("json", LogFormat::Json),
        ("yaml", LogFormat::Yaml),
        ("yml", LogFormat::Yaml),
        ("pretty", LogFormat::Yaml),
    ]
);

test_fromstr_aliases!(
    LogOutput,
    test_log_output_aliases,
    [("stderr", LogOutput::Stderr), ("stdout", LogOutput::Stdout)]
);

test_fromstr_aliases!(
    ColorChoice,
    test_color_choice_aliases,
    [
        ("auto", ColorChoice::Auto),
        ("detect", ColorChoice::Auto),
        ("always", ColorChoice::Always),
        ("force", ColorChoice::Always),
        ("on", ColorChoice::Always),
        ("never", ColorChoice::Never),
        ("off", ColorChoice::Never),
    ]
);

#[test]
fn test_unknown_value_lists_expected_names() {
    let err = "sometimes".parse::<ColorChoice>().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'sometimes'"));
    assert!(message.contains("auto, always, never"));
}

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_log_level_directives() {
    assert_eq!(LogLevel::Error.as_directive(), "error");
    assert_eq!(LogLevel::Warning.as_directive(), "warn");
    assert_eq!(LogLevel::Trace.as_directive(), "trace");
    assert!(LogLevel::Error < LogLevel::Trace);
}

#[test]
fn test_explicit_color_choices() {
    assert!(ColorChoice::Always.for_stdout());
    assert!(ColorChoice::Always.for_stderr());
    assert!(!ColorChoice::Never.for_stdout());
    assert!(!ColorChoice::Never.for_stderr());
}

#[test]
fn test_json_logs_never_use_ansi() {
    let config = LoggerConfig {
        level: LogLevel::Info,
        format: LogFormat::Json,
        output: LogOutput::Stderr,
        color: ColorChoice::Always,
    };
    assert!(!config.ansi());

    let text = LoggerConfig {
        format: LogFormat::Text,
        ..config
    };
    assert!(text.ansi());
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::InvalidWorkDir {
        path: "/invalid/path".to_string(),
    };
    assert_eq!(error.to_string(), "Invalid working directory: /invalid/path");

    let error = ConfigError::ValidationFailed {
        reason: "jobs must be at least 1".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Configuration validation failed: jobs must be at least 1"
    );
}
