use super::*;

#[test]
fn test_filter_directives_follow_level() {
    assert_eq!(
        filter_directives(LogLevel::Debug),
        "projgraph=debug,projgraph_lib=debug,warn"
    );
    assert_eq!(
        filter_directives(LogLevel::Trace),
        "projgraph=trace,projgraph_lib=trace,warn"
    );
}

#[test]
fn test_dependencies_quiet_at_error_level() {
    assert_eq!(
        filter_directives(LogLevel::Error),
        "projgraph=error,projgraph_lib=error,error"
    );
}

#[test]
fn test_filter_directives_parse() {
    for verbosity in 0..=4 {
        let directives = filter_directives(LogLevel::from_verbosity(verbosity));
        assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
    }
}

#[test]
fn test_global_logger_consistency() {
    // Another test binary may have initialized it; both states must agree
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}
