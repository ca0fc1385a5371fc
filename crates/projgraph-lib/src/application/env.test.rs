use super::*;

fn env_of(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_vars(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_empty_environment_keeps_choice() {
    let env = env_of(&[]);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
    assert_eq!(env.apply_color_config(ColorChoice::Always), ColorChoice::Always);
}

#[test]
fn test_no_color_environment_variable() {
    let env = env_of(&[("NO_COLOR", "1")]);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Never);
}

#[test]
fn test_force_color_environment_variable() {
    let env = env_of(&[("FORCE_COLOR", "1")]);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Always);

    let env = env_of(&[("FORCE_COLOR", "false")]);
    assert_eq!(env.apply_color_config(ColorChoice::Always), ColorChoice::Never);
}

#[test]
fn test_environment_variable_precedence() {
    let env = env_of(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);

    // FORCE_COLOR wins over NO_COLOR and CLICOLOR
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Always);
}

#[test]
fn test_clicolor_zero_disables_color() {
    let env = env_of(&[("CLICOLOR", "0")]);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Never);

    let env = env_of(&[("CLICOLOR", "1")]);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
}

#[test]
fn test_ci_environment_variable() {
    let env = env_of(&[("CI", "true")]);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Never);
    assert_eq!(env.apply_color_config(ColorChoice::Always), ColorChoice::Never);
}

#[test]
fn test_force_color_wins_over_ci() {
    let env = env_of(&[("CI", "1"), ("FORCE_COLOR", "1")]);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Always);
}

#[test]
fn test_disabled_ci_values_are_ignored() {
    for value in ["0", "false"] {
        let env = env_of(&[("CI", value)]);
        assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
    }
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env = env_of(&[("NO_COLOR", "")]);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
}

#[test]
fn test_invalid_force_color_values_ignored() {
    let env = env_of(&[("FORCE_COLOR", "invalid")]);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
}

#[test]
fn test_unrelated_variables_are_ignored() {
    let env = env_of(&[("PATH", "/usr/bin"), ("HOME", "/root")]);
    assert!(env.no_color.is_none());
    assert!(env.ci.is_none());
}
