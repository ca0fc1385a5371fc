use super::*;
use crate::report::test_utils::{acyclic_report, cyclic_report, report_for};

fn plain() -> TextOptions {
    TextOptions {
        color: false,
        show_packages: false,
    }
}

#[test]
fn test_text_summary_and_levels() {
    let text = render(&acyclic_report(), plain());

    assert!(text.contains("Projects:       2"));
    assert!(text.contains("Build levels:   2"));
    assert!(text.contains("Circular:       none"));
    assert!(text.contains("Level 0 (1 project)"));
    assert!(text.contains("  - Core/Core.csproj [netstandard2.0]"));
    assert!(text.contains("  - App/App.csproj [net8.0]"));

    let core = text.find("Core/Core.csproj").unwrap();
    let app = text.find("App/App.csproj").unwrap();
    assert!(core < app, "dependencies are listed before dependents");
}

#[test]
fn test_text_lists_unresolved_references() {
    let text = render(&acyclic_report(), plain());
    assert!(text.contains("Unresolved references (1)"));
    assert!(text.contains("App/App.csproj -> ../Ghost/Ghost.csproj"));
}

#[test]
fn test_text_packages_are_opt_in() {
    let without = render(&acyclic_report(), plain());
    assert!(!without.contains("Serilog"));

    let with = render(
        &acyclic_report(),
        TextOptions {
            show_packages: true,
            ..plain()
        },
    );
    assert!(with.contains("Serilog 3.1.1"));
}

#[test]
fn test_text_cycles_blocked_and_skipped() {
    let text = render(&cyclic_report(), plain());

    assert!(text.contains("Circular:       2"));
    assert!(text.contains("Circular dependencies"));
    assert!(text.contains("1. A/A.csproj <-> B/B.csproj"));
    assert!(text.contains("Blocked by circular dependencies"));
    assert!(text.contains("  - Top/Top.csproj"));
    assert!(text.contains("Skipped descriptors (1)"));
    assert!(text.contains("Level 0 (1 project)"));
}

#[test]
fn test_text_empty_report() {
    let text = render(&report_for(Vec::new()), plain());
    assert!(text.contains("Projects:       0"));
    assert!(text.contains("No .csproj or .vbproj files found"));
}

#[test]
fn test_plain_text_has_no_ansi_codes() {
    let text = render(&cyclic_report(), plain());
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_colored_text_has_ansi_codes() {
    let text = render(
        &cyclic_report(),
        TextOptions {
            color: true,
            ..plain()
        },
    );
    assert!(text.contains('\u{1b}'));
}
