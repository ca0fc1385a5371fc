use super::*;
use crate::report::test_utils::{acyclic_report, cyclic_report, report_for};

#[test]
fn test_outcome_exit_codes() {
    assert_eq!(AnalysisOutcome::Clean.exit_code(), 0);
    assert_eq!(AnalysisOutcome::CyclesDetected.exit_code(), 1);
    assert_eq!(AnalysisOutcome::NoUnits.exit_code(), 1);
}

#[test]
fn test_outcome_classification() {
    assert_eq!(acyclic_report().outcome(), AnalysisOutcome::Clean);
    assert_eq!(cyclic_report().outcome(), AnalysisOutcome::CyclesDetected);
    assert_eq!(report_for(Vec::new()).outcome(), AnalysisOutcome::NoUnits);
}

#[test]
fn test_relative_path_strips_root() {
    let report = acyclic_report();
    let id = UnitId::new("/repo/App/App.csproj");
    assert_eq!(report.relative_path(&id), Path::new("App/App.csproj"));

    let outside = UnitId::new("/elsewhere/X.csproj");
    assert_eq!(report.relative_path(&outside), Path::new("/elsewhere/X.csproj"));
}

#[test]
fn test_document_layout() {
    let document = acyclic_report().to_document(false);

    assert_eq!(document.project_count, 2);
    assert_eq!(document.level_count, 2);
    assert_eq!(document.levels[0].level, 0);
    assert_eq!(document.levels[0].projects[0].name, "Core");
    assert_eq!(
        document.levels[0].projects[0].target_framework.as_deref(),
        Some("netstandard2.0")
    );
    assert_eq!(document.levels[1].projects[0].dialect, Some(Dialect::CSharp));
    assert!(document.levels[1].projects[0].packages.is_none());
    assert_eq!(
        document.unresolved,
        vec![UnresolvedEntry {
            project: "/repo/App/App.csproj".to_string(),
            reference: "../Ghost/Ghost.csproj".to_string(),
        }]
    );
    assert!(document.circular.is_empty());
}

#[test]
fn test_document_includes_packages_on_request() {
    let document = acyclic_report().to_document(true);
    let app = &document.levels[1].projects[0];
    assert_eq!(
        app.packages.as_deref(),
        Some(&[PackageReference::new("Serilog", Some("3.1.1".to_string()))][..])
    );
}

#[test]
fn test_document_cycle_fields() {
    let document = cyclic_report().to_document(false);

    assert_eq!(
        document.circular,
        vec!["/repo/A/A.csproj", "/repo/B/B.csproj"]
    );
    assert_eq!(
        document.cycles,
        vec![vec!["/repo/A/A.csproj", "/repo/B/B.csproj"]]
    );
    assert_eq!(document.blocked, vec!["/repo/Top/Top.csproj"]);
    assert_eq!(document.skipped.len(), 1);
    assert_eq!(document.level_count, 1);
}
