//! Test utilities for report module tests
//!
//! Builds small analysis reports from in-memory units. Only compiled in test builds.

use std::path::PathBuf;

use super::AnalysisReport;
use crate::discovery::SkippedDescriptor;
use crate::graph::{Dialect, PackageReference, PlanBuilder, Unit};

pub const ROOT: &str = "/repo";

/// Unit at `/repo/<name>/<name>.csproj` referencing sibling projects
pub fn unit(name: &str, deps: &[&str]) -> Unit {
    deps.iter().fold(
        Unit::new(format!("{ROOT}/{name}/{name}.csproj"), Dialect::CSharp),
        |unit, dep| unit.with_reference(format!("../{dep}/{dep}.csproj")),
    )
}

pub fn report_for(units: Vec<Unit>) -> AnalysisReport {
    let plan = PlanBuilder::build(&units).unwrap();
    AnalysisReport::new(PathBuf::from(ROOT), units, plan, Vec::new())
}

/// App -> Core, plus an unresolved reference and a package
pub fn acyclic_report() -> AnalysisReport {
    report_for(vec![
        unit("App", &["Core"])
            .with_reference("../Ghost/Ghost.csproj")
            .with_target_framework("net8.0")
            .with_package(PackageReference::new("Serilog", Some("3.1.1".to_string()))),
        unit("Core", &[]).with_target_framework("netstandard2.0"),
    ])
}

/// A <-> B, Top -> A, plus an independent unit and a skipped file
pub fn cyclic_report() -> AnalysisReport {
    let mut report = report_for(vec![
        unit("A", &["B"]),
        unit("B", &["A"]),
        unit("Top", &["A"]),
        unit("Free", &[]),
    ]);
    report.skipped.push(SkippedDescriptor {
        path: PathBuf::from("/repo/Broken/Broken.csproj"),
        reason: "Failed to parse project XML".to_string(),
    });
    report
}
