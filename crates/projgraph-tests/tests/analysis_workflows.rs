//! E2E tests for the analysis pipeline
//!
//! Each test writes a project tree to disk and runs discovery, parsing and
//! planning through the library entry point used by the `analyze` command.

use anyhow::Result;
use projgraph_lib::application::analyze;
use projgraph_lib::report::structured::render_json;
use projgraph_lib::report::AnalysisOutcome;
use projgraph_tests::{FixtureTree, ProjectFixture};

fn relative_levels(report: &projgraph_lib::report::AnalysisReport) -> Vec<Vec<String>> {
    report
        .plan
        .levels
        .iter()
        .map(|level| {
            level
                .iter()
                .map(|id| report.relative_path(id).display().to_string())
                .collect()
        })
        .collect()
}

#[tokio::test]
async fn e2e_layered_solution() -> Result<()> {
    let tree = FixtureTree::new()?;
    tree.add_all(&[
        ProjectFixture::sibling("Web", &["Services", "Domain"]),
        ProjectFixture::sibling("Services", &["Data", "Domain"]),
        ProjectFixture::sibling("Data", &["Domain"]),
        ProjectFixture::sibling("Domain", &[]),
        ProjectFixture::sibling("Tools", &[]),
    ])?;

    let report = analyze(&tree.app_config(), None).await?;

    assert_eq!(
        relative_levels(&report),
        vec![
            vec!["Domain/Domain.csproj", "Tools/Tools.csproj"],
            vec!["Data/Data.csproj"],
            vec!["Services/Services.csproj"],
            vec!["Web/Web.csproj"],
        ]
    );
    assert_eq!(report.outcome(), AnalysisOutcome::Clean);
    assert_eq!(report.plan.stats.edges, 5);
    assert_eq!(report.plan.stats.unresolved, 0);
    Ok(())
}

#[tokio::test]
async fn e2e_mixed_dialects() -> Result<()> {
    let tree = FixtureTree::new()?;
    tree.add(
        &ProjectFixture::new("App/App.csproj")
            .with_reference("..\\Legacy\\Legacy.vbproj")
            .with_target_framework("net8.0"),
    )?;
    tree.write_raw(
        "Legacy/Legacy.vbproj",
        r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <TargetFrameworkVersion>v4.7.2</TargetFrameworkVersion>
  </PropertyGroup>
</Project>
"#,
    )?;

    let report = analyze(&tree.app_config(), None).await?;

    assert_eq!(
        relative_levels(&report),
        vec![vec!["Legacy/Legacy.vbproj"], vec!["App/App.csproj"]]
    );
    let legacy = report
        .units
        .iter()
        .find(|u| u.display_name == "Legacy")
        .expect("legacy project discovered");
    assert_eq!(legacy.target_framework.as_deref(), Some("v4.7.2"));
    Ok(())
}

#[tokio::test]
async fn e2e_cycle_with_blocked_dependent() -> Result<()> {
    let tree = FixtureTree::new()?;
    tree.add_all(&[
        ProjectFixture::sibling("A", &["B"]),
        ProjectFixture::sibling("B", &["C"]),
        ProjectFixture::sibling("C", &["A"]),
        ProjectFixture::sibling("Host", &["A"]),
        ProjectFixture::sibling("Free", &[]),
    ])?;

    let report = analyze(&tree.app_config(), None).await?;

    assert_eq!(report.outcome(), AnalysisOutcome::CyclesDetected);
    assert_eq!(relative_levels(&report), vec![vec!["Free/Free.csproj"]]);

    let circular: Vec<String> = report
        .plan
        .circular
        .iter()
        .map(|id| report.relative_path(id).display().to_string())
        .collect();
    assert_eq!(circular, vec!["A/A.csproj", "B/B.csproj", "C/C.csproj"]);
    assert_eq!(report.plan.cycles.len(), 1);

    let blocked: Vec<String> = report
        .plan
        .blocked
        .iter()
        .map(|id| report.relative_path(id).display().to_string())
        .collect();
    assert_eq!(blocked, vec!["Host/Host.csproj"]);
    Ok(())
}

#[tokio::test]
async fn e2e_unresolved_reference_does_not_fail() -> Result<()> {
    let tree = FixtureTree::new()?;
    tree.add(&ProjectFixture::sibling("App", &["Missing"]))?;

    let report = analyze(&tree.app_config(), None).await?;

    assert_eq!(report.outcome(), AnalysisOutcome::Clean);
    assert_eq!(relative_levels(&report), vec![vec!["App/App.csproj"]]);
    let unresolved: Vec<&str> = report
        .plan
        .unresolved()
        .map(|(_, reference)| reference.raw_path.as_str())
        .collect();
    assert_eq!(unresolved, vec!["..\\Missing\\Missing.csproj"]);
    Ok(())
}

#[tokio::test]
async fn e2e_build_output_is_ignored() -> Result<()> {
    let tree = FixtureTree::new()?;
    tree.add(&ProjectFixture::sibling("App", &[]))?;
    tree.add(&ProjectFixture::new("App/bin/Release/App.csproj"))?;
    tree.add(&ProjectFixture::new("App/obj/App.csproj"))?;
    tree.add(&ProjectFixture::new(".vs/Cache/Cache.csproj"))?;
    tree.add(&ProjectFixture::new("node_modules/pkg/Pkg.csproj"))?;

    let report = analyze(&tree.app_config(), None).await?;

    assert_eq!(report.units.len(), 1);
    assert_eq!(relative_levels(&report), vec![vec!["App/App.csproj"]]);
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_descriptor_is_skipped() -> Result<()> {
    let tree = FixtureTree::new()?;
    tree.add(&ProjectFixture::sibling("App", &["Broken"]))?;
    tree.write_raw("Broken/Broken.csproj", "<Project><ItemGroup>")?;

    let report = analyze(&tree.app_config(), None).await?;

    assert_eq!(report.units.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].path.ends_with("Broken/Broken.csproj"));
    // A skipped descriptor is not a unit, so the reference to it is unresolved
    assert_eq!(report.plan.stats.unresolved, 1);
    Ok(())
}

#[tokio::test]
async fn e2e_json_document_with_packages() -> Result<()> {
    let tree = FixtureTree::new()?;
    tree.add(
        &ProjectFixture::sibling("App", &["Core"])
            .with_package("Serilog", Some("3.1.1"))
            .with_package("Unpinned", None),
    )?;
    tree.add(&ProjectFixture::sibling("Core", &[]))?;

    let report = analyze(&tree.app_config(), None).await?;
    let value: serde_json::Value = serde_json::from_str(&render_json(&report, true)?)?;

    assert_eq!(value["projectCount"], 2);
    assert_eq!(value["levelCount"], 2);
    assert_eq!(value["levels"][0]["projects"][0]["name"], "Core");
    assert_eq!(value["levels"][1]["projects"][0]["targetFramework"], "net8.0");

    let packages = &value["levels"][1]["projects"][0]["packages"];
    assert_eq!(packages[0]["name"], "Serilog");
    assert_eq!(packages[0]["version"], "3.1.1");
    assert_eq!(packages[1]["name"], "Unpinned");
    assert!(packages[1]["version"].is_null());
    Ok(())
}

#[tokio::test]
async fn e2e_empty_tree() -> Result<()> {
    let tree = FixtureTree::new()?;

    let report = analyze(&tree.app_config(), None).await?;

    assert_eq!(report.outcome(), AnalysisOutcome::NoUnits);
    assert!(report.plan.levels.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_missing_root_is_an_error() -> Result<()> {
    let tree = FixtureTree::new()?;

    let result = analyze(&tree.app_config(), Some(std::path::Path::new("nope"))).await;
    assert!(result.is_err());
    Ok(())
}
