use super::*;
use crate::primitives::ColorChoice;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn project(root: &Path, name: &str, deps: &[&str]) -> PathBuf {
    let references: String = deps
        .iter()
        .map(|dep| format!("    <ProjectReference Include=\"..\\{dep}\\{dep}.csproj\" />\n"))
        .collect();
    let content = format!(
        "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    <TargetFramework>net8.0</TargetFramework>\n  </PropertyGroup>\n  <ItemGroup>\n{references}  </ItemGroup>\n</Project>\n"
    );

    let path = root.join(name).join(format!("{name}.csproj"));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn config_for(temp: &TempDir) -> AppConfig {
    AppConfig {
        workdir: Some(temp.path().to_path_buf()),
        jobs: 2,
        color: ColorChoice::Never,
        ..AppConfig::default()
    }
}

fn analyze_command(path: Option<PathBuf>, format: ReportFormat) -> Option<Commands> {
    Some(Commands::Analyze {
        path,
        format,
        show_packages: false,
    })
}

#[tokio::test]
async fn test_analyze_builds_levels_from_disk() {
    let temp = TempDir::new().unwrap();
    project(temp.path(), "App", &["Core", "Data"]);
    project(temp.path(), "Data", &["Core"]);
    project(temp.path(), "Core", &[]);

    let report = analyze(&config_for(&temp), None).await.unwrap();

    let names: Vec<Vec<String>> = report
        .plan
        .levels
        .iter()
        .map(|level| {
            level
                .iter()
                .map(|id| report.relative_path(id).display().to_string())
                .collect()
        })
        .collect();
    assert_eq!(
        names,
        vec![
            vec!["Core/Core.csproj"],
            vec!["Data/Data.csproj"],
            vec!["App/App.csproj"],
        ]
    );
    assert!(!report.plan.has_cycles());
    assert_eq!(report.plan.stats.resolved, 3);
}

#[tokio::test]
async fn test_analyze_relative_path_uses_workdir() {
    let temp = TempDir::new().unwrap();
    project(&temp.path().join("src"), "Lib", &[]);
    project(temp.path(), "Outside", &[]);

    let report = analyze(&config_for(&temp), Some(Path::new("src")))
        .await
        .unwrap();
    assert_eq!(report.units.len(), 1);
    assert_eq!(report.units[0].display_name, "Lib");
}

#[tokio::test]
async fn test_analyze_reports_skipped_descriptors() {
    let temp = TempDir::new().unwrap();
    project(temp.path(), "Good", &[]);
    let broken = temp.path().join("Broken").join("Broken.csproj");
    fs::create_dir_all(broken.parent().unwrap()).unwrap();
    fs::write(&broken, "<Project><ItemGroup></Project>").unwrap();

    let report = analyze(&config_for(&temp), None).await.unwrap();
    assert_eq!(report.units.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].path.ends_with("Broken/Broken.csproj"));
}

#[tokio::test]
async fn test_exit_code_clean() {
    let temp = TempDir::new().unwrap();
    project(temp.path(), "App", &["Core"]);
    project(temp.path(), "Core", &[]);

    let code = execute_command(CliConfig {
        app_config: config_for(&temp),
        command: analyze_command(None, ReportFormat::Json),
    })
    .await
    .unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn test_exit_code_cycle() {
    let temp = TempDir::new().unwrap();
    project(temp.path(), "A", &["B"]);
    project(temp.path(), "B", &["A"]);

    let code = execute_command(CliConfig {
        app_config: config_for(&temp),
        command: analyze_command(None, ReportFormat::Text),
    })
    .await
    .unwrap();
    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_exit_code_no_units() {
    let temp = TempDir::new().unwrap();

    let code = execute_command(CliConfig {
        app_config: config_for(&temp),
        command: analyze_command(None, ReportFormat::Yaml),
    })
    .await
    .unwrap();
    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_missing_root_is_an_error() {
    let temp = TempDir::new().unwrap();

    let result = execute_command(CliConfig {
        app_config: config_for(&temp),
        command: analyze_command(Some(PathBuf::from("does-not-exist")), ReportFormat::Text),
    })
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_no_command_prints_hint() {
    let code = execute_command(CliConfig {
        app_config: AppConfig::default(),
        command: None,
    })
    .await
    .unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn test_version_command() {
    let code = execute_command(CliConfig {
        app_config: AppConfig::default(),
        command: Some(Commands::Version),
    })
    .await
    .unwrap();
    assert_eq!(code, 0);
}
