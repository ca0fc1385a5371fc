//! Fixture trees for E2E tests
//!
//! A [`FixtureTree`] owns a temporary directory; [`ProjectFixture`] renders
//! one MSBuild project file into it.

use anyhow::{Context, Result};
use projgraph_lib::application::AppConfig;
use projgraph_lib::primitives::ColorChoice;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One project file to be written into a fixture tree
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    relative: PathBuf,
    target_framework: Option<String>,
    references: Vec<String>,
    packages: Vec<(String, Option<String>)>,
}

impl ProjectFixture {
    /// Project at `relative` (e.g. `src/App/App.csproj`)
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
            target_framework: None,
            references: Vec::new(),
            packages: Vec::new(),
        }
    }

    /// SDK-style C# project at `<name>/<name>.csproj` referencing sibling projects
    /// with Windows separators, the way Visual Studio writes them
    pub fn sibling(name: &str, deps: &[&str]) -> Self {
        deps.iter().fold(
            Self::new(format!("{name}/{name}.csproj")).with_target_framework("net8.0"),
            |project, dep| project.with_reference(format!("..\\{dep}\\{dep}.csproj")),
        )
    }

    pub fn with_target_framework(mut self, tfm: impl Into<String>) -> Self {
        self.target_framework = Some(tfm.into());
        self
    }

    pub fn with_reference(mut self, include: impl Into<String>) -> Self {
        self.references.push(include.into());
        self
    }

    pub fn with_package(mut self, name: impl Into<String>, version: Option<&str>) -> Self {
        self.packages.push((name.into(), version.map(str::to_string)));
        self
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Render the project as MSBuild XML
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<Project Sdk=\"Microsoft.NET.Sdk\">\n");

        if let Some(tfm) = &self.target_framework {
            let _ = write!(
                xml,
                "  <PropertyGroup>\n    <TargetFramework>{tfm}</TargetFramework>\n  </PropertyGroup>\n"
            );
        }

        if !self.references.is_empty() || !self.packages.is_empty() {
            xml.push_str("  <ItemGroup>\n");
            for reference in &self.references {
                let _ = writeln!(xml, "    <ProjectReference Include=\"{reference}\" />");
            }
            for (name, version) in &self.packages {
                match version {
                    Some(version) => {
                        let _ = writeln!(
                            xml,
                            "    <PackageReference Include=\"{name}\" Version=\"{version}\" />"
                        );
                    }
                    None => {
                        let _ = writeln!(xml, "    <PackageReference Include=\"{name}\" />");
                    }
                }
            }
            xml.push_str("  </ItemGroup>\n");
        }

        xml.push_str("</Project>\n");
        xml
    }
}

/// Temporary source tree populated with project files
pub struct FixtureTree {
    temp_dir: TempDir,
}

impl FixtureTree {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new().context("Failed to create fixture directory")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a project file, creating parent directories
    pub fn add(&self, project: &ProjectFixture) -> Result<PathBuf> {
        self.write_raw(project.relative(), &project.to_xml())
    }

    /// Write several sibling projects at once
    pub fn add_all(&self, projects: &[ProjectFixture]) -> Result<()> {
        for project in projects {
            self.add(project)?;
        }
        Ok(())
    }

    /// Write arbitrary file content below the root
    pub fn write_raw(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Configuration rooted at this tree, without color
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            workdir: Some(self.root().to_path_buf()),
            jobs: 2,
            color: ColorChoice::Never,
            ..AppConfig::default()
        }
    }
}
