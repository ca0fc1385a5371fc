//! MSBuild project descriptor parsing
//!
//! Both dialects (`.csproj`, `.vbproj`) share the MSBuild XML schema, so a
//! single serde model covers them. Only the pieces the planner needs are
//! modelled; every other element and attribute is ignored.

use serde::Deserialize;
use std::path::Path;
use tracing::trace;

use super::DescriptorError;
use crate::graph::{Dialect, PackageReference, Unit, UnitId};

#[derive(Debug, Default, Deserialize)]
struct ProjectXml {
    #[serde(rename = "PropertyGroup", default)]
    property_groups: Vec<PropertyGroupXml>,
    #[serde(rename = "ItemGroup", default)]
    item_groups: Vec<ItemGroupXml>,
}

/// Properties are lists because a group may repeat one under different
/// `Condition`s; the first non-empty value wins.
#[derive(Debug, Default, Deserialize)]
struct PropertyGroupXml {
    #[serde(rename = "TargetFramework", default)]
    target_framework: Vec<String>,
    #[serde(rename = "TargetFrameworks", default)]
    target_frameworks: Vec<String>,
    /// Legacy (non-SDK) projects, e.g. `v4.7.2`
    #[serde(rename = "TargetFrameworkVersion", default)]
    target_framework_version: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ItemGroupXml {
    #[serde(rename = "ProjectReference", default)]
    project_references: Vec<ProjectReferenceXml>,
    #[serde(rename = "PackageReference", default)]
    package_references: Vec<PackageReferenceXml>,
}

#[derive(Debug, Deserialize)]
struct ProjectReferenceXml {
    #[serde(rename = "@Include", default)]
    include: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PackageReferenceXml {
    #[serde(rename = "@Include", default)]
    include: Option<String>,
    #[serde(rename = "@Version", default)]
    version_attribute: Option<String>,
    #[serde(rename = "Version", default)]
    version_element: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn first_non_empty(values: &[String]) -> Option<String> {
    values.iter().find_map(|v| non_empty(Some(v)))
}

/// Read and parse a descriptor file into a [`Unit`]
pub fn parse_descriptor(path: &Path) -> Result<Unit, DescriptorError> {
    let dialect = Dialect::from_path(path).ok_or_else(|| DescriptorError::UnsupportedDialect {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| DescriptorError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    parse_descriptor_str(path, dialect, &content)
}

/// Parse descriptor XML already in memory; `path` becomes the unit id
pub fn parse_descriptor_str(
    path: &Path,
    dialect: Dialect,
    content: &str,
) -> Result<Unit, DescriptorError> {
    trace!("Parsing project descriptor: {}", path.display());

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let project: ProjectXml =
        quick_xml::de::from_str(content).map_err(|source| DescriptorError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut unit = Unit::new(UnitId::from_path(path), dialect);

    unit.target_framework = project
        .property_groups
        .iter()
        .find_map(|group| first_non_empty(&group.target_framework))
        .or_else(|| {
            project
                .property_groups
                .iter()
                .find_map(|group| first_non_empty(&group.target_frameworks))
        })
        .or_else(|| {
            project
                .property_groups
                .iter()
                .find_map(|group| first_non_empty(&group.target_framework_version))
        });

    for group in &project.item_groups {
        unit.declared_references.extend(
            group
                .project_references
                .iter()
                .filter_map(|reference| non_empty(reference.include.as_ref())),
        );

        unit.package_references.extend(group.package_references.iter().filter_map(|package| {
            let name = non_empty(package.include.as_ref())?;
            let version = non_empty(package.version_attribute.as_ref())
                .or_else(|| non_empty(package.version_element.as_ref()));
            Some(PackageReference::new(name, version))
        }));
    }

    trace!(
        "Parsed {}: {} project references, {} package references",
        unit.display_name,
        unit.declared_references.len(),
        unit.package_references.len()
    );

    Ok(unit)
}

#[cfg(test)]
mod tests {
    include!("descriptor.test.rs");
}
