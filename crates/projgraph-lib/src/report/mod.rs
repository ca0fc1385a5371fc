//! # Report Module
//!
//! Combines discovery results and the computed plan into an
//! [`AnalysisReport`], and renders it for humans or machines.
//!
//! ## Modules
//!
//! - [`text`] - Human-readable, optionally colored report
//! - [`structured`] - JSON and YAML documents with a stable field layout

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::discovery::SkippedDescriptor;
use crate::graph::{BuildPlan, Dialect, PackageReference, PlanStats, Unit, UnitId};

pub mod structured;
pub mod text;

#[cfg(test)]
pub(crate) mod test_utils;

/// Rendering errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to serialize JSON report: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to serialize YAML report: {reason}")]
    YamlError { reason: String },
}

/// Output formats for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

/// Overall verdict of an analysis, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Every unit was placed in a level
    Clean,
    /// At least one cycle was found
    CyclesDetected,
    /// No descriptors were found below the root
    NoUnits,
}

impl AnalysisOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::CyclesDetected | Self::NoUnits => 1,
        }
    }
}

/// Everything one analysis run produced
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub root: PathBuf,
    pub units: Vec<Unit>,
    pub plan: BuildPlan,
    pub skipped: Vec<SkippedDescriptor>,
}

impl AnalysisReport {
    pub fn new(
        root: PathBuf,
        units: Vec<Unit>,
        plan: BuildPlan,
        skipped: Vec<SkippedDescriptor>,
    ) -> Self {
        Self {
            root,
            units,
            plan,
            skipped,
        }
    }

    pub fn outcome(&self) -> AnalysisOutcome {
        if self.units.is_empty() {
            AnalysisOutcome::NoUnits
        } else if self.plan.has_cycles() {
            AnalysisOutcome::CyclesDetected
        } else {
            AnalysisOutcome::Clean
        }
    }

    /// Path of `id` relative to the root, falling back to the full id
    pub fn relative_path<'a>(&self, id: &'a UnitId) -> &'a Path {
        id.as_path()
            .strip_prefix(&self.root)
            .unwrap_or_else(|_| id.as_path())
    }

    /// Serializable view of the report
    pub fn to_document(&self, show_packages: bool) -> ReportDocument {
        let by_id: HashMap<&UnitId, &Unit> = self.units.iter().map(|u| (&u.id, u)).collect();

        let project = |id: &UnitId| {
            let unit = by_id.get(id);
            ProjectEntry {
                id: id.to_string(),
                name: unit
                    .map(|u| u.display_name.clone())
                    .unwrap_or_else(|| id.to_string()),
                dialect: unit.map(|u| u.dialect),
                target_framework: unit.and_then(|u| u.target_framework.clone()),
                packages: if show_packages {
                    unit.map(|u| u.package_references.clone())
                } else {
                    None
                },
            }
        };

        ReportDocument {
            root: self.root.display().to_string(),
            project_count: self.units.len(),
            level_count: self.plan.levels.len(),
            levels: self
                .plan
                .levels
                .iter()
                .enumerate()
                .map(|(level, ids)| LevelEntry {
                    level,
                    projects: ids.iter().map(&project).collect(),
                })
                .collect(),
            circular: id_strings(&self.plan.circular),
            cycles: self
                .plan
                .cycles
                .iter()
                .map(|cycle| id_strings(cycle))
                .collect(),
            blocked: id_strings(&self.plan.blocked),
            unresolved: self
                .plan
                .unresolved()
                .map(|(unit, reference)| UnresolvedEntry {
                    project: unit.to_string(),
                    reference: reference.raw_path.clone(),
                })
                .collect(),
            skipped: self.skipped.clone(),
            stats: self.plan.stats.clone(),
        }
    }
}

fn id_strings<'a>(ids: impl IntoIterator<Item = &'a UnitId>) -> Vec<String> {
    ids.into_iter().map(UnitId::to_string).collect()
}

/// Stable, serializable layout of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub root: String,
    pub project_count: usize,
    pub level_count: usize,
    pub levels: Vec<LevelEntry>,
    pub circular: Vec<String>,
    pub cycles: Vec<Vec<String>>,
    pub blocked: Vec<String>,
    pub unresolved: Vec<UnresolvedEntry>,
    pub skipped: Vec<SkippedDescriptor>,
    pub stats: PlanStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelEntry {
    pub level: usize,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub dialect: Option<Dialect>,
    pub target_framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<PackageReference>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedEntry {
    pub project: String,
    pub reference: String,
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
