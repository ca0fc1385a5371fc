//! Descriptor model: discovered build units and their declared references
//!
//! Plain records handed to the plan builder. Everything here is produced by
//! the discovery layer (or by hand in tests) and is never mutated by the graph.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of a build unit: the absolute path of its descriptor file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Final path segment of the id (`Core.csproj` for `/repo/Core/Core.csproj`)
    pub fn file_name(&self) -> Option<&str> {
        self.as_path().file_name().and_then(|s| s.to_str())
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UnitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<PathBuf> for UnitId {
    fn from(value: PathBuf) -> Self {
        Self::from_path(&value)
    }
}

/// Descriptor dialect, decided by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// C# project (`.csproj`)
    CSharp,
    /// Visual Basic project (`.vbproj`)
    VisualBasic,
}

impl Dialect {
    /// Detect the dialect from a descriptor path (extension is case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csproj" => Some(Self::CSharp),
            "vbproj" => Some(Self::VisualBasic),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::CSharp => "csproj",
            Self::VisualBasic => "vbproj",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// External package reference (reported only, never resolved or graphed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReference {
    pub name: String,
    pub version: Option<String>,
}

impl PackageReference {
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

/// A discovered build unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    pub display_name: String,
    pub dialect: Dialect,
    /// Raw reference strings, in declaration order
    pub declared_references: Vec<String>,
    /// Opaque target framework moniker(s), passed through unchanged
    pub target_framework: Option<String>,
    pub package_references: Vec<PackageReference>,
}

impl Unit {
    /// Create a unit from its descriptor path; display name is the file stem
    pub fn new(id: impl Into<UnitId>, dialect: Dialect) -> Self {
        let id = id.into();
        let display_name = id
            .as_path()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        Self {
            id,
            display_name,
            dialect,
            declared_references: Vec::new(),
            target_framework: None,
            package_references: Vec::new(),
        }
    }

    /// Add a declared project reference
    pub fn with_reference(mut self, raw: impl Into<String>) -> Self {
        self.declared_references.push(raw.into());
        self
    }

    pub fn with_target_framework(mut self, tfm: impl Into<String>) -> Self {
        self.target_framework = Some(tfm.into());
        self
    }

    pub fn with_package(mut self, package: PackageReference) -> Self {
        self.package_references.push(package);
        self
    }

    /// Directory containing the descriptor, used for relative reference resolution
    pub fn directory(&self) -> Option<&Path> {
        self.id.as_path().parent()
    }
}

/// One declared reference after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub raw_path: String,
    resolved_unit_id: Option<UnitId>,
}

impl Reference {
    pub fn resolved(raw_path: impl Into<String>, target: UnitId) -> Self {
        Self {
            raw_path: raw_path.into(),
            resolved_unit_id: Some(target),
        }
    }

    pub fn unresolved(raw_path: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
            resolved_unit_id: None,
        }
    }

    pub fn resolved_unit_id(&self) -> Option<&UnitId> {
        self.resolved_unit_id.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_unit_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    include!("model.test.rs");
}
