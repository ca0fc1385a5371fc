//! Recursive descriptor discovery
//!
//! Walks a directory tree and collects `.csproj` / `.vbproj` files. Build
//! output and tooling directories are pruned so stale copies of project
//! files never show up as separate units.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use super::DiscoveryError;
use crate::graph::Dialect;

/// Directory names never descended into (compared case-insensitively)
pub const SKIPPED_DIRS: &[&str] = &["bin", "obj", "node_modules", "packages"];

/// Result of scanning a root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Canonical root; every descriptor path is absolute and below it
    pub root: PathBuf,
    /// Descriptor files, sorted by path
    pub descriptors: Vec<PathBuf>,
}

/// Find every descriptor file below `root`
pub fn discover(root: &Path) -> Result<Discovery, DiscoveryError> {
    let root = root
        .canonicalize()
        .map_err(|source| DiscoveryError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory { path: root });
    }

    debug!("Scanning for project descriptors in: {}", root.display());

    let mut descriptors = Vec::new();
    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable subdirectories are skipped, the rest of the tree still counts
                warn!("Skipping unreadable path during discovery: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && Dialect::from_path(entry.path()).is_some() {
            trace!("Found descriptor: {}", entry.path().display());
            descriptors.push(entry.into_path());
        }
    }

    descriptors.sort();
    debug!("Discovered {} project descriptors", descriptors.len());

    Ok(Discovery { root, descriptors })
}

fn is_pruned(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || SKIPPED_DIRS
            .iter()
            .any(|skipped| name.eq_ignore_ascii_case(skipped))
}

#[cfg(test)]
mod tests {
    include!("scanner.test.rs");
}
