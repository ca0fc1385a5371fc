//! Reference resolution against the set of discovered units
//!
//! A declared reference is a loosely written path (relative, absolute, bare
//! name, Windows separators). Resolution runs an ordered list of matching
//! strategies; the first one that finds a unit wins. When every strategy
//! fails on the raw string, the list is retried on normalized forms of it
//! (separators converted, then leading `../` segments stripped).

use super::model::{Unit, UnitId};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// A single matching strategy: `(raw reference, source unit, all units) -> match`
pub type Strategy = fn(&str, &Unit, &[Unit]) -> Option<UnitId>;

/// Which strategy produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Reference equals a unit id verbatim
    ExactId,
    /// Reference resolved against the source unit's directory
    RelativePath,
    /// Reference stem equals a unit's display name
    BareName,
    /// Reference file name equals a unit id's file name
    FileName,
}

/// How the raw reference was rewritten before the match succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    /// Matched as written
    None,
    /// Matched after converting `\` to `/`
    Separators,
    /// Matched after converting separators and stripping leading `../`
    StrippedParents,
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub target: UnitId,
    pub strategy: MatchStrategy,
    pub normalization: Normalization,
}

/// Strategies in the order they are attempted (cheapest and most specific first)
pub const STRATEGIES: [(MatchStrategy, Strategy); 4] = [
    (MatchStrategy::ExactId, match_exact_id),
    (MatchStrategy::RelativePath, match_relative_path),
    (MatchStrategy::BareName, match_bare_name),
    (MatchStrategy::FileName, match_file_name),
];

/// Resolve `raw` declared by `source` against `units`
pub fn resolve(raw: &str, source: &Unit, units: &[Unit]) -> Option<Resolution> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let separators = normalize_separators(raw);
    let stripped = strip_leading_parents(&separators);

    let mut candidates: Vec<(&str, Normalization)> = vec![(raw, Normalization::None)];
    if separators != raw {
        candidates.push((&separators, Normalization::Separators));
    }
    if stripped != separators && !stripped.is_empty() {
        candidates.push((stripped, Normalization::StrippedParents));
    }

    candidates.into_iter().find_map(|(candidate, normalization)| {
        STRATEGIES.iter().find_map(|(strategy, matcher)| {
            matcher(candidate, source, units).map(|target| Resolution {
                target,
                strategy: *strategy,
                normalization,
            })
        })
    })
}

fn match_exact_id(raw: &str, _source: &Unit, units: &[Unit]) -> Option<UnitId> {
    units
        .iter()
        .find(|unit| unit.id.as_str() == raw)
        .map(|unit| unit.id.clone())
}

fn match_relative_path(raw: &str, source: &Unit, units: &[Unit]) -> Option<UnitId> {
    let base = source.directory()?;
    let candidate = normalize_lexically(&base.join(raw));

    units
        .iter()
        .find(|unit| normalize_lexically(unit.id.as_path()) == candidate)
        .map(|unit| unit.id.clone())
}

fn match_bare_name(raw: &str, _source: &Unit, units: &[Unit]) -> Option<UnitId> {
    let stem = Path::new(raw).file_stem()?.to_str()?;

    units
        .iter()
        .find(|unit| unit.display_name == stem)
        .map(|unit| unit.id.clone())
}

fn match_file_name(raw: &str, _source: &Unit, units: &[Unit]) -> Option<UnitId> {
    let file_name = Path::new(raw).file_name()?.to_str()?;

    units
        .iter()
        .find(|unit| unit.id.file_name() == Some(file_name))
        .map(|unit| unit.id.clone())
}

/// Convert Windows separators to `/`
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Strip every leading `../` (and `./`) segment
pub fn strip_leading_parents(raw: &str) -> &str {
    let mut rest = raw;
    loop {
        if let Some(stripped) = rest.strip_prefix("../") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else {
            return rest;
        }
    }
}

/// Resolve `.` and `..` components without touching the filesystem
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    out.iter().collect()
}

#[cfg(test)]
mod tests {
    include!("resolver.test.rs");
}
