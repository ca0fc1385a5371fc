// Tests for reference resolution strategies

use super::*;
use crate::graph::model::Dialect;

// ============================================================================
// Test Utilities
// ============================================================================

fn unit(id: &str) -> Unit {
    Unit::new(id, Dialect::CSharp)
}

fn solution() -> Vec<Unit> {
    vec![
        unit("/repo/src/App/App.csproj"),
        unit("/repo/src/Core/Core.csproj"),
        unit("/repo/src/Data/Company.Data.csproj"),
        Unit::new("/repo/legacy/Interop/Interop.vbproj", Dialect::VisualBasic),
    ]
}

fn resolve_from(source: &str, raw: &str) -> Option<Resolution> {
    let units = solution();
    let source = units
        .iter()
        .find(|u| u.id.as_str() == source)
        .cloned()
        .unwrap();
    resolve(raw, &source, &units)
}

// ============================================================================
// Strategy Order
// ============================================================================

#[test]
fn test_exact_id_match() {
    let resolution = resolve_from("/repo/src/App/App.csproj", "/repo/src/Core/Core.csproj").unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/src/Core/Core.csproj");
    assert_eq!(resolution.strategy, MatchStrategy::ExactId);
    assert_eq!(resolution.normalization, Normalization::None);
}

#[test]
fn test_relative_path_match() {
    let resolution = resolve_from("/repo/src/App/App.csproj", "../Core/Core.csproj").unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/src/Core/Core.csproj");
    assert_eq!(resolution.strategy, MatchStrategy::RelativePath);
}

#[test]
fn test_relative_path_with_multiple_parent_segments() {
    let resolution =
        resolve_from("/repo/src/App/App.csproj", "../../legacy/Interop/./Interop.vbproj").unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/legacy/Interop/Interop.vbproj");
    assert_eq!(resolution.strategy, MatchStrategy::RelativePath);
}

#[test]
fn test_bare_name_match() {
    let resolution = resolve_from("/repo/src/App/App.csproj", "Company.Data").unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/src/Data/Company.Data.csproj");
    assert_eq!(resolution.strategy, MatchStrategy::BareName);
}

#[test]
fn test_bare_name_strips_directory_and_extension() {
    // Wrong directory, but the stem still names a known unit
    let resolution = resolve_from("/repo/src/App/App.csproj", "elsewhere/Core.csproj").unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/src/Core/Core.csproj");
    assert_eq!(resolution.strategy, MatchStrategy::BareName);
}

#[test]
fn test_file_name_match() {
    // Display name no longer matches the stem, so only the file name can match
    let mut units = solution();
    units[1].display_name = "Renamed".to_string();
    let source = units[0].clone();

    let resolution = resolve("somewhere/else/Core.csproj", &source, &units).unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/src/Core/Core.csproj");
    assert_eq!(resolution.strategy, MatchStrategy::FileName);
}

// ============================================================================
// Normalization Fallbacks
// ============================================================================

#[test]
fn test_windows_separators_are_normalized() {
    let resolution = resolve_from("/repo/src/App/App.csproj", r"..\Core\Core.csproj").unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/src/Core/Core.csproj");
    assert_eq!(resolution.normalization, Normalization::Separators);
    assert_eq!(resolution.strategy, MatchStrategy::RelativePath);
}

#[test]
fn test_parent_segments_escaping_the_tree_fall_back_to_file_name() {
    let mut units = vec![
        unit("/repo/App/App.csproj"),
        unit("/repo/lib/Shared/Shared.csproj"),
    ];
    // No unit is called "Shared" by name, so only the file name can match
    units[1].display_name = "Common".to_string();
    let source = units[0].clone();

    let resolution = resolve("../../../vendor/Shared/Shared.csproj", &source, &units).unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/lib/Shared/Shared.csproj");
    assert_eq!(resolution.strategy, MatchStrategy::FileName);
    assert_eq!(resolution.normalization, Normalization::None);
}

#[test]
fn test_strip_leading_parents() {
    assert_eq!(strip_leading_parents("../../a/b.csproj"), "a/b.csproj");
    assert_eq!(strip_leading_parents("./../a.csproj"), "a.csproj");
    assert_eq!(strip_leading_parents("a/../b.csproj"), "a/../b.csproj");
}

#[test]
fn test_normalize_lexically() {
    assert_eq!(
        normalize_lexically(Path::new("/repo/src/App/../Core/./Core.csproj")),
        PathBuf::from("/repo/src/Core/Core.csproj")
    );
    assert_eq!(
        normalize_lexically(Path::new("/../../x.csproj")),
        PathBuf::from("/x.csproj")
    );
    assert_eq!(
        normalize_lexically(Path::new("../x.csproj")),
        PathBuf::from("../x.csproj")
    );
}

// ============================================================================
// Misses and Edge Cases
// ============================================================================

#[test]
fn test_unresolvable_reference() {
    assert!(resolve_from("/repo/src/App/App.csproj", "../Missing/Missing.csproj").is_none());
}

#[test]
fn test_empty_reference_is_unresolved() {
    assert!(resolve_from("/repo/src/App/App.csproj", "").is_none());
    assert!(resolve_from("/repo/src/App/App.csproj", "   ").is_none());
}

#[test]
fn test_self_reference_resolves_to_source() {
    let resolution = resolve_from("/repo/src/App/App.csproj", "App.csproj").unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/src/App/App.csproj");
}

#[test]
fn test_first_unit_wins_on_ambiguous_name() {
    let units = vec![
        unit("/repo/a/Shared.csproj"),
        unit("/repo/b/Shared.csproj"),
        unit("/repo/c/App.csproj"),
    ];
    let resolution = resolve("Shared", &units[2], &units).unwrap();
    assert_eq!(resolution.target.as_str(), "/repo/a/Shared.csproj");
}
