// Tests for build plan assembly

use super::*;
use crate::graph::model::Dialect;

// ============================================================================
// Test Utilities
// ============================================================================

fn id(name: &str) -> UnitId {
    UnitId::new(format!("/repo/{name}/{name}.csproj"))
}

/// A unit whose references point at sibling directories (`../B/B.csproj`)
fn unit(name: &str, deps: &[&str]) -> Unit {
    deps.iter().fold(Unit::new(id(name), Dialect::CSharp), |unit, dep| {
        unit.with_reference(format!("../{dep}/{dep}.csproj"))
    })
}

fn ids(names: &[&str]) -> Vec<UnitId> {
    names.iter().map(|n| id(n)).collect()
}

fn set(names: &[&str]) -> BTreeSet<UnitId> {
    names.iter().map(|n| id(n)).collect()
}

/// Units absent from every level
fn unplaced(plan: &BuildPlan, units: &[Unit]) -> BTreeSet<UnitId> {
    units
        .iter()
        .map(|u| u.id.clone())
        .filter(|id| plan.level_of(id).is_none())
        .collect()
}

// ============================================================================
// Edge Shapes
// ============================================================================

#[test]
fn test_empty_input_gives_empty_plan() {
    let plan = PlanBuilder::build(&[]).unwrap();
    assert!(plan.levels.is_empty());
    assert!(plan.circular.is_empty());
    assert_eq!(plan.stats, PlanStats::default());
}

#[test]
fn test_single_unit_without_references() {
    let plan = PlanBuilder::build(&[unit("A", &[])]).unwrap();
    assert_eq!(plan.levels, vec![ids(&["A"])]);
    assert_eq!(plan.stats.units, 1);
    assert_eq!(plan.stats.level_sizes, vec![1]);
}

#[test]
fn test_empty_unit_id_fails_fast() {
    let units = vec![unit("A", &[]), Unit::new("", Dialect::CSharp)];
    assert_eq!(
        PlanBuilder::build(&units).unwrap_err(),
        PlanError::EmptyUnitId { position: 1 }
    );
}

// ============================================================================
// Expected Plans
// ============================================================================

#[test]
fn test_linear_chain() {
    let units = vec![unit("A", &["B"]), unit("B", &["C"]), unit("C", &[])];
    let plan = PlanBuilder::build(&units).unwrap();

    assert_eq!(plan.levels, vec![ids(&["C"]), ids(&["B"]), ids(&["A"])]);
    assert!(!plan.has_cycles());
    assert_eq!(plan.stats.resolved, 2);
    assert_eq!(plan.stats.edges, 2);
}

#[test]
fn test_two_independent_units() {
    let units = vec![unit("X", &[]), unit("Y", &[])];
    let plan = PlanBuilder::build(&units).unwrap();
    assert_eq!(plan.levels, vec![ids(&["X", "Y"])]);
}

#[test]
fn test_three_node_cycle_plus_independent_unit() {
    let units = vec![
        unit("A", &["B"]),
        unit("B", &["C"]),
        unit("C", &["A"]),
        unit("D", &[]),
    ];
    let plan = PlanBuilder::build(&units).unwrap();

    assert_eq!(plan.circular, set(&["A", "B", "C"]));
    assert_eq!(plan.levels, vec![ids(&["D"])]);
    assert_eq!(plan.cycles, vec![ids(&["A", "B", "C"])]);
    assert!(plan.blocked.is_empty());
    assert_eq!(unplaced(&plan, &units), plan.circular);
    assert!(plan.events.contains(&PlanEvent::CycleDetected {
        members: ids(&["A", "B", "C"]),
    }));
}

#[test]
fn test_self_reference() {
    let units = vec![unit("A", &["A"]), unit("B", &[])];
    let plan = PlanBuilder::build(&units).unwrap();

    let references = plan.references_of(&id("A")).unwrap();
    assert_eq!(references[0].resolved_unit_id(), Some(&id("A")));
    assert!(plan.circular.contains(&id("A")));
    assert_eq!(plan.level_of(&id("A")), None);
    assert_eq!(plan.levels, vec![ids(&["B"])]);
}

#[test]
fn test_unresolvable_reference_is_reported_not_fatal() {
    let units = vec![
        unit("A", &["B"]).with_reference("../Ghost/Ghost.csproj"),
        unit("B", &[]),
    ];
    let plan = PlanBuilder::build(&units).unwrap();

    let references = plan.references_of(&id("A")).unwrap();
    assert_eq!(references.len(), 2);
    assert!(references[0].is_resolved());
    assert!(!references[1].is_resolved());

    assert_eq!(plan.stats.unresolved, 1);
    assert_eq!(plan.stats.edges, 1);
    assert_eq!(plan.levels, vec![ids(&["B"]), ids(&["A"])]);

    let unresolved: Vec<_> = plan.unresolved().collect();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].0, &id("A"));
    assert_eq!(unresolved[0].1.raw_path, "../Ghost/Ghost.csproj");
    assert!(plan.events.contains(&PlanEvent::ReferenceUnresolved {
        from: id("A"),
        raw: "../Ghost/Ghost.csproj".to_string(),
    }));
}

#[test]
fn test_duplicate_references_collapse_to_one_edge() {
    let units = vec![
        unit("A", &["B"]).with_reference("B"),
        unit("B", &[]),
    ];
    let plan = PlanBuilder::build(&units).unwrap();

    assert_eq!(plan.stats.resolved, 2);
    assert_eq!(plan.stats.edges, 1);
    assert!(plan.events.contains(&PlanEvent::DuplicateReference {
        from: id("A"),
        to: id("B"),
    }));
}

#[test]
fn test_duplicate_event_follows_its_resolution() {
    let units = vec![
        unit("A", &["B"]).with_reference("B"),
        unit("B", &[]),
    ];
    let plan = PlanBuilder::build(&units).unwrap();

    let kinds: Vec<&str> = plan
        .events
        .iter()
        .map(|event| match event {
            PlanEvent::ReferenceResolved { .. } => "resolved",
            PlanEvent::ReferenceUnresolved { .. } => "unresolved",
            PlanEvent::DuplicateReference { .. } => "duplicate",
            PlanEvent::CycleDetected { .. } => "cycle",
        })
        .collect();
    assert_eq!(kinds, vec!["resolved", "resolved", "duplicate"]);
}

#[test]
fn test_resolved_event_records_strategy() {
    let units = vec![unit("A", &["B"]), unit("B", &[])];
    let plan = PlanBuilder::build(&units).unwrap();

    assert!(plan.events.contains(&PlanEvent::ReferenceResolved {
        from: id("A"),
        raw: "../B/B.csproj".to_string(),
        to: id("B"),
        strategy: MatchStrategy::RelativePath,
        normalization: Normalization::None,
    }));
}

// ============================================================================
// Consistency Between Cycles and Levels
// ============================================================================

#[test]
fn test_dependents_of_cycle_are_blocked() {
    // App -> Lib, Lib <-> Util, Tool has no references
    let units = vec![
        unit("App", &["Lib"]),
        unit("Lib", &["Util"]),
        unit("Util", &["Lib"]),
        unit("Tool", &[]),
    ];
    let plan = PlanBuilder::build(&units).unwrap();

    assert_eq!(plan.circular, set(&["Lib", "Util"]));
    assert_eq!(plan.blocked, set(&["App"]));
    assert_eq!(plan.levels, vec![ids(&["Tool"])]);

    let accounted: BTreeSet<UnitId> = plan.circular.union(&plan.blocked).cloned().collect();
    assert_eq!(unplaced(&plan, &units), accounted);
    assert!(plan.circular.is_disjoint(&plan.blocked));
    assert_eq!(plan.stats.blocked, 1);
    assert_eq!(plan.stats.circular, 2);
}

#[test]
fn test_one_giant_cycle() {
    let names = ["A", "B", "C", "D", "E"];
    let units: Vec<Unit> = names
        .iter()
        .enumerate()
        .map(|(i, name)| unit(name, &[names[(i + 1) % names.len()]]))
        .collect();
    let plan = PlanBuilder::build(&units).unwrap();

    assert!(plan.levels.is_empty());
    assert_eq!(plan.circular, set(&names));
    assert_eq!(unplaced(&plan, &units), plan.circular);
}

#[test]
fn test_fully_disconnected_graph() {
    let units: Vec<Unit> = ["E", "D", "C", "B", "A"]
        .iter()
        .map(|name| unit(name, &[]))
        .collect();
    let plan = PlanBuilder::build(&units).unwrap();

    assert_eq!(plan.levels, vec![ids(&["A", "B", "C", "D", "E"])]);
}

// ============================================================================
// Generated Plans
// ============================================================================

use proptest::prelude::*;

/// Units `N0..Nn`, each referencing a generated set of siblings
fn arb_units() -> impl Strategy<Value = Vec<Unit>> {
    (1usize..10)
        .prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0..n, 0..4), n))
        .prop_map(|deps| {
            deps.iter()
                .enumerate()
                .map(|(i, targets)| {
                    let names: Vec<String> = targets.iter().map(|t| format!("N{t}")).collect();
                    let names: Vec<&str> = names.iter().map(String::as_str).collect();
                    unit(&format!("N{i}"), &names)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn prop_unplaced_units_are_circular_or_blocked(units in arb_units()) {
        let plan = PlanBuilder::build(&units).unwrap();

        let accounted: BTreeSet<UnitId> = plan.circular.union(&plan.blocked).cloned().collect();
        prop_assert_eq!(unplaced(&plan, &units), accounted);
        prop_assert!(plan.circular.is_disjoint(&plan.blocked));
        prop_assert_eq!(plan.has_cycles(), !plan.circular.is_empty());
    }

    #[test]
    fn prop_every_reference_resolves_to_a_lower_level(units in arb_units()) {
        let plan = PlanBuilder::build(&units).unwrap();

        prop_assert_eq!(plan.stats.unresolved, 0);
        for entry in &plan.references {
            let Some(from_level) = plan.level_of(&entry.unit) else {
                continue;
            };
            for reference in &entry.references {
                let to_level = reference.resolved_unit_id().and_then(|target| plan.level_of(target));
                prop_assert!(to_level.is_some_and(|to_level| to_level < from_level));
            }
        }
    }
}
