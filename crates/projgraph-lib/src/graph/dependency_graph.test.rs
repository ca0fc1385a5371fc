// Tests for dependency graph construction, cycle detection and leveling

use super::*;
use crate::graph::model::Dialect;

// ============================================================================
// Test Utilities
// ============================================================================

fn id(name: &str) -> UnitId {
    UnitId::new(format!("/repo/{name}/{name}.csproj"))
}

fn unit(name: &str) -> Unit {
    Unit::new(id(name), Dialect::CSharp)
}

/// Build a graph from unit names and `(from, to)` pairs
fn graph_of(names: &[&str], edges: &[(&str, &str)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for name in names {
        graph.add_unit(unit(name));
    }
    for (from, to) in edges {
        graph.add_edge(&id(from), &id(to));
    }
    graph
}

fn ids(names: &[&str]) -> Vec<UnitId> {
    names.iter().map(|n| id(n)).collect()
}

fn set(names: &[&str]) -> BTreeSet<UnitId> {
    names.iter().map(|n| id(n)).collect()
}

fn level_of(levels: &[Vec<UnitId>], target: &UnitId) -> Option<usize> {
    levels.iter().position(|level| level.contains(target))
}

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = DependencyGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.levels().is_empty());
    assert!(graph.detect_cycles().is_empty());
}

#[test]
fn test_add_unit_is_idempotent_and_last_write_wins() {
    let mut graph = DependencyGraph::new();
    let idx1 = graph.add_unit(unit("A"));
    let idx2 = graph.add_unit(unit("A").with_target_framework("net8.0"));

    assert_eq!(idx1, idx2);
    assert_eq!(graph.node_count(), 1);

    let node = graph.get_node(&id("A")).unwrap();
    assert_eq!(
        node.unit.as_ref().and_then(|u| u.target_framework.as_deref()),
        Some("net8.0")
    );
}

#[test]
fn test_readding_unit_preserves_edges() {
    let mut graph = graph_of(&["A", "B"], &[("A", "B")]);
    graph.add_unit(unit("A").with_target_framework("net6.0"));

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.successors(&id("A")).unwrap(), vec![&id("B")]);
}

#[test]
fn test_add_edge_creates_missing_nodes() {
    let mut graph = DependencyGraph::new();
    assert!(graph.add_edge(&id("A"), &id("B")));

    assert_eq!(graph.node_count(), 2);
    assert!(graph.contains(&id("A")));
    assert!(graph.contains(&id("B")));
    assert!(graph.get_node(&id("B")).unwrap().unit.is_none());

    // Metadata arriving later attaches to the existing node
    graph.add_unit(unit("B"));
    assert_eq!(graph.node_count(), 2);
    assert!(graph.get_node(&id("B")).unwrap().unit.is_some());
}

#[test]
fn test_duplicate_edge_is_collapsed() {
    let mut graph = graph_of(&["A", "B"], &[]);
    assert!(graph.add_edge(&id("A"), &id("B")));
    assert!(!graph.add_edge(&id("A"), &id("B")));

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.successors(&id("A")).unwrap().len(), 1);
}

#[test]
fn test_successors_keep_insertion_order() {
    let graph = graph_of(&["A", "B", "C", "D"], &[("A", "C"), ("A", "B"), ("A", "D")]);
    assert_eq!(
        graph.successors(&id("A")).unwrap(),
        vec![&id("C"), &id("B"), &id("D")]
    );
    assert_eq!(graph.dependents(&id("B")).unwrap(), vec![&id("A")]);
    assert!(graph.successors(&id("Z")).is_none());
}

// ============================================================================
// Leveling
// ============================================================================

#[test]
fn test_linear_chain_levels() {
    // A -> B -> C
    let graph = graph_of(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    assert!(!graph.has_cycles());
    assert_eq!(
        graph.levels(),
        vec![ids(&["C"]), ids(&["B"]), ids(&["A"])]
    );
}

#[test]
fn test_independent_units_share_level_zero() {
    let graph = graph_of(&["X", "Y"], &[]);
    assert_eq!(graph.levels(), vec![ids(&["X", "Y"])]);
}

#[test]
fn test_diamond_levels() {
    // App -> {Api, Data}, Api -> Core, Data -> Core
    let graph = graph_of(
        &["App", "Api", "Data", "Core"],
        &[("App", "Api"), ("App", "Data"), ("Api", "Core"), ("Data", "Core")],
    );
    assert_eq!(
        graph.levels(),
        vec![ids(&["Core"]), ids(&["Api", "Data"]), ids(&["App"])]
    );
}

#[test]
fn test_unit_without_references_is_level_zero() {
    let mut graph = graph_of(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    graph.add_unit(unit("Lonely"));

    let levels = graph.levels();
    assert_eq!(level_of(&levels, &id("Lonely")), Some(0));
}

#[test]
fn test_acyclic_edges_point_to_lower_levels() {
    let edges = [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("D", "E"),
        ("F", "E"),
        ("G", "A"),
    ];
    let graph = graph_of(&["A", "B", "C", "D", "E", "F", "G"], &edges);
    let levels = graph.levels();

    // Every unit appears exactly once
    let placed: usize = levels.iter().map(Vec::len).sum();
    assert_eq!(placed, graph.node_count());
    assert!(levels.iter().all(|level| !level.is_empty()));

    for (from, to) in edges {
        let from_level = level_of(&levels, &id(from)).unwrap();
        let to_level = level_of(&levels, &id(to)).unwrap();
        assert!(
            from_level > to_level,
            "{from} (level {from_level}) must build after {to} (level {to_level})"
        );
    }
}

// ============================================================================
// Cycle Detection
// ============================================================================

#[test]
fn test_self_loop_is_circular() {
    let graph = graph_of(&["A", "B"], &[("A", "A")]);

    assert!(graph.has_cycles());
    assert_eq!(graph.detect_cycles(), set(&["A"]));
    assert_eq!(graph.levels(), vec![ids(&["B"])]);
}

#[test]
fn test_three_node_cycle_with_independent_unit() {
    let graph = graph_of(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "A")],
    );

    assert_eq!(graph.detect_cycles(), set(&["A", "B", "C"]));
    assert_eq!(graph.levels(), vec![ids(&["D"])]);
}

#[test]
fn test_disjoint_cycles_are_all_reported() {
    let graph = graph_of(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "A"), ("C", "D"), ("D", "C"), ("E", "E")],
    );

    let groups = graph.cycle_groups();
    assert_eq!(groups.len(), 3);
    assert_eq!(
        graph.detect_cycles(),
        set(&["A", "B", "C", "D", "E"])
    );
    assert!(graph.levels().is_empty());
}

#[test]
fn test_cycle_detection_is_independent_of_insertion_order() {
    let forward = graph_of(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "B"), ("D", "A")],
    );
    let backward = graph_of(
        &["D", "C", "B", "A"],
        &[("D", "A"), ("C", "B"), ("B", "C"), ("A", "B")],
    );

    assert_eq!(forward.detect_cycles(), backward.detect_cycles());
    assert_eq!(forward.detect_cycles(), set(&["B", "C"]));
}

#[test]
fn test_missing_levels_match_circular_set_when_nothing_depends_on_cycle() {
    let graph = graph_of(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "A"), ("C", "D"), ("E", "E")],
    );
    let levels = graph.levels();
    let placed: BTreeSet<UnitId> = levels.into_iter().flatten().collect();
    let missing: BTreeSet<UnitId> = graph
        .node_ids()
        .filter(|id| !placed.contains(*id))
        .cloned()
        .collect();

    assert_eq!(missing, graph.detect_cycles());
}

#[test]
fn test_dependents_of_cycle_are_not_placed_but_not_circular() {
    // Top -> A <-> B
    let graph = graph_of(&["Top", "A", "B"], &[("Top", "A"), ("A", "B"), ("B", "A")]);

    assert_eq!(graph.detect_cycles(), set(&["A", "B"]));
    assert!(graph.levels().is_empty());
}

// ============================================================================
// Generated Graphs
// ============================================================================

use proptest::prelude::*;

/// Node count plus `(from, to)` index pairs, self loops and duplicates included
fn arb_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..n * 3)))
}

fn node(i: usize) -> UnitId {
    id(&format!("N{i}"))
}

fn generated(n: usize, edges: &[(usize, usize)], reversed: bool) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    let mut order: Vec<usize> = (0..n).collect();
    let mut edges = edges.to_vec();
    if reversed {
        order.reverse();
        edges.reverse();
    }
    for i in order {
        graph.add_unit(Unit::new(node(i), Dialect::CSharp));
    }
    for (from, to) in edges {
        graph.add_edge(&node(from), &node(to));
    }
    graph
}

proptest! {
    #[test]
    fn prop_placed_units_appear_exactly_once((n, edges) in arb_edges()) {
        let graph = generated(n, &edges, false);
        let levels = graph.levels();

        prop_assert!(levels.iter().all(|level| !level.is_empty()));
        let placed: Vec<&UnitId> = levels.iter().flatten().collect();
        let distinct: BTreeSet<&UnitId> = placed.iter().copied().collect();
        prop_assert_eq!(placed.len(), distinct.len());
    }

    #[test]
    fn prop_dependencies_sit_in_lower_levels((n, edges) in arb_edges()) {
        let graph = generated(n, &edges, false);
        let levels = graph.levels();

        for (from, to) in &edges {
            if let Some(from_level) = level_of(&levels, &node(*from)) {
                let to_level = level_of(&levels, &node(*to));
                prop_assert!(to_level.is_some_and(|to_level| to_level < from_level));
            }
        }
    }

    #[test]
    fn prop_cycle_members_are_never_placed((n, edges) in arb_edges()) {
        let graph = generated(n, &edges, false);
        let levels = graph.levels();
        let cycles = graph.detect_cycles();

        prop_assert!(cycles.iter().all(|id| level_of(&levels, id).is_none()));
        if cycles.is_empty() {
            prop_assert_eq!(levels.iter().map(Vec::len).sum::<usize>(), n);
        }
    }

    #[test]
    fn prop_has_cycles_agrees_with_detect_cycles((n, edges) in arb_edges()) {
        let graph = generated(n, &edges, false);
        prop_assert_eq!(graph.has_cycles(), !graph.detect_cycles().is_empty());
    }

    #[test]
    fn prop_insertion_order_does_not_matter((n, edges) in arb_edges()) {
        let forward = generated(n, &edges, false);
        let backward = generated(n, &edges, true);

        prop_assert_eq!(forward.cycle_groups(), backward.cycle_groups());
        prop_assert_eq!(forward.levels(), backward.levels());
    }
}
