//! Dependency graph over build units with cycle detection and leveling
//!
//! Edges point from a unit to the units it depends on. Nodes are keyed by
//! unit id and may exist before their unit metadata is known (an edge to a
//! not-yet-added unit creates the node).

use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeSet, HashMap};
use tracing::trace;

use super::model::{Unit, UnitId};

/// A node in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    pub id: UnitId,
    /// Unit metadata, `None` while the node only exists as an edge endpoint
    pub unit: Option<Unit>,
}

/// Dependency graph keyed by unit id
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Directed graph: nodes = units, edges = "depends on"
    graph: DiGraph<DependencyNode, ()>,
    /// Map from unit id to node index for fast lookup
    node_map: HashMap<UnitId, NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Add a unit (idempotent; replaces stored metadata and keeps edges)
    pub fn add_unit(&mut self, unit: Unit) -> NodeIndex {
        let idx = self.ensure_node(&unit.id);
        trace!("Adding unit: {}", unit.id);
        self.graph[idx].unit = Some(unit);
        idx
    }

    /// Add a dependency edge `from -> to`, creating either node if needed
    ///
    /// Returns `false` when the edge was already present.
    pub fn add_edge(&mut self, from: &UnitId, to: &UnitId) -> bool {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);

        if self.graph.find_edge(from_idx, to_idx).is_some() {
            trace!("Edge already exists: {} -> {}", from, to);
            return false;
        }

        self.graph.add_edge(from_idx, to_idx, ());
        true
    }

    fn ensure_node(&mut self, id: &UnitId) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(DependencyNode {
            id: id.clone(),
            unit: None,
        });
        self.node_map.insert(id.clone(), idx);
        idx
    }

    /// Direct dependencies of a unit, in insertion order
    pub fn successors(&self, id: &UnitId) -> Option<Vec<&UnitId>> {
        let idx = self.node_map.get(id)?;
        // petgraph yields the most recently added edge first
        let mut successors: Vec<&UnitId> = self
            .graph
            .neighbors_directed(*idx, Direction::Outgoing)
            .map(|n| &self.graph[n].id)
            .collect();
        successors.reverse();
        Some(successors)
    }

    /// Units that directly depend on `id`
    pub fn dependents(&self, id: &UnitId) -> Option<Vec<&UnitId>> {
        let idx = self.node_map.get(id)?;
        let mut dependents: Vec<&UnitId> = self
            .graph
            .neighbors_directed(*idx, Direction::Incoming)
            .map(|n| &self.graph[n].id)
            .collect();
        dependents.reverse();
        Some(dependents)
    }

    /// Individual cycles: strongly connected components of size > 1 plus self loops
    ///
    /// Each group is sorted; groups are ordered by their first member.
    pub fn cycle_groups(&self) -> Vec<Vec<UnitId>> {
        let mut groups: Vec<Vec<UnitId>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| match component.as_slice() {
                [single] => self.graph.find_edge(*single, *single).is_some(),
                _ => true,
            })
            .map(|component| {
                let mut ids: Vec<UnitId> = component
                    .into_iter()
                    .map(|idx| self.graph[idx].id.clone())
                    .collect();
                ids.sort();
                ids
            })
            .collect();

        groups.sort();
        groups
    }

    /// Every unit that participates in at least one cycle
    pub fn detect_cycles(&self) -> BTreeSet<UnitId> {
        self.cycle_groups().into_iter().flatten().collect()
    }

    /// Check if the graph contains cycles
    pub fn has_cycles(&self) -> bool {
        !self.cycle_groups().is_empty()
    }

    /// Group units into build levels
    ///
    /// Level 0 holds units with no dependencies; a unit lands in level `k`
    /// once all of its dependencies sit in levels below `k`. Units that never
    /// become ready (cycle members and anything depending on them) are left
    /// out. Ids within a level are sorted.
    pub fn levels(&self) -> Vec<Vec<UnitId>> {
        // Outstanding dependency count per node; `None` once placed
        let mut remaining: Vec<Option<usize>> = self
            .graph
            .node_indices()
            .map(|idx| {
                Some(
                    self.graph
                        .neighbors_directed(idx, Direction::Outgoing)
                        .count(),
                )
            })
            .collect();

        let mut levels = Vec::new();

        loop {
            let ready: Vec<NodeIndex> = self
                .graph
                .node_indices()
                .filter(|idx| remaining[idx.index()] == Some(0))
                .collect();

            if ready.is_empty() {
                break;
            }

            for idx in &ready {
                remaining[idx.index()] = None;
            }

            for idx in &ready {
                for dependent in self.graph.neighbors_directed(*idx, Direction::Incoming) {
                    if let Some(count) = remaining[dependent.index()].as_mut() {
                        *count -= 1;
                    }
                }
            }

            let mut level: Vec<UnitId> = ready
                .into_iter()
                .map(|idx| self.graph[idx].id.clone())
                .collect();
            level.sort();
            levels.push(level);
        }

        levels
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a unit exists in the graph
    pub fn contains(&self, id: &UnitId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Get a node by unit id
    pub fn get_node(&self, id: &UnitId) -> Option<&DependencyNode> {
        let idx = self.node_map.get(id)?;
        Some(&self.graph[*idx])
    }

    /// All node ids, in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &UnitId> {
        self.graph.node_weights().map(|node| &node.id)
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("dependency_graph.test.rs");
}
