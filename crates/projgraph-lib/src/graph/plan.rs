//! Build plan assembly
//!
//! Resolves every declared reference, populates the dependency graph, then
//! runs cycle detection and leveling. Nothing here logs: the outcome of each
//! step is returned as [`PlanStats`] and [`PlanEvent`]s for the caller.

use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

use super::dependency_graph::DependencyGraph;
use super::model::{Reference, Unit, UnitId};
use super::resolver::{self, MatchStrategy, Normalization};

/// Errors raised for malformed plan input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Unit at position {position} has an empty id")]
    EmptyUnitId { position: usize },
}

/// Resolution outcome for every reference a unit declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReferences {
    pub unit: UnitId,
    pub references: Vec<Reference>,
}

/// Counters describing a finished plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub units: usize,
    pub references: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub edges: usize,
    pub level_sizes: Vec<usize>,
    pub circular: usize,
    pub blocked: usize,
}

/// Something noteworthy that happened while building the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEvent {
    ReferenceResolved {
        from: UnitId,
        raw: String,
        to: UnitId,
        strategy: MatchStrategy,
        normalization: Normalization,
    },
    ReferenceUnresolved {
        from: UnitId,
        raw: String,
    },
    /// A second reference resolved to an already recorded dependency
    DuplicateReference {
        from: UnitId,
        to: UnitId,
    },
    CycleDetected {
        members: Vec<UnitId>,
    },
}

/// Dependency-ordered build plan
#[derive(Debug, Clone, Default)]
pub struct BuildPlan {
    /// Groups of units that can build in parallel, in build order
    pub levels: Vec<Vec<UnitId>>,
    /// Units on at least one cycle
    pub circular: BTreeSet<UnitId>,
    /// The individual cycles, each sorted
    pub cycles: Vec<Vec<UnitId>>,
    /// Units left out of the levels because they depend on a cycle
    pub blocked: BTreeSet<UnitId>,
    /// Per-unit resolution outcome, in input order
    pub references: Vec<UnitReferences>,
    pub stats: PlanStats,
    pub events: Vec<PlanEvent>,
}

impl BuildPlan {
    pub fn has_cycles(&self) -> bool {
        !self.circular.is_empty()
    }

    /// Level index holding `id`, if it was placed
    pub fn level_of(&self, id: &UnitId) -> Option<usize> {
        self.levels.iter().position(|level| level.contains(id))
    }

    /// References of `id`, if the unit was part of the input
    pub fn references_of(&self, id: &UnitId) -> Option<&[Reference]> {
        self.references
            .iter()
            .find(|entry| &entry.unit == id)
            .map(|entry| entry.references.as_slice())
    }

    /// Every unresolved reference with the unit that declared it
    pub fn unresolved(&self) -> impl Iterator<Item = (&UnitId, &Reference)> {
        self.references.iter().flat_map(|entry| {
            entry
                .references
                .iter()
                .filter(|reference| !reference.is_resolved())
                .map(move |reference| (&entry.unit, reference))
        })
    }
}

/// Turns discovered units into a [`BuildPlan`]
pub struct PlanBuilder;

impl PlanBuilder {
    /// Build the plan for `units`
    ///
    /// Fails only on malformed input (a unit without an id). Unresolved
    /// references and cycles are reported in the plan, never as errors.
    pub fn build(units: &[Unit]) -> Result<BuildPlan, PlanError> {
        if let Some(position) = units.iter().position(|unit| unit.id.is_empty()) {
            return Err(PlanError::EmptyUnitId { position });
        }

        let mut graph = DependencyGraph::new();
        for unit in units {
            graph.add_unit(unit.clone());
        }

        let mut plan = BuildPlan::default();

        for unit in units {
            let mut references = Vec::with_capacity(unit.declared_references.len());

            for raw in &unit.declared_references {
                plan.stats.references += 1;

                match resolver::resolve(raw, unit, units) {
                    Some(resolution) => {
                        plan.stats.resolved += 1;
                        plan.events.push(PlanEvent::ReferenceResolved {
                            from: unit.id.clone(),
                            raw: raw.clone(),
                            to: resolution.target.clone(),
                            strategy: resolution.strategy,
                            normalization: resolution.normalization,
                        });
                        if !graph.add_edge(&unit.id, &resolution.target) {
                            plan.events.push(PlanEvent::DuplicateReference {
                                from: unit.id.clone(),
                                to: resolution.target.clone(),
                            });
                        }
                        references.push(Reference::resolved(raw.clone(), resolution.target));
                    }
                    None => {
                        plan.stats.unresolved += 1;
                        plan.events.push(PlanEvent::ReferenceUnresolved {
                            from: unit.id.clone(),
                            raw: raw.clone(),
                        });
                        references.push(Reference::unresolved(raw.clone()));
                    }
                }
            }

            plan.references.push(UnitReferences {
                unit: unit.id.clone(),
                references,
            });
        }

        plan.cycles = graph.cycle_groups();
        for cycle in &plan.cycles {
            plan.events.push(PlanEvent::CycleDetected {
                members: cycle.clone(),
            });
        }
        plan.circular = plan.cycles.iter().flatten().cloned().collect();

        plan.levels = graph.levels();
        let placed: BTreeSet<&UnitId> = plan.levels.iter().flatten().collect();
        plan.blocked = graph
            .node_ids()
            .filter(|id| !placed.contains(id) && !plan.circular.contains(*id))
            .cloned()
            .collect();

        plan.stats.units = graph.node_count();
        plan.stats.edges = graph.edge_count();
        plan.stats.level_sizes = plan.levels.iter().map(Vec::len).collect();
        plan.stats.circular = plan.circular.len();
        plan.stats.blocked = plan.blocked.len();

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    include!("plan.test.rs");
}
