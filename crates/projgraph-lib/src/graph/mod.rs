//! # Graph Module
//!
//! The dependency graph engine: unit model, reference resolution, graph
//! construction, cycle detection and leveled build ordering.
//!
//! ## Modules
//!
//! - [`model`] - Units, dialects and declared references
//! - [`resolver`] - Layered matching of reference strings to units
//! - [`dependency_graph`] - Adjacency graph with cycle detection and leveling
//! - [`plan`] - Orchestration into a [`BuildPlan`]

pub mod dependency_graph;
pub mod model;
pub mod plan;
pub mod resolver;

pub use dependency_graph::{DependencyGraph, DependencyNode};
pub use model::{Dialect, PackageReference, Reference, Unit, UnitId};
pub use plan::{BuildPlan, PlanBuilder, PlanError, PlanEvent, PlanStats, UnitReferences};
pub use resolver::{MatchStrategy, Normalization, Resolution};
