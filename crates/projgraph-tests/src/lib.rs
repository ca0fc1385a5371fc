//! Shared helpers for projgraph end-to-end tests
//!
//! Builds throwaway source trees of MSBuild project files so tests can drive
//! discovery, planning and reporting against real files.

pub mod fixtures;

pub use fixtures::{FixtureTree, ProjectFixture};
