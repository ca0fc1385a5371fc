//! # projgraph Library
//!
//! Build-order planning for .NET project trees: discovers `.csproj` and
//! `.vbproj` descriptors, resolves their project references and groups them
//! into dependency levels, reporting circular dependencies separately.
//!
//! ## Core Modules
//!
//! - [`graph`] - Unit model, reference resolution, dependency graph and plan builder
//! - [`discovery`] - Descriptor scanning and concurrent parsing
//! - [`report`] - Text, JSON and YAML renderings of an analysis
//! - [`primitives`] - Shared configuration types and errors
//! - [`logger`] - Structured logging with progress tracking
//! - [`application`] - CLI interface, configuration and command execution
//!
//! ## Quick Start
//!
//! ```
//! use projgraph_lib::graph::{Dialect, PlanBuilder, Unit};
//!
//! let units = vec![
//!     Unit::new("/src/App/App.csproj", Dialect::CSharp).with_reference("../Core/Core.csproj"),
//!     Unit::new("/src/Core/Core.csproj", Dialect::CSharp),
//! ];
//! let plan = PlanBuilder::build(&units).unwrap();
//! assert_eq!(plan.levels.len(), 2);
//! ```

pub mod application;
pub mod discovery;
pub mod graph;
pub mod logger;
pub mod primitives;
pub mod report;

pub use application::{AppConfig, Cli, Commands, execute_command};
pub use graph::{BuildPlan, DependencyGraph, PlanBuilder, PlanError, Unit, UnitId};
pub use logger::Logger;
pub use primitives::{ColorChoice, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};

use anyhow::Result;

/// Run the command line; returns the process exit code
pub async fn main() -> Result<u8> {
    let config = application::load()?;

    Logger::init(config.app_config.to_logger_config())?;

    execute_command(config).await
}
