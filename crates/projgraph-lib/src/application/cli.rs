use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;
use crate::report::ReportFormat;

/// projgraph CLI - build order planning for .NET project trees
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "projgraph")]
#[command(about = "Compute a leveled build order for .csproj/.vbproj projects")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// projgraph commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Parse the process arguments; exits with usage on invalid input
    pub fn parse() -> Self {
        Cli::parse().into()
    }
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available projgraph commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Discover projects below a directory and print their build plan
    Analyze {
        /// Root directory to scan (defaults to the working directory)
        #[arg(help = "Directory to scan for .csproj and .vbproj files")]
        path: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// List package references under each project
        #[arg(long, help = "Include package references in the report")]
        show_packages: bool,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
