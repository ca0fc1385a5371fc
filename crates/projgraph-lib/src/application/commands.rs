//! Command execution handlers
//!
//! Each handler returns the process exit code; errors are left to the caller,
//! which maps them to exit code 2.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{Instrument, debug, info, trace, warn};

use crate::application::{AppConfig, CliConfig, Commands};
use crate::discovery::{DescriptorLoader, discover};
use crate::graph::{BuildPlan, PlanBuilder, PlanEvent};
use crate::report::text::TextOptions;
use crate::report::{AnalysisReport, ReportFormat, structured, text};

/// Execute a parsed command line
pub async fn execute_command(config: CliConfig) -> Result<u8> {
    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            println!("projgraph - build order planning for .csproj/.vbproj projects");
            println!("Run 'projgraph --help' for usage information");
            return Ok(0);
        }
    };

    match command {
        Commands::Analyze {
            path,
            format,
            show_packages,
        } => handle_analyze(&config.app_config, path.as_deref(), format, show_packages).await,
        Commands::Version => Ok(handle_version()),
    }
}

async fn handle_analyze(
    config: &AppConfig,
    path: Option<&Path>,
    format: ReportFormat,
    show_packages: bool,
) -> Result<u8> {
    let report = analyze(config, path).await?;

    let rendered = match format {
        ReportFormat::Text => text::render(
            &report,
            TextOptions {
                color: config.color.for_stdout(),
                show_packages,
            },
        ),
        ReportFormat::Json => structured::render_json(&report, show_packages)?,
        ReportFormat::Yaml => structured::render_yaml(&report, show_packages)?,
    };
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(report.outcome().exit_code())
}

/// Discover, parse and plan everything below the analysis root
pub async fn analyze(config: &AppConfig, path: Option<&Path>) -> Result<AnalysisReport> {
    let root = config.resolve_path(path);
    info!("Analyzing {}", root.display());

    let discovery = discover(&root)?;
    info!(
        "Found {} descriptor(s) below {}",
        discovery.descriptors.len(),
        discovery.root.display()
    );

    let loader = DescriptorLoader::new(config.jobs)?;
    let total = discovery.descriptors.len();
    let outcome = loader
        .load(discovery.descriptors)
        .instrument(crate::progress_span!("parse descriptors", total = total))
        .await?;

    let plan = PlanBuilder::build(&outcome.units).context("Failed to build the dependency plan")?;
    log_plan(&plan);

    Ok(AnalysisReport::new(
        discovery.root,
        outcome.units,
        plan,
        outcome.skipped,
    ))
}

/// Forward the plan's stats and events to tracing
fn log_plan(plan: &BuildPlan) {
    for event in &plan.events {
        match event {
            PlanEvent::ReferenceResolved {
                from,
                raw,
                to,
                strategy,
                normalization,
            } => trace!(
                from = %from,
                to = %to,
                ?strategy,
                ?normalization,
                "Resolved reference {raw}"
            ),
            PlanEvent::ReferenceUnresolved { from, raw } => {
                warn!(project = %from, "Unresolved project reference {raw}")
            }
            PlanEvent::DuplicateReference { from, to } => {
                debug!(project = %from, target = %to, "Duplicate project reference ignored")
            }
            PlanEvent::CycleDetected { members } => {
                let members: Vec<&str> = members.iter().map(|id| id.as_str()).collect();
                warn!("Circular dependency: {}", members.join(" <-> "))
            }
        }
    }

    let stats = &plan.stats;
    info!(
        units = stats.units,
        references = stats.references,
        resolved = stats.resolved,
        unresolved = stats.unresolved,
        edges = stats.edges,
        levels = stats.level_sizes.len(),
        circular = stats.circular,
        blocked = stats.blocked,
        "Build plan computed"
    );
    if stats.blocked > 0 {
        warn!(
            "{} project(s) depend on a circular group and were left out of the plan",
            stats.blocked
        );
    }
}

fn handle_version() -> u8 {
    println!("projgraph {}", env!("CARGO_PKG_VERSION"));
    println!(
        "Target: {}-{}",
        std::env::consts::ARCH,
        std::env::consts::OS
    );
    0
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
