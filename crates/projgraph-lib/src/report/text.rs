//! Human-readable report
//!
//! Layout: summary counts, circular dependencies, one block per build level,
//! then units blocked by cycles, unresolved references and skipped files.
//! Paths are shown relative to the analysis root.

use console::Style;
use std::fmt::Write;

use super::AnalysisReport;
use crate::graph::UnitId;

/// Text rendering options
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Emit ANSI colors
    pub color: bool,
    /// List package references under each project
    pub show_packages: bool,
}

struct Palette {
    heading: Style,
    success: Style,
    warning: Style,
    error: Style,
    subtle: Style,
}

impl Palette {
    fn new(color: bool) -> Self {
        Self {
            heading: Style::new().bold().force_styling(color),
            success: Style::new().green().force_styling(color),
            warning: Style::new().yellow().force_styling(color),
            error: Style::new().red().bold().force_styling(color),
            subtle: Style::new().dim().force_styling(color),
        }
    }
}

/// Render the report as plain text
pub fn render(report: &AnalysisReport, options: TextOptions) -> String {
    let palette = Palette::new(options.color);
    let plan = &report.plan;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", palette.heading.apply_to("Build plan"));
    let _ = writeln!(out, "  Root:           {}", report.root.display());
    let _ = writeln!(out, "  Projects:       {}", report.units.len());
    let _ = writeln!(out, "  Build levels:   {}", plan.levels.len());

    if plan.circular.is_empty() {
        let _ = writeln!(out, "  Circular:       {}", palette.success.apply_to("none"));
    } else {
        let _ = writeln!(
            out,
            "  Circular:       {}",
            palette.error.apply_to(plan.circular.len())
        );
    }

    if report.units.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            palette.warning.apply_to("No .csproj or .vbproj files found")
        );
    }

    if !plan.cycles.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", palette.error.apply_to("Circular dependencies"));
        for (i, cycle) in plan.cycles.iter().enumerate() {
            let members: Vec<String> = cycle
                .iter()
                .map(|id| report.relative_path(id).display().to_string())
                .collect();
            let _ = writeln!(out, "  {}. {}", i + 1, members.join(" <-> "));
        }
    }

    for (level, ids) in plan.levels.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} {}",
            palette.heading.apply_to(format!("Level {level}")),
            palette.subtle.apply_to(format!(
                "({} project{})",
                ids.len(),
                if ids.len() == 1 { "" } else { "s" }
            ))
        );
        for id in ids {
            write_project(&mut out, report, id, &palette, options.show_packages);
        }
    }

    if !plan.blocked.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            palette.warning.apply_to("Blocked by circular dependencies")
        );
        for id in &plan.blocked {
            let _ = writeln!(out, "  - {}", report.relative_path(id).display());
        }
    }

    let unresolved: Vec<_> = plan.unresolved().collect();
    if !unresolved.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            palette
                .warning
                .apply_to(format!("Unresolved references ({})", unresolved.len()))
        );
        for (id, reference) in unresolved {
            let _ = writeln!(
                out,
                "  {} -> {}",
                report.relative_path(id).display(),
                reference.raw_path
            );
        }
    }

    if !report.skipped.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            palette
                .warning
                .apply_to(format!("Skipped descriptors ({})", report.skipped.len()))
        );
        for skipped in &report.skipped {
            let _ = writeln!(out, "  {}: {}", skipped.path.display(), skipped.reason);
        }
    }

    out
}

fn write_project(
    out: &mut String,
    report: &AnalysisReport,
    id: &UnitId,
    palette: &Palette,
    show_packages: bool,
) {
    let unit = report.units.iter().find(|u| &u.id == id);
    let framework = unit
        .and_then(|u| u.target_framework.as_deref())
        .map(|tfm| format!(" [{tfm}]"))
        .unwrap_or_default();

    let _ = writeln!(
        out,
        "  - {}{}",
        report.relative_path(id).display(),
        palette.subtle.apply_to(framework)
    );

    if !show_packages {
        return;
    }

    for package in unit.map(|u| u.package_references.as_slice()).unwrap_or_default() {
        let version = package.version.as_deref().unwrap_or("*");
        let _ = writeln!(
            out,
            "      {} {}",
            package.name,
            palette.subtle.apply_to(version)
        );
    }
}

#[cfg(test)]
mod tests {
    include!("text.test.rs");
}
