//! Machine-readable report documents (JSON, YAML)

use super::{AnalysisReport, ReportError};

/// Render the report as pretty-printed JSON
pub fn render_json(report: &AnalysisReport, show_packages: bool) -> Result<String, ReportError> {
    let document = report.to_document(show_packages);
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Render the report as YAML
pub fn render_yaml(report: &AnalysisReport, show_packages: bool) -> Result<String, ReportError> {
    let document = report.to_document(show_packages);
    serde_saphyr::to_string(&document).map_err(|e| ReportError::YamlError {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    include!("structured.test.rs");
}
