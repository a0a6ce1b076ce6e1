//! Report description loading.
//!
//! The file format follows the extension: `.toml`, `.yaml`/`.yml`, anything
//! else is read as JSON. Every format deserializes through the model's
//! validation, so a loaded model is always renderable.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use report_render::model::ReportModel;
use tracing::debug;

/// Bundled description of the cashier bug-analysis report.
pub const SAMPLE_TOML: &str = include_str!("../demos/akbar_cashier.toml");

/// Serialization format of a report description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Yaml,
    Json,
}

impl SourceFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => SourceFormat::Toml,
            "yaml" | "yml" => SourceFormat::Yaml,
            _ => SourceFormat::Json,
        }
    }
}

/// Read and validate a report description file.
pub fn load_model(path: &Path) -> Result<ReportModel> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read report description {}", path.display()))?;
    let format = SourceFormat::from_path(path);
    debug!(path = %path.display(), ?format, bytes = data.len(), "loading report description");

    parse_model(&data, format)
        .with_context(|| format!("invalid report description {}", path.display()))
}

/// Parse and validate a report description held in memory.
pub fn parse_model(data: &str, format: SourceFormat) -> Result<ReportModel> {
    let model: ReportModel = match format {
        SourceFormat::Toml => toml::from_str(data).context("failed to parse toml")?,
        SourceFormat::Yaml => serde_yaml::from_str(data).context("failed to parse yaml")?,
        SourceFormat::Json => serde_json::from_str(data).context("failed to parse json")?,
    };
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_render::model::Severity;

    #[test]
    fn format_follows_extension() {
        assert_eq!(SourceFormat::from_path(Path::new("a.toml")), SourceFormat::Toml);
        assert_eq!(SourceFormat::from_path(Path::new("a.YML")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("a.yaml")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("a.json")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("report")), SourceFormat::Json);
    }

    #[test]
    fn bundled_sample_is_valid() {
        let model = parse_model(SAMPLE_TOML, SourceFormat::Toml).unwrap();

        assert_eq!(model.title(), "Akbar Jaya Cashier System");
        let severities: Vec<Severity> = model.issues().iter().map(|g| g.severity).collect();
        assert_eq!(severities, Severity::ORDER.to_vec());
        assert_eq!(model.modules().len(), 3);
        assert!(model.modules().iter().all(|m| m.capabilities.len() == 5));
        assert_eq!(model.pipeline().len(), 4);
        let percents: Vec<f64> = model.metrics().iter().map(|m| m.percent).collect();
        assert_eq!(percents, vec![90.0, 80.0, 60.0, 65.0, 50.0, 70.0]);
        assert!(model.metrics()[5].headline);
    }

    #[test]
    fn yaml_description_parses() {
        let yaml = r#"
title: Inventory
issues:
  - severity: warning
    count: 1
    items: [Slow restock]
metrics:
  - label: Scalability
    percent: 45
"#;
        let model = parse_model(yaml, SourceFormat::Yaml).unwrap();
        assert_eq!(model.issues()[0].severity, Severity::Warning);
        assert_eq!(model.metrics()[0].percent, 45.0);
    }

    #[test]
    fn invalid_percent_is_reported_with_field() {
        let json = r#"{"title": "X", "metrics": [{"label": "X", "percent": 150}]}"#;
        let err = parse_model(json, SourceFormat::Json).unwrap_err();
        assert!(format!("{:#}", err).contains("metrics[0].percent"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_model("title = \"X\"\ncolour = \"red\"\n", SourceFormat::Toml).unwrap_err();
        assert!(format!("{:#}", err).contains("colour"));
    }
}
