//! Report content model.
//!
//! A [`ReportModel`] is the complete, immutable content of one report:
//! issue groups, architecture modules, a flow pipeline and quality metrics.
//! It is validated once at construction and never mutated afterwards, so the
//! renderer can trust it without re-checking.
//!
//! Two ways in:
//!
//! - [`ReportModel::builder`] for code
//! - serde (`ReportModel` deserializes through [`ReportDraft`]), for files
//!
//! # Example
//!
//! ```rust
//! use report_render::model::{IssueGroup, MetricScore, ReportModel, Severity};
//!
//! let model = ReportModel::builder("Checkout service")
//!     .issue_group(IssueGroup::new(Severity::Critical, 1, ["Unchecked index"]))
//!     .metric(MetricScore::new("Error Handling", 60.0)?)
//!     .build()?;
//!
//! assert_eq!(model.issues().len(), 1);
//! assert_eq!(model.metrics()[0].band().as_str(), "warning");
//! # Ok::<(), report_render::ValidationError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::tree::{Glyph, Swatch};

/// Classification of a reported issue.
///
/// Declaration order is the card order: critical, fixed, warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Defect still present and severe
    Critical,
    /// Defect that has been resolved
    Fixed,
    /// Smell or risk, not a hard defect
    Warning,
}

impl Severity {
    /// All severities in card order.
    pub const ORDER: [Severity; 3] = [Severity::Critical, Severity::Fixed, Severity::Warning];

    /// Lowercase name as used in report files.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Fixed => "fixed",
            Severity::Warning => "warning",
        }
    }

    /// Fixed display colour.
    pub fn swatch(self) -> Swatch {
        match self {
            Severity::Critical => Swatch::Red,
            Severity::Fixed => Swatch::Green,
            Severity::Warning => Swatch::Yellow,
        }
    }

    /// Fixed display icon.
    pub fn glyph(self) -> Glyph {
        match self {
            Severity::Critical => Glyph::XCircle,
            Severity::Fixed => Glyph::CheckCircle,
            Severity::Warning => Glyph::WarningCircle,
        }
    }

    /// Card heading prefix ("Critical Bugs", "Fixed", "Warnings").
    pub fn caption(self) -> &'static str {
        match self {
            Severity::Critical => "Critical Bugs",
            Severity::Fixed => "Fixed",
            Severity::Warning => "Warnings",
        }
    }
}

/// Issues of one severity.
///
/// `count` is the reported total and is not required to match
/// `items.len()`; the itemised list may be a sample.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueGroup {
    /// Severity shared by every item in the group
    pub severity: Severity,
    /// Reported number of issues
    pub count: usize,
    /// Itemised descriptions, in display order
    pub items: Vec<String>,
}

impl IssueGroup {
    /// Create a group from a severity, count and descriptions.
    pub fn new<I, S>(severity: Severity, count: usize, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            severity,
            count,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// One capability of an architectural module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Short name (primary text)
    pub name: String,
    /// One-line description (secondary text)
    #[serde(default)]
    pub description: String,
}

impl Capability {
    /// Create a capability.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One architectural unit and what it does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleBox {
    /// Module title, usually a file or crate name
    pub title: String,
    /// Panel colour; assigned from the palette when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Swatch>,
    /// Capabilities in display order
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl ModuleBox {
    /// Create a module with no accent colour.
    pub fn new(title: impl Into<String>, capabilities: Vec<Capability>) -> Self {
        Self {
            title: title.into(),
            accent: None,
            capabilities,
        }
    }

    /// Pin the panel colour.
    pub fn with_accent(mut self, accent: Swatch) -> Self {
        self.accent = Some(accent);
        self
    }
}

/// What kind of thing a flow artifact is; selects its icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// File, table or other persisted data
    Store,
    /// An in-process activity
    #[default]
    Process,
    /// Something emitted to the outside (printout, export)
    Output,
    /// A generated document
    Document,
}

impl ArtifactKind {
    /// Icon used for this kind.
    pub fn glyph(self) -> Glyph {
        match self {
            ArtifactKind::Store => Glyph::Database,
            ArtifactKind::Process => Glyph::Lightning,
            ArtifactKind::Output => Glyph::Printer,
            ArtifactKind::Document => Glyph::FileText,
        }
    }

    /// Tile colour used when the artifact pins none.
    pub fn swatch(self) -> Swatch {
        match self {
            ArtifactKind::Store => Swatch::Blue,
            ArtifactKind::Process => Swatch::Indigo,
            ArtifactKind::Output => Swatch::Green,
            ArtifactKind::Document => Swatch::Purple,
        }
    }
}

/// Input or output of a flow stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Artifact name, e.g. `sales.csv`
    pub name: String,
    /// What it holds or what happens to it
    #[serde(default)]
    pub detail: String,
    /// Icon selector
    #[serde(default)]
    pub kind: ArtifactKind,
    /// Tile colour; the kind's colour when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Swatch>,
}

impl Artifact {
    /// Create an artifact.
    pub fn new(name: impl Into<String>, detail: impl Into<String>, kind: ArtifactKind) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            kind,
            accent: None,
        }
    }

    /// Pin the tile colour.
    pub fn with_accent(mut self, accent: Swatch) -> Self {
        self.accent = Some(accent);
        self
    }
}

/// One step of the data flow: `source` is turned into `destination`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStage {
    /// Stage name
    pub label: String,
    /// What the stage does
    #[serde(default)]
    pub description: String,
    /// Consumed artifact
    pub source: Artifact,
    /// Produced artifact
    pub destination: Artifact,
}

/// Ordered chain of flow stages.
///
/// By convention stage `i`'s destination is stage `i + 1`'s source. The
/// chain is not rejected when that does not hold; see
/// [`FlowPipeline::broken_links`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowPipeline(Vec<FlowStage>);

impl FlowPipeline {
    /// Stages in flow order.
    pub fn stages(&self) -> &[FlowStage] {
        &self.0
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indices `i` where stage `i`'s destination is not stage `i + 1`'s source.
    pub fn broken_links(&self) -> Vec<usize> {
        self.0
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0].destination.name != pair[1].source.name)
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl From<Vec<FlowStage>> for FlowPipeline {
    fn from(stages: Vec<FlowStage>) -> Self {
        Self(stages)
    }
}

/// Qualitative tier of a metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// 80 and above
    Good,
    /// 50 up to (not including) 80
    Warning,
    /// Below 50
    Poor,
}

impl Band {
    /// Band for a percentage.
    pub fn of(percent: f64) -> Self {
        if percent >= 80.0 {
            Band::Good
        } else if percent >= 50.0 {
            Band::Warning
        } else {
            Band::Poor
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Band::Good => "good",
            Band::Warning => "warning",
            Band::Poor => "poor",
        }
    }

    /// Fill colour for gauges in this band.
    pub fn swatch(self) -> Swatch {
        match self {
            Band::Good => Swatch::Green,
            Band::Warning => Swatch::Yellow,
            Band::Poor => Swatch::Red,
        }
    }
}

/// A labelled percentage.
///
/// Headline metrics (an overall score, typically) are shown emphasised and
/// on a ten-point scale. They are independent values, never computed from
/// the other metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    /// Metric name
    pub label: String,
    /// Score in `0.0..=100.0`
    pub percent: f64,
    /// Emphasised summary metric
    #[serde(default)]
    pub headline: bool,
}

impl MetricScore {
    /// Create a validated metric.
    pub fn new(label: impl Into<String>, percent: f64) -> Result<Self, ValidationError> {
        let metric = Self {
            label: label.into(),
            percent,
            headline: false,
        };
        metric.validate()?;
        Ok(metric)
    }

    /// Create a validated headline metric.
    pub fn headline(label: impl Into<String>, percent: f64) -> Result<Self, ValidationError> {
        let mut metric = Self::new(label, percent)?;
        metric.headline = true;
        Ok(metric)
    }

    /// Band derived from the percentage.
    pub fn band(&self) -> Band {
        Band::of(self.percent)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("label", &self.label)?;
        if !self.percent.is_finite() || !(0.0..=100.0).contains(&self.percent) {
            return Err(ValidationError::new(
                "percent",
                self.percent,
                "must be a number within 0..=100",
            ));
        }
        Ok(())
    }
}

/// Unvalidated report description, as read from a file or assembled by
/// [`ReportModelBuilder`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportDraft {
    /// Report title
    pub title: String,
    /// Optional line under the title
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Issue groups
    #[serde(default)]
    pub issues: Vec<IssueGroup>,
    /// Architecture modules
    #[serde(default)]
    pub modules: Vec<ModuleBox>,
    /// Flow stages
    #[serde(default)]
    pub pipeline: FlowPipeline,
    /// Quality metrics
    #[serde(default)]
    pub metrics: Vec<MetricScore>,
    /// Closing notes
    #[serde(default)]
    pub footer: Vec<String>,
}

/// Immutable, validated report content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReportDraft")]
pub struct ReportModel {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    issues: Vec<IssueGroup>,
    modules: Vec<ModuleBox>,
    pipeline: FlowPipeline,
    metrics: Vec<MetricScore>,
    footer: Vec<String>,
}

impl ReportModel {
    /// Start building a report with the given title.
    pub fn builder(title: impl Into<String>) -> ReportModelBuilder {
        ReportModelBuilder {
            draft: ReportDraft {
                title: title.into(),
                ..Default::default()
            },
        }
    }

    /// Report title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Line under the title, if any.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Issue groups in model order.
    pub fn issues(&self) -> &[IssueGroup] {
        &self.issues
    }

    /// Architecture modules in model order.
    pub fn modules(&self) -> &[ModuleBox] {
        &self.modules
    }

    /// The data-flow pipeline.
    pub fn pipeline(&self) -> &FlowPipeline {
        &self.pipeline
    }

    /// Quality metrics in model order.
    pub fn metrics(&self) -> &[MetricScore] {
        &self.metrics
    }

    /// Closing notes.
    pub fn footer(&self) -> &[String] {
        &self.footer
    }
}

impl TryFrom<ReportDraft> for ReportModel {
    type Error = ValidationError;

    fn try_from(draft: ReportDraft) -> Result<Self, Self::Error> {
        validate(&draft)?;
        let ReportDraft {
            title,
            subtitle,
            issues,
            modules,
            pipeline,
            metrics,
            footer,
        } = draft;
        Ok(Self {
            title,
            subtitle,
            issues,
            modules,
            pipeline,
            metrics,
            footer,
        })
    }
}

/// Incremental constructor for [`ReportModel`]; validation runs in
/// [`ReportModelBuilder::build`].
#[derive(Clone, Debug)]
pub struct ReportModelBuilder {
    draft: ReportDraft,
}

impl ReportModelBuilder {
    /// Set the line under the title.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.draft.subtitle = Some(subtitle.into());
        self
    }

    /// Append an issue group.
    pub fn issue_group(mut self, group: IssueGroup) -> Self {
        self.draft.issues.push(group);
        self
    }

    /// Append an architecture module.
    pub fn module(mut self, module: ModuleBox) -> Self {
        self.draft.modules.push(module);
        self
    }

    /// Append a flow stage.
    pub fn stage(mut self, stage: FlowStage) -> Self {
        self.draft.pipeline.0.push(stage);
        self
    }

    /// Append a metric.
    pub fn metric(mut self, metric: MetricScore) -> Self {
        self.draft.metrics.push(metric);
        self
    }

    /// Append a closing note.
    pub fn footer_note(mut self, note: impl Into<String>) -> Self {
        self.draft.footer.push(note.into());
        self
    }

    /// Validate and freeze the report.
    pub fn build(self) -> Result<ReportModel, ValidationError> {
        ReportModel::try_from(self.draft)
    }
}

fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, value, "must not be empty"));
    }
    Ok(())
}

fn validate(draft: &ReportDraft) -> Result<(), ValidationError> {
    require_text("title", &draft.title)?;

    let mut seen = Vec::with_capacity(draft.issues.len());
    for (idx, group) in draft.issues.iter().enumerate() {
        if seen.contains(&group.severity) {
            return Err(ValidationError::new(
                format!("issues[{idx}].severity"),
                group.severity.as_str(),
                "only one issue group per severity",
            ));
        }
        seen.push(group.severity);
    }

    for (idx, module) in draft.modules.iter().enumerate() {
        let at = format!("modules[{idx}]");
        require_text("title", &module.title).map_err(|e| e.within(&at))?;
        for (cap_idx, cap) in module.capabilities.iter().enumerate() {
            require_text("name", &cap.name)
                .map_err(|e| e.within(format!("capabilities[{cap_idx}]")).within(&at))?;
        }
    }

    for (idx, stage) in draft.pipeline.stages().iter().enumerate() {
        let at = format!("pipeline[{idx}]");
        require_text("label", &stage.label).map_err(|e| e.within(&at))?;
        require_text("name", &stage.source.name).map_err(|e| e.within("source").within(&at))?;
        require_text("name", &stage.destination.name)
            .map_err(|e| e.within("destination").within(&at))?;
    }

    for (idx, metric) in draft.metrics.iter().enumerate() {
        metric
            .validate()
            .map_err(|e| e.within(format!("metrics[{idx}]")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stage(label: &str, from: &str, to: &str) -> FlowStage {
        FlowStage {
            label: label.into(),
            description: String::new(),
            source: Artifact::new(from, "", ArtifactKind::Store),
            destination: Artifact::new(to, "", ArtifactKind::Process),
        }
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(Band::of(100.0), Band::Good);
        assert_eq!(Band::of(80.0), Band::Good);
        assert_eq!(Band::of(79.9), Band::Warning);
        assert_eq!(Band::of(50.0), Band::Warning);
        assert_eq!(Band::of(49.9), Band::Poor);
        assert_eq!(Band::of(0.0), Band::Poor);
    }

    #[test]
    fn metric_out_of_range_rejected_on_percent() {
        let err = ReportModel::builder("Report")
            .metric(MetricScore {
                label: "X".into(),
                percent: 150.0,
                headline: false,
            })
            .build()
            .unwrap_err();

        assert_eq!(err.field, "metrics[0].percent");
        assert_eq!(err.value, "150");
    }

    #[test]
    fn metric_new_rejects_nan_and_negative() {
        assert_eq!(MetricScore::new("X", f64::NAN).unwrap_err().field, "percent");
        assert_eq!(MetricScore::new("X", -0.5).unwrap_err().field, "percent");
        assert!(MetricScore::new("X", 0.0).is_ok());
        assert!(MetricScore::new("X", 100.0).is_ok());
    }

    #[test]
    fn missing_labels_rejected_with_path() {
        let err = ReportModel::builder("  ").build().unwrap_err();
        assert_eq!(err.field, "title");

        let err = ReportModel::builder("Report")
            .module(ModuleBox::new(
                "main.py",
                vec![Capability::new("UI", "widgets"), Capability::new("", "orphan")],
            ))
            .build()
            .unwrap_err();
        assert_eq!(err.field, "modules[0].capabilities[1].name");

        let err = ReportModel::builder("Report")
            .stage(stage("Load", "a.csv", ""))
            .build()
            .unwrap_err();
        assert_eq!(err.field, "pipeline[0].destination.name");

        let err = ReportModel::builder("Report")
            .metric(MetricScore {
                label: String::new(),
                percent: 10.0,
                headline: false,
            })
            .build()
            .unwrap_err();
        assert_eq!(err.field, "metrics[0].label");
    }

    #[test]
    fn duplicate_severity_rejected() {
        let err = ReportModel::builder("Report")
            .issue_group(IssueGroup::new(Severity::Warning, 1, ["a"]))
            .issue_group(IssueGroup::new(Severity::Warning, 2, ["b"]))
            .build()
            .unwrap_err();
        assert_eq!(err.field, "issues[1].severity");
        assert_eq!(err.value, "warning");
    }

    #[test]
    fn count_is_independent_of_items() {
        let model = ReportModel::builder("Report")
            .issue_group(IssueGroup::new(Severity::Critical, 7, ["only one listed"]))
            .build()
            .unwrap();
        assert_eq!(model.issues()[0].count, 7);
        assert_eq!(model.issues()[0].items.len(), 1);
    }

    #[test]
    fn broken_links_reports_discontinuities() {
        let pipeline = FlowPipeline::from(vec![
            stage("a", "products.csv", "cart"),
            stage("b", "checkout", "receipt"),
            stage("c", "receipt", "sales.csv"),
        ]);
        assert_eq!(pipeline.broken_links(), vec![0]);
        assert!(FlowPipeline::default().broken_links().is_empty());
    }

    #[test]
    fn deserializes_through_validation() {
        let json = r#"{
            "title": "Report",
            "metrics": [{ "label": "Scalability", "percent": 150 }]
        }"#;
        let err = serde_json::from_str::<ReportModel>(json).unwrap_err();
        assert!(err.to_string().contains("metrics[0].percent"));

        let json = r#"{
            "title": "Report",
            "issues": [{ "severity": "fixed", "count": 1, "items": ["Safe data access"] }],
            "metrics": [{ "label": "Overall Score", "percent": 70, "headline": true }]
        }"#;
        let model: ReportModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.issues()[0].severity, Severity::Fixed);
        assert!(model.metrics()[0].headline);
    }

    #[test]
    fn serialized_model_reads_back() {
        let model = ReportModel::builder("Report")
            .subtitle("sub")
            .stage(stage("Load", "a.csv", "cart"))
            .metric(MetricScore::headline("Overall", 70.0).unwrap())
            .footer_note("done")
            .build()
            .unwrap();
        let json = serde_json::to_string(&model).unwrap();
        let back: ReportModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
