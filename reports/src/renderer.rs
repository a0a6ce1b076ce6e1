//! Model-to-tree renderer.
//!
//! [`ReportRenderer`] owns every presentation rule: card order, panel
//! colours, flow markers, gauge bands and fill widths. It is a pure
//! function of its input; the same model always yields an equal tree.

use tracing::debug;

use crate::error::{RenderError, ValidationError};
use crate::model::{Artifact, Band, FlowPipeline, IssueGroup, MetricScore, ModuleBox, ReportModel};
use crate::tree::{
    ArchitectureSection, ArtifactTile, CapabilityRow, DirectionMarker, FlowItem, FlowSection,
    Gauge, Glyph, Header, IssueCard, IssueSection, ModulePanel, QualitySection, StageRow, Swatch,
    VisualTree,
};

/// Heading of the severity card section.
pub const ISSUES_HEADING: &str = "Bugs Found Summary";
/// Heading of the module panel section.
pub const ARCHITECTURE_HEADING: &str = "System Architecture";
/// Heading of the flow section.
pub const FLOW_HEADING: &str = "Data Flow";
/// Heading of the gauge section.
pub const QUALITY_HEADING: &str = "Code Quality Assessment";

/// Default gauge track width. With this width a gauge's fill equals its percent.
pub const DEFAULT_TRACK_WIDTH: f64 = 100.0;

/// Knobs that change layout numbers, never content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Width of a full gauge track
    pub track_width: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            track_width: DEFAULT_TRACK_WIDTH,
        }
    }
}

/// Stateless renderer; cheap to copy and safe to share between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportRenderer {
    options: RenderOptions,
}

impl ReportRenderer {
    /// Create a renderer with the given options.
    ///
    /// Fails on a `track_width` that is not a positive finite number.
    pub fn new(options: RenderOptions) -> Result<Self, ValidationError> {
        let width = options.track_width;
        if !width.is_finite() || width <= 0.0 {
            return Err(ValidationError::new(
                "track_width",
                width,
                "must be a positive finite number",
            ));
        }
        Ok(Self { options })
    }

    /// Options this renderer lays out with.
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Lay out a complete report.
    ///
    /// Fails only when `model` is `None`. Empty collections produce empty
    /// sections.
    pub fn render(&self, model: Option<&ReportModel>) -> Result<VisualTree, RenderError> {
        let model = model.ok_or(RenderError::MissingModel)?;

        let tree = VisualTree {
            header: Header {
                title: model.title().to_string(),
                subtitle: model.subtitle().map(str::to_string),
            },
            issues: issue_section(model.issues()),
            architecture: architecture_section(model.modules()),
            flow: flow_section(model.pipeline()),
            quality: QualitySection {
                heading: QUALITY_HEADING.to_string(),
                track_width: self.options.track_width,
                gauges: model.metrics().iter().map(|m| self.gauge(m)).collect(),
            },
            footer: model.footer().to_vec(),
        };

        debug!(
            title = %tree.header.title,
            cards = tree.issues.cards.len(),
            panels = tree.architecture.panels.len(),
            flow_items = tree.flow.items.len(),
            gauges = tree.quality.gauges.len(),
            "rendered report"
        );
        Ok(tree)
    }

    /// Lay out one metric.
    ///
    /// The percentage is clamped into `0..=100` (NaN becomes 0) so a metric
    /// that skipped validation still renders.
    pub fn gauge(&self, metric: &MetricScore) -> Gauge {
        let percent = clamp_percent(metric.percent);
        let band = Band::of(percent);
        let value_text = if metric.headline {
            format!("{}/10", format_number(percent / 10.0))
        } else {
            format!("{}%", format_number(percent))
        };

        Gauge {
            label: metric.label.clone(),
            percent,
            value_text,
            fill_width: percent * (self.options.track_width / 100.0),
            band,
            swatch: band.swatch(),
            headline: metric.headline,
        }
    }
}

/// Render with default options.
///
/// # Example
///
/// ```rust
/// use report_render::{render, RenderError};
///
/// assert_eq!(render(None).unwrap_err(), RenderError::MissingModel);
/// ```
pub fn render(model: Option<&ReportModel>) -> Result<VisualTree, RenderError> {
    ReportRenderer::default().render(model)
}

fn issue_section(groups: &[IssueGroup]) -> IssueSection {
    let mut ordered: Vec<&IssueGroup> = groups.iter().collect();
    ordered.sort_by_key(|group| group.severity);

    IssueSection {
        heading: ISSUES_HEADING.to_string(),
        cards: ordered
            .into_iter()
            .map(|group| IssueCard {
                severity: group.severity,
                heading: format!("{}: {}", group.severity.caption(), group.count),
                count: group.count,
                items: group.items.clone(),
                swatch: group.severity.swatch(),
                glyph: group.severity.glyph(),
            })
            .collect(),
    }
}

fn architecture_section(modules: &[ModuleBox]) -> ArchitectureSection {
    ArchitectureSection {
        heading: ARCHITECTURE_HEADING.to_string(),
        panels: modules
            .iter()
            .enumerate()
            .map(|(idx, module)| ModulePanel {
                title: module.title.clone(),
                accent: module
                    .accent
                    .unwrap_or(Swatch::PANEL_PALETTE[idx % Swatch::PANEL_PALETTE.len()]),
                rows: module
                    .capabilities
                    .iter()
                    .map(|cap| CapabilityRow {
                        primary: cap.name.clone(),
                        secondary: cap.description.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn flow_section(pipeline: &FlowPipeline) -> FlowSection {
    let broken = pipeline.broken_links();
    if !broken.is_empty() {
        debug!(?broken, "flow pipeline has discontinuous links");
    }

    let mut items = Vec::with_capacity(pipeline.len() * 2);
    for (idx, stage) in pipeline.stages().iter().enumerate() {
        if idx > 0 {
            items.push(FlowItem::Marker(DirectionMarker {
                glyph: Glyph::ArrowDown,
                continuous: !broken.contains(&(idx - 1)),
            }));
        }
        items.push(FlowItem::Stage(StageRow {
            index: idx,
            label: stage.label.clone(),
            description: stage.description.clone(),
            source: tile(&stage.source),
            destination: tile(&stage.destination),
            arrow: Glyph::ArrowRight,
        }));
    }

    FlowSection {
        heading: FLOW_HEADING.to_string(),
        items,
    }
}

fn tile(artifact: &Artifact) -> ArtifactTile {
    ArtifactTile {
        name: artifact.name.clone(),
        detail: artifact.detail.clone(),
        glyph: artifact.kind.glyph(),
        swatch: artifact.accent.unwrap_or(artifact.kind.swatch()),
    }
}

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// `90.0 -> "90"`, `65.5 -> "65.5"`, `7.25 -> "7.3"`.
fn format_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArtifactKind, Capability, FlowStage, IssueGroup, Severity};
    use pretty_assertions::assert_eq;

    fn metric(label: &str, percent: f64) -> MetricScore {
        MetricScore {
            label: label.into(),
            percent,
            headline: false,
        }
    }

    fn module(title: &str, caps: usize) -> ModuleBox {
        ModuleBox::new(
            title,
            (0..caps)
                .map(|i| Capability::new(format!("cap {i}"), format!("does {i}")))
                .collect(),
        )
    }

    fn stage(label: &str, from: &str, to: &str) -> FlowStage {
        FlowStage {
            label: label.into(),
            description: format!("{label} step"),
            source: Artifact::new(from, "in", ArtifactKind::Store),
            destination: Artifact::new(to, "out", ArtifactKind::Process),
        }
    }

    fn cashier_model() -> ReportModel {
        let mut builder = ReportModel::builder("Cashier System")
            .subtitle("Bug Analysis & System Architecture")
            .issue_group(IssueGroup::new(Severity::Critical, 3, ["a", "b", "c"]))
            .issue_group(IssueGroup::new(Severity::Fixed, 3, ["d", "e", "f"]))
            .issue_group(IssueGroup::new(Severity::Warning, 2, ["g", "h"]))
            .module(module("main_prog.py", 5))
            .module(module("receipt.py", 5))
            .module(module("report.py", 5))
            .stage(stage("Select", "products.csv", "Shopping Cart"))
            .stage(stage("Checkout", "Checkout", "Generate Receipt"))
            .stage(stage("Record", "Transaction Data", "sales.csv"))
            .stage(stage("Report", "sales.csv", "Sales Report"));
        for (label, percent) in [
            ("Functionality", 90.0),
            ("Code Organization", 80.0),
            ("Error Handling", 60.0),
            ("User Interface", 65.0),
            ("Scalability", 50.0),
        ] {
            builder = builder.metric(MetricScore::new(label, percent).unwrap());
        }
        builder
            .metric(MetricScore::headline("Overall Score", 70.0).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn end_to_end_layout() {
        let tree = render(Some(&cashier_model())).unwrap();

        assert_eq!(tree.issues.cards.len(), 3);
        assert_eq!(tree.architecture.panels.len(), 3);
        assert!(tree.architecture.panels.iter().all(|p| p.rows.len() == 5));
        assert_eq!(tree.flow.stage_rows().count(), 4);
        assert_eq!(tree.flow.markers().count(), 3);
        assert_eq!(tree.quality.gauges.len(), 6);

        let bands: Vec<Band> = tree.quality.gauges.iter().map(|g| g.band).collect();
        assert_eq!(
            bands,
            vec![
                Band::Good,
                Band::Good,
                Band::Warning,
                Band::Warning,
                Band::Warning,
                Band::Warning
            ]
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn model_tree_and_renderer_are_send_sync() {
        assert_send_sync::<ReportModel>();
        assert_send_sync::<VisualTree>();
        assert_send_sync::<ReportRenderer>();
    }

    #[test]
    fn concurrent_renders_of_one_model_agree() {
        let model = cashier_model();
        let renderer = ReportRenderer::default();
        let expected = renderer.render(Some(&model)).unwrap();

        let trees: Vec<VisualTree> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| renderer.render(Some(&model)).unwrap()))
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        assert_eq!(trees.len(), 4);
        assert!(trees.iter().all(|tree| *tree == expected));
    }

    #[test]
    fn rejects_unusable_track_width() {
        for width in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = ReportRenderer::new(RenderOptions { track_width: width }).unwrap_err();
            assert_eq!(err.field, "track_width", "width {width}");
        }
        assert!(ReportRenderer::new(RenderOptions { track_width: 0.5 }).is_ok());
    }

    #[test]
    fn tiles_take_kind_tone_unless_pinned() {
        let model = ReportModel::builder("Tiles")
            .stage(FlowStage {
                label: "Print".into(),
                description: String::new(),
                source: Artifact::new("orders.csv", "rows", ArtifactKind::Store),
                destination: Artifact::new("Receipt", "paper", ArtifactKind::Output),
            })
            .stage(FlowStage {
                label: "Summarise".into(),
                description: String::new(),
                source: Artifact::new("sales.csv", "rows", ArtifactKind::Store)
                    .with_accent(Swatch::Yellow),
                destination: Artifact::new("Report", "pdf", ArtifactKind::Document),
            })
            .build()
            .unwrap();
        let tree = render(Some(&model)).unwrap();

        let tones: Vec<(Swatch, Swatch)> = tree
            .flow
            .stage_rows()
            .map(|row| (row.source.swatch, row.destination.swatch))
            .collect();
        assert_eq!(
            tones,
            vec![(Swatch::Blue, Swatch::Green), (Swatch::Yellow, Swatch::Purple)]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let model = cashier_model();
        let renderer = ReportRenderer::default();
        assert_eq!(
            renderer.render(Some(&model)).unwrap(),
            renderer.render(Some(&model)).unwrap()
        );
    }

    #[test]
    fn missing_model_is_an_error() {
        assert_eq!(render(None).unwrap_err(), RenderError::MissingModel);
    }

    #[test]
    fn empty_collections_render_empty_sections() {
        let model = ReportModel::builder("Empty").build().unwrap();
        let tree = render(Some(&model)).unwrap();

        assert!(tree.issues.is_empty());
        assert!(tree.architecture.is_empty());
        assert!(tree.flow.is_empty());
        assert!(tree.quality.is_empty());
        assert_eq!(tree.issues.heading, ISSUES_HEADING);
        assert_eq!(tree.flow.heading, FLOW_HEADING);
    }

    #[test]
    fn cards_follow_fixed_severity_order() {
        let model = ReportModel::builder("Order")
            .issue_group(IssueGroup::new(Severity::Warning, 2, ["w"]))
            .issue_group(IssueGroup::new(Severity::Critical, 1, ["c"]))
            .issue_group(IssueGroup::new(Severity::Fixed, 4, ["f"]))
            .build()
            .unwrap();
        let tree = render(Some(&model)).unwrap();

        let order: Vec<Severity> = tree.issues.cards.iter().map(|c| c.severity).collect();
        assert_eq!(order, Severity::ORDER.to_vec());

        let critical = &tree.issues.cards[0];
        assert_eq!(critical.heading, "Critical Bugs: 1");
        assert_eq!(critical.swatch, Swatch::Red);
        assert_eq!(critical.glyph, Glyph::XCircle);
        assert_eq!(tree.issues.cards[1].heading, "Fixed: 4");
        assert_eq!(tree.issues.cards[1].swatch, Swatch::Green);
        assert_eq!(tree.issues.cards[2].heading, "Warnings: 2");
        assert_eq!(tree.issues.cards[2].swatch, Swatch::Yellow);
    }

    #[test]
    fn gauge_fill_and_colour_follow_band() {
        let renderer = ReportRenderer::default();
        for (percent, swatch) in [
            (0.0, Swatch::Red),
            (49.0, Swatch::Red),
            (50.0, Swatch::Yellow),
            (79.0, Swatch::Yellow),
            (80.0, Swatch::Green),
            (100.0, Swatch::Green),
        ] {
            let gauge = renderer.gauge(&metric("m", percent));
            assert_eq!(gauge.fill_width, percent);
            assert_eq!(gauge.swatch, swatch, "percent {percent}");
        }
    }

    #[test]
    fn gauge_clamps_out_of_range_values() {
        let renderer = ReportRenderer::default();

        let high = renderer.gauge(&metric("high", 150.0));
        assert_eq!(high.fill_width, 100.0);
        assert_eq!(high.value_text, "100%");
        assert_eq!(high.band, Band::Good);

        let low = renderer.gauge(&metric("low", -20.0));
        assert_eq!(low.fill_width, 0.0);
        assert_eq!(low.band, Band::Poor);

        assert_eq!(renderer.gauge(&metric("nan", f64::NAN)).fill_width, 0.0);
    }

    #[test]
    fn gauge_fill_scales_with_track_width() {
        let renderer = ReportRenderer::new(RenderOptions { track_width: 200.0 }).unwrap();
        let gauge = renderer.gauge(&metric("m", 50.0));
        assert_eq!(gauge.fill_width, 100.0);
        assert_eq!(gauge.percent, 50.0);
    }

    #[test]
    fn headline_value_uses_ten_point_scale() {
        let renderer = ReportRenderer::default();
        let overall = renderer.gauge(&MetricScore::headline("Overall Score", 70.0).unwrap());
        assert_eq!(overall.value_text, "7/10");
        assert!(overall.headline);
        assert_eq!(overall.band, Band::Warning);

        let half = renderer.gauge(&MetricScore::headline("Overall", 75.0).unwrap());
        assert_eq!(half.value_text, "7.5/10");
        assert_eq!(renderer.gauge(&metric("m", 65.5)).value_text, "65.5%");
    }

    #[test]
    fn panels_get_palette_accent_unless_pinned() {
        let model = ReportModel::builder("Panels")
            .module(module("a", 1))
            .module(module("b", 1).with_accent(Swatch::Red))
            .module(module("c", 1))
            .build()
            .unwrap();
        let tree = render(Some(&model)).unwrap();

        let accents: Vec<Swatch> = tree.architecture.panels.iter().map(|p| p.accent).collect();
        assert_eq!(accents, vec![Swatch::Indigo, Swatch::Red, Swatch::Purple]);
        assert_eq!(tree.architecture.panels[0].rows[0].primary, "cap 0");
        assert_eq!(tree.architecture.panels[0].rows[0].secondary, "does 0");
    }

    #[test]
    fn flow_keeps_stage_order_and_flags_breaks() {
        let tree = render(Some(&cashier_model())).unwrap();

        let labels: Vec<&str> = tree.flow.stage_rows().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Select", "Checkout", "Record", "Report"]);

        assert!(matches!(tree.flow.items.first(), Some(FlowItem::Stage(_))));
        assert!(matches!(tree.flow.items.last(), Some(FlowItem::Stage(_))));

        let continuity: Vec<bool> = tree.flow.markers().map(|m| m.continuous).collect();
        assert_eq!(continuity, vec![false, false, true]);

        let first = tree.flow.stage_rows().next().unwrap();
        assert_eq!(first.source.glyph, Glyph::Database);
        assert_eq!(first.destination.glyph, Glyph::Lightning);
    }

    #[test]
    fn single_stage_has_no_markers() {
        let model = ReportModel::builder("One")
            .stage(stage("Only", "a", "b"))
            .build()
            .unwrap();
        let tree = render(Some(&model)).unwrap();
        assert_eq!(tree.flow.items.len(), 1);
        assert_eq!(tree.flow.markers().count(), 0);
    }
}
