//! Basic report generation example.
//!
//! Run with: `cargo run --example basic_report`

use report_render::model::{
    Artifact, ArtifactKind, Capability, FlowStage, IssueGroup, MetricScore, ModuleBox, ReportModel,
    Severity,
};
use report_render::{paint_html, paint_text, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = ReportModel::builder("Inventory Service")
        .subtitle("Review summary")
        .issue_group(IssueGroup::new(Severity::Critical, 1, ["Stock can go negative"]))
        .issue_group(IssueGroup::new(Severity::Fixed, 2, ["Price rounding", "Stale cache"]))
        .module(ModuleBox::new(
            "stock.rs",
            vec![
                Capability::new("Reservations", "Hold items during checkout"),
                Capability::new("Restock", "Apply supplier deliveries"),
            ],
        ))
        .stage(FlowStage {
            label: "Reserve".into(),
            description: "Hold stock for an open cart".into(),
            source: Artifact::new("inventory.db", "On-hand counts", ArtifactKind::Store),
            destination: Artifact::new("Reservation", "Pending hold", ArtifactKind::Process),
        })
        .metric(MetricScore::new("Test Coverage", 72.0)?)
        .metric(MetricScore::headline("Overall Score", 68.0)?)
        .build()?;

    let tree = render(Some(&model))?;

    print!("{}", paint_text(&tree, true));

    let output_path = "basic_report.html";
    let html = paint_html(&tree);
    std::fs::write(output_path, &html)?;

    println!("Report written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
    Ok(())
}
