//! # report-render
//!
//! Data-driven renderer for static structured reports.
//!
//! A report is described declaratively as a [`model::ReportModel`]: issue
//! groups by severity, architecture modules with their capabilities, a data
//! flow pipeline and quality metrics. [`render`] lays the model out into a
//! [`tree::VisualTree`] (cards, panels, flow rows, gauges) without any
//! knowledge of how it will be painted. Painters then turn the tree into
//! HTML ([`paint_html`], Leptos SSR), terminal text ([`paint_text`]) or JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use report_render::model::{IssueGroup, MetricScore, ReportModel, Severity};
//! use report_render::{paint_html, render};
//!
//! let model = ReportModel::builder("Cashier System")
//!     .subtitle("Bug Analysis & System Architecture")
//!     .issue_group(IssueGroup::new(Severity::Critical, 1, ["Missing error handling"]))
//!     .metric(MetricScore::new("Functionality", 90.0)?)
//!     .build()?;
//!
//! let tree = render(Some(&model))?;
//! assert_eq!(tree.quality.gauges[0].fill_width, 90.0);
//!
//! let html = paint_html(&tree);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`model`] - Immutable, validated report content
//! - [`renderer`] - Pure model-to-tree layout rules
//! - [`tree`] - The laid-out, painter-independent tree
//! - [`components`] - Leptos components for the HTML painter
//! - [`text`] - Terminal painter
//! - [`styles`] - CSS constants
//!
//! Rendering has no side effects and no shared state; any number of threads
//! may render the same model at once.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod error;
pub mod model;
pub mod renderer;
pub mod styles;
pub mod text;
pub mod tree;

use components::ReportDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use error::{RenderError, ValidationError};
pub use renderer::{render, RenderOptions, ReportRenderer};
pub use text::paint_text;
pub use tree::VisualTree;

/// Paint a laid-out report as a complete HTML document.
///
/// The output starts with `<!DOCTYPE html>`, embeds its CSS and carries a
/// CSP that forbids scripts and network access.
pub fn paint_html(tree: &VisualTree) -> String {
    let doc = view! { <ReportDocument tree=tree.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Paint a laid-out report as pretty-printed JSON.
pub fn paint_json(tree: &VisualTree) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}

impl ReportRenderer {
    /// Render `model` and paint it as HTML in one step.
    pub fn render_html(&self, model: Option<&model::ReportModel>) -> Result<String, RenderError> {
        self.render(model).map(|tree| paint_html(&tree))
    }
}
