//! Leptos components for the HTML painter.
//!
//! Each component takes one piece of the [`crate::tree::VisualTree`] by
//! value and renders it; none of them look at the report model.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! ├── IssueCards        (SectionFrame > IssueCardView*)
//! ├── ModulePanels      (SectionFrame > ModulePanelView*)
//! ├── FlowDiagram       (SectionFrame > StageRowView, MarkerView, ...)
//! └── QualityGauges     (SectionFrame > GaugeBar*)
//! ```
//!
//! # Usage
//!
//! Components are normally used via [`crate::paint_html`], but can be
//! composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use report_render::components::QualityGauges;
//!
//! view! { <QualityGauges section=tree.quality /> }
//! ```

mod architecture;
mod document;
mod flow;
mod gauges;
mod icons;
mod issues;

pub use architecture::ModulePanels;
pub use document::{ReportDocument, SectionFrame};
pub use flow::FlowDiagram;
pub use gauges::{GaugeBar, QualityGauges};
pub use icons::*;
pub use issues::IssueCards;
