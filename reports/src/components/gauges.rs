//! Quality gauges - horizontal bars filled to the metric's percentage

use leptos::prelude::*;

use super::SectionFrame;
use crate::tree::{Gauge, QualitySection};

/// All gauges of the quality section
#[component]
pub fn QualityGauges(section: QualitySection) -> impl IntoView {
    let empty = section.is_empty();
    view! {
        <SectionFrame heading=section.heading id="quality" empty=empty>
            {section.gauges.into_iter().map(|gauge| view! {
                <GaugeBar gauge=gauge />
            }).collect::<Vec<_>>()}
        </SectionFrame>
    }
}

/// Label, value and filled track for one metric
///
/// The track is the full row width, so the fill is the clamped percentage.
#[component]
pub fn GaugeBar(gauge: Gauge) -> impl IntoView {
    let class = if gauge.headline { "gauge headline" } else { "gauge" };
    let color = gauge.swatch.hex();

    view! {
        <div class=class data-band={gauge.band.as_str()}>
            <div class="gauge-head">
                <span class="gauge-label">{gauge.label}</span>
                <span class="gauge-value" style=format!("color:{}", color)>{gauge.value_text}</span>
            </div>
            <div class="gauge-track">
                <div class="gauge-fill" style=format!("width:{}%;background:{}", gauge.percent, color)></div>
            </div>
        </div>
    }
}
