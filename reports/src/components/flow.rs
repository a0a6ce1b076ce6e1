//! Data-flow diagram: stage rows stacked vertically with arrows between them

use leptos::prelude::*;

use super::{GlyphIcon, SectionFrame};
use crate::tree::{ArtifactTile, DirectionMarker, FlowItem, FlowSection, StageRow};

/// Vertical flow column
#[component]
pub fn FlowDiagram(section: FlowSection) -> impl IntoView {
    let empty = section.is_empty();
    view! {
        <SectionFrame heading=section.heading id="flow" empty=empty>
            <div class="flow-column">
                {section.items.into_iter().map(|item| match item {
                    FlowItem::Stage(row) => view! { <StageRowView row=row /> }.into_any(),
                    FlowItem::Marker(marker) => view! { <MarkerView marker=marker /> }.into_any(),
                }).collect::<Vec<_>>()}
            </div>
        </SectionFrame>
    }
}

#[component]
fn StageRowView(row: StageRow) -> impl IntoView {
    let caption = if row.description.is_empty() {
        format!("{}. {}", row.index + 1, row.label)
    } else {
        format!("{}. {} - {}", row.index + 1, row.label, row.description)
    };
    view! {
        <div class="flow-stage" data-stage={row.index.to_string()}>
            <div class="flow-stage-caption">{caption}</div>
            <div class="flow-stage-row">
                <TileView tile=row.source />
                <GlyphIcon glyph=row.arrow size="24" />
                <TileView tile=row.destination />
            </div>
        </div>
    }
}

#[component]
fn TileView(tile: ArtifactTile) -> impl IntoView {
    view! {
        <div class="flow-tile" style=format!("background:{}", tile.swatch.tint())>
            <span class="flow-tile-name">
                <GlyphIcon glyph=tile.glyph />
                {tile.name}
            </span>
            <div class="flow-tile-detail">{tile.detail}</div>
        </div>
    }
}

#[component]
fn MarkerView(marker: DirectionMarker) -> impl IntoView {
    let class = if marker.continuous { "flow-marker" } else { "flow-marker broken" };
    view! {
        <div class=class>
            <GlyphIcon glyph=marker.glyph size="24" />
        </div>
    }
}
