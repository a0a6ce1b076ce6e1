//! Module panels for the architecture section

use leptos::prelude::*;

use super::SectionFrame;
use crate::tree::{ArchitectureSection, ModulePanel};

/// Module panels in model order
#[component]
pub fn ModulePanels(section: ArchitectureSection) -> impl IntoView {
    let empty = section.is_empty();
    view! {
        <SectionFrame heading=section.heading id="architecture" empty=empty>
            <div class="card-grid">
                {section.panels.into_iter().map(|panel| view! { <ModulePanelView panel=panel /> }).collect::<Vec<_>>()}
            </div>
        </SectionFrame>
    }
}

#[component]
fn ModulePanelView(panel: ModulePanel) -> impl IntoView {
    let accent = panel.accent;
    view! {
        <div
            class="module-panel"
            style=format!("background:{};border-color:{}", accent.tint(), accent.hex())
        >
            <h3 style=format!("color:{}", accent.hex())>{panel.title}</h3>
            {panel.rows.into_iter().map(|row| view! {
                <div class="capability-row">
                    <div class="capability-name">{row.primary}</div>
                    <div class="capability-desc">{row.secondary}</div>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
