//! Severity summary cards

use leptos::prelude::*;

use super::{GlyphIcon, SectionFrame};
use crate::tree::{IssueCard, IssueSection};

/// One card per severity, side by side
#[component]
pub fn IssueCards(section: IssueSection) -> impl IntoView {
    let empty = section.is_empty();
    view! {
        <SectionFrame heading=section.heading id="issues" empty=empty>
            <div class="card-grid">
                {section.cards.into_iter().map(|card| view! { <IssueCardView card=card /> }).collect::<Vec<_>>()}
            </div>
        </SectionFrame>
    }
}

#[component]
fn IssueCardView(card: IssueCard) -> impl IntoView {
    let swatch = card.swatch;
    let style = format!(
        "background:{};border-color:{}",
        swatch.tint(),
        swatch.hex()
    );
    view! {
        <div class=format!("issue-card issue-{}", card.severity.as_str()) style=style>
            <div class="issue-card-head">
                <GlyphIcon glyph=card.glyph size="24" color={swatch.hex()} />
                <h3 style=format!("color:{}", swatch.hex())>{card.heading}</h3>
            </div>
            <ul>
                {card.items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
