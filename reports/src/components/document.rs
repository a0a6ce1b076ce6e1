//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::{FlowDiagram, IssueCards, ModulePanels, QualityGauges};
use crate::styles::{CSP, REPORT_CSS};
use crate::tree::VisualTree;

/// The complete HTML document for the report
#[component]
pub fn ReportDocument(tree: VisualTree) -> impl IntoView {
    let VisualTree {
        header,
        issues,
        architecture,
        flow,
        quality,
        footer,
    } = tree;
    let page_title = header.title.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{page_title}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <div class="report-page">
                    <header class="report-header">
                        <h1>{header.title}</h1>
                        {header.subtitle.map(|subtitle| view! {
                            <p class="report-subtitle">{subtitle}</p>
                        })}
                    </header>

                    <IssueCards section=issues />
                    <ModulePanels section=architecture />
                    <FlowDiagram section=flow />
                    <QualityGauges section=quality />

                    {(!footer.is_empty()).then(|| view! {
                        <footer class="report-footer">
                            {footer.into_iter().map(|note| view! { <p>{note}</p> }).collect::<Vec<_>>()}
                        </footer>
                    })}
                </div>
            </body>
        </html>
    }
}

/// Titled white panel wrapping one report section
///
/// Shows a placeholder line instead of the children when the section has
/// nothing to display.
#[component]
pub fn SectionFrame(
    heading: String,
    id: &'static str,
    empty: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="report-section" id=id>
            <h2>{heading}</h2>
            {if empty {
                view! { <p class="section-empty">"Nothing to report"</p> }.into_any()
            } else {
                children()
            }}
        </section>
    }
}
