//! Terminal painter.
//!
//! Renders a [`VisualTree`] as plain lines with block-character gauge bars.
//! Styling goes through `console`; with `styled = false` the output contains
//! no escape sequences at all, which is what files and tests want.

use console::{Color, Style};

use crate::tree::{FlowItem, Gauge, Swatch, VisualTree};

/// Character cells in a full gauge bar.
pub const BAR_CELLS: usize = 30;

/// Paint a tree as terminal text.
///
/// # Example
///
/// ```rust
/// use report_render::{model::ReportModel, paint_text, render};
///
/// let model = ReportModel::builder("Empty report").build()?;
/// let tree = render(Some(&model))?;
/// let text = paint_text(&tree, false);
/// assert!(text.starts_with("Empty report\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn paint_text(tree: &VisualTree, styled: bool) -> String {
    let pen = Pen { styled };
    let mut out = Vec::new();

    out.push(pen.paint(&tree.header.title, Style::new().bold()));
    if let Some(subtitle) = &tree.header.subtitle {
        out.push(pen.paint(subtitle, Style::new().dim()));
    }

    out.push(String::new());
    out.push(pen.heading(&tree.issues.heading));
    if tree.issues.is_empty() {
        out.push(pen.empty());
    }
    for card in &tree.issues.cards {
        let tone = pen.tone(card.swatch).bold();
        out.push(format!(
            "{} {}",
            pen.paint(card.glyph.symbol(), tone.clone()),
            pen.paint(&card.heading, tone)
        ));
        out.extend(card.items.iter().map(|item| format!("  • {}", item)));
    }

    out.push(String::new());
    out.push(pen.heading(&tree.architecture.heading));
    if tree.architecture.is_empty() {
        out.push(pen.empty());
    }
    for panel in &tree.architecture.panels {
        out.push(pen.paint(&format!("[{}]", panel.title), pen.tone(panel.accent).bold()));
        for row in &panel.rows {
            out.push(format!(
                "  {}  {}",
                row.primary,
                pen.paint(&row.secondary, Style::new().dim())
            ));
        }
    }

    out.push(String::new());
    out.push(pen.heading(&tree.flow.heading));
    if tree.flow.is_empty() {
        out.push(pen.empty());
    }
    for item in &tree.flow.items {
        match item {
            FlowItem::Stage(row) => {
                out.push(format!("{}. {}", row.index + 1, pen.paint(&row.label, Style::new().bold())));
                out.push(format!(
                    "   {} {} {} {} {}",
                    row.source.glyph.symbol(),
                    row.source.name,
                    row.arrow.symbol(),
                    row.destination.glyph.symbol(),
                    row.destination.name
                ));
                if !row.description.is_empty() {
                    out.push(format!("   {}", pen.paint(&row.description, Style::new().dim())));
                }
            }
            FlowItem::Marker(marker) => {
                let style = if marker.continuous {
                    Style::new()
                } else {
                    Style::new().dim()
                };
                out.push(format!("   {}", pen.paint(marker.glyph.symbol(), style)));
            }
        }
    }

    out.push(String::new());
    out.push(pen.heading(&tree.quality.heading));
    if tree.quality.is_empty() {
        out.push(pen.empty());
    }
    let label_width = tree
        .quality
        .gauges
        .iter()
        .map(|g| g.label.chars().count())
        .max()
        .unwrap_or(0);
    for gauge in &tree.quality.gauges {
        if gauge.headline {
            out.push("-".repeat(label_width + BAR_CELLS + 8));
        }
        out.push(pen.gauge(gauge, label_width));
    }

    if !tree.footer.is_empty() {
        out.push(String::new());
        out.extend(tree.footer.iter().map(|note| pen.paint(note, Style::new().dim())));
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

/// Number of filled cells for a clamped percentage.
pub fn filled_cells(percent: f64) -> usize {
    ((percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize
}

struct Pen {
    styled: bool,
}

impl Pen {
    fn paint(&self, text: &str, style: Style) -> String {
        style.force_styling(self.styled).apply_to(text).to_string()
    }

    fn heading(&self, text: &str) -> String {
        self.paint(&format!("== {} ==", text), Style::new().bold().underlined())
    }

    fn empty(&self) -> String {
        self.paint("  (nothing to report)", Style::new().dim())
    }

    fn tone(&self, swatch: Swatch) -> Style {
        let color = match swatch {
            Swatch::Red => Color::Red,
            Swatch::Green => Color::Green,
            Swatch::Yellow => Color::Yellow,
            Swatch::Blue => Color::Blue,
            Swatch::Indigo => Color::Color256(63),
            Swatch::Purple => Color::Magenta,
        };
        Style::new().fg(color)
    }

    fn gauge(&self, gauge: &Gauge, label_width: usize) -> String {
        let filled = filled_cells(gauge.percent);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled));
        let label = format!("{:<width$}", gauge.label, width = label_width);
        let label = if gauge.headline {
            self.paint(&label, Style::new().bold())
        } else {
            label
        };
        format!(
            "{}  {}  {}",
            label,
            self.paint(&bar, self.tone(gauge.swatch)),
            self.paint(&gauge.value_text, self.tone(gauge.swatch))
        )
    }
}
