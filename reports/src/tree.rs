//! Laid-out visual tree produced by the renderer.
//!
//! The tree is painter-independent: every colour is a [`Swatch`] token,
//! every icon a [`Glyph`], every width a number. Painters in
//! [`crate::components`] (HTML) and [`crate::text`] (terminal) only read it.
//!
//! The tree is `Serialize` so it can also be handed to an external painter
//! as JSON.

use serde::{Deserialize, Serialize};

use crate::model::{Band, Severity};

/// Closed palette of display colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    /// Critical / poor
    Red,
    /// Fixed / good
    Green,
    /// Warning
    Yellow,
    /// Neutral accent
    Blue,
    /// Primary accent
    Indigo,
    /// Secondary accent
    Purple,
}

impl Swatch {
    /// Palette cycled over module panels without an explicit accent.
    pub const PANEL_PALETTE: [Swatch; 4] = [Swatch::Indigo, Swatch::Green, Swatch::Purple, Swatch::Blue];

    /// Strong tone (text, fills, borders).
    pub fn hex(self) -> &'static str {
        match self {
            Swatch::Red => "#dc2626",
            Swatch::Green => "#16a34a",
            Swatch::Yellow => "#ca8a04",
            Swatch::Blue => "#2563eb",
            Swatch::Indigo => "#4f46e5",
            Swatch::Purple => "#9333ea",
        }
    }

    /// Light tone (card backgrounds).
    pub fn tint(self) -> &'static str {
        match self {
            Swatch::Red => "#fef2f2",
            Swatch::Green => "#f0fdf4",
            Swatch::Yellow => "#fefce8",
            Swatch::Blue => "#eff6ff",
            Swatch::Indigo => "#eef2ff",
            Swatch::Purple => "#faf5ff",
        }
    }

    /// Lowercase name, used as a CSS modifier class.
    pub fn as_str(self) -> &'static str {
        match self {
            Swatch::Red => "red",
            Swatch::Green => "green",
            Swatch::Yellow => "yellow",
            Swatch::Blue => "blue",
            Swatch::Indigo => "indigo",
            Swatch::Purple => "purple",
        }
    }
}

/// Closed icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// Critical issues
    XCircle,
    /// Fixed issues
    CheckCircle,
    /// Warnings
    WarningCircle,
    /// Data store
    Database,
    /// Process step
    Lightning,
    /// Printed / exported output
    Printer,
    /// Generated document
    FileText,
    /// Source-to-destination arrow inside a flow row
    ArrowRight,
    /// Marker between consecutive flow rows
    ArrowDown,
}

impl Glyph {
    /// Single-character stand-in for text painters.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::XCircle => "✗",
            Glyph::CheckCircle => "✓",
            Glyph::WarningCircle => "⚠",
            Glyph::Database => "▤",
            Glyph::Lightning => "⚡",
            Glyph::Printer => "⎙",
            Glyph::FileText => "≡",
            Glyph::ArrowRight => "→",
            Glyph::ArrowDown => "↓",
        }
    }
}

/// The complete laid-out report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualTree {
    /// Title block
    pub header: Header,
    /// Severity cards
    pub issues: IssueSection,
    /// Module panels
    pub architecture: ArchitectureSection,
    /// Flow rows and markers
    pub flow: FlowSection,
    /// Metric gauges
    pub quality: QualitySection,
    /// Closing notes
    pub footer: Vec<String>,
}

/// Title block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Report title
    pub title: String,
    /// Optional line under the title
    pub subtitle: Option<String>,
}

/// Severity cards, always in critical, fixed, warning order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSection {
    /// Section heading
    pub heading: String,
    /// One card per present severity
    pub cards: Vec<IssueCard>,
}

impl IssueSection {
    /// True when there are no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Summary card for one severity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCard {
    /// Severity this card summarises
    pub severity: Severity,
    /// Card heading, e.g. "Critical Bugs: 3"
    pub heading: String,
    /// Reported count (authoritative)
    pub count: usize,
    /// Itemised lines
    pub items: Vec<String>,
    /// Severity colour
    pub swatch: Swatch,
    /// Severity icon
    pub glyph: Glyph,
}

/// Module panels in model order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureSection {
    /// Section heading
    pub heading: String,
    /// One panel per module
    pub panels: Vec<ModulePanel>,
}

impl ArchitectureSection {
    /// True when there are no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// One module panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePanel {
    /// Module title
    pub title: String,
    /// Panel colour
    pub accent: Swatch,
    /// Capability rows in model order
    pub rows: Vec<CapabilityRow>,
}

/// One capability row: primary name, de-emphasised description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRow {
    /// Capability name
    pub primary: String,
    /// Capability description
    pub secondary: String,
}

/// Vertical flow: stage rows interleaved with direction markers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSection {
    /// Section heading
    pub heading: String,
    /// `Stage, Marker, Stage, ...`; never starts or ends with a marker
    pub items: Vec<FlowItem>,
}

impl FlowSection {
    /// True when there are no stages.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stage rows only, in order.
    pub fn stage_rows(&self) -> impl Iterator<Item = &StageRow> {
        self.items.iter().filter_map(|item| match item {
            FlowItem::Stage(row) => Some(row),
            FlowItem::Marker(_) => None,
        })
    }

    /// Direction markers only, in order.
    pub fn markers(&self) -> impl Iterator<Item = &DirectionMarker> {
        self.items.iter().filter_map(|item| match item {
            FlowItem::Marker(marker) => Some(marker),
            FlowItem::Stage(_) => None,
        })
    }
}

/// Element of the flow column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FlowItem {
    /// A stage row
    Stage(StageRow),
    /// Arrow between two stage rows
    Marker(DirectionMarker),
}

/// One stage: caption plus `source -> destination` tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRow {
    /// Zero-based position in the pipeline
    pub index: usize,
    /// Stage name
    pub label: String,
    /// What the stage does
    pub description: String,
    /// Consumed artifact
    pub source: ArtifactTile,
    /// Produced artifact
    pub destination: ArtifactTile,
    /// Arrow between the two tiles
    pub arrow: Glyph,
}

/// One artifact box inside a stage row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactTile {
    /// Artifact name
    pub name: String,
    /// Artifact detail
    pub detail: String,
    /// Kind icon
    pub glyph: Glyph,
    /// Tile background tone
    pub swatch: Swatch,
}

/// Arrow between consecutive stage rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionMarker {
    /// Marker icon
    pub glyph: Glyph,
    /// False when the previous destination is not the next source
    pub continuous: bool,
}

/// Metric gauges in model order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualitySection {
    /// Section heading
    pub heading: String,
    /// Gauge track width every fill is measured against
    pub track_width: f64,
    /// One gauge per metric
    pub gauges: Vec<Gauge>,
}

impl QualitySection {
    /// True when there are no gauges.
    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}

/// A labelled horizontal bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    /// Metric name
    pub label: String,
    /// Clamped percentage
    pub percent: f64,
    /// Displayed value, "90%" or "7/10" for headline metrics
    pub value_text: String,
    /// Filled part of the track, `percent` of `track_width`
    pub fill_width: f64,
    /// Band of the clamped percentage
    pub band: Band,
    /// Fill colour
    pub swatch: Swatch,
    /// Rendered emphasised after a divider
    pub headline: bool,
}
