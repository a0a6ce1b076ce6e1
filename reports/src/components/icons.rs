//! Inline SVG icons.
//!
//! Paths are drawn on a 256×256 grid in the style of
//! [Phosphor Icons](https://phosphoricons.com/) (Regular weight). Every
//! [`Glyph`] maps to exactly one path.

use leptos::prelude::*;

use crate::tree::Glyph;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "20")
/// * `color` - Fill color (default: "currentColor")
/// * `class` - Additional CSS classes (default: "")
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Icon for a [`Glyph`].
#[component]
pub fn GlyphIcon(
    /// Which icon
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
) -> impl IntoView {
    view! { <Icon path={glyph_path(glyph)} size=size color=color /> }
}

/// SVG path data for a glyph.
pub fn glyph_path(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::XCircle => ICON_X_CIRCLE,
        Glyph::CheckCircle => ICON_CHECK_CIRCLE,
        Glyph::WarningCircle => ICON_WARNING_CIRCLE,
        Glyph::Database => ICON_DATABASE,
        Glyph::Lightning => ICON_LIGHTNING,
        Glyph::Printer => ICON_PRINTER,
        Glyph::FileText => ICON_FILE_TEXT,
        Glyph::ArrowRight => ICON_ARROW_RIGHT,
        Glyph::ArrowDown => ICON_ARROW_DOWN,
    }
}

// =============================================================================
// Icon paths
// =============================================================================

/// Circle with an X (critical)
pub const ICON_X_CIRCLE: &str = "M165.66,101.66,139.31,128l26.35,26.34a8,8,0,0,1-11.32,11.32L128,139.31l-26.34,26.35a8,8,0,0,1-11.32-11.32L116.69,128,90.34,101.66a8,8,0,0,1,11.32-11.32L128,116.69l26.34-26.35a8,8,0,0,1,11.32,11.32ZM232,128A104,104,0,1,1,128,24,104.11,104.11,0,0,1,232,128Zm-16,0a88,88,0,1,0-88,88A88.1,88.1,0,0,0,216,128Z";

/// Circle with a check mark (fixed)
pub const ICON_CHECK_CIRCLE: &str = "M173.66,98.34a8,8,0,0,1,0,11.32l-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35A8,8,0,0,1,173.66,98.34ZM232,128A104,104,0,1,1,128,24,104.11,104.11,0,0,1,232,128Zm-16,0a88,88,0,1,0-88,88A88.1,88.1,0,0,0,216,128Z";

/// Warning/alert circle icon
pub const ICON_WARNING_CIRCLE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm-8-80V80a8,8,0,0,1,16,0v56a8,8,0,0,1-16,0Zm8,40a12,12,0,1,1,12-12A12,12,0,0,1,128,176Z";

/// Stacked cylinder (data store)
pub const ICON_DATABASE: &str = "M128,24C74.17,24,32,48.6,32,80v96c0,31.4,42.17,56,96,56s96-24.6,96-56V80C224,48.6,181.83,24,128,24Zm0,16c46.2,0,80,20.21,80,40s-33.8,40-80,40S48,99.79,48,80,81.8,40,128,40Zm80,136c0,19.79-33.8,40-80,40s-80-20.21-80-40V153.34C64.13,168.6,93.39,176,128,176s63.87-7.4,80-22.66Zm0-48c0,19.79-33.8,40-80,40s-80-20.21-80-40V105.34C64.13,120.6,93.39,128,128,128s63.87-7.4,80-22.66Z";

/// Lightning bolt (process step)
pub const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

/// Printer (output)
pub const ICON_PRINTER: &str = "M208,80H192V40a8,8,0,0,0-8-8H72a8,8,0,0,0-8,8V80H48a24,24,0,0,0-24,24v72a8,8,0,0,0,8,8H64v32a8,8,0,0,0,8,8H184a8,8,0,0,0,8-8V184h32a8,8,0,0,0,8-8V104A24,24,0,0,0,208,80ZM80,48h96V80H80ZM176,208H80V160h96Zm40-40H192V152a8,8,0,0,0-8-8H72a8,8,0,0,0-8,8v16H40V104a8,8,0,0,1,8-8H208a8,8,0,0,1,8,8Zm-24-52a12,12,0,1,1-12-12A12,12,0,0,1,192,116Z";

/// Page with text lines (document)
pub const ICON_FILE_TEXT: &str = "M213.66,82.34l-56-56A8,8,0,0,0,152,24H56A16,16,0,0,0,40,40V216a16,16,0,0,0,16,16H200a16,16,0,0,0,16-16V88A8,8,0,0,0,213.66,82.34ZM160,51.31,188.69,80H160ZM200,216H56V40h88V88a8,8,0,0,0,8,8h48V216Zm-32-80a8,8,0,0,1-8,8H96a8,8,0,0,1,0-16h64A8,8,0,0,1,168,136Zm0,32a8,8,0,0,1-8,8H96a8,8,0,0,1,0-16h64A8,8,0,0,1,168,168Z";

/// Right arrow (inside a flow row)
pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

/// Down arrow (between flow rows)
pub const ICON_ARROW_DOWN: &str = "M205.66,149.66l-72,72a8,8,0,0,1-11.32,0l-72-72a8,8,0,0,1,11.32-11.32L120,196.69V40a8,8,0,0,1,16,0V196.69l58.34-58.35a8,8,0,0,1,11.32,11.32Z";
