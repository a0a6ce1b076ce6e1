//! CSS for the HTML painter.
//!
//! Colour tokens used by the components come from [`crate::tree::Swatch`]
//! and are applied inline; this sheet only carries layout, typography and
//! neutral tones.
//!
//! # Customization
//!
//! ```rust
//! use report_render::styles::REPORT_CSS;
//!
//! let my_css = ".gauge-track { height: 16px; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```

/// Complete CSS for the report page.
pub const REPORT_CSS: &str = r#"
:root {
    --bg-page-from: #eff6ff;
    --bg-page-to: #e0e7ff;
    --bg-card: #ffffff;
    --text-strong: #1e1b4b;
    --text-body: #374151;
    --text-dim: #4b5563;
    --track: #e5e7eb;
    --border-subtle: #e5e7eb;
    --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 72rem;
    --radius: 0.5rem;
    --shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: linear-gradient(to bottom right, var(--bg-page-from), var(--bg-page-to));
    color: var(--text-body);
    line-height: 1.5;
    margin: 0;
    min-height: 100vh;
}

.report-page {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 2rem;
}

/* Header */
.report-header {
    text-align: center;
    margin-bottom: 2rem;
}

.report-header h1 {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--text-strong);
    margin: 0 0 0.5rem;
}

.report-subtitle {
    color: var(--text-dim);
    margin: 0;
}

/* Sections */
.report-section {
    background: var(--bg-card);
    border-radius: var(--radius);
    box-shadow: var(--shadow);
    padding: 1.5rem;
    margin-bottom: 2rem;
}

.report-section h2 {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--text-strong);
    margin: 0 0 1.25rem;
}

.section-empty {
    color: var(--text-dim);
    font-style: italic;
    margin: 0;
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
    gap: 1rem;
}

/* Issue cards */
.issue-card {
    border-radius: var(--radius);
    border: 2px solid;
    padding: 1rem;
}

.issue-card-head {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.5rem;
}

.issue-card-head h3 {
    font-size: 1rem;
    margin: 0;
}

.issue-card ul {
    margin: 0;
    padding-left: 1.1rem;
    font-size: 0.875rem;
}

.issue-card li + li {
    margin-top: 0.25rem;
}

/* Module panels */
.module-panel {
    border-radius: var(--radius);
    border: 2px solid;
    padding: 1rem;
}

.module-panel h3 {
    font-size: 1.125rem;
    margin: 0 0 0.75rem;
}

.capability-row {
    background: var(--bg-card);
    border-radius: 0.25rem;
    padding: 0.5rem;
    font-size: 0.875rem;
}

.capability-row + .capability-row {
    margin-top: 0.5rem;
}

.capability-name {
    font-weight: 600;
}

.capability-desc {
    color: var(--text-dim);
}

/* Data flow */
.flow-column {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.flow-stage-caption {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    color: var(--text-dim);
    margin-bottom: 0.25rem;
}

.flow-stage-row {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.flow-tile {
    flex: 1;
    border-radius: var(--radius);
    padding: 0.75rem;
}

.flow-tile-name {
    font-weight: 600;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
}

.flow-tile-detail {
    color: var(--text-dim);
    font-size: 0.875rem;
    margin-top: 0.25rem;
}

.flow-marker {
    display: flex;
    justify-content: center;
    color: var(--text-dim);
}

.flow-marker.broken {
    opacity: 0.35;
}

/* Gauges */
.gauge + .gauge {
    margin-top: 0.75rem;
}

.gauge-head {
    display: flex;
    justify-content: space-between;
    margin-bottom: 0.25rem;
}

.gauge-label {
    font-weight: 600;
}

.gauge-track {
    background: var(--track);
    border-radius: 9999px;
    height: 0.75rem;
    overflow: hidden;
}

.gauge-fill {
    height: 100%;
    border-radius: 9999px;
}

.gauge.headline {
    border-top: 2px solid var(--border-subtle);
    padding-top: 1rem;
}

.gauge.headline .gauge-label,
.gauge.headline .gauge-value {
    font-size: 1.125rem;
    font-weight: 700;
}

.gauge.headline .gauge-track {
    height: 1rem;
}

/* Footer */
.report-footer {
    text-align: center;
    color: var(--text-dim);
    font-size: 0.875rem;
}

.report-footer p {
    margin: 0.25rem 0;
}
"#;

/// Content-Security-Policy for the generated page: no scripts, no network.
pub const CSP: &str = "default-src 'none'; img-src data:; style-src 'unsafe-inline';";
