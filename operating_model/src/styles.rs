//! CSS for the operating model widget.
//!
//! All classes are prefixed with `om-` so the widget can be embedded in a
//! larger page. To extend or override styles:
//!
//! ```rust
//! use operating_model::styles::WIDGET_CSS;
//!
//! let my_css = ".om-item { border-radius: 0; }";
//! let combined = format!("{}\n{}", WIDGET_CSS, my_css);
//! ```

/// Complete CSS for the widget: header, scroll stage, country strip,
/// section boxes, item grid and detail modal.
pub const WIDGET_CSS: &str = r#"
:root {
    --om-font: 'Everett', 'Inter', system-ui, sans-serif;
    --om-text: #1f2937;
    --om-text-dim: #6b7280;
    --om-text-mid: #4b5563;
    --om-border: #e5e7eb;
    --om-border-dashed: #d1d5db;
    --om-surface: #ffffff;
    --om-surface-dim: #f9fafb;
    --om-surface-hover: #f3f4f6;
    --om-accent: #3b82f6;
    --om-accent-bg: #eff6ff;
    --om-accent-text: #1d4ed8;
    --om-accent-label: #2563eb;
    --om-alert: #ef4444;
    --om-header-width: 12rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

.om-widget {
    width: 100%;
    background: var(--om-surface);
    border-radius: 0.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    font-family: var(--om-font);
    color: var(--om-text);
}

/* Header */
.om-header {
    padding: 1rem;
    border-bottom: 1px solid var(--om-border);
}

.om-header-line {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}

.om-title {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--om-text);
}

.om-tagline {
    color: var(--om-alert);
    font-size: 1.25rem;
}

/* Scroll stage */
.om-stage {
    position: relative;
}

.om-scroll-btn {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    z-index: 10;
    padding: 0.5rem;
    background: var(--om-surface);
    border: 1px solid var(--om-border);
    border-radius: 9999px;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    cursor: pointer;
    line-height: 0;
}

.om-scroll-prev { left: 0; }
.om-scroll-next { right: 0; }

.om-viewport {
    position: relative;
    overflow-x: auto;
    padding-bottom: 1rem;
    scroll-behavior: smooth;
    scrollbar-width: none;
    -ms-overflow-style: none;
}

.om-viewport::-webkit-scrollbar {
    display: none;
}

.om-canvas {
    display: inline-block;
    min-width: max-content;
    padding: 1rem;
}

/* Country strip */
.om-countries {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
    margin-left: var(--om-header-width);
}

.om-country {
    width: 6rem;
    padding: 0.5rem;
    border: 1px solid var(--om-border);
    border-radius: 0.25rem;
    background: var(--om-surface-dim);
    font-size: 0.75rem;
    font-weight: 500;
    text-align: center;
    cursor: pointer;
}

.om-country:hover { background: var(--om-surface-hover); }

.om-country.selected {
    border-color: var(--om-accent);
    background: var(--om-accent-bg);
    color: var(--om-accent-text);
}

/* Sections */
.om-sections {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.om-section {
    border: 1px solid var(--om-border);
    border-radius: 0.5rem;
    padding: 1rem;
    margin-bottom: 1.5rem;
}

.om-header-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1rem;
    cursor: pointer;
}

.om-subsection .om-header-row {
    margin-bottom: 0.5rem;
}

.om-header-chip {
    width: var(--om-header-width);
    padding: 0.75rem;
    border-radius: 0.25rem;
    font-weight: 500;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.om-leader {
    flex: 1;
    height: 2.5rem;
    border-bottom: 1px dashed var(--om-border-dashed);
}

.om-body-grouped { margin-left: 2rem; }
.om-body-flat { margin-left: var(--om-header-width); }
.om-subsection-body { margin-left: var(--om-header-width); }

.om-subsection { margin-bottom: 1rem; }
.om-subsection:last-child { margin-bottom: 0; }

/* Item grid */
.om-grid {
    display: grid;
    gap: 1rem;
}

.om-item {
    padding: 0.75rem;
    border: 1px solid var(--om-border);
    border-radius: 0.25rem;
    cursor: pointer;
    transition: background-color 0.15s ease;
}

.om-item:hover { background: var(--om-surface-dim); }

.om-item.selected {
    border-color: var(--om-accent);
    background: var(--om-accent-bg);
}

.om-item-name {
    font-weight: 500;
    font-size: 0.875rem;
}

.om-item-details {
    margin-top: 0.5rem;
    font-size: 0.75rem;
    color: var(--om-text-dim);
}

.om-item-country {
    margin-top: 0.5rem;
    font-size: 0.75rem;
    color: var(--om-accent-label);
}

/* Detail modal */
.om-modal-backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.2);
}

.om-modal {
    width: 24rem;
    background: var(--om-surface);
    border: 1px solid var(--om-border);
    border-radius: 0.5rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    font-family: var(--om-font);
}

.om-modal-inner {
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.om-modal-head {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
}

.om-modal-title {
    margin: 0 0 0.25rem;
    font-size: 1.25rem;
    font-weight: 600;
}

.om-modal-country {
    margin: 0;
    font-size: 0.875rem;
    color: var(--om-text-dim);
}

.om-close {
    padding: 0.25rem;
    border: none;
    background: transparent;
    border-radius: 9999px;
    cursor: pointer;
    line-height: 0;
}

.om-close:hover { background: var(--om-surface-hover); }

.om-modal-block {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.om-modal-block-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin: 0;
    font-size: 1rem;
    font-weight: 500;
    color: #374151;
}

.om-modal-text {
    margin: 0;
    padding-left: 1.75rem;
    color: var(--om-text-dim);
}

.om-modal-text.italic { font-style: italic; }

.om-modal-details {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}

.om-modal-detail {
    padding: 0.5rem;
    border-radius: 0.25rem;
    background: var(--om-surface-dim);
    font-size: 0.875rem;
    color: var(--om-text-mid);
}
"#;
