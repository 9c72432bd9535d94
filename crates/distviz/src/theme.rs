//! The fixed dark palette and shared styles.
//!
//! All chart styling lives here as declarative constants; the components
//! only pick which constant applies. The hues are fixed: blue always marks
//! the reference distribution, orange always marks the dynamic one.

use ratatui::prelude::*;

/// Background of the whole terminal "figure".
pub const FIGURE_BG: Color = Color::Rgb(0x20, 0x22, 0x25);
/// Background of the plot area itself.
pub const PLOT_BG: Color = Color::Rgb(0x2c, 0x2f, 0x33);
/// Reference distribution hue (histogram and curve).
pub const REFERENCE_COLOR: Color = Color::Rgb(0x1f, 0x77, 0xb4);
/// Dynamic distribution hue (histogram and curve).
pub const DYNAMIC_COLOR: Color = Color::Rgb(0xff, 0x7f, 0x0e);
/// Axis labels, titles, legend text.
pub const TEXT_COLOR: Color = Color::White;
/// Help lines and secondary chrome.
pub const MUTED_COLOR: Color = Color::DarkGray;
/// Selected control highlight.
pub const FOCUS_COLOR: Color = Color::Yellow;

pub fn figure_style() -> Style {
    Style::default().bg(FIGURE_BG).fg(TEXT_COLOR)
}

pub fn plot_style() -> Style {
    Style::default().bg(PLOT_BG).fg(TEXT_COLOR)
}

pub fn label_style() -> Style {
    Style::default().fg(TEXT_COLOR)
}

pub fn help_style() -> Style {
    Style::default().fg(MUTED_COLOR)
}

pub fn focus_style() -> Style {
    Style::default().fg(FOCUS_COLOR)
}
