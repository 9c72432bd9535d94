//! The distribution comparison chart.
//!
//! Turns the current `ChartLayers` into ratatui datasets: histograms as bar
//! datasets under the density curves, reference always in blue, dynamic
//! always in orange. Axis lines are painted in the plot background so only
//! the white labels remain visible.

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::theme;
use crossterm::event::KeyEvent;
use distviz_core::DOMAIN;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph},
};

const TITLE: &str = " Interactive Normal Distribution Visualization ";

/// Horizontal spacing of the synthetic points that fill each histogram bar.
const BAR_FILL_STEP: f64 = 0.05;

/// Expand one (center, density) series into a dense point cloud so a bar
/// dataset fills the full bin width instead of drawing a single column.
fn fill_bar_points(series: &[(f64, f64)], bin_width: f64) -> Vec<(f64, f64)> {
    let per_bin = ((bin_width / BAR_FILL_STEP).round() as usize).max(1);
    let mut points = Vec::with_capacity(series.len() * per_bin);
    for &(center, density) in series {
        if density <= 0.0 {
            continue;
        }
        let left = center - bin_width / 2.0;
        for i in 0..per_bin {
            let x = left + bin_width * (i as f64 + 0.5) / per_bin as f64;
            points.push((x, density));
        }
    }
    points
}

pub struct DistributionChart;

impl DistributionChart {
    pub fn new() -> Self {
        Self
    }
}

impl Component for DistributionChart {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(Span::styled(TITLE, theme::label_style()))
            .style(theme::plot_style());

        if area.width < 20 || area.height < 5 {
            let paragraph = Paragraph::new("Area too small").style(theme::help_style());
            frame.render_widget(paragraph, area);
            return;
        }

        let layers = &state.layers;
        let bin_width = state.params.bin_width;

        let reference_bars = layers
            .reference_histogram
            .as_deref()
            .map(|series| fill_bar_points(series, bin_width));
        let dynamic_bars = layers
            .dynamic_histogram
            .as_deref()
            .map(|series| fill_bar_points(series, bin_width));

        // Histograms first so the curves draw on top of them.
        let mut datasets = Vec::new();
        if let Some(points) = &reference_bars {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::HalfBlock)
                    .graph_type(GraphType::Bar)
                    .style(Style::default().fg(theme::REFERENCE_COLOR))
                    .data(points),
            );
        }
        if let Some(points) = &dynamic_bars {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::HalfBlock)
                    .graph_type(GraphType::Bar)
                    .style(Style::default().fg(theme::DYNAMIC_COLOR))
                    .data(points),
            );
        }
        if let Some(curve) = &layers.reference_curve {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(theme::REFERENCE_COLOR))
                    .data(curve),
            );
        }
        if let Some(curve) = &layers.dynamic_curve {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(theme::DYNAMIC_COLOR))
                    .data(curve),
            );
        }

        // A little headroom so the tallest peak doesn't touch the title row.
        let y_max = layers.y_max() * 1.05;

        let x_labels = vec![
            Span::styled("-10", theme::label_style()),
            Span::styled("-5", theme::label_style()),
            Span::styled("0", theme::label_style()),
            Span::styled("5", theme::label_style()),
            Span::styled("10", theme::label_style()),
        ];
        let y_labels = vec![
            Span::styled("0.00", theme::label_style()),
            Span::styled(format!("{:.2}", y_max / 2.0), theme::label_style()),
            Span::styled(format!("{y_max:.2}"), theme::label_style()),
        ];

        // Axis lines take the plot background color: labels only, no spines.
        let x_axis = Axis::default()
            .bounds([DOMAIN.0, DOMAIN.1])
            .labels(x_labels)
            .style(Style::default().fg(theme::PLOT_BG));
        let y_axis = Axis::default()
            .bounds([0.0, y_max])
            .labels(y_labels)
            .style(Style::default().fg(theme::PLOT_BG));

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_points_fill_the_bin_width() {
        let series = vec![(0.25, 2.0)];
        let points = fill_bar_points(&series, 0.5);
        assert_eq!(points.len(), 10);
        for &(x, y) in &points {
            assert!(x > 0.0 && x < 0.5);
            assert_eq!(y, 2.0);
        }
    }

    #[test]
    fn empty_bins_produce_no_bar_points() {
        let series = vec![(0.25, 0.0), (0.75, 1.0)];
        let points = fill_bar_points(&series, 0.5);
        assert!(points.iter().all(|&(x, _)| x > 0.5));
    }

    #[test]
    fn narrow_bins_still_get_one_point() {
        let series = vec![(0.05, 4.0)];
        let points = fill_bar_points(&series, 0.1);
        assert_eq!(points.len(), 2);
    }
}
