//! Frameless legend rendered outside the plot's right edge.

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::theme;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct Legend;

impl Legend {
    pub fn new() -> Self {
        Self
    }

    fn entry(symbol: &'static str, color: ratatui::style::Color, label: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(symbol, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(label, theme::label_style()),
        ])
    }

    /// One entry per visible layer, in draw order.
    fn entries(state: &AppState) -> Vec<Line<'static>> {
        let params = &state.params;
        let mut lines = vec![Line::from("")];
        if params.show_histogram {
            lines.push(Self::entry("▆▆", theme::REFERENCE_COLOR, "Fixed Histogram"));
            lines.push(Self::entry("▆▆", theme::DYNAMIC_COLOR, "Dynamic Histogram"));
        }
        if params.show_density_curve {
            lines.push(Self::entry("──", theme::REFERENCE_COLOR, "Fixed Normal PDF"));
            lines.push(Self::entry("──", theme::DYNAMIC_COLOR, "Dynamic Normal PDF"));
        }
        lines
    }
}

impl Component for Legend {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph = Paragraph::new(Self::entries(state)).style(theme::figure_style());
        frame.render_widget(paragraph, area);
    }
}
