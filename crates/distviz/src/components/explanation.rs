//! The fixed block of explanatory text below the chart. Parameter changes
//! never touch it.

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::theme;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct Explanation;

impl Explanation {
    pub fn new() -> Self {
        Self
    }

    fn lines() -> Vec<Line<'static>> {
        let blue = Style::default().fg(theme::REFERENCE_COLOR);
        let orange = Style::default().fg(theme::DYNAMIC_COLOR);
        let text = theme::label_style();

        vec![
            Line::from(Span::styled(
                "How It Works:",
                text.add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(" - The ", text),
                Span::styled("blue histogram", blue),
                Span::styled(" and ", text),
                Span::styled("PDF", blue),
                Span::styled(" represent the fixed normal distribution (μ=0, σ=1).", text),
            ]),
            Line::from(vec![
                Span::styled(" - The ", text),
                Span::styled("orange histogram", orange),
                Span::styled(" and ", text),
                Span::styled("PDF", orange),
                Span::styled(" represent the dynamic normal distribution based on your inputs.", text),
            ]),
            Line::from(vec![
                Span::styled(" - Adjusting ", text),
                Span::styled("Mean (μ)", text.add_modifier(Modifier::BOLD)),
                Span::styled(" shifts the orange distribution left or right.", text),
            ]),
            Line::from(vec![
                Span::styled(" - Adjusting ", text),
                Span::styled("Std Dev (σ)", text.add_modifier(Modifier::BOLD)),
                Span::styled(" changes the spread of the orange distribution.", text),
            ]),
        ]
    }
}

impl Component for Explanation {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let paragraph = Paragraph::new(Self::lines()).style(theme::figure_style());
        frame.render_widget(paragraph, area);
    }
}
