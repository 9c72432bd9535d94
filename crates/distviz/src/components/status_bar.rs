use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::theme;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str =
    "j/k: select | h/l: adjust | H/L: big step | Space: toggle | r: resample | q: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ratatui::style::Color::Red)),
                Span::raw(error.clone()),
            ])
        } else {
            Line::from(Span::styled(HELP_TEXT, theme::help_style()))
        };

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme::help_style())
                .style(Style::default().bg(theme::FIGURE_BG)),
        );

        frame.render_widget(paragraph, area);
    }
}
