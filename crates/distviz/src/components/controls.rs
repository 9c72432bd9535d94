//! The parameter sidebar: two sliders for the dynamic distribution, the two
//! layer toggles, and the bin width slider.

use crate::components::{Component, EventResult};
use crate::state::{AppState, ControlId};
use crate::theme;
use crossterm::event::{KeyCode, KeyEvent};
use distviz_core::params::{BIN_WIDTH_RANGE, MEAN_RANGE, STD_DEV_RANGE};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of the slider track in cells.
const TRACK_WIDTH: usize = 21;

pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }

    fn range_of(control: ControlId) -> (f64, f64) {
        match control {
            ControlId::Mean => MEAN_RANGE,
            ControlId::StdDev => STD_DEV_RANGE,
            ControlId::BinWidth => BIN_WIDTH_RANGE,
            // Toggles have no range; never asked for one.
            ControlId::ShowDensityCurve | ControlId::ShowHistogram => (0.0, 1.0),
        }
    }

    /// A one-line slider track with the marker at the value's position.
    fn slider_track(value: f64, range: (f64, f64)) -> String {
        let ratio = ((value - range.0) / (range.1 - range.0)).clamp(0.0, 1.0);
        let marker = (ratio * (TRACK_WIDTH - 1) as f64).round() as usize;
        let mut track = String::with_capacity(TRACK_WIDTH * 3);
        for i in 0..TRACK_WIDTH {
            track.push(if i == marker { '●' } else { '─' });
        }
        track
    }

    fn slider_lines(state: &AppState, control: ControlId, value: f64) -> Vec<Line<'static>> {
        let selected = state.selected == control;
        let prefix = if selected { "> " } else { "  " };
        let label_style = if selected {
            theme::focus_style().add_modifier(Modifier::BOLD)
        } else {
            theme::label_style()
        };
        let track_style = if selected {
            theme::focus_style()
        } else {
            theme::help_style()
        };

        vec![
            Line::from(vec![
                Span::styled(format!("{prefix}{:<18}", control.label()), label_style),
                Span::styled(format!("{value:>6.1}"), theme::label_style()),
            ]),
            Line::from(Span::styled(
                format!("  {}", Self::slider_track(value, Self::range_of(control))),
                track_style,
            )),
            Line::from(""),
        ]
    }

    fn toggle_line(state: &AppState, control: ControlId, on: bool) -> Vec<Line<'static>> {
        let selected = state.selected == control;
        let prefix = if selected { "> " } else { "  " };
        let label_style = if selected {
            theme::focus_style().add_modifier(Modifier::BOLD)
        } else {
            theme::label_style()
        };
        let mark = if on { "[x]" } else { "[ ]" };

        vec![
            Line::from(Span::styled(
                format!("{prefix}{mark} {}", control.label()),
                label_style,
            )),
            Line::from(""),
        ]
    }
}

impl Component for ControlsPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.select_next();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.select_prev();
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                state.adjust_selected(-1.0);
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                state.adjust_selected(1.0);
                EventResult::Handled
            }
            KeyCode::Char('H') => {
                state.adjust_selected(-10.0);
                EventResult::Handled
            }
            KeyCode::Char('L') => {
                state.adjust_selected(10.0);
                EventResult::Handled
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                state.toggle_selected();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::help_style())
            .title(Span::styled(" ADJUST PARAMETERS ", theme::label_style()))
            .style(Style::default().bg(theme::FIGURE_BG));

        let params = &state.params;
        let mut lines = vec![Line::from("")];
        lines.extend(Self::slider_lines(state, ControlId::Mean, params.mean));
        lines.extend(Self::slider_lines(state, ControlId::StdDev, params.std_dev));
        lines.extend(Self::toggle_line(
            state,
            ControlId::ShowDensityCurve,
            params.show_density_curve,
        ));
        lines.extend(Self::toggle_line(
            state,
            ControlId::ShowHistogram,
            params.show_histogram,
        ));
        lines.extend(Self::slider_lines(state, ControlId::BinWidth, params.bin_width));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
