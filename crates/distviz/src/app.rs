use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use crate::components::{
    Component, EventResult, chart::DistributionChart, controls::ControlsPanel,
    explanation::Explanation, legend::Legend, status_bar::StatusBar,
};
use crate::state::AppState;
use crate::theme;

/// Width of the parameter sidebar.
const SIDEBAR_WIDTH: u16 = 34;
/// Width of the legend column to the right of the plot.
const LEGEND_WIDTH: u16 = 24;

pub struct App {
    state: AppState,
    controls: ControlsPanel,
    chart: DistributionChart,
    legend: Legend,
    explanation: Explanation,
    status_bar: StatusBar,
}

impl App {
    /// `seed` fixes the sampling sequence; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            state: AppState::new(seed),
            controls: ControlsPanel::new(),
            chart: DistributionChart::new(),
            legend: Legend::new(),
            explanation: Explanation::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Figure background behind everything.
        frame.render_widget(Block::default().style(theme::figure_style()), frame.area());

        // Sidebar on the left, chart column on the right.
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(frame.area());

        self.controls.render(frame, chunks[0], &self.state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Chart + legend
                Constraint::Length(6), // Explanation
                Constraint::Length(2), // Status bar
            ])
            .split(chunks[1]);

        let chart_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(LEGEND_WIDTH)])
            .split(right[0]);

        self.chart.render(frame, chart_row[0], &self.state);
        self.legend.render(frame, chart_row[1], &self.state);
        self.explanation.render(frame, right[1], &self.state);
        self.status_bar.render(frame, right[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('r') if key_event.modifiers.is_empty() => {
                // Redraw with fresh samples, same parameters.
                self.state.refresh_layers();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.controls.handle_key(key_event, &mut self.state);
        if result == EventResult::NotHandled {
            tracing::trace!(code = ?key_event.code, "unbound key");
        }
    }
}
