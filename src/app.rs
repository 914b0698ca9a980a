//! The interactive application: event loop and rendering glue.
//!
//! The loop reacts to key events and to completion events from the transport
//! worker. All query-lifecycle decisions live in [`Session`]; this module
//! only wires events to it and draws what it exposes.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin},
    widgets::{Clear, Paragraph, TableState},
};
use throbber_widgets_tui::ThrobberState;
use tracing::info;

use crate::input::SearchInput;
use crate::search::{self, HttpClient, SearchCommand, SearchEvent};
use crate::session::{Session, SessionState};
use crate::tabs;
use crate::tables;
use crate::theme::Theme;
use crate::types::Query;

/// Everything the application needs to start, resolved from configuration.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub endpoint: String,
    pub timeout: Duration,
    pub initial_query: String,
    pub mode: crate::types::CombinationMode,
    pub theme: Theme,
}

/// Launch the interactive session against the configured endpoint.
pub fn run(options: AppOptions) -> Result<()> {
    let client = HttpClient::new(options.endpoint.clone(), options.timeout)?;
    let (search_tx, search_rx) = search::spawn(client);
    info!(endpoint = %options.endpoint, "starting search session");
    App::new(options, search_tx, search_rx).run()
}

pub struct App {
    session: Session,
    search_input: SearchInput,
    table_state: TableState,
    theme: Theme,
    throbber_state: ThrobberState,
    search_tx: Sender<SearchCommand>,
    search_rx: Receiver<SearchEvent>,
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.search_tx.send(SearchCommand::Shutdown);
    }
}

impl App {
    pub fn new(
        options: AppOptions,
        search_tx: Sender<SearchCommand>,
        search_rx: Receiver<SearchEvent>,
    ) -> Self {
        Self {
            session: Session::new(Query::new(options.initial_query.clone(), options.mode)),
            search_input: SearchInput::new(options.initial_query),
            table_state: TableState::default(),
            theme: options.theme,
            throbber_state: ThrobberState::default(),
            search_tx,
            search_rx,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        loop {
            self.pump_search_events();
            self.throbber_state.calc_next();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        ratatui::restore();
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        // Input/tabs row, status line, results below.
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(area);

        tabs::render_input_row(
            &self.search_input,
            self.session.query().mode,
            self.session.is_loading(),
            &self.throbber_state,
            frame,
            layout[0],
            &self.theme,
        );
        self.render_status(frame, layout[1]);
        tables::render_results(
            frame,
            layout[2],
            &mut self.table_state,
            self.session.hits(),
            self.session.tokens(),
            &self.theme,
        );

        // Minimal empty state once a search has come back with nothing.
        if self.session.hits().is_empty()
            && matches!(self.session.state(), SessionState::Success { .. })
        {
            let empty = Paragraph::new("No results")
                .alignment(Alignment::Center)
                .style(self.theme.empty_style());
            frame.render_widget(Clear, layout[2]);
            frame.render_widget(empty, layout[2]);
        }
    }

    fn render_status(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let (text, style) = match self.session.state() {
            SessionState::Idle => (
                "Enter searches, Tab switches mode, Esc quits".to_string(),
                self.theme.empty_style(),
            ),
            SessionState::Loading => ("Loading...".to_string(), self.theme.empty_style()),
            SessionState::Success { .. } => {
                let elapsed = self.session.processing_time_display().unwrap_or_default();
                (
                    format!("Query processed in {elapsed} seconds."),
                    self.theme.status_style(),
                )
            }
            SessionState::Failed { message } => (message.clone(), self.theme.error_style()),
        };
        frame.render_widget(Paragraph::new(text).style(style), area);
    }

    /// Handle one key press. Returns `true` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => {
                let mode = self.session.query().mode.toggled();
                self.session.set_mode(mode);
            }
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            _ => {
                if self.search_input.input(key) {
                    self.session.set_text(self.search_input.text());
                }
            }
        }
        false
    }

    fn submit(&mut self) {
        if let Some((id, request)) = self.session.begin_submit() {
            let _ = self.search_tx.send(SearchCommand::Submit { id, request });
        }
    }

    fn pump_search_events(&mut self) {
        loop {
            match self.search_rx.try_recv() {
                Ok(SearchEvent::Completed { id, outcome }) => {
                    self.session.complete(id, outcome);
                    self.ensure_selection();
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn move_selection_up(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    fn move_selection_down(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            if selected + 1 < self.session.hits().len() {
                self.table_state.select(Some(selected + 1));
            }
        } else if !self.session.hits().is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn ensure_selection(&mut self) {
        let len = self.session.hits().len();
        if len == 0 {
            self.table_state.select(None);
        } else if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        } else if let Some(selected) = self.table_state.selected()
            && selected >= len
        {
            self.table_state.select(Some(len.saturating_sub(1)));
        }
    }
}
