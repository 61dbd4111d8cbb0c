//! TUI application state and event loop.
//!
//! This module defines the main `App` struct that manages the TUI state
//! and the event loop using `tokio::select!`.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use sk_core::display::{SharedSurface, SharedText, TextTarget};
use sk_protocol::ipc::{InputEvent, Signal};
use tokio::select;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_stream::StreamExt;

use crate::event_handler::{self, KeyAction};
use crate::tui::{Tui, TuiEvent};
use crate::widgets::{render_input_line, SuggestionPopup};

/// Main TUI application state.
///
/// The input line and the popup state are shared with the controller, which
/// writes to them from the runtime task; the app only reads them to draw.
pub struct App {
    /// Text typed by the user.
    input: SharedText,
    /// What the controller last asked to display.
    surface: SharedSurface,
    /// Channel to send input to the runtime.
    input_tx: UnboundedSender<InputEvent>,
    /// Channel to receive signals from the controller.
    signal_rx: UnboundedReceiver<Signal>,
    /// Text shown in the status bar.
    pub status: String,
    /// Texts committed during this session, oldest first.
    pub selections: Vec<String>,
    /// Set once the runtime stopped accepting input.
    pub disconnected: bool,
    /// Flag to indicate if the application should exit.
    pub should_exit: bool,
}

impl App {
    pub fn new(
        input: SharedText,
        surface: SharedSurface,
        input_tx: UnboundedSender<InputEvent>,
        signal_rx: UnboundedReceiver<Signal>,
    ) -> Self {
        Self {
            input,
            surface,
            input_tx,
            signal_rx,
            status: "Start typing to see suggestions".to_string(),
            selections: Vec::new(),
            disconnected: false,
            should_exit: false,
        }
    }

    /// Main event loop.
    ///
    /// Uses `tokio::select!` to handle terminal input and controller signals
    /// concurrently, redrawing after each.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();

        tui.draw(|frame| self.render(frame))?;

        while !self.should_exit {
            select! {
                Some(signal) = self.signal_rx.recv() => {
                    self.handle_signal(signal);
                }
                tui_event = tui_events.next() => match tui_event {
                    Some(event) => self.handle_tui_event(event),
                    None => self.should_exit = true,
                },
            }
            tui.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn handle_signal(&mut self, signal: Signal) {
        if let Signal::Selected { candidate } = &signal {
            self.selections.push(candidate.display_text.clone());
        }
        if let Some(status) = event_handler::describe_signal(&signal) {
            self.status = status;
        }
    }

    fn handle_tui_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key_event) => self.handle_key_event(key_event),
            TuiEvent::Paste(text) => {
                let action = event_handler::handle_paste(&text, &self.input);
                self.apply(action);
            }
            TuiEvent::Resize => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let action = event_handler::handle_keyboard_event(key_event, &self.input);
        self.apply(action);
    }

    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::TextChanged(value) => self.send(InputEvent::TextChanged { value }),
            KeyAction::Suggest(key) => self.send(InputEvent::Key { key }),
            KeyAction::Quit => self.should_exit = true,
            KeyAction::Ignored => {}
        }
    }

    fn send(&mut self, event: InputEvent) {
        if self.input_tx.send(event).is_err() {
            tracing::warn!("Suggestion runtime stopped; input is no longer processed");
            self.disconnected = true;
            self.status = "Suggestions unavailable".to_string();
        }
    }

    fn render(&self, frame: &mut Frame) {
        let state = self.surface.snapshot();
        let popup = SuggestionPopup::new(&state);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(popup.height()),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        render_input_line(frame, chunks[0], &self.input.value(), self.disconnected);
        frame.render_widget(popup, chunks[1]);
        self.render_selections(frame, chunks[2]);

        let status = Paragraph::new(self.status.as_str()).style(Style::default().fg(Color::Gray));
        frame.render_widget(status, chunks[3]);
    }

    fn render_selections(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .selections
            .iter()
            .rev()
            .map(|text| ListItem::new(text.as_str()))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Selected ({})", self.selections.len())),
        );
        frame.render_widget(list, area);
    }
}
