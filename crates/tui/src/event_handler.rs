//! Event handling utilities for the TUI.
//!
//! This module translates terminal input into controller input and
//! controller signals into status text:
//! - Keyboard events (editing the input line, navigation keys)
//! - Paste events
//! - Signal descriptions for the status bar

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sk_core::display::SharedText;
use sk_protocol::ipc::{Signal, SuggestKey};

/// What a key press means for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// The input line was edited; carries the new value.
    TextChanged(String),
    /// A key the controller handles.
    Suggest(SuggestKey),
    Quit,
    Ignored,
}

/// Handle a keyboard event from the user, editing `input` in place.
pub fn handle_keyboard_event(key_event: KeyEvent, input: &SharedText) -> KeyAction {
    if key_event.kind != KeyEventKind::Press {
        return KeyAction::Ignored;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::Ignored,
        };
    }

    match key_event.code {
        KeyCode::Char(c) => KeyAction::TextChanged(input.update(|value| value.push(c))),
        KeyCode::Backspace => {
            let mut removed = false;
            let value = input.update(|value| removed = value.pop().is_some());
            if removed {
                KeyAction::TextChanged(value)
            } else {
                KeyAction::Ignored
            }
        }
        KeyCode::Esc => KeyAction::Suggest(SuggestKey::Escape),
        KeyCode::Tab => KeyAction::Suggest(SuggestKey::Tab),
        KeyCode::Enter => KeyAction::Suggest(SuggestKey::Enter),
        KeyCode::Up => KeyAction::Suggest(SuggestKey::Up),
        KeyCode::Down => KeyAction::Suggest(SuggestKey::Down),
        _ => KeyAction::Ignored,
    }
}

/// Append pasted text to the input line. Line breaks are dropped.
pub fn handle_paste(pasted: &str, input: &SharedText) -> KeyAction {
    let cleaned: String = pasted.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    if cleaned.is_empty() {
        return KeyAction::Ignored;
    }
    KeyAction::TextChanged(input.update(|value| value.push_str(&cleaned)))
}

/// Status bar text for a signal, if it warrants one.
pub fn describe_signal(signal: &Signal) -> Option<String> {
    match signal {
        Signal::Requesting { query } => Some(format!("Searching for \"{query}\"...")),
        Signal::ResultsReady { query, count } => Some(match count {
            0 => format!("No matches for \"{query}\""),
            1 => format!("1 match for \"{query}\""),
            n => format!("{n} matches for \"{query}\""),
        }),
        Signal::Selected { candidate } => Some(format!("Selected \"{}\"", candidate.display_text)),
        Signal::Shown | Signal::Hidden => None,
    }
}
