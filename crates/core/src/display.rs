//! Display and input surface contracts.
//!
//! The controller never renders anything itself. It drives a
//! [`DisplaySurface`] (an ordered list that can be shown, hidden and
//! highlighted) and reads/writes text through [`TextTarget`]s.
//!
//! [`SharedSurface`] and [`SharedText`] are cloneable in-memory
//! implementations: the controller owns one handle while a renderer or a
//! test keeps another and reads snapshots from it.

use crate::highlight::HighlightedText;
use serde::Serialize;
use sk_protocol::candidate::Candidate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One row handed to a display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub id: String,
    /// Plain display text.
    pub text: String,
    /// Display text split around query matches.
    pub markup: HighlightedText,
    pub selectable: bool,
}

impl DisplayEntry {
    pub fn new(candidate: &Candidate, markup: HighlightedText) -> Self {
        Self {
            id: candidate.id.clone(),
            text: candidate.display_text.clone(),
            markup,
            selectable: candidate.selectable,
        }
    }
}

/// An ordered list renderer driven by the controller.
pub trait DisplaySurface: Send {
    /// Replace all rows.
    fn render(&mut self, entries: &[DisplayEntry]);

    /// Mark one row as highlighted, or none.
    fn set_highlight(&mut self, index: Option<usize>);

    fn show(&mut self);

    fn hide(&mut self);

    /// The controller is done with the surface.
    fn release(&mut self);
}

/// A readable and writable text value (an input field, an append target).
pub trait TextTarget: Send {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);
}

/// Everything a [`SharedSurface`] has been told so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub entries: Vec<DisplayEntry>,
    pub highlighted: Option<usize>,
    pub visible: bool,
    pub released: bool,
    /// How many times `show` / `hide` were called.
    pub show_count: usize,
    pub hide_count: usize,
}

/// In-memory display surface with cloneable handles.
#[derive(Debug, Clone, Default)]
pub struct SharedSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl SharedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SurfaceState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DisplaySurface for SharedSurface {
    fn render(&mut self, entries: &[DisplayEntry]) {
        let mut state = self.lock();
        state.entries = entries.to_vec();
        state.highlighted = None;
    }

    fn set_highlight(&mut self, index: Option<usize>) {
        self.lock().highlighted = index;
    }

    fn show(&mut self) {
        let mut state = self.lock();
        state.visible = true;
        state.show_count += 1;
    }

    fn hide(&mut self) {
        let mut state = self.lock();
        state.visible = false;
        state.hide_count += 1;
    }

    fn release(&mut self) {
        let mut state = self.lock();
        state.entries.clear();
        state.highlighted = None;
        state.visible = false;
        state.released = true;
    }
}

/// In-memory text value with cloneable handles.
#[derive(Debug, Clone, Default)]
pub struct SharedText {
    value: Arc<Mutex<String>>,
}

impl SharedText {
    pub fn new(value: &str) -> Self {
        Self {
            value: Arc::new(Mutex::new(value.to_string())),
        }
    }

    /// Edit the value in place and return the result.
    pub fn update<F>(&self, f: F) -> String
    where
        F: FnOnce(&mut String),
    {
        let mut value = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut value);
        value.clone()
    }
}

impl TextTarget for SharedText {
    fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_value(&mut self, value: &str) {
        self.update(|current| {
            current.clear();
            current.push_str(value);
        });
    }
}
