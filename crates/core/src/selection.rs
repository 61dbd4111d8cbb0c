//! Keyboard-driven selection over a candidate list.
//!
//! The state machine has three phases:
//!
//! ```text
//! Empty ──set_candidates(non-empty)──▶ Idle ──move_*──▶ Highlighted(i)
//!   ▲                                   ▲                     │
//!   └──────────── reset() ──────────────┴── commit() / clear ─┘
//! ```
//!
//! A highlighted index always points at a selectable candidate. Movement
//! skips non-selectable candidates and clamps at both ends.

use sk_protocol::candidate::Candidate;

/// Current selection phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No candidates.
    Empty,
    /// Candidates present, none highlighted.
    Idle,
    /// The candidate at this index is highlighted.
    Highlighted(usize),
}

/// Selection state over the current candidate list.
#[derive(Debug, Clone)]
pub struct SelectionState {
    candidates: Vec<Candidate>,
    phase: SelectionPhase,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            phase: SelectionPhase::Empty,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        match self.phase {
            SelectionPhase::Highlighted(index) => Some(index),
            _ => None,
        }
    }

    pub fn highlighted(&self) -> Option<&Candidate> {
        self.highlighted_index().and_then(|i| self.candidates.get(i))
    }

    /// Replace the candidate list wholesale.
    pub fn set_candidates(&mut self, candidates: Vec<Candidate>, auto_select_first: bool) {
        self.candidates = candidates;
        self.phase = if self.candidates.is_empty() {
            SelectionPhase::Empty
        } else {
            SelectionPhase::Idle
        };

        if auto_select_first {
            if let Some(first) = self.first_selectable() {
                self.phase = SelectionPhase::Highlighted(first);
            }
        }
    }

    /// Highlight the next selectable candidate, or the first one when
    /// nothing is highlighted yet.
    pub fn move_next(&mut self) {
        let target = match self.phase {
            SelectionPhase::Highlighted(current) => (current + 1..self.candidates.len())
                .find(|&i| self.is_selectable(i)),
            _ => self.first_selectable(),
        };
        if let Some(index) = target {
            self.phase = SelectionPhase::Highlighted(index);
        }
    }

    /// Highlight the previous selectable candidate, or the first one when
    /// nothing is highlighted yet.
    pub fn move_previous(&mut self) {
        let target = match self.phase {
            SelectionPhase::Highlighted(current) => {
                (0..current).rev().find(|&i| self.is_selectable(i))
            }
            _ => self.first_selectable(),
        };
        if let Some(index) = target {
            self.phase = SelectionPhase::Highlighted(index);
        }
    }

    /// Highlight a specific candidate (pointer hover). Non-selectable or
    /// out-of-range indices are ignored.
    pub fn highlight(&mut self, index: usize) {
        if self.is_selectable(index) {
            self.phase = SelectionPhase::Highlighted(index);
        }
    }

    /// Take the highlighted candidate and return to `Idle`.
    pub fn commit(&mut self) -> Option<Candidate> {
        let candidate = self.highlighted().filter(|c| c.selectable).cloned()?;
        self.phase = SelectionPhase::Idle;
        Some(candidate)
    }

    /// Drop the highlight but keep the candidates.
    pub fn clear_highlight(&mut self) {
        if let SelectionPhase::Highlighted(_) = self.phase {
            self.phase = SelectionPhase::Idle;
        }
    }

    /// Forget the candidates entirely.
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.phase = SelectionPhase::Empty;
    }

    fn is_selectable(&self, index: usize) -> bool {
        self.candidates.get(index).is_some_and(|c| c.selectable)
    }

    fn first_selectable(&self) -> Option<usize> {
        self.candidates.iter().position(|c| c.selectable)
    }
}
