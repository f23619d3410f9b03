//! Command palette selection state machine
//!
//! Tracks which candidate is highlighted and reacts to discrete navigation,
//! commit, and cancel events through a single dispatch function. The machine
//! is independent of any input-device binding; the app layer translates key
//! presses into `PaletteEvent`s.

use crate::candidate::Candidate;
use crate::dispatch::ResultSet;

/// Discrete input events the palette reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEvent {
    NavigateUp,
    NavigateDown,
    Commit,
    Cancel,
}

/// Terminal outcomes of a palette interaction
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteOutcome {
    /// The selected candidate's body, to be inserted into the composer
    Committed(String),
    /// Closed without choosing anything
    Dismissed,
}

/// Palette state: closed, or open over the current candidate list.
///
/// Invariant: `selected < candidates.len()` whenever the list is non-empty.
#[derive(Debug, Default)]
pub struct Palette {
    visible: bool,
    candidates: Vec<Candidate>,
    selected: usize,
    complete: bool,
}

impl Palette {
    pub fn new() -> Self {
        Palette::default()
    }

    /// Open with an empty list; candidates arrive via `accept_results`
    pub fn open(&mut self) {
        self.visible = true;
        self.candidates.clear();
        self.selected = 0;
        self.complete = false;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.candidates.clear();
        self.selected = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Still waiting for the first (or completed) result set
    pub fn is_loading(&self) -> bool {
        self.visible && !self.complete
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Candidate> {
        self.candidates.get(self.selected)
    }

    /// Replace the candidate list with an accepted result set and reset the
    /// highlight to the first item
    pub fn accept_results(&mut self, set: &ResultSet) {
        self.candidates = set.candidates.clone();
        self.selected = 0;
        self.complete = set.complete;
    }

    /// Single dispatch point for navigation and terminal events. Returns an
    /// outcome only for terminal events.
    pub fn apply(&mut self, event: PaletteEvent) -> Option<PaletteOutcome> {
        if !self.visible {
            return None;
        }
        let total = self.candidates.len();
        match event {
            PaletteEvent::NavigateDown => {
                if total > 0 {
                    self.selected = (self.selected + 1) % total;
                }
                None
            }
            PaletteEvent::NavigateUp => {
                if total > 0 {
                    self.selected = (self.selected + total - 1) % total;
                }
                None
            }
            PaletteEvent::Commit => {
                let body = self.selected().map(|c| c.body.clone())?;
                self.close();
                Some(PaletteOutcome::Committed(body))
            }
            PaletteEvent::Cancel => {
                self.close();
                Some(PaletteOutcome::Dismissed)
            }
        }
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod palette_tests;
