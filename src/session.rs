//! Composer session state
//!
//! One `ComposerSession` exists per open conversation. It owns everything the
//! suggestion pipeline is allowed to mutate: the generation counter, the
//! currently-displayed result set, and the message history. Components receive
//! the session explicitly; there is no ambient shared state.

use chrono::{DateTime, Utc};

use crate::dispatch::ResultSet;

/// One message in the conversation transcript
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub from_agent: bool,
    pub at: DateTime<Utc>,
}

impl Message {
    pub fn agent(text: &str) -> Self {
        Message {
            text: text.to_string(),
            from_agent: true,
            at: Utc::now(),
        }
    }

    pub fn customer(text: &str) -> Self {
        Message {
            text: text.to_string(),
            from_agent: false,
            at: Utc::now(),
        }
    }
}

/// Monotonic generation counter that decides which result set is current.
///
/// A generation is allocated once per dispatch. A result set may update
/// visible state only when its generation equals the counter at the moment of
/// arrival; anything older is a stale response from a superseded query.
#[derive(Debug, Default)]
pub struct StalenessGuard {
    current: u64,
}

impl StalenessGuard {
    pub fn new() -> Self {
        StalenessGuard { current: 0 }
    }

    /// Allocate the next generation, superseding all earlier dispatches
    pub fn next(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current
    }
}

/// Per-conversation composer session
pub struct ComposerSession {
    guard: StalenessGuard,
    displayed: Option<ResultSet>,
    history: Vec<Message>,
}

impl Default for ComposerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposerSession {
    pub fn new() -> Self {
        ComposerSession {
            guard: StalenessGuard::new(),
            displayed: None,
            history: Vec::new(),
        }
    }

    /// Allocate a generation for a new dispatch
    pub fn next_generation(&mut self) -> u64 {
        self.guard.next()
    }

    pub fn current_generation(&self) -> u64 {
        self.guard.current()
    }

    /// Accept step of the staleness guard: apply `set` to visible state only
    /// when it answers the most recent dispatch. Returns whether it was
    /// applied. This is the only place the displayed result set is written.
    pub fn accept(&mut self, set: ResultSet) -> bool {
        if self.guard.is_current(set.generation) {
            self.displayed = Some(set);
            true
        } else {
            log::debug!(
                "dropping stale result set (generation {}, current {})",
                set.generation,
                self.guard.current()
            );
            false
        }
    }

    pub fn displayed(&self) -> Option<&ResultSet> {
        self.displayed.as_ref()
    }

    /// Clear displayed results, e.g. when the palette closes
    pub fn clear_displayed(&mut self) {
        self.displayed = None;
    }

    pub fn push(&mut self, message: Message) {
        self.history.push(message);
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Most recent customer message, the seed for contextual mode
    pub fn last_user_message(&self) -> Option<&str> {
        self.history
            .iter()
            .rev()
            .find(|m| !m.from_agent)
            .map(|m| m.text.as_str())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
