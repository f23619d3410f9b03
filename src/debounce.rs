//! Debounce scheduler
//!
//! Coalesces rapid input events into a single action after a quiet period.
//! Each `schedule` call arms a fresh timer and cancels any pending one via a
//! cancellation token, so a burst of keystrokes fires exactly once, with the
//! state present at the last keystroke.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

pub struct Debouncer {
    delay: Duration,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Debouncer {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Arm the timer, cancelling any pending one. `fire` runs once the quiet
    /// period elapses without another `schedule` or `cancel` call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => fire(),
            }
        });
    }

    /// Cancel the pending timer, if any
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
