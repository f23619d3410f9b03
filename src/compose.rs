//! Inline completion for the message composer
//!
//! Turns a generated completion of the agent's partial draft into the suffix
//! that can be appended verbatim, and tracks the in-flight request so a late
//! completion for an older draft never overwrites a newer one.

/// Minimum draft length before a completion request is worth sending
const MIN_TRIGGER_CHARS: usize = 2;

/// Derive the insertable continuation of `partial` from a generated message.
///
/// If the generated text starts with the draft (case-insensitive), the
/// remainder after the draft is returned as-is. Otherwise the first sentence
/// of the generated text is offered, stripped of a leading quote and prefixed
/// with a space so it joins the draft cleanly. Returns `None` when nothing
/// useful remains.
pub fn extract_continuation(partial: &str, generated: &str) -> Option<String> {
    let generated = generated.trim();
    if generated.is_empty() {
        return None;
    }

    let partial_lower = partial.to_lowercase();
    let generated_lower = generated.to_lowercase();
    if !partial.is_empty() && generated_lower.starts_with(&partial_lower) {
        let suffix: String = generated.chars().skip(partial.chars().count()).collect();
        if suffix.is_empty() {
            return None;
        }
        return Some(suffix);
    }

    let first_sentence = generated
        .split_inclusive(['.', '!', '?'])
        .next()
        .unwrap_or(generated);
    let mut sentence = first_sentence
        .trim()
        .trim_end_matches(['.', '!', '?'])
        .trim();
    sentence = sentence
        .strip_prefix('"')
        .or_else(|| sentence.strip_prefix('\''))
        .unwrap_or(sentence)
        .trim();
    if sentence.is_empty() {
        return None;
    }

    if partial.is_empty() || partial.ends_with(char::is_whitespace) {
        Some(sentence.to_string())
    } else {
        Some(format!(" {sentence}"))
    }
}

/// Whether the current draft should kick off a completion request.
///
/// Short drafts carry too little signal, the palette owns the input while it
/// is open, and a trailing trigger character means the agent is starting a
/// palette query instead of prose.
pub fn should_trigger(partial: &str, palette_open: bool, trigger_char: char) -> bool {
    !palette_open
        && partial.chars().count() > MIN_TRIGGER_CHARS
        && !partial.ends_with(trigger_char)
}

/// Ghost-suggestion state for the composer.
///
/// Each edit bumps the request id; only the completion matching the latest id
/// may surface, so a slow response for a stale draft is dropped.
#[derive(Debug, Default)]
pub struct ComposeState {
    request_id: u64,
    in_flight: Option<u64>,
    suggestion: Option<String>,
}

impl ComposeState {
    pub fn new() -> Self {
        ComposeState::default()
    }

    /// Register a new completion request for the current draft and return its
    /// id. Any earlier in-flight request becomes stale.
    pub fn start_request(&mut self) -> u64 {
        self.request_id += 1;
        self.in_flight = Some(self.request_id);
        self.suggestion = None;
        self.request_id
    }

    /// Accept a completed suffix if it answers the latest request
    pub fn accept(&mut self, request_id: u64, suffix: String) -> bool {
        if self.in_flight != Some(request_id) {
            log::debug!("dropping stale completion for request {request_id}");
            return false;
        }
        self.in_flight = None;
        self.suggestion = Some(suffix);
        true
    }

    /// Discard the visible suggestion and any in-flight request
    pub fn clear(&mut self) {
        self.in_flight = None;
        self.suggestion = None;
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Consume the visible suggestion, e.g. when the agent accepts it
    pub fn take(&mut self) -> Option<String> {
        self.suggestion.take()
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod compose_tests;
