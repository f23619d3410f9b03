//! Assist engine
//!
//! Orchestrates the two assist paths behind the composer input box. Palette
//! path: input beginning with the trigger character opens the palette,
//! debounces the query, dispatches it, and applies results through the
//! session's staleness guard. Compose path: ordinary prose debounces a
//! completion request and surfaces the extracted continuation as ghost text.
//!
//! Spawned work never touches engine state directly. It reports back through
//! an event channel, and the owner of the engine feeds received events into
//! `handle_event` from its select loop.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::compose::{self, ComposeState};
use crate::config::AssistConfig;
use crate::debounce::Debouncer;
use crate::dispatch::{QueryDispatcher, QueryRequest, ResultSet};
use crate::palette::{Palette, PaletteEvent, PaletteOutcome};
use crate::provider::{GenerativeService, KnowledgeStore};
use crate::session::{ComposerSession, Message};

/// Quiet period for inline completion requests. Longer than the palette's
/// because prose pauses are longer than query-typing pauses.
const COMPOSE_DEBOUNCE_MS: u64 = 1000;

/// Completions of spawned work, delivered back to the engine owner's loop
#[derive(Debug)]
pub enum AssistEvent {
    /// Palette query survived the quiet period
    SearchReady { text: String },
    /// Draft survived the quiet period
    ComposeReady { text: String },
    /// A dispatch resolved
    Results(ResultSet),
    /// A completion request resolved to an insertable suffix
    Continuation { request_id: u64, suffix: String },
}

pub struct AssistEngine {
    dispatcher: Arc<QueryDispatcher>,
    generative: Arc<dyn GenerativeService>,
    knowledge: Arc<dyn KnowledgeStore>,
    session: ComposerSession,
    palette: Palette,
    compose: ComposeState,
    search_debounce: Debouncer,
    compose_debounce: Debouncer,
    trigger: char,
    /// Query text behind the most recent palette schedule; a fired timer is
    /// ignored if the input moved on in the meantime
    palette_query: Option<String>,
    tx: UnboundedSender<AssistEvent>,
}

impl AssistEngine {
    pub fn new(
        dispatcher: Arc<QueryDispatcher>,
        generative: Arc<dyn GenerativeService>,
        knowledge: Arc<dyn KnowledgeStore>,
        config: &AssistConfig,
        tx: UnboundedSender<AssistEvent>,
    ) -> Self {
        AssistEngine {
            dispatcher,
            generative,
            knowledge,
            session: ComposerSession::new(),
            palette: Palette::new(),
            compose: ComposeState::new(),
            search_debounce: Debouncer::new(config.debounce_ms),
            compose_debounce: Debouncer::new(COMPOSE_DEBOUNCE_MS),
            trigger: config.trigger_char,
            palette_query: None,
            tx,
        }
    }

    pub fn session(&self) -> &ComposerSession {
        &self.session
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn ghost_suggestion(&self) -> Option<&str> {
        self.compose.suggestion()
    }

    /// Entry point for every composer edit. Decides between palette and
    /// compose paths from the leading trigger character.
    pub fn input_changed(&mut self, text: &str) {
        match text.strip_prefix(self.trigger) {
            Some(query) => self.palette_input(query),
            None => self.prose_input(text),
        }
    }

    fn palette_input(&mut self, query: &str) {
        self.compose.clear();
        self.compose_debounce.cancel();
        if !self.palette.is_visible() {
            self.palette.open();
        }

        if query.is_empty() {
            self.palette_query = None;
            self.search_debounce.cancel();
            self.open_contextual();
            return;
        }

        self.palette_query = Some(query.to_string());
        let tx = self.tx.clone();
        let text = query.to_string();
        self.search_debounce.schedule(move || {
            let _ = tx.send(AssistEvent::SearchReady { text });
        });
    }

    fn prose_input(&mut self, text: &str) {
        if self.palette.is_visible() {
            self.palette.close();
            self.session.clear_displayed();
            self.palette_query = None;
            self.search_debounce.cancel();
        }

        // Any edit invalidates a suggestion keyed to the previous draft
        self.compose.clear();
        if compose::should_trigger(text, false, self.trigger) {
            let tx = self.tx.clone();
            let text = text.to_string();
            self.compose_debounce.schedule(move || {
                let _ = tx.send(AssistEvent::ComposeReady { text });
            });
        } else {
            self.compose_debounce.cancel();
        }
    }

    /// Feed one completed piece of spawned work back into engine state
    pub fn handle_event(&mut self, event: AssistEvent) {
        match event {
            AssistEvent::SearchReady { text } => self.dispatch_search(text),
            AssistEvent::ComposeReady { text } => self.dispatch_compose(text),
            AssistEvent::Results(set) => self.apply_results(set),
            AssistEvent::Continuation { request_id, suffix } => {
                self.compose.accept(request_id, suffix);
            }
        }
    }

    /// A search query survived its quiet period. The timer races against
    /// further edits through the channel, so re-check that the palette still
    /// shows this exact query before spending a generation on it.
    fn dispatch_search(&mut self, text: String) {
        if !self.palette.is_visible() || self.palette_query.as_deref() != Some(text.as_str()) {
            return;
        }
        let request = QueryRequest {
            text,
            generation: self.session.next_generation(),
            context_message: self.session.last_user_message().map(String::from),
        };
        let dispatcher = self.dispatcher.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let set = dispatcher.search(&request).await;
            let _ = tx.send(AssistEvent::Results(set));
        });
    }

    /// Contextual mode: serve the static commands instantly as a partial set,
    /// then let the generated candidates arrive under the same generation.
    fn open_contextual(&mut self) {
        let context = self.session.last_user_message().map(String::from);
        let generation = self.session.next_generation();
        self.apply_results(ResultSet {
            candidates: self.dispatcher.static_commands(),
            generation,
            // Nothing further is coming without a customer message to seed it
            complete: context.is_none(),
        });

        let Some(context) = context else {
            return;
        };
        let dispatcher = self.dispatcher.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let set = dispatcher.contextual(generation, &context).await;
            let _ = tx.send(AssistEvent::Results(set));
        });
    }

    fn dispatch_compose(&mut self, text: String) {
        if self.palette.is_visible() {
            return;
        }
        let request_id = self.compose.start_request();
        let generative = self.generative.clone();
        let knowledge = self.knowledge.clone();
        let history = self.session.history().to_vec();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let entries = knowledge.list_all().await.unwrap_or_default();
            match generative.complete(&text, &history, &entries).await {
                Ok(generated) => {
                    if let Some(suffix) = compose::extract_continuation(&text, &generated) {
                        let _ = tx.send(AssistEvent::Continuation { request_id, suffix });
                    }
                }
                Err(e) => log::debug!("inline completion failed: {e}"),
            }
        });
    }

    /// Accept step: the session's staleness guard decides whether the set is
    /// current, and only then does the palette see it
    fn apply_results(&mut self, set: ResultSet) {
        if !self.session.accept(set) {
            return;
        }
        if self.palette.is_visible() {
            if let Some(current) = self.session.displayed() {
                self.palette.accept_results(current);
            }
        }
    }

    /// Forward a navigation/commit/cancel event to the palette and tidy up
    /// after terminal outcomes. On commit the caller replaces the composer
    /// text with the returned body.
    pub fn palette_event(&mut self, event: PaletteEvent) -> Option<PaletteOutcome> {
        let outcome = self.palette.apply(event)?;
        self.session.clear_displayed();
        self.palette_query = None;
        self.search_debounce.cancel();
        Some(outcome)
    }

    /// Consume the ghost suggestion, if one is showing
    pub fn accept_ghost(&mut self) -> Option<String> {
        self.compose.take()
    }

    /// Record a message and reset the assist state that was keyed to the
    /// previous draft
    pub fn message_sent(&mut self, message: Message) {
        self.session.push(message);
        self.compose.clear();
        self.compose_debounce.cancel();
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
