//! Generative source adapter
//!
//! Turns the generative text service into a candidate producer. Any
//! collaborator failure degrades to an empty list here, never propagating to
//! the dispatcher: a slow or rate-limited service must only ever cost the
//! agent generated suggestions, not the whole palette.

use std::sync::Arc;

use async_trait::async_trait;

use crate::candidate::Candidate;
use crate::provider::{GenerativeService, KnowledgeEntry, KnowledgeStore};

use super::{SourceError, SuggestionSource};

/// Generated suggestions kept in search mode
const SEARCH_SUGGESTIONS: usize = 3;

/// Generated suggestions and quick replies kept in contextual mode
const CONTEXTUAL_SUGGESTIONS: usize = 2;
const CONTEXTUAL_REPLIES: usize = 2;

pub struct GenerativeSource {
    service: Arc<dyn GenerativeService>,
    knowledge: Arc<dyn KnowledgeStore>,
}

impl GenerativeSource {
    pub fn new(service: Arc<dyn GenerativeService>, knowledge: Arc<dyn KnowledgeStore>) -> Self {
        GenerativeSource { service, knowledge }
    }

    /// The full knowledge base, for prompt context. Degrades to empty.
    async fn knowledge_entries(&self) -> Vec<KnowledgeEntry> {
        match self.knowledge.list_all().await {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("knowledge store unavailable for prompt context: {e}");
                Vec::new()
            }
        }
    }

    /// Contextual-mode candidates seeded by the last customer message:
    /// response suggestions followed by quick replies, two of each. Each call
    /// degrades independently.
    pub async fn contextual(&self, last_user_message: &str) -> Vec<Candidate> {
        let entries = self.knowledge_entries().await;
        let (suggestions, replies) = tokio::join!(
            self.service.suggest(last_user_message, &entries, &[]),
            self.service.quick_replies(last_user_message),
        );

        let mut candidates = Vec::new();
        match suggestions {
            Ok(texts) => candidates.extend(
                texts
                    .iter()
                    .filter(|t| !t.is_empty())
                    .take(CONTEXTUAL_SUGGESTIONS)
                    .enumerate()
                    .map(|(i, t)| Candidate::suggestion(i, t)),
            ),
            Err(e) => log::debug!("contextual suggestions failed: {e}"),
        }
        match replies {
            Ok(texts) => candidates.extend(
                texts
                    .iter()
                    .filter(|t| !t.is_empty())
                    .take(CONTEXTUAL_REPLIES)
                    .enumerate()
                    .map(|(i, t)| Candidate::reply(i, t)),
            ),
            Err(e) => log::debug!("contextual quick replies failed: {e}"),
        }
        candidates
    }
}

#[async_trait]
impl SuggestionSource for GenerativeSource {
    async fn fetch(&self, query: &str, _context: &str) -> Result<Vec<Candidate>, SourceError> {
        let entries = self.knowledge_entries().await;
        match self.service.suggest(query, &entries, &[]).await {
            Ok(texts) => Ok(texts
                .iter()
                .filter(|t| !t.is_empty())
                .take(SEARCH_SUGGESTIONS)
                .enumerate()
                .map(|(i, t)| Candidate::suggestion(i, t))
                .collect()),
            Err(e) => {
                log::debug!("generative suggestions failed: {e}");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
#[path = "generative_tests.rs"]
mod generative_tests;
