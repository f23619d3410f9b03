//! Knowledge source adapter
//!
//! Queries the knowledge store and wraps each entry as a `KnowledgeFaq`
//! candidate. The store returns an unranked, unbounded list; this adapter
//! caps it before the merge.

use std::sync::Arc;

use async_trait::async_trait;

use crate::candidate::Candidate;
use crate::provider::KnowledgeStore;
use crate::relevance;

use super::{SourceError, SuggestionSource};

pub struct KnowledgeSource {
    store: Arc<dyn KnowledgeStore>,
    cap: usize,
}

impl KnowledgeSource {
    pub fn new(store: Arc<dyn KnowledgeStore>, cap: usize) -> Self {
        KnowledgeSource { store, cap }
    }
}

#[async_trait]
impl SuggestionSource for KnowledgeSource {
    async fn fetch(&self, query: &str, _context: &str) -> Result<Vec<Candidate>, SourceError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let entries = self.store.search(query).await?;
        Ok(entries
            .iter()
            .take(self.cap)
            .enumerate()
            .map(|(i, e)| {
                let score = relevance::score(query, &[&e.question, &e.answer]);
                Candidate::knowledge(i, &e.question, &e.answer, score)
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "knowledge_tests.rs"]
mod knowledge_tests;
