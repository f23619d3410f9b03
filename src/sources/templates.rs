//! Template source adapter
//!
//! Filters the stored template set with the relevance filter against title
//! and body. Local and effectively synchronous; an empty template set is an
//! empty result, not an error.

use std::sync::Arc;

use async_trait::async_trait;

use crate::candidate::Candidate;
use crate::provider::TemplateStore;
use crate::relevance;

use super::{SourceError, SuggestionSource};

pub struct TemplateSource {
    store: Arc<dyn TemplateStore>,
}

impl TemplateSource {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        TemplateSource { store }
    }
}

#[async_trait]
impl SuggestionSource for TemplateSource {
    async fn fetch(&self, query: &str, _context: &str) -> Result<Vec<Candidate>, SourceError> {
        let templates = self.store.list_all().await?;
        Ok(templates
            .iter()
            .filter(|t| relevance::matches(query, &[&t.title, &t.content]))
            .map(|t| Candidate::template(&t.id, &t.title, &t.content))
            .collect())
    }
}

#[cfg(test)]
#[path = "templates_tests.rs"]
mod templates_tests;
