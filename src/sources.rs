//! Suggestion sources
//!
//! Each source adapter turns one backing collaborator into a uniform
//! `fetch(query, context) -> Vec<Candidate>` capability. Adapters are
//! independent; the dispatcher fans a query out to all of them and tolerates
//! any subset failing.

use async_trait::async_trait;
use thiserror::Error;

use crate::candidate::Candidate;
use crate::provider::{GenerativeError, StoreError};

pub mod generative;
pub mod knowledge;
pub mod templates;

pub use generative::GenerativeSource;
pub use knowledge::KnowledgeSource;
pub use templates::TemplateSource;

/// A source failed to produce candidates. The dispatcher degrades the failed
/// source to an empty list; this error never reaches the palette or the UI.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<StoreError> for SourceError {
    fn from(e: StoreError) -> Self {
        SourceError::Unavailable(e.to_string())
    }
}

impl From<GenerativeError> for SourceError {
    fn from(e: GenerativeError) -> Self {
        match e {
            GenerativeError::Parse(msg) => SourceError::Malformed(msg),
            other => SourceError::Unavailable(other.to_string()),
        }
    }
}

/// A producer of candidate suggestions for a query
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Fetch candidates for `query`. `context` carries the most recent
    /// customer message, when one exists.
    async fn fetch(&self, query: &str, context: &str) -> Result<Vec<Candidate>, SourceError>;
}
