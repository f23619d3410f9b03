//! External collaborator boundaries
//!
//! The core treats the generative text service, the knowledge store, and the
//! template store as call/return boundaries regardless of transport. Every
//! call may fail; the suggestion pipeline degrades a failed collaborator to
//! "no candidates from this source" and never surfaces the failure to the UI.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Message;

pub mod memory;
pub mod openai;

pub use openai::OpenAiClient;

/// Canned response owned by the template store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
}

/// Question/answer pair from the knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Errors from the generative text service
#[derive(Debug, Error)]
pub enum GenerativeError {
    /// Missing API key or disabled in config
    #[error("generative service not configured: {0}")]
    NotConfigured(String),

    /// Network error during the API request
    #[error("network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("api error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Collaborator returned unparsable data
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors from the template/knowledge stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Generative text service contract.
///
/// `suggest` and `quick_replies` are expected to return three strings each;
/// fewer is tolerated.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Free-form completion of the agent's partial input
    async fn complete(
        &self,
        prompt: &str,
        history: &[Message],
        knowledge: &[KnowledgeEntry],
    ) -> Result<String, GenerativeError>;

    /// Full response suggestions for a customer message or search query
    async fn suggest(
        &self,
        message: &str,
        knowledge: &[KnowledgeEntry],
        history: &[Message],
    ) -> Result<Vec<String>, GenerativeError>;

    /// Short quick-reply strings for the given context
    async fn quick_replies(&self, context: &str) -> Result<Vec<String>, GenerativeError>;

    /// Summary of a conversation transcript
    async fn summarize(&self, history: &[Message]) -> Result<String, GenerativeError>;

    /// Intent label for a customer message
    async fn classify_intent(&self, message: &str) -> Result<String, GenerativeError>;
}

/// Knowledge store contract: unranked, unbounded search results. The core is
/// responsible for capping.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<KnowledgeEntry>, StoreError>;
    async fn list_all(&self) -> Result<Vec<KnowledgeEntry>, StoreError>;
}

/// Template store contract, read-only from the core's perspective
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Template>, StoreError>;
}

/// Format a transcript for a generative prompt
pub fn transcript(history: &[Message]) -> String {
    history
        .iter()
        .map(|m| {
            let who = if m.from_agent { "Agent" } else { "Customer" };
            format!("{who}: {}", m.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
