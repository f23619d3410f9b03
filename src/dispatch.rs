//! Query dispatcher
//!
//! Fans a palette query out to all suggestion sources concurrently, tolerates
//! partial failure, and returns a merged result set tagged with the query's
//! generation. Search mode runs all three sources against the query text;
//! contextual mode (empty query) serves fixed commands plus generated
//! candidates seeded by the last customer message.

pub mod merge;

use std::sync::Arc;

use crate::candidate::Candidate;
use crate::config::AssistConfig;
use crate::provider::{GenerativeService, KnowledgeStore, TemplateStore};
use crate::sources::{
    GenerativeSource, KnowledgeSource, SourceError, SuggestionSource, TemplateSource,
};

/// One query as dispatched to the sources
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub text: String,
    /// Strictly increasing per composer session; pairs the eventual result
    /// set with the dispatch that produced it
    pub generation: u64,
    /// Most recent customer message, when one exists
    pub context_message: Option<String>,
}

/// Ordered candidates answering one generation
#[derive(Debug, Clone)]
pub struct ResultSet {
    pub candidates: Vec<Candidate>,
    pub generation: u64,
    /// True once every dispatched source has resolved
    pub complete: bool,
}

pub struct QueryDispatcher {
    templates: TemplateSource,
    knowledge: KnowledgeSource,
    generative: GenerativeSource,
    max_results: usize,
}

impl QueryDispatcher {
    pub fn new(
        templates: Arc<dyn TemplateStore>,
        knowledge: Arc<dyn KnowledgeStore>,
        generative: Arc<dyn GenerativeService>,
        config: &AssistConfig,
    ) -> Self {
        QueryDispatcher {
            templates: TemplateSource::new(templates),
            knowledge: KnowledgeSource::new(knowledge.clone(), config.knowledge_cap),
            generative: GenerativeSource::new(generative, knowledge),
            max_results: config.max_results,
        }
    }

    /// Search mode: fan out to all sources against the query text, await all
    /// of them, and merge whatever subset resolved successfully.
    pub async fn search(&self, request: &QueryRequest) -> ResultSet {
        let context = request.context_message.as_deref().unwrap_or("");
        let (templates, knowledge, generated) = tokio::join!(
            self.templates.fetch(&request.text, context),
            self.knowledge.fetch(&request.text, context),
            self.generative.fetch(&request.text, context),
        );

        let candidates = merge::merge_ranked(
            vec![
                collect("templates", templates),
                collect("knowledge", knowledge),
                collect("generative", generated),
            ],
            self.max_results,
        );

        ResultSet {
            candidates,
            generation: request.generation,
            complete: true,
        }
    }

    /// The fixed commands served instantly when the palette opens with no
    /// search text
    pub fn static_commands(&self) -> Vec<Candidate> {
        vec![
            Candidate::command(
                "welcome",
                "Welcome Message",
                "Greet the customer",
                "Hello! Welcome to our support team. How can I assist you today?",
            ),
            Candidate::command(
                "escalate",
                "Escalate to Supervisor",
                "Transfer to supervisor",
                "I understand your concern. Let me escalate this to my supervisor who can \
                 provide additional assistance.",
            ),
            Candidate::command(
                "follow-up",
                "Follow-up",
                "Check on previous issue",
                "I wanted to follow up on your previous inquiry. Is there anything else I can \
                 help you with regarding this matter?",
            ),
        ]
    }

    /// Contextual mode completion: static commands followed by generated
    /// suggestions and quick replies seeded by the last customer message.
    /// No cap beyond the naturally small counts.
    pub async fn contextual(&self, generation: u64, last_user_message: &str) -> ResultSet {
        let mut candidates = self.static_commands();
        candidates.extend(self.generative.contextual(last_user_message).await);
        ResultSet {
            candidates,
            generation,
            complete: true,
        }
    }
}

/// Degrade a failed source to an empty list; one source erroring never aborts
/// the others.
fn collect(label: &str, result: Result<Vec<Candidate>, SourceError>) -> Vec<Candidate> {
    match result {
        Ok(candidates) => candidates,
        Err(e) => {
            log::debug!("{label} source failed, omitting: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
