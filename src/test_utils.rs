//! Shared test doubles for the suggestion pipeline
//!
//! The mock generative service supports per-prompt artificial delays so tests
//! can force out-of-order completion of concurrent dispatches.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::provider::{
    GenerativeError, GenerativeService, KnowledgeEntry, KnowledgeStore, StoreError, Template,
    TemplateStore,
};
use crate::session::Message;

pub fn template(id: &str, title: &str, content: &str) -> Template {
    Template {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        category: "general".to_string(),
    }
}

pub fn knowledge_entry(question: &str, answer: &str) -> KnowledgeEntry {
    KnowledgeEntry {
        question: question.to_string(),
        answer: answer.to_string(),
        source: None,
    }
}

/// Generative service double. Suggestion and reply texts embed the prompt so
/// tests can tell which query produced a candidate.
pub struct MockGenerative {
    pub suggestion_count: usize,
    pub reply_count: usize,
    pub completion: String,
    /// Artificial latency per prompt text; unlisted prompts resolve instantly
    pub delays_ms: HashMap<String, u64>,
    pub fail: bool,
}

impl Default for MockGenerative {
    fn default() -> Self {
        MockGenerative {
            suggestion_count: 3,
            reply_count: 3,
            completion: String::new(),
            delays_ms: HashMap::new(),
            fail: false,
        }
    }
}

impl MockGenerative {
    pub fn failing() -> Self {
        MockGenerative {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_completion(completion: &str) -> Self {
        MockGenerative {
            completion: completion.to_string(),
            ..Default::default()
        }
    }

    pub fn delay(mut self, prompt: &str, ms: u64) -> Self {
        self.delays_ms.insert(prompt.to_string(), ms);
        self
    }

    async fn simulate_latency(&self, prompt: &str) {
        if let Some(ms) = self.delays_ms.get(prompt) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
    }

    fn check(&self) -> Result<(), GenerativeError> {
        if self.fail {
            Err(GenerativeError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GenerativeService for MockGenerative {
    async fn complete(
        &self,
        prompt: &str,
        _history: &[Message],
        _knowledge: &[KnowledgeEntry],
    ) -> Result<String, GenerativeError> {
        self.simulate_latency(prompt).await;
        self.check()?;
        Ok(self.completion.clone())
    }

    async fn suggest(
        &self,
        message: &str,
        _knowledge: &[KnowledgeEntry],
        _history: &[Message],
    ) -> Result<Vec<String>, GenerativeError> {
        self.simulate_latency(message).await;
        self.check()?;
        Ok((1..=self.suggestion_count)
            .map(|i| format!("{message} suggestion {i}"))
            .collect())
    }

    async fn quick_replies(&self, context: &str) -> Result<Vec<String>, GenerativeError> {
        self.simulate_latency(context).await;
        self.check()?;
        Ok((1..=self.reply_count)
            .map(|i| format!("{context} reply {i}"))
            .collect())
    }

    async fn summarize(&self, _history: &[Message]) -> Result<String, GenerativeError> {
        self.check()?;
        Ok("summary".to_string())
    }

    async fn classify_intent(&self, _message: &str) -> Result<String, GenerativeError> {
        self.check()?;
        Ok("other".to_string())
    }
}

/// Template store double
#[derive(Default)]
pub struct MockTemplates {
    pub templates: Vec<Template>,
    pub fail: bool,
}

impl MockTemplates {
    pub fn with_templates(templates: Vec<Template>) -> Self {
        MockTemplates {
            templates,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        MockTemplates {
            templates: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl TemplateStore for MockTemplates {
    async fn list_all(&self) -> Result<Vec<Template>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("template store down".to_string()));
        }
        Ok(self.templates.clone())
    }
}

/// Knowledge store double with substring search
#[derive(Default)]
pub struct MockKnowledge {
    pub entries: Vec<KnowledgeEntry>,
    pub fail: bool,
}

impl MockKnowledge {
    pub fn with_entries(entries: Vec<KnowledgeEntry>) -> Self {
        MockKnowledge {
            entries,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        MockKnowledge {
            entries: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl KnowledgeStore for MockKnowledge {
    async fn search(&self, query: &str) -> Result<Vec<KnowledgeEntry>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("knowledge store down".to_string()));
        }
        let needle = query.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|e| {
                e.question.to_lowercase().contains(&needle)
                    || e.answer.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<KnowledgeEntry>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("knowledge store down".to_string()));
        }
        Ok(self.entries.clone())
    }
}
