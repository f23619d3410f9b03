//! In-memory template and knowledge stores
//!
//! Seeded reference implementations of the store contracts, useful for local
//! runs and tests. Search mirrors the production semantics: case-insensitive
//! substring containment over question and answer.

use async_trait::async_trait;

use super::{KnowledgeEntry, KnowledgeStore, StoreError, Template, TemplateStore};

/// Read-only template store backed by a vector
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    templates: Vec<Template>,
}

impl MemoryTemplateStore {
    pub fn new(templates: Vec<Template>) -> Self {
        MemoryTemplateStore { templates }
    }

    /// Store seeded with a small set of support templates
    pub fn seeded() -> Self {
        let entry = |id: &str, title: &str, content: &str, category: &str| Template {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
        };
        Self::new(vec![
            entry(
                "greeting",
                "Greeting",
                "Hello! Thank you for contacting our support team. How can I help you today?",
                "general",
            ),
            entry(
                "refund-policy",
                "Refund Policy",
                "Our refund policy allows returns within 30 days of purchase. Once we receive the item, the refund is processed within 5 business days.",
                "billing",
            ),
            entry(
                "shipping-delay",
                "Shipping Delay",
                "I apologize for the delay with your shipment. Let me look into the tracking details and get back to you with an update right away.",
                "shipping",
            ),
            entry(
                "password-reset",
                "Password Reset",
                "You can reset your password from the login page by clicking 'Forgot password'. A reset link will be emailed to you within a few minutes.",
                "account",
            ),
        ])
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn list_all(&self) -> Result<Vec<Template>, StoreError> {
        Ok(self.templates.clone())
    }
}

/// Knowledge base backed by a vector of question/answer pairs
#[derive(Debug, Default)]
pub struct MemoryKnowledgeStore {
    entries: Vec<KnowledgeEntry>,
}

impl MemoryKnowledgeStore {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        MemoryKnowledgeStore { entries }
    }

    /// Store seeded with a small support FAQ
    pub fn seeded() -> Self {
        let entry = |question: &str, answer: &str| KnowledgeEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            source: Some("support-handbook".to_string()),
        };
        Self::new(vec![
            entry(
                "How do I configure call routing?",
                "Call routing is configured under Settings > Routing. Assign each queue a priority and an agent group, then publish the routing plan.",
            ),
            entry(
                "Why was I charged twice?",
                "Duplicate charges usually come from a retried payment. The pending duplicate drops off within 3 business days; if it settles, we refund it immediately.",
            ),
            entry(
                "How long does shipping take?",
                "Standard shipping takes 3-5 business days. Expedited orders placed before 2pm ship the same day.",
            ),
            entry(
                "Can I change my subscription plan?",
                "Plans can be changed at any time from the billing page. Upgrades apply immediately; downgrades take effect at the next renewal.",
            ),
        ])
    }
}

#[async_trait]
impl KnowledgeStore for MemoryKnowledgeStore {
    async fn search(&self, query: &str) -> Result<Vec<KnowledgeEntry>, StoreError> {
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
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
