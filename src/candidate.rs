//! Candidate data model
//!
//! A `Candidate` is one suggestion item offered to the agent: template text,
//! an FAQ answer from the knowledge base, or generated text. Candidates are
//! ephemeral; they live only for the duration of one palette interaction.

/// Maximum characters of the detail/preview line before truncation
pub const DETAIL_MAX: usize = 80;

/// Maximum characters of a generated candidate's title before truncation
pub const TITLE_MAX: usize = 60;

/// Provenance of a candidate, used for ranking and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// Canned response from the template store (includes static palette commands)
    Template,
    /// Question/answer pair from the knowledge base
    KnowledgeFaq,
    /// Free-form suggestion from the generative service
    GeneratedSuggestion,
    /// Short quick-reply from the generative service
    GeneratedReply,
}

/// One suggestion item offered to the agent
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Opaque identifier, unique within one result set
    pub id: String,
    pub kind: CandidateKind,
    /// Short label shown in the palette list
    pub title: String,
    /// Display-truncated preview line (never the stored body)
    pub detail: String,
    /// Full text inserted into the composer when the candidate is committed
    pub body: String,
    /// Human-readable provenance ("Template", "FAQ", "AI Generated")
    pub source_label: Option<String>,
    /// Lexical-match score; non-zero for knowledge-derived candidates only
    pub score: f32,
}

impl Candidate {
    /// Candidate backed by a stored template
    pub fn template(id: &str, title: &str, content: &str) -> Self {
        debug_assert!(!content.is_empty());
        Self {
            id: format!("template-{id}"),
            kind: CandidateKind::Template,
            title: title.to_string(),
            detail: truncate_label(content, DETAIL_MAX),
            body: content.to_string(),
            source_label: Some("Template".to_string()),
            score: 0.0,
        }
    }

    /// Candidate backed by a knowledge-base entry; the full answer is kept in
    /// `body`, only the preview line is truncated
    pub fn knowledge(index: usize, question: &str, answer: &str, score: f32) -> Self {
        debug_assert!(!answer.is_empty());
        Self {
            id: format!("faq-{index}"),
            kind: CandidateKind::KnowledgeFaq,
            title: question.to_string(),
            detail: truncate_label(answer, DETAIL_MAX),
            body: answer.to_string(),
            source_label: Some("FAQ".to_string()),
            score,
        }
    }

    /// Candidate holding a generated suggestion string
    pub fn suggestion(index: usize, text: &str) -> Self {
        debug_assert!(!text.is_empty());
        Self {
            id: format!("suggestion-{index}"),
            kind: CandidateKind::GeneratedSuggestion,
            title: truncate_label(text, TITLE_MAX),
            detail: text.to_string(),
            body: text.to_string(),
            source_label: Some("AI Generated".to_string()),
            score: 0.0,
        }
    }

    /// Candidate holding a generated quick reply
    pub fn reply(index: usize, text: &str) -> Self {
        debug_assert!(!text.is_empty());
        Self {
            id: format!("reply-{index}"),
            kind: CandidateKind::GeneratedReply,
            title: truncate_label(text, TITLE_MAX),
            detail: text.to_string(),
            body: text.to_string(),
            source_label: Some("Smart Reply".to_string()),
            score: 0.0,
        }
    }

    /// Fixed palette command shown in contextual mode
    pub fn command(id: &str, title: &str, detail: &str, content: &str) -> Self {
        debug_assert!(!content.is_empty());
        Self {
            id: id.to_string(),
            kind: CandidateKind::Template,
            title: title.to_string(),
            detail: detail.to_string(),
            body: content.to_string(),
            source_label: None,
            score: 0.0,
        }
    }
}

/// Truncate a label to `max` characters, appending an ellipsis marker when
/// anything was cut. Operates on characters, not bytes.
pub fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
#[path = "candidate_tests.rs"]
mod candidate_tests;
