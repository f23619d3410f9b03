use std::sync::Arc;

use super::*;
use crate::candidate::CandidateKind;
use crate::test_utils::{MockKnowledge, knowledge_entry};

fn entries(n: usize) -> Vec<crate::provider::KnowledgeEntry> {
    (0..n)
        .map(|i| knowledge_entry(&format!("Question {i} about billing"), &format!("Answer {i}")))
        .collect()
}

#[tokio::test]
async fn test_caps_results_before_merge() {
    let source = KnowledgeSource::new(Arc::new(MockKnowledge::with_entries(entries(5))), 3);
    let candidates = source.fetch("billing", "").await.unwrap();
    assert_eq!(candidates.len(), 3);
}

#[tokio::test]
async fn test_wraps_entries_as_knowledge_faq() {
    let long_answer = "a".repeat(120);
    let source = KnowledgeSource::new(
        Arc::new(MockKnowledge::with_entries(vec![knowledge_entry(
            "How do I configure routing?",
            &long_answer,
        )])),
        3,
    );
    let candidates = source.fetch("routing", "").await.unwrap();
    assert_eq!(candidates.len(), 1);
    let c = &candidates[0];
    assert_eq!(c.kind, CandidateKind::KnowledgeFaq);
    assert_eq!(c.title, "How do I configure routing?");
    // Preview is truncated, the committed body never is
    assert!(c.detail.ends_with("..."));
    assert_eq!(c.body, long_answer);
    assert_eq!(c.score, 1.0);
}

#[tokio::test]
async fn test_empty_query_yields_no_candidates() {
    let source = KnowledgeSource::new(Arc::new(MockKnowledge::with_entries(entries(2))), 3);
    let candidates = source.fetch("", "").await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_store_failure_propagates_as_source_error() {
    let source = KnowledgeSource::new(Arc::new(MockKnowledge::failing()), 3);
    let result = source.fetch("billing", "").await;
    assert!(matches!(result, Err(SourceError::Unavailable(_))));
}
