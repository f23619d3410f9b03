use std::sync::Arc;

use super::*;
use crate::test_utils::{MockTemplates, template};

fn source_with(templates: Vec<crate::provider::Template>) -> TemplateSource {
    TemplateSource::new(Arc::new(MockTemplates::with_templates(templates)))
}

#[tokio::test]
async fn test_matches_on_title() {
    let source = source_with(vec![
        template("1", "Refund Policy", "Our refund policy allows..."),
        template("2", "Greeting", "Hello there!"),
    ]);
    let candidates = source.fetch("refund", "").await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].title, "Refund Policy");
}

#[tokio::test]
async fn test_matches_on_body() {
    let source = source_with(vec![template(
        "1",
        "Greeting",
        "Hello! Welcome to our support team.",
    )]);
    let candidates = source.fetch("welcome", "").await.unwrap();
    assert_eq!(candidates.len(), 1);
}

#[tokio::test]
async fn test_empty_store_is_empty_result_not_error() {
    let source = source_with(Vec::new());
    let candidates = source.fetch("anything", "").await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_no_match_yields_empty() {
    let source = source_with(vec![template("1", "Greeting", "Hello!")]);
    let candidates = source.fetch("xyz123", "").await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_store_failure_propagates_as_source_error() {
    let source = TemplateSource::new(Arc::new(MockTemplates::failing()));
    let result = source.fetch("refund", "").await;
    assert!(matches!(result, Err(SourceError::Unavailable(_))));
}

#[tokio::test]
async fn test_preserves_store_order() {
    let source = source_with(vec![
        template("1", "Billing A", "billing text"),
        template("2", "Billing B", "billing text"),
        template("3", "Other", "unrelated"),
    ]);
    let candidates = source.fetch("billing", "").await.unwrap();
    let titles: Vec<_> = candidates.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Billing A", "Billing B"]);
}
