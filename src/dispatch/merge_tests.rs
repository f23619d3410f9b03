use super::*;

use crate::candidate::CandidateKind;

fn suggestions(prefix: &str, n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| Candidate::suggestion(i, &format!("{prefix} {i}")))
        .collect()
}

#[test]
fn test_concatenation_preserves_group_order() {
    let merged = merge_ranked(vec![suggestions("a", 2), suggestions("b", 2)], 8);
    let bodies: Vec<_> = merged.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["a 0", "a 1", "b 0", "b 1"]);
}

#[test]
fn test_cap_applies_to_combined_list() {
    let merged = merge_ranked(vec![suggestions("a", 5), suggestions("b", 5)], 8);
    assert_eq!(merged.len(), 8);
    // The cap trims the lowest-priority group, never the first
    assert!(merged[0].body.starts_with('a'));
    assert!(merged[7].body.starts_with('b'));
}

#[test]
fn test_empty_groups_are_skipped() {
    let merged = merge_ranked(vec![Vec::new(), suggestions("b", 2), Vec::new()], 8);
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_duplicate_text_across_sources_is_preserved() {
    let template = Candidate::template("1", "Greeting", "Hello there!");
    let generated = Candidate::suggestion(0, "Hello there!");
    let merged = merge_ranked(vec![vec![template], vec![generated]], 8);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].kind, CandidateKind::Template);
    assert_eq!(merged[1].kind, CandidateKind::GeneratedSuggestion);
}

#[test]
fn test_cap_smaller_than_first_group() {
    let merged = merge_ranked(vec![suggestions("a", 5)], 3);
    assert_eq!(merged.len(), 3);
}
