//! Result merging and ranking
//!
//! Ordering is source-priority concatenation, not interleaving: each group
//! keeps its adapter's internal order. No cross-source deduplication is
//! performed; identical text from different sources is distinct provenance.

use crate::candidate::Candidate;

/// Concatenate candidate groups in priority order and cap the combined list
pub fn merge_ranked(groups: Vec<Vec<Candidate>>, cap: usize) -> Vec<Candidate> {
    let mut merged: Vec<Candidate> = groups.into_iter().flatten().collect();
    merged.truncate(cap);
    merged
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod merge_tests;
