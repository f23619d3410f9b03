//! deskmate - customer-service agent composer with real-time assistance
//!
//! The core of the crate is the suggestion aggregation pipeline: a debounced
//! query dispatcher fans out to heterogeneous suggestion sources (templates,
//! knowledge base, generative service), merges and ranks their results, and
//! a generation counter suppresses results that arrive after a newer query
//! has superseded them. A separate, simpler path extracts inline ghost-text
//! continuations while the agent types.

pub mod app;
pub mod candidate;
pub mod compose;
pub mod config;
pub mod debounce;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod palette;
pub mod provider;
pub mod relevance;
pub mod session;
pub mod sources;

#[cfg(test)]
pub mod test_utils;
