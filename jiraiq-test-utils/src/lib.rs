//! Test utilities shared across the JiraIQ workspace
//!
//! This crate provides common testing infrastructure including:
//! - Jira REST payload builders ([`IssueFixture`])
//! - Anthropic Messages API payload builders ([`anthropic_text_response`])
//! - Environment variable isolation ([`EnvVarGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use fixtures::{IssueFixture, anthropic_text_response, comment_json, search_results_json};
