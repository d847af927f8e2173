//! # JiraIQ Core Library
//!
//! Everything between the tracker data and the text handed back to the
//! assistant: the issue model, configuration, JQL construction, health
//! classification, narrative prompt construction, and report rendering.
//! Nothing in this crate performs network I/O.

pub mod classify;
pub mod config;
pub mod digest;
pub mod issue;
pub mod jql;
pub mod output;
pub mod prompt;
pub mod report;
pub mod text;

pub use classify::{Bucket, Classification, classify, partition};
pub use config::{AnthropicSettings, Config, ConfigError, JiraCredentials, JiraSettings};
pub use issue::{Comment, Issue, normalize_key};
pub use report::{ReportSelection, ReportTemplate};
