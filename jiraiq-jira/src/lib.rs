//! # Jira API Client
//!
//! Jira REST API v2 integration for JiraIQ: fetching single issues, running
//! JQL searches, and the account/project lookups used by connectivity checks.
//! Wire models convert into [`jiraiq_core::Issue`] for classification and
//! rendering.

mod auth;
mod client;
pub mod consts;
mod convert;
mod endpoints;
pub mod models;

pub use auth::create_jira_client_from_credentials;
// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export models
pub use models::{
  JiraAuth, JiraComment, JiraCommentPage, JiraIssue, JiraIssueFields, JiraIssueStatus, JiraIssueType, JiraPriority,
  JiraProject, JiraSearchResults, JiraUser,
};
