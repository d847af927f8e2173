//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource: issues, JQL search, the
//! authenticated user, and projects.

pub mod issues;
pub mod projects;
pub mod search;
pub mod users;
