//! Constants for the jiraiq-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("jiraiq/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issue fields requested on fetch and search. Everything the classifier and
/// the renderers read, nothing more.
pub const ISSUE_FIELDS: &str = "summary,description,status,priority,assignee,labels,comment,issuetype";
