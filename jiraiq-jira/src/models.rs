use serde::Deserialize;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  #[serde(default)]
  pub id: String,
  pub key: String,
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields
#[derive(Debug, Deserialize)]
pub struct JiraIssueFields {
  pub summary: String,
  #[serde(default)]
  pub description: Option<String>,
  pub status: JiraIssueStatus,
  #[serde(default)]
  pub priority: Option<JiraPriority>,
  #[serde(default)]
  pub assignee: Option<JiraUser>,
  #[serde(default)]
  pub labels: Option<Vec<String>>,
  #[serde(default)]
  pub issuetype: Option<JiraIssueType>,
  #[serde(default)]
  pub comment: Option<JiraCommentPage>,
}

/// Represents a Jira issue status
#[derive(Debug, Deserialize)]
pub struct JiraIssueStatus {
  #[allow(dead_code)]
  pub id: Option<String>,
  pub name: String,
}

/// Represents a Jira issue priority
#[derive(Debug, Deserialize)]
pub struct JiraPriority {
  #[allow(dead_code)]
  pub id: Option<String>,
  pub name: String,
}

/// Represents a Jira issue type
#[derive(Debug, Deserialize)]
pub struct JiraIssueType {
  #[allow(dead_code)]
  pub id: Option<String>,
  pub name: String,
}

/// Represents a Jira user as embedded in issues and comments
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  #[serde(default)]
  pub account_id: Option<String>,
  pub display_name: String,
  #[serde(default)]
  pub email_address: Option<String>,
}

/// The comment block of an issue
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraCommentPage {
  #[serde(default)]
  pub comments: Vec<JiraComment>,
  #[serde(default)]
  pub total: Option<u32>,
}

/// Represents a single Jira comment
#[derive(Debug, Deserialize)]
pub struct JiraComment {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub author: Option<JiraUser>,
  #[serde(default)]
  pub body: String,
  #[serde(default)]
  pub created: String,
}

/// Represents a page of `/search/jql` results
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraSearchResults {
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
  #[serde(default)]
  pub next_page_token: Option<String>,
  #[serde(default)]
  pub is_last: Option<bool>,
}

/// Represents a Jira project
#[derive(Debug, Deserialize)]
pub struct JiraProject {
  #[serde(default)]
  pub id: String,
  pub key: String,
  pub name: String,
}

/// Error body returned by Jira on rejected requests
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JiraErrorBody {
  #[serde(default)]
  pub error_messages: Vec<String>,
  #[serde(default)]
  pub errors: std::collections::BTreeMap<String, String>,
}

impl JiraErrorBody {
  /// Human-readable summary of a Jira error body, falling back to the raw
  /// text when it is not the usual JSON shape.
  pub(crate) fn describe(body: &str) -> String {
    let parsed = serde_json::from_str::<JiraErrorBody>(body).unwrap_or_default();
    let mut parts = parsed.error_messages;
    parts.extend(parsed.errors.into_iter().map(|(field, message)| format!("{field}: {message}")));

    if parts.is_empty() {
      body.trim().to_string()
    } else {
      parts.join("; ")
    }
  }
}
