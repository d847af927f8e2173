//! # Issue Model
//!
//! Read-only snapshots of tracker issues. Issues are fetched fresh for every
//! tool call and never mutated, so every field is plain owned data.

/// Placeholder shown when an issue has no priority.
pub const PRIORITY_NOT_SET: &str = "Not set";

/// Placeholder shown when an issue has no assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// A single issue as seen by the classifier and the report renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
  pub key: String,
  pub summary: String,
  pub issue_type: String,
  pub status: String,
  pub priority: Option<String>,
  pub assignee: Option<String>,
  pub labels: Vec<String>,
  /// Chronological order, oldest first.
  pub comments: Vec<Comment>,
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
  pub author: String,
  /// Creation timestamp exactly as the tracker reported it.
  pub created: String,
  pub body: String,
}

impl Issue {
  /// Priority name, or "Not set" when the tracker has none.
  pub fn priority_or_default(&self) -> &str {
    self.priority.as_deref().unwrap_or(PRIORITY_NOT_SET)
  }

  /// Assignee display name, or "Unassigned".
  pub fn assignee_or_default(&self) -> &str {
    self.assignee.as_deref().unwrap_or(UNASSIGNED)
  }

  pub fn comment_count(&self) -> usize {
    self.comments.len()
  }

  /// The last `n` comments, oldest first.
  pub fn recent_comments(&self, n: usize) -> &[Comment] {
    let start = self.comments.len().saturating_sub(n);
    &self.comments[start..]
  }
}

impl Comment {
  /// The calendar-date prefix of the creation timestamp (`YYYY-MM-DD`).
  pub fn created_date(&self) -> &str {
    match self.created.char_indices().nth(10) {
      Some((idx, _)) => &self.created[..idx],
      None => &self.created,
    }
  }
}

/// Normalize a user-supplied issue or project key to the tracker's canonical
/// uppercase form.
pub fn normalize_key(input: &str) -> String {
  input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment(body: &str) -> Comment {
    Comment {
      author: "Ada".to_string(),
      created: "2024-03-05T10:15:00.000+0000".to_string(),
      body: body.to_string(),
    }
  }

  fn issue_with_comments(bodies: &[&str]) -> Issue {
    Issue {
      key: "ENG-1".to_string(),
      summary: "Login page fails".to_string(),
      issue_type: "Bug".to_string(),
      status: "Open".to_string(),
      priority: None,
      assignee: None,
      labels: Vec::new(),
      comments: bodies.iter().map(|b| comment(b)).collect(),
    }
  }

  #[test]
  fn test_missing_fields_use_defaults() {
    let issue = issue_with_comments(&[]);
    assert_eq!(issue.priority_or_default(), "Not set");
    assert_eq!(issue.assignee_or_default(), "Unassigned");
  }

  #[test]
  fn test_present_fields_are_used() {
    let mut issue = issue_with_comments(&[]);
    issue.priority = Some("High".to_string());
    issue.assignee = Some("Grace Hopper".to_string());
    assert_eq!(issue.priority_or_default(), "High");
    assert_eq!(issue.assignee_or_default(), "Grace Hopper");
  }

  #[test]
  fn test_recent_comments() {
    let issue = issue_with_comments(&["one", "two", "three", "four", "five"]);
    let recent: Vec<&str> = issue.recent_comments(3).iter().map(|c| c.body.as_str()).collect();
    assert_eq!(recent, vec!["three", "four", "five"]);

    let short = issue_with_comments(&["only"]);
    assert_eq!(short.recent_comments(3).len(), 1);
    assert!(issue_with_comments(&[]).recent_comments(3).is_empty());
  }

  #[test]
  fn test_created_date_prefix() {
    assert_eq!(comment("x").created_date(), "2024-03-05");

    let short = Comment {
      created: "2024".to_string(),
      ..comment("x")
    };
    assert_eq!(short.created_date(), "2024");
  }

  #[test]
  fn test_normalize_key() {
    assert_eq!(normalize_key("eng-123"), "ENG-123");
    assert_eq!(normalize_key("  proj "), "PROJ");
  }
}
