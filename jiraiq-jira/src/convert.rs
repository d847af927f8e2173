//! Conversion from Jira wire models into the core issue model.

use jiraiq_core::{Comment, Issue};

use crate::models::{JiraComment, JiraIssue};

const UNKNOWN: &str = "Unknown";

impl From<JiraIssue> for Issue {
  fn from(issue: JiraIssue) -> Self {
    let fields = issue.fields;
    Self {
      key: issue.key,
      summary: fields.summary,
      issue_type: fields.issuetype.map_or_else(|| UNKNOWN.to_string(), |t| t.name),
      status: fields.status.name,
      priority: fields.priority.map(|p| p.name),
      assignee: fields.assignee.map(|a| a.display_name),
      labels: fields.labels.unwrap_or_default(),
      comments: fields
        .comment
        .map(|page| page.comments.into_iter().map(Comment::from).collect())
        .unwrap_or_default(),
    }
  }
}

impl From<JiraComment> for Comment {
  fn from(comment: JiraComment) -> Self {
    Self {
      author: comment
        .author
        .map_or_else(|| UNKNOWN.to_string(), |a| a.display_name),
      created: comment.created,
      body: comment.body,
    }
  }
}
