//! JSON payload builders for mocked Jira and Anthropic responses

use serde_json::{Value, json};

/// Builds a Jira REST v2 issue payload
pub struct IssueFixture {
  key: String,
  summary: String,
  description: Option<String>,
  status: String,
  priority: Option<String>,
  assignee: Option<String>,
  labels: Vec<String>,
  issue_type: String,
  comments: Vec<Value>,
}

impl IssueFixture {
  pub fn new(key: &str, summary: &str) -> Self {
    Self {
      key: key.to_string(),
      summary: summary.to_string(),
      description: None,
      status: "Open".to_string(),
      priority: None,
      assignee: None,
      labels: Vec::new(),
      issue_type: "Task".to_string(),
      comments: Vec::new(),
    }
  }

  pub fn description(mut self, description: &str) -> Self {
    self.description = Some(description.to_string());
    self
  }

  pub fn status(mut self, status: &str) -> Self {
    self.status = status.to_string();
    self
  }

  pub fn priority(mut self, priority: &str) -> Self {
    self.priority = Some(priority.to_string());
    self
  }

  pub fn assignee(mut self, display_name: &str) -> Self {
    self.assignee = Some(display_name.to_string());
    self
  }

  pub fn labels(mut self, labels: &[&str]) -> Self {
    self.labels = labels.iter().map(|l| l.to_string()).collect();
    self
  }

  pub fn issue_type(mut self, issue_type: &str) -> Self {
    self.issue_type = issue_type.to_string();
    self
  }

  /// Append a comment built with [`comment_json`]
  pub fn comment(mut self, comment: Value) -> Self {
    self.comments.push(comment);
    self
  }

  /// Append `count` filler comments
  pub fn comments(mut self, count: usize) -> Self {
    for i in 0..count {
      self.comments.push(comment_json(
        "Reviewer",
        "2024-03-01T09:00:00.000+0000",
        &format!("Update {}", i + 1),
      ));
    }
    self
  }

  pub fn build(self) -> Value {
    let total = self.comments.len();
    json!({
      "id": "10001",
      "key": self.key,
      "fields": {
        "summary": self.summary,
        "description": self.description,
        "status": { "id": "1", "name": self.status },
        "priority": self.priority.map(|name| json!({ "id": "3", "name": name })),
        "assignee": self.assignee.map(|name| json!({
          "accountId": "acc-1",
          "displayName": name,
          "emailAddress": null
        })),
        "labels": self.labels,
        "issuetype": { "id": "10002", "name": self.issue_type },
        "comment": { "comments": self.comments, "total": total }
      }
    })
  }
}

/// A Jira comment payload
pub fn comment_json(author: &str, created: &str, body: &str) -> Value {
  json!({
    "id": "20001",
    "author": { "accountId": "acc-2", "displayName": author },
    "body": body,
    "created": created
  })
}

/// Wrap issue payloads in a search response envelope
pub fn search_results_json(issues: Vec<Value>) -> Value {
  json!({
    "issues": issues,
    "isLast": true
  })
}

/// A successful Messages API response carrying one text block
pub fn anthropic_text_response(text: &str) -> Value {
  json!({
    "id": "msg_01XFDUDYJgAACzvnptvVoYEL",
    "type": "message",
    "role": "assistant",
    "model": "claude-sonnet-4-5-20250929",
    "content": [{ "type": "text", "text": text }],
    "stop_reason": "end_turn",
    "usage": { "input_tokens": 120, "output_tokens": 48 }
  })
}
