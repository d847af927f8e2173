//! Error type for tool calls.
//!
//! Tracker and text-generation failures never become protocol errors. They
//! are rendered into the text content of a `CallToolResult` flagged with
//! `is_error`, so the assistant can read and relay them.

use std::fmt;

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};

const FETCH_HINT: &str = "Please verify the issue key exists and you have access.";
const CREDENTIALS_HINT: &str = "Please check your Jira credentials and issue key.";

/// A failed tool call, rendered as `message` or `message\n\nhint`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolError {
  pub message: String,
  pub hint: Option<String>,
}

impl ToolError {
  /// The issue could not be fetched from the tracker.
  pub fn fetch_failed(issue_key: &str, err: impl fmt::Display) -> Self {
    Self {
      message: format!("Could not fetch issue {issue_key}. Error: {err}"),
      hint: Some(FETCH_HINT.into()),
    }
  }

  /// The blocked-issue search failed.
  pub fn search_failed(project_key: &str, err: impl fmt::Display) -> Self {
    Self {
      message: format!("Could not search project {project_key}. Error: {err}"),
      hint: None,
    }
  }

  /// The sprint search failed.
  pub fn sprint_failed(project_key: &str, err: impl fmt::Display) -> Self {
    Self {
      message: format!("Could not analyze sprint for {project_key}. Error: {err}"),
      hint: None,
    }
  }

  /// Any other failure while running `tool_name`.
  pub fn execution(tool_name: &str, err: impl fmt::Display) -> Self {
    Self {
      message: format!("Error executing {tool_name}: {err}"),
      hint: Some(CREDENTIALS_HINT.into()),
    }
  }

  pub fn render(&self) -> String {
    match &self.hint {
      Some(hint) => format!("{}\n\n{}", self.message, hint),
      None => self.message.clone(),
    }
  }

  pub fn to_call_tool_result(&self) -> CallToolResult {
    CallToolResult::error(vec![Content::text(self.render())])
  }

  pub fn into_result(self) -> Result<CallToolResult, McpError> {
    Ok(self.to_call_tool_result())
  }
}

impl fmt::Display for ToolError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.render())
  }
}

/// Successful plain-text tool output.
pub fn text_result(text: String) -> CallToolResult {
  CallToolResult::success(vec![Content::text(text)])
}
