//! # Tool Workflows
//!
//! The three tool pipelines, independent of the MCP plumbing. Each returns
//! the report text or a [`ToolError`] that already carries the user-facing
//! message.

use jiraiq_core::jql::SearchMode;
use jiraiq_core::prompt::analysis_prompt;
use jiraiq_core::{Issue, ReportSelection, digest, jql, normalize_key, report};
use jiraiq_jira::JiraIssue;
use tracing::debug;

use crate::context::ServerContext;
use crate::types::ToolError;

pub const ANALYZE_ISSUE: &str = "analyze_jira_issue";
pub const FIND_BLOCKED: &str = "find_blocked_issues";
pub const ANALYZE_SPRINT: &str = "analyze_sprint";

pub const DEFAULT_BLOCKED_LIMIT: i64 = 10;
const MIN_BLOCKED_LIMIT: i64 = 1;
const MAX_BLOCKED_LIMIT: i64 = 100;
/// Upper bound on issues pulled into one sprint report.
pub const SPRINT_MAX_RESULTS: u32 = 50;

/// Clamp a requested blocked-issue limit into the accepted range.
pub fn clamp_limit(limit: i64) -> u32 {
  let clamped = limit.clamp(MIN_BLOCKED_LIMIT, MAX_BLOCKED_LIMIT);
  u32::try_from(clamped).unwrap_or(10)
}

/// Fetch one issue, generate a narrative for it, and render the selected
/// report(s).
pub async fn analyze_issue(
  context: &ServerContext,
  issue_key: &str,
  selection: ReportSelection,
) -> Result<String, ToolError> {
  let key = require_key(ANALYZE_ISSUE, issue_key)?;
  let jira = context
    .get_jira_client()
    .await
    .map_err(|e| ToolError::execution(ANALYZE_ISSUE, e))?;

  let issue: Issue = jira
    .get_issue(&key)
    .await
    .map_err(|e| ToolError::fetch_failed(&key, format!("{e:#}")))?
    .into();
  debug!(issue_key = %issue.key, comments = issue.comment_count(), "Fetched issue");

  let prompt = analysis_prompt(&issue);
  let analysis = context
    .anthropic()
    .complete(&prompt)
    .await
    .map_err(|e| ToolError::execution(ANALYZE_ISSUE, format!("{e:#}")))?;

  Ok(report::render(selection, &issue, &analysis))
}

/// List open issues in a project that look blocked.
pub async fn find_blocked_issues(context: &ServerContext, project_key: &str, limit: i64) -> Result<String, ToolError> {
  let project = require_key(FIND_BLOCKED, project_key)?;
  let jira = context
    .get_jira_client()
    .await
    .map_err(|e| ToolError::execution(FIND_BLOCKED, e))?;

  let query = jql::build(&project, &SearchMode::Blocked);
  let issues = jira
    .search_issues(&query, clamp_limit(limit))
    .await
    .map_err(|e| ToolError::search_failed(&project, format!("{e:#}")))?;

  Ok(digest::render_blocked_list(&project, &into_issues(issues)))
}

/// Classify the open issues of a sprint and render the health report.
pub async fn analyze_sprint(
  context: &ServerContext,
  project_key: &str,
  sprint_name: Option<&str>,
) -> Result<String, ToolError> {
  let project = require_key(ANALYZE_SPRINT, project_key)?;
  let jira = context
    .get_jira_client()
    .await
    .map_err(|e| ToolError::execution(ANALYZE_SPRINT, e))?;

  let query = jql::build(&project, &SearchMode::Sprint(sprint_name));
  let issues = jira
    .search_issues(&query, SPRINT_MAX_RESULTS)
    .await
    .map_err(|e| ToolError::sprint_failed(&project, format!("{e:#}")))?;

  Ok(digest::render_sprint_report(&project, &into_issues(issues)))
}

fn require_key(tool_name: &str, raw: &str) -> Result<String, ToolError> {
  let key = normalize_key(raw);
  if key.is_empty() {
    return Err(ToolError::execution(tool_name, "key must not be empty"));
  }
  Ok(key)
}

fn into_issues(issues: Vec<JiraIssue>) -> Vec<Issue> {
  issues.into_iter().map(Issue::from).collect()
}
