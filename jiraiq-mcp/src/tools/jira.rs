//! Parameter structs for Jira tools.

use jiraiq_core::ReportSelection;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::analysis::DEFAULT_BLOCKED_LIMIT;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AnalyzeIssueParams {
  /// Jira issue key (e.g. "PROJ-123"). Case-insensitive.
  pub issue_key: String,
  /// Report style: "executive", "technical", "pm", or "all". Defaults to "executive".
  #[serde(default, deserialize_with = "deserialize_template")]
  #[schemars(with = "TemplateName", extend("default" = "executive"))]
  pub template: ReportSelection,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindBlockedIssuesParams {
  /// Jira project key (e.g. "PROJ").
  pub project_key: String,
  /// Maximum number of issues to return, between 1 and 100. Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AnalyzeSprintParams {
  /// Jira project key (e.g. "PROJ").
  pub project_key: String,
  /// Sprint name. Defaults to the project's currently open sprints.
  #[serde(default)]
  pub sprint_name: Option<String>,
}

/// Schema shape of the `template` parameter.
#[derive(JsonSchema)]
#[serde(rename_all = "lowercase")]
#[allow(dead_code)]
enum TemplateName {
  Executive,
  Technical,
  Pm,
  All,
}

const fn default_limit() -> i64 {
  DEFAULT_BLOCKED_LIMIT
}

/// `null` means the default template. Unrecognized names render every
/// template.
fn deserialize_template<'de, D>(deserializer: D) -> Result<ReportSelection, D::Error>
where
  D: Deserializer<'de>,
{
  let Some(raw) = Option::<String>::deserialize(deserializer)? else {
    return Ok(ReportSelection::default());
  };
  Ok(raw.parse().unwrap_or_else(|err| {
    warn!(error = %err, "Falling back to the combined report");
    ReportSelection::All
  }))
}
