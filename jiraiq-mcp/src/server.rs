//! MCP server implementation with all tool handlers.

use std::sync::Arc;

use jiraiq_core::normalize_key;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use tracing::{info, warn};

use crate::analysis::{self, ANALYZE_ISSUE, ANALYZE_SPRINT, FIND_BLOCKED};
use crate::context::ServerContext;
use crate::tools::jira::{AnalyzeIssueParams, AnalyzeSprintParams, FindBlockedIssuesParams};
use crate::types::{ToolError, text_result};

/// Name advertised to MCP clients.
pub const SERVER_NAME: &str = "jiraiq";

#[derive(Clone)]
pub struct JiraIqServer {
  context: Arc<ServerContext>,
  tool_router: ToolRouter<Self>,
}

#[tool_router]
impl JiraIqServer {
  pub fn new(context: ServerContext) -> Self {
    let context = Arc::new(context);
    Self {
      context,
      tool_router: Self::tool_router(),
    }
  }

  #[tool(
    description = "Analyze a Jira issue for blockers, risks, and team sentiment, then render a report \
                   for the chosen audience: executive, technical, pm, or all",
    annotations(read_only_hint = true)
  )]
  async fn analyze_jira_issue(&self, params: Parameters<AnalyzeIssueParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    info!(
      tool = ANALYZE_ISSUE,
      issue_key = %normalize_key(&p.issue_key),
      template = ?p.template,
      "Tool called"
    );

    respond(
      ANALYZE_ISSUE,
      analysis::analyze_issue(&self.context, &p.issue_key, p.template).await,
    )
  }

  #[tool(
    description = "Find open issues in a Jira project that look blocked, with recent comments that mention a blocker",
    annotations(read_only_hint = true)
  )]
  async fn find_blocked_issues(&self, params: Parameters<FindBlockedIssuesParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    info!(
      tool = FIND_BLOCKED,
      project_key = %normalize_key(&p.project_key),
      limit = p.limit,
      "Tool called"
    );

    respond(
      FIND_BLOCKED,
      analysis::find_blocked_issues(&self.context, &p.project_key, p.limit).await,
    )
  }

  #[tool(
    description = "Report sprint health for a Jira project: blocked, high-activity, and stale issues with recommendations",
    annotations(read_only_hint = true)
  )]
  async fn analyze_sprint(&self, params: Parameters<AnalyzeSprintParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    info!(
      tool = ANALYZE_SPRINT,
      project_key = %normalize_key(&p.project_key),
      sprint = p.sprint_name.as_deref().unwrap_or("<open sprints>"),
      "Tool called"
    );

    respond(
      ANALYZE_SPRINT,
      analysis::analyze_sprint(&self.context, &p.project_key, p.sprint_name.as_deref()).await,
    )
  }
}

#[tool_handler]
impl ServerHandler for JiraIqServer {
  fn get_info(&self) -> ServerInfo {
    let mut server_info = Implementation::from_build_env();
    server_info.name = SERVER_NAME.to_string();
    server_info.version = env!("CARGO_PKG_VERSION").to_string();

    ServerInfo {
      instructions: Some(
        "JiraIQ MCP server. Read-only Jira analysis tools: \
         analyze_jira_issue summarizes one issue for an executive, technical, or PM audience; \
         find_blocked_issues lists open issues in a project that look blocked; \
         analyze_sprint reports blocked, high-activity, and stale issues in a sprint."
          .into(),
      ),
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      server_info,
      ..Default::default()
    }
  }
}

/// Turn a workflow outcome into a tool result. Failures stay in-band.
fn respond(tool_name: &str, outcome: Result<String, ToolError>) -> Result<CallToolResult, McpError> {
  match outcome {
    Ok(text) => Ok(text_result(text)),
    Err(e) => {
      warn!(tool = tool_name, error = %e.message, "Tool call failed");
      e.into_result()
    }
  }
}
