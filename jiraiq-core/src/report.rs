//! # Report Renderer
//!
//! Renders one issue plus a free-text analysis into audience-specific
//! reports. Each template has a fixed layout; the analysis text is inserted
//! verbatim. Missing priority and assignee fall back to the same placeholders
//! in every template.

use std::fmt;
use std::str::FromStr;

use crate::issue::{Comment, Issue};
use crate::text::{divider, excerpt};

/// Keywords marking a comment as technical (matched case-insensitively).
pub const TECHNICAL_KEYWORDS: [&str; 8] = ["code", "api", "database", "error", "config", "patch", "stack", "query"];

/// Maximum technical comments shown in the technical report.
pub const MAX_TECHNICAL_COMMENTS: usize = 3;

/// Characters of a technical comment shown before it is cut.
pub const TECHNICAL_EXCERPT_CHARS: usize = 200;

const CHECKBOX: &str = "☐";

const EXECUTIVE_ACTIONS: [&str; 3] = [
  "Review recommendations above",
  "Escalate blockers to appropriate teams",
  "Set follow-up checkpoint date",
];

const IMPLEMENTATION_CHECKLIST: [&str; 5] = [
  "Review analysis recommendations",
  "Identify immediate workarounds",
  "Test in development environment",
  "Implement permanent solution",
  "Update documentation",
];

const TEAM_COORDINATION: [&str; 4] = [
  "Engineering review needed?",
  "Design input needed?",
  "QA planning needed?",
  "Dependencies on other issues?",
];

const SPRINT_PLANNING: [&str; 4] = [
  "Keep in current sprint?",
  "Move to next sprint?",
  "Break into smaller stories?",
  "Escalate blockers?",
];

/// Audience of a single report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTemplate {
  Executive,
  Technical,
  Pm,
}

/// Which report(s) to render. Defaults to the executive report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSelection {
  Single(ReportTemplate),
  /// All three reports, each under a labelled divider.
  All,
}

/// Error returned when a template name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown report template '{0}'. Expected one of: executive, technical, pm, all")]
pub struct UnknownTemplate(pub String);

impl Default for ReportSelection {
  fn default() -> Self {
    Self::Single(ReportTemplate::Executive)
  }
}

impl ReportSelection {
  /// The templates this selection renders, in output order.
  pub fn templates(self) -> Vec<ReportTemplate> {
    match self {
      Self::Single(template) => vec![template],
      Self::All => vec![ReportTemplate::Executive, ReportTemplate::Technical, ReportTemplate::Pm],
    }
  }
}

impl FromStr for ReportSelection {
  type Err = UnknownTemplate;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "executive" => Ok(Self::Single(ReportTemplate::Executive)),
      "technical" => Ok(Self::Single(ReportTemplate::Technical)),
      "pm" => Ok(Self::Single(ReportTemplate::Pm)),
      "all" => Ok(Self::All),
      _ => Err(UnknownTemplate(s.to_string())),
    }
  }
}

impl ReportTemplate {
  /// Section label used in the combined report.
  pub const fn section_title(self) -> &'static str {
    match self {
      Self::Executive => "EXECUTIVE SUMMARY",
      Self::Technical => "TECHNICAL ANALYSIS",
      Self::Pm => "PM REPORT",
    }
  }
}

impl fmt::Display for ReportTemplate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::Executive => "executive",
      Self::Technical => "technical",
      Self::Pm => "pm",
    };
    f.write_str(name)
  }
}

/// Render the selected report(s).
pub fn render(selection: ReportSelection, issue: &Issue, analysis: &str) -> String {
  match selection {
    ReportSelection::Single(template) => render_template(template, issue, analysis),
    ReportSelection::All => render_combined(issue, analysis),
  }
}

/// Render a single template.
pub fn render_template(template: ReportTemplate, issue: &Issue, analysis: &str) -> String {
  match template {
    ReportTemplate::Executive => render_executive(issue, analysis),
    ReportTemplate::Technical => render_technical(issue, analysis),
    ReportTemplate::Pm => render_pm(issue, analysis),
  }
}

/// All three reports, each preceded by its section label and a divider.
pub fn render_combined(issue: &Issue, analysis: &str) -> String {
  let rule = divider('=');
  ReportSelection::All
    .templates()
    .into_iter()
    .map(|template| {
      format!(
        "{}:\n{rule}\n{}",
        template.section_title(),
        render_template(template, issue, analysis)
      )
    })
    .collect::<Vec<_>>()
    .join(&format!("\n\n{rule}\n\n"))
}

/// Report for leadership: metadata, analysis, and an action checklist.
pub fn render_executive(issue: &Issue, analysis: &str) -> String {
  format!(
    "{}\n\nPriority: {} | Status: {} | Owner: {}\n\n{analysis}\n\n**EXECUTIVE ACTIONS:**\n{}",
    identity_line(issue),
    issue.priority_or_default(),
    issue.status,
    issue.assignee_or_default(),
    checklist(&EXECUTIVE_ACTIONS),
  )
}

/// Report for engineers: adds excerpts of technical comments.
pub fn render_technical(issue: &Issue, analysis: &str) -> String {
  let mut out = format!(
    "{}\n\nStatus: {} | Priority: {} | Assignee: {}\n\n{analysis}\n\n**TECHNICAL CONTEXT:**\n",
    identity_line(issue),
    issue.status,
    issue.priority_or_default(),
    issue.assignee_or_default(),
  );

  let technical = technical_comments(issue);
  if technical.is_empty() {
    out.push_str("No technical details in comments.\n");
  } else {
    for (i, comment) in technical.iter().take(MAX_TECHNICAL_COMMENTS).enumerate() {
      out.push_str(&format!(
        "\n{}. {} ({}):\n   {}\n",
        i + 1,
        comment.author,
        comment.created_date(),
        excerpt(&comment.body, TECHNICAL_EXCERPT_CHARS)
      ));
    }
  }

  out.push_str("\n**IMPLEMENTATION CHECKLIST:**\n");
  out.push_str(&checklist(&IMPLEMENTATION_CHECKLIST));
  out
}

/// Report for product managers: adds engagement and planning checklists.
pub fn render_pm(issue: &Issue, analysis: &str) -> String {
  let count = issue.comment_count();
  format!(
    "{}\n\nStatus: {} | Priority: {} | Owner: {}\nDiscussion: {count} comments | {}\n\n{analysis}\n\n\
     **TEAM COORDINATION:**\n{}\n\n**SPRINT PLANNING:**\n{}",
    identity_line(issue),
    issue.status,
    issue.priority_or_default(),
    issue.assignee_or_default(),
    engagement_label(count),
    checklist(&TEAM_COORDINATION),
    checklist(&SPRINT_PLANNING),
  )
}

/// Engagement label for a comment count.
pub const fn engagement_label(comment_count: usize) -> &'static str {
  if comment_count > 5 {
    "🔥 High activity"
  } else if comment_count > 2 {
    "📊 Moderate activity"
  } else {
    "💤 Low activity"
  }
}

/// Comments containing at least one technical keyword, in order.
pub fn technical_comments(issue: &Issue) -> Vec<&Comment> {
  issue
    .comments
    .iter()
    .filter(|comment| {
      let body = comment.body.to_lowercase();
      TECHNICAL_KEYWORDS.iter().any(|keyword| body.contains(keyword))
    })
    .collect()
}

fn identity_line(issue: &Issue) -> String {
  format!("**{}**: {}", issue.key, issue.summary)
}

fn checklist(items: &[&str]) -> String {
  items
    .iter()
    .map(|item| format!("{CHECKBOX} {item}"))
    .collect::<Vec<_>>()
    .join("\n")
}
