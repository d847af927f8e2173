//! # Batch Digests
//!
//! Text summaries over a batch of issues: the blocked-issue list and the
//! sprint health report. Both are plain text meant to be read by the
//! assistant and relayed to the user.

use crate::classify::{Classification, RECENT_COMMENT_WINDOW, mentions_block, partition};
use crate::issue::{Issue, UNASSIGNED};
use crate::text::{divider, truncate_chars};

/// Blocked issues listed in the sprint report.
pub const SPRINT_BLOCKED_SHOWN: usize = 5;
/// High-activity issues listed in the sprint report.
pub const SPRINT_HIGH_ACTIVITY_SHOWN: usize = 3;
/// Stale issues listed in the sprint report.
pub const SPRINT_STALE_SHOWN: usize = 3;

const BLOCKER_QUOTE_CHARS: usize = 80;

/// Message for a blocked search without matches.
pub fn all_clear(project: &str) -> String {
  format!("✅ No blocked issues found in {project}. All clear!")
}

/// Message for a sprint search without matches.
pub fn empty_sprint(project: &str) -> String {
  format!("No open issues found in sprint for {project}")
}

/// Numbered list of potentially blocked issues, quoting recent comments that
/// mention a blocker.
pub fn render_blocked_list(project: &str, issues: &[Issue]) -> String {
  if issues.is_empty() {
    return all_clear(project);
  }

  let mut out = format!(
    "🚨 Found {} potentially blocked issue(s) in {project}:\n\n",
    issues.len()
  );

  for (i, issue) in issues.iter().enumerate() {
    out.push_str(&format!("{}. **{}**: {}\n", i + 1, issue.key, issue.summary));
    out.push_str(&format!(
      "   Status: {} | Priority: {} | Owner: {}\n",
      issue.status,
      issue.priority.as_deref().unwrap_or("N/A"),
      issue.assignee.as_deref().unwrap_or(UNASSIGNED)
    ));

    let mentions: Vec<String> = issue
      .recent_comments(RECENT_COMMENT_WINDOW)
      .iter()
      .filter(|comment| mentions_block(&comment.body))
      .map(|comment| {
        format!(
          "   💬 {}: \"{}...\"",
          comment.author,
          truncate_chars(&comment.body, BLOCKER_QUOTE_CHARS)
        )
      })
      .collect();

    if !mentions.is_empty() {
      out.push_str(&mentions.join("\n"));
      out.push('\n');
    }

    out.push('\n');
  }

  out.push_str(
    "\n💡 Tip: Use 'analyze_jira_issue' with each issue key to get detailed analysis and recommendations.",
  );
  out
}

/// Sprint health report: bucket counts, top issues per bucket, and
/// recommendations for every non-empty bucket.
pub fn render_sprint_report(project: &str, issues: &[Issue]) -> String {
  if issues.is_empty() {
    return empty_sprint(project);
  }

  let buckets = partition(issues);
  render_classification(project, &buckets)
}

/// Render an existing classification as a sprint health report.
pub fn render_classification(project: &str, buckets: &Classification<'_>) -> String {
  let rule = divider('-');
  let mut out = format!("📊 SPRINT HEALTH REPORT: {project}\n{}\n\n", divider('='));

  out.push_str(&format!("Total Issues: {}\n", buckets.total()));
  out.push_str(&format!("Blocked: {} 🔴\n", buckets.blocked.len()));
  out.push_str(&format!("High Activity: {} 🟡\n", buckets.high_activity.len()));
  out.push_str(&format!("Stale (no comments): {} 💤\n\n", buckets.stale.len()));

  if !buckets.blocked.is_empty() {
    out.push_str("🚨 BLOCKED ISSUES (Need Immediate Attention):\n");
    out.push_str(&rule);
    out.push('\n');
    for issue in buckets.blocked.iter().take(SPRINT_BLOCKED_SHOWN) {
      out.push_str(&format!("• {}: {}\n  Status: {}\n\n", issue.key, issue.summary, issue.status));
    }
  }

  if !buckets.high_activity.is_empty() {
    out.push_str("\n🔥 HIGH ACTIVITY ISSUES (Active Discussion):\n");
    out.push_str(&rule);
    out.push('\n');
    for issue in buckets.high_activity.iter().take(SPRINT_HIGH_ACTIVITY_SHOWN) {
      out.push_str(&format!(
        "• {}: {}\n  Comments: {}\n\n",
        issue.key,
        issue.summary,
        issue.comment_count()
      ));
    }
  }

  if !buckets.stale.is_empty() {
    out.push_str("\n💤 STALE ISSUES (No Comments Yet):\n");
    out.push_str(&rule);
    out.push('\n');
    for issue in buckets.stale.iter().take(SPRINT_STALE_SHOWN) {
      out.push_str(&format!("• {}: {}\n  Status: {}\n\n", issue.key, issue.summary, issue.status));
    }
  }

  out.push_str("\n💡 Recommendations:\n");
  if !buckets.blocked.is_empty() {
    out.push_str("• Escalate blocked issues immediately\n");
  }
  if !buckets.high_activity.is_empty() {
    out.push_str("• Review high-activity issues - may need PM intervention\n");
  }
  if !buckets.stale.is_empty() {
    out.push_str("• Check in on stale issues - ensure they're not forgotten\n");
  }

  out
}
