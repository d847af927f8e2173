//! Prompt construction for the narrative analysis.
//!
//! The prompt is fully determined by the issue. Whatever text comes back from
//! the generation service is passed to the renderer untouched.

use crate::issue::Issue;

/// Transcript placeholder for issues without comments.
pub const NO_COMMENTS: &str = "No comments yet.";

/// All comments as `"{author} ({timestamp}): {body}"`, separated by blank
/// lines.
pub fn comment_transcript(issue: &Issue) -> String {
  if issue.comments.is_empty() {
    return NO_COMMENTS.to_string();
  }

  issue
    .comments
    .iter()
    .map(|c| format!("{} ({}): {}", c.author, c.created, c.body))
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// Build the analysis prompt asking for sentiment, blockers, risk, and a
/// recommendation, in that order.
pub fn analysis_prompt(issue: &Issue) -> String {
  format!(
    "Analyze this Jira issue for blockers, risks, and team sentiment:

Issue: {summary}
Type: {issue_type}
Status: {status}
Priority: {priority}

Comments:
{transcript}

Provide:
1. Team Sentiment: Assess if the team mood is positive, neutral, or negative based on comment tone
2. Active Blockers: Identify any blockers mentioned (YES/NO and what they are)
3. Biggest Risk: What could go wrong or delay this issue
4. Actionable Recommendation: One specific next step to unblock or move forward

Be concise and quote specific comments when relevant.",
    summary = issue.summary,
    issue_type = issue.issue_type,
    status = issue.status,
    priority = issue.priority_or_default(),
    transcript = comment_transcript(issue),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::issue::Comment;

  fn sample_issue() -> Issue {
    Issue {
      key: "ENG-7".to_string(),
      summary: "Payment API times out".to_string(),
      issue_type: "Bug".to_string(),
      status: "In Progress".to_string(),
      priority: Some("High".to_string()),
      assignee: Some("Sam".to_string()),
      labels: Vec::new(),
      comments: vec![
        Comment {
          author: "Sam".to_string(),
          created: "2024-02-01T09:00:00.000+0000".to_string(),
          body: "Seeing 504s from the gateway".to_string(),
        },
        Comment {
          author: "Lee".to_string(),
          created: "2024-02-02T11:30:00.000+0000".to_string(),
          body: "Config change rolled back".to_string(),
        },
      ],
    }
  }

  #[test]
  fn test_transcript_format() {
    assert_eq!(
      comment_transcript(&sample_issue()),
      "Sam (2024-02-01T09:00:00.000+0000): Seeing 504s from the gateway\n\n\
       Lee (2024-02-02T11:30:00.000+0000): Config change rolled back"
    );
  }

  #[test]
  fn test_transcript_without_comments() {
    let mut issue = sample_issue();
    issue.comments.clear();
    assert_eq!(comment_transcript(&issue), "No comments yet.");
    assert!(analysis_prompt(&issue).contains("Comments:\nNo comments yet.\n\nProvide:"));
  }

  #[test]
  fn test_prompt_contains_issue_fields_in_order() {
    let prompt = analysis_prompt(&sample_issue());
    assert!(prompt.starts_with("Analyze this Jira issue for blockers, risks, and team sentiment:\n\n"));
    assert!(prompt.contains(
      "Issue: Payment API times out\nType: Bug\nStatus: In Progress\nPriority: High\n"
    ));

    let sentiment = prompt.find("1. Team Sentiment").unwrap();
    let blockers = prompt.find("2. Active Blockers").unwrap();
    let risk = prompt.find("3. Biggest Risk").unwrap();
    let action = prompt.find("4. Actionable Recommendation").unwrap();
    assert!(sentiment < blockers && blockers < risk && risk < action);
  }

  #[test]
  fn test_prompt_priority_default() {
    let mut issue = sample_issue();
    issue.priority = None;
    assert!(analysis_prompt(&issue).contains("Priority: Not set\n"));
  }
}
