//! # Issue Classifier
//!
//! Sorts a batch of issues into health buckets. Rules are checked in a fixed
//! order and the first match wins:
//!
//! 1. **Blocked**: a `blocked` label, a `Blocked` status, or "block" in any
//!    of the last three comments (all case-insensitive).
//! 2. **High activity**: more than five comments.
//! 3. **Stale**: no comments at all.
//! 4. **Normal**: everything else.
//!
//! Unlike the blocked search query, the description is not inspected here.

use crate::issue::Issue;

/// Number of trailing comments scanned for blocker mentions.
pub const RECENT_COMMENT_WINDOW: usize = 3;

/// Comment count above which an issue counts as high activity.
pub const HIGH_ACTIVITY_THRESHOLD: usize = 5;

/// Health bucket of a single issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
  Blocked,
  HighActivity,
  Stale,
  Normal,
}

/// Issues partitioned by bucket, each bucket in input order.
#[derive(Debug, Default)]
pub struct Classification<'a> {
  pub blocked: Vec<&'a Issue>,
  pub high_activity: Vec<&'a Issue>,
  pub stale: Vec<&'a Issue>,
  pub normal: Vec<&'a Issue>,
}

impl Classification<'_> {
  /// Total number of classified issues.
  pub fn total(&self) -> usize {
    self.blocked.len() + self.high_activity.len() + self.stale.len() + self.normal.len()
  }
}

/// Whether `text` mentions a blocker (case-insensitive "block").
pub fn mentions_block(text: &str) -> bool {
  text.to_lowercase().contains("block")
}

/// Whether the issue shows any blocked indicator.
pub fn is_blocked(issue: &Issue) -> bool {
  issue.labels.iter().any(|label| label.eq_ignore_ascii_case("blocked"))
    || issue.status.eq_ignore_ascii_case("blocked")
    || issue
      .recent_comments(RECENT_COMMENT_WINDOW)
      .iter()
      .any(|comment| mentions_block(&comment.body))
}

/// Classify a single issue.
pub fn classify(issue: &Issue) -> Bucket {
  if is_blocked(issue) {
    Bucket::Blocked
  } else if issue.comment_count() > HIGH_ACTIVITY_THRESHOLD {
    Bucket::HighActivity
  } else if issue.comment_count() == 0 {
    Bucket::Stale
  } else {
    Bucket::Normal
  }
}

/// Partition `issues` into buckets, preserving their order within each
/// bucket.
pub fn partition(issues: &[Issue]) -> Classification<'_> {
  let mut result = Classification::default();
  for issue in issues {
    match classify(issue) {
      Bucket::Blocked => result.blocked.push(issue),
      Bucket::HighActivity => result.high_activity.push(issue),
      Bucket::Stale => result.stale.push(issue),
      Bucket::Normal => result.normal.push(issue),
    }
  }
  result
}
