//! # JQL Query Builder
//!
//! Builds the tracker filter expressions used by the search tools.
//!
//! The blocked search deliberately over-matches: any issue whose description
//! or comments mention "blocked" is returned, even when the word appears in an
//! unrelated sentence. Recall matters more than precision for this report.

/// Which filter to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode<'a> {
  /// Open issues that look blocked.
  Blocked,
  /// Open issues in the named sprint, or in any open sprint when `None`.
  Sprint(Option<&'a str>),
}

/// Build a JQL expression for `project` in the given mode.
pub fn build(project: &str, mode: &SearchMode<'_>) -> String {
  match mode {
    SearchMode::Blocked => blocked_search(project),
    SearchMode::Sprint(sprint) => sprint_search(project, *sprint),
  }
}

/// Open issues in `project` that carry any hint of being blocked.
pub fn blocked_search(project: &str) -> String {
  format!(
    "project = {} AND status != Done AND (labels = blocked OR description ~ \"blocked\" OR comment ~ \"blocked\" OR status = Blocked)",
    quote(project)
  )
}

/// Open issues in `project` belonging to `sprint_name`, or to any currently
/// open sprint when no name is given.
pub fn sprint_search(project: &str, sprint_name: Option<&str>) -> String {
  match sprint_name.map(str::trim).filter(|name| !name.is_empty()) {
    Some(name) => format!(
      "project = {} AND sprint = {} AND status != Done",
      quote(project),
      quote(name)
    ),
    None => format!("project = {} AND sprint in openSprints() AND status != Done", quote(project)),
  }
}

/// Quote a JQL string literal, escaping embedded quotes and backslashes.
pub fn quote(value: &str) -> String {
  let mut quoted = String::with_capacity(value.len() + 2);
  quoted.push('"');
  for ch in value.chars() {
    if ch == '"' || ch == '\\' {
      quoted.push('\\');
    }
    quoted.push(ch);
  }
  quoted.push('"');
  quoted
}
