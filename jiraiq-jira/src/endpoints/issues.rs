//! # Jira Issue Endpoints
//!
//! Fetching a single issue together with the fields the reports need.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::JiraClient;
use crate::consts::ISSUE_FIELDS;
use crate::models::JiraIssue;

impl JiraClient {
  /// Get a Jira issue by key, including its comments
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue> {
    let url = self.endpoint(&["rest", "api", "2", "issue", issue_key])?;

    let response = self
      .client
      .get(url)
      .query(&[("fields", ISSUE_FIELDS)])
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .send()
      .await
      .context("Failed to fetch Jira issue")?;

    match response.status() {
      StatusCode::OK => {
        let issue = response
          .json::<JiraIssue>()
          .await
          .context("Failed to parse Jira issue")?;
        Ok(issue)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
