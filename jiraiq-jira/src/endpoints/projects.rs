use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::JiraProject;

impl JiraClient {
  /// List the projects visible to the authenticated user
  #[instrument(skip(self), level = "debug")]
  pub async fn list_projects(&self) -> Result<Vec<JiraProject>> {
    let url = self.endpoint(&["rest", "api", "2", "project"])?;

    let response = self
      .client
      .get(url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .send()
      .await
      .context("Failed to fetch Jira projects")?;

    match response.status() {
      StatusCode::OK => response
        .json::<Vec<JiraProject>>()
        .await
        .context("Failed to parse Jira projects"),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
