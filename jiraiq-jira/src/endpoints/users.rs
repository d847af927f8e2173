use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::JiraUser;

impl JiraClient {
  /// Get the user the client is authenticated as
  #[instrument(skip(self), level = "debug")]
  pub async fn get_current_user(&self) -> Result<JiraUser> {
    let url = self.endpoint(&["rest", "api", "2", "myself"])?;

    let response = self
      .client
      .get(url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .send()
      .await
      .context("Failed to fetch Jira user")?;

    match response.status() {
      StatusCode::OK => response
        .json::<JiraUser>()
        .await
        .context("Failed to parse Jira user"),
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

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;

  #[tokio::test]
  async fn test_get_current_user() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "accountId": "5b10a2844c20165700ede21g",
          "displayName": "Mia Krystof",
          "emailAddress": "mia@example.com"
      })))
      .mount(&mock_server)
      .await;

    let user = client.get_current_user().await?;
    assert_eq!(user.display_name, "Mia Krystof");
    assert_eq!(user.email_address.as_deref(), Some("mia@example.com"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_current_user_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "bad");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .respond_with(ResponseTemplate::new(401))
      .mount(&mock_server)
      .await;

    let err = client.get_current_user().await.unwrap_err().to_string();
    assert!(err.contains("Authentication failed"));

    Ok(())
  }
}
