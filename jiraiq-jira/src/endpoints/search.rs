//! # Jira Search Endpoint
//!
//! Runs JQL searches against `/rest/api/2/search/jql` and returns matching
//! issues in tracker order. Only the first page is read.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::JiraClient;
use crate::consts::ISSUE_FIELDS;
use crate::models::{JiraErrorBody, JiraIssue, JiraSearchResults};

impl JiraClient {
  /// Search for issues matching a JQL expression, returning at most
  /// `max_results` of them
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<JiraIssue>> {
    let url = self.endpoint(&["rest", "api", "2", "search", "jql"])?;
    let max_results = max_results.to_string();

    let response = self
      .client
      .get(url)
      .query(&[
        ("jql", jql),
        ("maxResults", max_results.as_str()),
        ("fields", ISSUE_FIELDS),
      ])
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .send()
      .await
      .context("Failed to search Jira issues")?;

    match response.status() {
      StatusCode::OK => {
        let results = response
          .json::<JiraSearchResults>()
          .await
          .context("Failed to parse Jira search results")?;
        debug!(
          returned = results.issues.len(),
          is_last = results.is_last,
          "Jira search completed"
        );
        Ok(results.issues)
      }
      StatusCode::BAD_REQUEST => {
        let body = response.text().await.unwrap_or_default();
        Err(anyhow::anyhow!("Jira rejected the query: {}", JiraErrorBody::describe(&body)))
      }
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
  use jiraiq_test_utils::fixtures::{IssueFixture, search_results_json};
  use wiremock::matchers::{basic_auth, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;
  use crate::consts::ISSUE_FIELDS;

  const JQL: &str = r#"project = "ENG" AND status != Done"#;

  #[tokio::test]
  async fn test_search_issues() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search/jql"))
      .and(query_param("jql", JQL))
      .and(query_param("maxResults", "10"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(search_results_json(vec![
        IssueFixture::new("ENG-2", "Second").build(),
        IssueFixture::new("ENG-1", "First").build(),
      ])))
      .mount(&mock_server)
      .await;

    let issues = client.search_issues(JQL, 10).await?;
    let keys: Vec<&str> = issues.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, vec!["ENG-2", "ENG-1"]);

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_reads_first_page() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search/jql"))
      .and(query_param("fields", ISSUE_FIELDS))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "issues": [IssueFixture::new("ENG-7", "Paged").build()],
          "nextPageToken": "CAEaAggD",
          "isLast": false
      })))
      .expect(1)
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(410))
      .expect(0)
      .mount(&mock_server)
      .await;

    let issues = client.search_issues(JQL, 10).await?;
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].key, "ENG-7");

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_empty() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search/jql"))
      .respond_with(ResponseTemplate::new(200).set_body_json(search_results_json(Vec::new())))
      .mount(&mock_server)
      .await;

    assert!(client.search_issues(JQL, 50).await?.is_empty());
    Ok(())
  }

  #[tokio::test]
  async fn test_search_rejected_query() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search/jql"))
      .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
          "errorMessages": ["The value 'NOPE' does not exist for the field 'project'."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.search_issues(JQL, 10).await.unwrap_err().to_string();
    assert_eq!(
      err,
      "Jira rejected the query: The value 'NOPE' does not exist for the field 'project'."
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_search_forbidden() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search/jql"))
      .respond_with(ResponseTemplate::new(403))
      .mount(&mock_server)
      .await;

    let err = client.search_issues(JQL, 10).await.unwrap_err().to_string();
    assert!(err.contains("Authentication failed"));

    Ok(())
  }
}
