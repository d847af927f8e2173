//! Client construction from validated configuration.

use jiraiq_core::JiraCredentials;

use crate::{JiraClient, create_jira_client};

/// Creates an authenticated Jira client from configured credentials.
pub fn create_jira_client_from_credentials(credentials: &JiraCredentials) -> JiraClient {
  create_jira_client(&credentials.base_url, &credentials.email, &credentials.api_token)
}

#[cfg(test)]
mod tests {
  use jiraiq_core::Config;

  use super::*;

  #[test]
  fn test_client_from_config() {
    let config = Config::from_lookup(|key| match key {
      "JIRA_URL" => Some("example.atlassian.net".to_string()),
      "JIRA_EMAIL" => Some("dev@example.com".to_string()),
      "JIRA_TOKEN" => Some("token".to_string()),
      "ANTHROPIC_API_KEY" => Some("sk-test".to_string()),
      _ => None,
    })
    .unwrap();

    let client = create_jira_client_from_credentials(&config.jira.credentials().unwrap());
    assert_eq!(client.base_url(), "https://example.atlassian.net");
    assert_eq!(client.auth.username, "dev@example.com");
  }
}
