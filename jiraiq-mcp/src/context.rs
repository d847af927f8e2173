//! Shared server context available to all tool handlers.

use jiraiq_anthropic::{AnthropicClient, create_anthropic_client_from_settings};
use jiraiq_core::{Config, ConfigError};
use jiraiq_jira::{JiraClient, create_jira_client_from_credentials};

/// Shared context available to all tool handlers.
pub struct ServerContext {
  config: Config,
  anthropic: AnthropicClient,
  /// Lazily initialized on first Jira call. Missing settings are remembered
  /// so every later call reports the same error.
  jira_client: tokio::sync::OnceCell<Result<JiraClient, ConfigError>>,
}

impl ServerContext {
  pub fn new(config: Config) -> Self {
    let anthropic = create_anthropic_client_from_settings(&config.anthropic);
    Self {
      config,
      anthropic,
      jira_client: tokio::sync::OnceCell::new(),
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Lazily initialise and return the Jira client.
  pub async fn get_jira_client(&self) -> Result<&JiraClient, ConfigError> {
    self
      .jira_client
      .get_or_init(|| async {
        let credentials = self.config.jira.credentials()?;
        Ok(create_jira_client_from_credentials(&credentials))
      })
      .await
      .as_ref()
      .map_err(Clone::clone)
  }

  pub fn anthropic(&self) -> &AnthropicClient {
    &self.anthropic
  }
}

#[cfg(test)]
pub mod test_support {
  use jiraiq_core::Config;

  use super::ServerContext;

  /// Context pointed at mock servers. `jira_uri` of `None` leaves Jira
  /// unconfigured.
  pub fn mock_context(jira_uri: Option<&str>, anthropic_uri: &str) -> ServerContext {
    let jira_uri = jira_uri.map(str::to_string);
    let anthropic_uri = anthropic_uri.to_string();
    let config = Config::from_lookup(|key| match key {
      "JIRA_URL" => jira_uri.clone(),
      "JIRA_EMAIL" => jira_uri.as_ref().map(|_| "dev@example.com".to_string()),
      "JIRA_TOKEN" => jira_uri.as_ref().map(|_| "jira-token".to_string()),
      "ANTHROPIC_API_KEY" => Some("sk-test".to_string()),
      "ANTHROPIC_BASE_URL" => Some(anthropic_uri.clone()),
      _ => None,
    })
    .unwrap();
    ServerContext::new(config)
  }
}
