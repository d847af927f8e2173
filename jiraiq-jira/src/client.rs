//! # Jira HTTP Client
//!
//! Connection, credentials and base URL shared by every Jira endpoint.

use anyhow::{Context, Result};
use reqwest::{Client, Url};

use crate::consts::USER_AGENT;
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .unwrap_or_else(|_| Client::new());
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// The base URL requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Build an endpoint URL under the base URL. Each segment is
  /// percent-encoded, so `/` and `?` inside a segment stay literal.
  pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(&self.base_url).with_context(|| format!("Invalid Jira URL: {}", self.base_url))?;
    url
      .path_segments_mut()
      .map_err(|()| anyhow::anyhow!("Invalid Jira URL: {}", self.base_url))?
      .pop_if_empty()
      .extend(segments);
    Ok(url)
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> JiraClient {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
