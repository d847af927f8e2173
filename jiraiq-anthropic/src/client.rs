//! # Anthropic HTTP Client
//!
//! Holds the connection, credentials and sampling options shared by every
//! request.

use reqwest::Client;

use crate::consts::USER_AGENT;
use crate::models::{AnthropicAuth, GenerationOptions};

/// Represents an Anthropic API client
pub struct AnthropicClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: AnthropicAuth,
  pub(crate) options: GenerationOptions,
}

impl AnthropicClient {
  /// Create a new Anthropic client
  pub fn new(base_url: &str, auth: AnthropicAuth, options: GenerationOptions) -> Self {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .unwrap_or_else(|_| Client::new());
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
      options,
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// The model and sampling parameters used for completions
  pub fn options(&self) -> &GenerationOptions {
    &self.options
  }
}

/// Create an Anthropic client from an API key and generation options
pub fn create_anthropic_client(base_url: &str, api_key: &str, options: GenerationOptions) -> AnthropicClient {
  let auth = AnthropicAuth {
    api_key: api_key.to_string(),
  };

  AnthropicClient::new(base_url, auth, options)
}
