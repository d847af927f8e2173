//! # Messages Endpoint
//!
//! `POST /v1/messages` and the single-prompt completion built on top of it.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::AnthropicClient;
use crate::consts::ANTHROPIC_VERSION;
use crate::models::{ApiErrorBody, Message, MessageRequest, MessageResponse};

impl AnthropicClient {
  /// Send a Messages API request
  #[instrument(skip(self, request), fields(model = %request.model), level = "debug")]
  pub async fn create_message(&self, request: &MessageRequest) -> Result<MessageResponse> {
    let url = format!("{}/v1/messages", self.base_url);

    let response = self
      .client
      .post(&url)
      .header("x-api-key", &self.auth.api_key)
      .header("anthropic-version", ANTHROPIC_VERSION)
      .json(request)
      .send()
      .await
      .context("Failed to reach the Anthropic API")?;

    let status = response.status();
    if status.is_success() {
      let message = response
        .json::<MessageResponse>()
        .await
        .context("Failed to parse Anthropic response")?;
      if let Some(usage) = &message.usage {
        debug!(
          input_tokens = usage.input_tokens,
          output_tokens = usage.output_tokens,
          stop_reason = message.stop_reason.as_deref().unwrap_or("unknown"),
          "Anthropic message completed"
        );
      }
      return Ok(message);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = ApiErrorBody::describe(&body);
    match status {
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Anthropic API key. {}",
        detail
      )),
      StatusCode::TOO_MANY_REQUESTS => Err(anyhow::anyhow!("Anthropic rate limit exceeded: {}", detail)),
      _ => Err(anyhow::anyhow!("Unexpected error: HTTP {} - {}", status, detail)),
    }
  }

  /// Generate a completion for a single user prompt and return its text
  #[instrument(skip(self, prompt), level = "debug")]
  pub async fn complete(&self, prompt: &str) -> Result<String> {
    let request = MessageRequest {
      model: self.options.model.clone(),
      max_tokens: self.options.max_tokens,
      temperature: self.options.temperature,
      messages: vec![Message::user(prompt)],
    };

    let response = self.create_message(&request).await?;
    response
      .text()
      .ok_or_else(|| anyhow::anyhow!("Anthropic response {} contained no text", response.id))
  }
}

#[cfg(test)]
mod tests {
  use jiraiq_test_utils::fixtures::anthropic_text_response;
  use wiremock::matchers::{body_partial_json, header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::{AnthropicClient, create_anthropic_client};
  use crate::models::GenerationOptions;

  fn test_client(uri: &str) -> AnthropicClient {
    create_anthropic_client(
      uri,
      "sk-test",
      GenerationOptions {
        model: "claude-sonnet-4-5-20250929".to_string(),
        max_tokens: 2000,
        temperature: 0.3,
      },
    )
  }

  #[tokio::test]
  async fn test_complete() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/v1/messages"))
      .and(header("x-api-key", "sk-test"))
      .and(header("anthropic-version", "2023-06-01"))
      .and(body_partial_json(serde_json::json!({
          "model": "claude-sonnet-4-5-20250929",
          "max_tokens": 2000,
          "messages": [{ "role": "user", "content": "Summarize ENG-1" }]
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(anthropic_text_response("All good.")))
      .expect(1)
      .mount(&mock_server)
      .await;

    let text = client.complete("Summarize ENG-1").await?;
    assert_eq!(text, "All good.");

    Ok(())
  }

  #[tokio::test]
  async fn test_complete_without_text_block() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/v1/messages"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "msg_empty",
          "content": []
      })))
      .mount(&mock_server)
      .await;

    let err = client.complete("prompt").await.unwrap_err().to_string();
    assert_eq!(err, "Anthropic response msg_empty contained no text");

    Ok(())
  }

  #[tokio::test]
  async fn test_complete_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/v1/messages"))
      .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
          "type": "error",
          "error": { "type": "authentication_error", "message": "invalid x-api-key" }
      })))
      .mount(&mock_server)
      .await;

    let err = client.complete("prompt").await.unwrap_err().to_string();
    assert!(err.starts_with("Authentication failed"));
    assert!(err.contains("invalid x-api-key"));

    Ok(())
  }

  #[tokio::test]
  async fn test_complete_overloaded() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/v1/messages"))
      .respond_with(ResponseTemplate::new(529).set_body_json(serde_json::json!({
          "type": "error",
          "error": { "type": "overloaded_error", "message": "Overloaded" }
      })))
      .mount(&mock_server)
      .await;

    let err = client.complete("prompt").await.unwrap_err().to_string();
    assert!(err.contains("HTTP 529"));
    assert!(err.contains("Overloaded (overloaded_error)"));

    Ok(())
  }
}
