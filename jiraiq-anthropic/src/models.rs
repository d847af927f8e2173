use serde::{Deserialize, Serialize};

/// Represents Anthropic API credentials
#[derive(Clone)]
pub struct AnthropicAuth {
  pub api_key: String,
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
  pub model: String,
  pub max_tokens: u32,
  pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  User,
  Assistant,
}

/// A single conversation turn
#[derive(Debug, Clone, Serialize)]
pub struct Message {
  pub role: Role,
  pub content: String,
}

impl Message {
  pub fn user(content: impl Into<String>) -> Self {
    Self {
      role: Role::User,
      content: content.into(),
    }
  }
}

/// Body of `POST /v1/messages`
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
  pub model: String,
  pub max_tokens: u32,
  pub temperature: f32,
  pub messages: Vec<Message>,
}

/// Successful response from `POST /v1/messages`
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub model: String,
  #[serde(default)]
  pub content: Vec<ContentBlock>,
  #[serde(default)]
  pub stop_reason: Option<String>,
  #[serde(default)]
  pub usage: Option<Usage>,
}

impl MessageResponse {
  /// Concatenated text of every text block, or `None` when there is none
  pub fn text(&self) -> Option<String> {
    let parts: Vec<&str> = self
      .content
      .iter()
      .filter_map(|block| match block {
        ContentBlock::Text { text } => Some(text.as_str()),
        ContentBlock::Other => None,
      })
      .collect();

    if parts.is_empty() { None } else { Some(parts.concat()) }
  }
}

/// A block of response content. Only text blocks are used.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
  Text {
    text: String,
  },
  #[serde(other)]
  Other,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
  #[serde(default)]
  pub input_tokens: u32,
  #[serde(default)]
  pub output_tokens: u32,
}

/// Error envelope returned on non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
  pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
  #[serde(rename = "type", default)]
  pub kind: String,
  #[serde(default)]
  pub message: String,
}

impl ApiErrorBody {
  /// Best available description of a failed response body
  pub fn describe(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
      Ok(parsed) if !parsed.error.message.is_empty() => {
        if parsed.error.kind.is_empty() {
          parsed.error.message
        } else {
          format!("{} ({})", parsed.error.message, parsed.error.kind)
        }
      }
      _ => body.trim().to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_request_serialization() {
    let request = MessageRequest {
      model: "claude-sonnet-4-5-20250929".to_string(),
      max_tokens: 2000,
      temperature: 0.5,
      messages: vec![Message::user("hello")],
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
      value,
      serde_json::json!({
        "model": "claude-sonnet-4-5-20250929",
        "max_tokens": 2000,
        "temperature": 0.5,
        "messages": [{ "role": "user", "content": "hello" }]
      })
    );
  }

  #[test]
  fn test_text_skips_non_text_blocks() {
    let response: MessageResponse = serde_json::from_value(serde_json::json!({
      "content": [
        { "type": "thinking", "thinking": "hmm", "signature": "x" },
        { "type": "text", "text": "Sentiment: " },
        { "type": "text", "text": "neutral" }
      ]
    }))
    .unwrap();

    assert_eq!(response.text().as_deref(), Some("Sentiment: neutral"));
  }

  #[test]
  fn test_text_absent() {
    let response: MessageResponse = serde_json::from_value(serde_json::json!({ "content": [] })).unwrap();
    assert!(response.text().is_none());
  }

  #[test]
  fn test_describe_error_body() {
    let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"max_tokens: too large"}}"#;
    assert_eq!(
      ApiErrorBody::describe(body),
      "max_tokens: too large (invalid_request_error)"
    );
    assert_eq!(ApiErrorBody::describe("  upstream timeout \n"), "upstream timeout");
  }
}
