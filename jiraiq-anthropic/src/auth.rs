//! Client construction from validated configuration.

use jiraiq_core::AnthropicSettings;

use crate::models::GenerationOptions;
use crate::{AnthropicClient, create_anthropic_client};

/// Creates an authenticated Anthropic client from configured settings.
pub fn create_anthropic_client_from_settings(settings: &AnthropicSettings) -> AnthropicClient {
  let options = GenerationOptions {
    model: settings.model.clone(),
    max_tokens: settings.max_tokens,
    temperature: settings.temperature,
  };

  create_anthropic_client(&settings.base_url, &settings.api_key, options)
}

#[cfg(test)]
mod tests {
  use jiraiq_core::Config;

  use super::*;

  #[test]
  fn test_client_from_config_defaults() {
    let config = Config::from_lookup(|key| (key == "ANTHROPIC_API_KEY").then(|| "sk-test".to_string())).unwrap();

    let client = create_anthropic_client_from_settings(&config.anthropic);
    assert_eq!(client.base_url(), "https://api.anthropic.com");
    assert_eq!(client.options().model, "claude-sonnet-4-5-20250929");
    assert_eq!(client.options().max_tokens, 2000);
    assert!((client.options().temperature - 0.3).abs() < f32::EPSILON);
  }
}
