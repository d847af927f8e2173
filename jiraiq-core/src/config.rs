//! # Configuration
//!
//! A single [`Config`] value is read from the process environment at startup
//! and handed to the client constructors. The text-generation key is checked
//! immediately; tracker settings are only checked when a tool first needs
//! them, through [`JiraSettings::credentials`].

use std::fmt;

use thiserror::Error;
use url::{Position, Url};

/// Tracker base URL, e.g. `https://company.atlassian.net`.
pub const ENV_JIRA_URL: &str = "JIRA_URL";
/// Atlassian account email used for basic auth.
pub const ENV_JIRA_EMAIL: &str = "JIRA_EMAIL";
/// Atlassian API token used for basic auth.
pub const ENV_JIRA_TOKEN: &str = "JIRA_TOKEN";
pub const ENV_ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_ANTHROPIC_MODEL: &str = "ANTHROPIC_MODEL";
pub const ENV_ANTHROPIC_BASE_URL: &str = "ANTHROPIC_BASE_URL";
pub const ENV_ANTHROPIC_MAX_TOKENS: &str = "ANTHROPIC_MAX_TOKENS";
pub const ENV_ANTHROPIC_TEMPERATURE: &str = "ANTHROPIC_TEMPERATURE";

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-5-20250929";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Errors raised while reading or validating configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
  #[error("{0} not found in environment")]
  MissingVar(&'static str),
  #[error("Jira is not configured: missing {}", .0.join(", "))]
  MissingJiraSettings(Vec<&'static str>),
  #[error("Invalid value for {var}: {reason}")]
  Invalid { var: &'static str, reason: String },
}

/// Process-wide configuration, built once during initialization.
#[derive(Debug, Clone)]
pub struct Config {
  pub jira: JiraSettings,
  pub anthropic: AnthropicSettings,
}

/// Tracker settings. Any of them may be absent until a tool needs them.
#[derive(Clone, Default)]
pub struct JiraSettings {
  pub url: Option<String>,
  pub email: Option<String>,
  pub token: Option<String>,
}

/// Complete tracker credentials.
#[derive(Clone)]
pub struct JiraCredentials {
  pub base_url: String,
  pub email: String,
  pub api_token: String,
}

/// Text-generation service settings.
#[derive(Clone)]
pub struct AnthropicSettings {
  pub api_key: String,
  pub base_url: String,
  pub model: String,
  pub max_tokens: u32,
  pub temperature: f32,
}

impl Config {
  /// Read configuration from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Read configuration through an arbitrary variable lookup. Blank values
  /// are treated as missing.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| {
      lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    };

    let jira_url = get(ENV_JIRA_URL)
      .map(|raw| ensure_url_scheme(ENV_JIRA_URL, &raw))
      .transpose()?;

    let jira = JiraSettings {
      url: jira_url,
      email: get(ENV_JIRA_EMAIL),
      token: get(ENV_JIRA_TOKEN),
    };

    let api_key = get(ENV_ANTHROPIC_API_KEY).ok_or(ConfigError::MissingVar(ENV_ANTHROPIC_API_KEY))?;

    let base_url = match get(ENV_ANTHROPIC_BASE_URL) {
      Some(raw) => ensure_url_scheme(ENV_ANTHROPIC_BASE_URL, &raw)?,
      None => DEFAULT_ANTHROPIC_BASE_URL.to_string(),
    };

    let max_tokens = match get(ENV_ANTHROPIC_MAX_TOKENS) {
      Some(raw) => raw.parse::<u32>().map_err(|e| ConfigError::Invalid {
        var: ENV_ANTHROPIC_MAX_TOKENS,
        reason: e.to_string(),
      })?,
      None => DEFAULT_MAX_TOKENS,
    };

    let temperature = match get(ENV_ANTHROPIC_TEMPERATURE) {
      Some(raw) => raw.parse::<f32>().map_err(|e| ConfigError::Invalid {
        var: ENV_ANTHROPIC_TEMPERATURE,
        reason: e.to_string(),
      })?,
      None => DEFAULT_TEMPERATURE,
    };

    let anthropic = AnthropicSettings {
      api_key,
      base_url,
      model: get(ENV_ANTHROPIC_MODEL).unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string()),
      max_tokens,
      temperature,
    };

    Ok(Self { jira, anthropic })
  }
}

impl JiraSettings {
  /// Return complete credentials, or an error naming every missing variable.
  pub fn credentials(&self) -> Result<JiraCredentials, ConfigError> {
    match (&self.url, &self.email, &self.token) {
      (Some(url), Some(email), Some(token)) => Ok(JiraCredentials {
        base_url: url.clone(),
        email: email.clone(),
        api_token: token.clone(),
      }),
      _ => {
        let missing = [
          (ENV_JIRA_URL, self.url.is_none()),
          (ENV_JIRA_EMAIL, self.email.is_none()),
          (ENV_JIRA_TOKEN, self.token.is_none()),
        ]
        .into_iter()
        .filter_map(|(var, absent)| absent.then_some(var))
        .collect();
        Err(ConfigError::MissingJiraSettings(missing))
      }
    }
  }
}

impl fmt::Debug for JiraSettings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JiraSettings")
      .field("url", &self.url)
      .field("email", &self.email)
      .field("token", &self.token.as_ref().map(|_| "<redacted>"))
      .finish()
  }
}

impl fmt::Debug for JiraCredentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JiraCredentials")
      .field("base_url", &self.base_url)
      .field("email", &self.email)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

impl fmt::Debug for AnthropicSettings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AnthropicSettings")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("model", &self.model)
      .field("max_tokens", &self.max_tokens)
      .field("temperature", &self.temperature)
      .finish()
  }
}

/// Ensure the URL held by `var` has an http(s) scheme, assuming `https://`
/// when it has none. A bare `/` path is dropped so endpoint paths can be
/// appended directly.
pub fn ensure_url_scheme(var: &'static str, input: &str) -> Result<String, ConfigError> {
  let invalid = |reason: String| ConfigError::Invalid { var, reason };

  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(invalid("URL cannot be empty".to_string()));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };
  let url = Url::parse(&candidate).map_err(|e| invalid(format!("failed to parse '{trimmed}': {e}")))?;

  if url.host().is_none() {
    return Err(invalid(format!("'{trimmed}' has no host")));
  }

  Ok(normalize_url(&url))
}

fn normalize_url(url: &Url) -> String {
  let mut result = String::new();
  result.push_str(&url[..Position::BeforePath]);

  let path = url.path().trim_end_matches('/');
  result.push_str(path);

  result
}
