//! `check` subcommand: verifies that the configured Jira account and the
//! Anthropic API are reachable before the server is registered with a client.

use anyhow::{Result, bail};
use clap::Args;
use jiraiq_anthropic::create_anthropic_client_from_settings;
use jiraiq_core::output::{format_key, format_secret_presence, print_error, print_header, print_info, print_success, print_warning};
use jiraiq_core::text::excerpt;
use jiraiq_core::{AnthropicSettings, Config, JiraSettings};
use jiraiq_jira::create_jira_client_from_credentials;
use tracing::debug;

const PROJECTS_SHOWN: usize = 5;
const PING_PROMPT: &str = "Reply with the single word: ready";
const REPLY_PREVIEW_CHARS: usize = 60;

/// Command-line arguments for the check subcommand
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Skip the Jira connectivity check
  #[arg(long = "skip-jira")]
  pub skip_jira: bool,

  /// Skip the Anthropic API check
  #[arg(long = "skip-anthropic")]
  pub skip_anthropic: bool,
}

/// Run every requested check, reporting each one. Fails if any check failed.
pub async fn run(config: &Config, args: &CheckArgs) -> Result<()> {
  let mut failures = 0;

  if args.skip_jira {
    print_warning("Skipping Jira check");
  } else if let Err(e) = check_jira(&config.jira).await {
    print_error(&format!("Jira check failed: {e:#}"));
    failures += 1;
  }

  if args.skip_anthropic {
    print_warning("Skipping Anthropic check");
  } else if let Err(e) = check_anthropic(&config.anthropic).await {
    print_error(&format!("Anthropic check failed: {e:#}"));
    failures += 1;
  }

  if failures > 0 {
    bail!("{failures} connectivity check(s) failed");
  }

  print_success("All checks passed");
  Ok(())
}

async fn check_jira(settings: &JiraSettings) -> Result<()> {
  print_header("Jira");
  print_info(&format!("URL: {}", settings.url.as_deref().unwrap_or("NOT SET")));
  print_info(&format!("Email: {}", settings.email.as_deref().unwrap_or("NOT SET")));
  print_info(&format!("Token: {}", format_secret_presence(settings.token.is_some())));

  let credentials = settings.credentials()?;
  let client = create_jira_client_from_credentials(&credentials);

  let user = client.get_current_user().await?;
  print_success(&format!("Authenticated as {}", user.display_name));

  let projects = client.list_projects().await?;
  debug!(count = projects.len(), "Listed Jira projects");
  print_success(&format!("{} accessible project(s)", projects.len()));
  for project in projects.iter().take(PROJECTS_SHOWN) {
    print_info(&format!("{} - {}", format_key(&project.key), project.name));
  }

  Ok(())
}

async fn check_anthropic(settings: &AnthropicSettings) -> Result<()> {
  print_header("Anthropic");
  print_info(&format!("Model: {}", settings.model));

  let client = create_anthropic_client_from_settings(settings);
  let reply = client.complete(PING_PROMPT).await?;
  print_success(&format!("Model replied: {}", excerpt(reply.trim(), REPLY_PREVIEW_CHARS)));

  Ok(())
}

#[cfg(test)]
mod tests {
  use jiraiq_test_utils::fixtures::anthropic_text_response;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn config_for(jira_uri: &str, anthropic_uri: &str) -> Config {
    Config::from_lookup(|key| match key {
      "JIRA_URL" => Some(jira_uri.to_string()),
      "JIRA_EMAIL" => Some("dev@example.com".to_string()),
      "JIRA_TOKEN" => Some("jira-token".to_string()),
      "ANTHROPIC_API_KEY" => Some("sk-test".to_string()),
      "ANTHROPIC_BASE_URL" => Some(anthropic_uri.to_string()),
      _ => None,
    })
    .unwrap()
  }

  async fn mount_jira(server: &MockServer) {
    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "accountId": "abc123",
          "displayName": "Dev User"
      })))
      .expect(1)
      .mount(server)
      .await;
    Mock::given(method("GET"))
      .and(path("/rest/api/2/project"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          { "id": "1", "key": "ENG", "name": "Engineering" }
      ])))
      .expect(1)
      .mount(server)
      .await;
  }

  #[tokio::test]
  async fn test_all_checks_pass() -> anyhow::Result<()> {
    let jira = MockServer::start().await;
    let anthropic = MockServer::start().await;
    mount_jira(&jira).await;
    Mock::given(method("POST"))
      .and(path("/v1/messages"))
      .respond_with(ResponseTemplate::new(200).set_body_json(anthropic_text_response("ready")))
      .expect(1)
      .mount(&anthropic)
      .await;

    run(&config_for(&jira.uri(), &anthropic.uri()), &CheckArgs::default()).await
  }

  #[tokio::test]
  async fn test_failed_check_is_an_error() -> anyhow::Result<()> {
    let jira = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .respond_with(ResponseTemplate::new(401))
      .mount(&jira)
      .await;

    let args = CheckArgs {
      skip_jira: false,
      skip_anthropic: true,
    };
    let err = run(&config_for(&jira.uri(), "http://127.0.0.1:9"), &args)
      .await
      .unwrap_err();
    assert_eq!(err.to_string(), "1 connectivity check(s) failed");

    Ok(())
  }

  #[tokio::test]
  async fn test_skip_flags() -> anyhow::Result<()> {
    let args = CheckArgs {
      skip_jira: true,
      skip_anthropic: true,
    };
    run(&config_for("http://127.0.0.1:9", "http://127.0.0.1:9"), &args).await
  }
}
