//! jiraiq-mcp: MCP server that turns Jira issue data into stakeholder-specific
//! situation reports.

mod analysis;
mod check;
mod context;
mod server;
mod tools;
mod types;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use jiraiq_core::Config;
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::check::CheckArgs;
use crate::context::ServerContext;
use crate::server::JiraIqServer;

#[derive(Parser)]
#[command(
  version,
  about = "MCP server for Jira issue analysis, blocker search, and sprint health reports"
)]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Check connectivity to Jira and the Anthropic API, then exit
  Check(CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // Tracing to stderr. Stdout is reserved for MCP JSON-RPC.
  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  let config = Config::from_env().context("Failed to load configuration")?;

  if let Some(Command::Check(args)) = cli.command {
    return check::run(&config, &args).await;
  }

  let context = ServerContext::new(config);
  info!(
    model = %context.config().anthropic.model,
    jira_configured = context.config().jira.url.is_some(),
    "Starting MCP server on stdio"
  );
  let server = JiraIqServer::new(context);

  // Start MCP server on stdio
  let service = server.serve(rmcp::transport::io::stdio()).await?;
  service.waiting().await?;

  Ok(())
}
