//! # Anthropic API Client
//!
//! Minimal async client for the Anthropic Messages API. JiraIQ only needs a
//! single-turn text completion, so the surface is one request type and
//! [`AnthropicClient::complete`].

mod auth;
mod client;
pub mod consts;
mod endpoints;
pub mod models;

pub use auth::create_anthropic_client_from_settings;
// Re-export the client
pub use client::{AnthropicClient, create_anthropic_client};
// Re-export models
pub use models::{
  AnthropicAuth, ContentBlock, GenerationOptions, Message, MessageRequest, MessageResponse, Role, Usage,
};
