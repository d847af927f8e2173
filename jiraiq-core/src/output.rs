//! # Output Formatting
//!
//! Colored, emoji-prefixed terminal messages for the interactive commands.
//! The MCP server itself never writes here; stdout belongs to the protocol
//! while it is serving.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use owo_colors::OwoColorize;

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("white_check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("x", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information_source", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

/// Print a section header
pub fn print_header(header: &str) {
  println!("\n{}", header.blue().bold());
}

/// Format an issue or project key
pub fn format_key(key: &str) -> String {
  key.bright_cyan().bold().to_string()
}

/// Format whether a secret is present without revealing it
pub fn format_secret_presence(present: bool) -> String {
  if present {
    "set".green().to_string()
  } else {
    "NOT SET".red().bold().to_string()
  }
}
