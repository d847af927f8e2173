//! Environment variable management for testing
//!
//! Tests that read configuration from the process environment use
//! [`EnvVarGuard`] so that the previous values come back when the test ends.

use std::env;

/// Overrides a set of environment variables for the lifetime of the guard
#[derive(Default)]
pub struct EnvVarGuard {
  /// Variable names paired with the value they had before the first override
  saved: Vec<(String, Option<String>)>,
}

impl EnvVarGuard {
  pub fn new() -> Self {
    Self::default()
  }

  /// Set a variable, remembering its original value
  pub fn set(&mut self, name: &str, value: &str) -> &mut Self {
    self.remember(name);
    unsafe {
      env::set_var(name, value);
    }
    self
  }

  /// Remove a variable, remembering its original value
  pub fn remove(&mut self, name: &str) -> &mut Self {
    self.remember(name);
    unsafe {
      env::remove_var(name);
    }
    self
  }

  fn remember(&mut self, name: &str) {
    if !self.saved.iter().any(|(saved, _)| saved == name) {
      self.saved.push((name.to_string(), env::var(name).ok()));
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    for (name, original) in self.saved.drain(..).rev() {
      match original {
        Some(val) => unsafe {
          env::set_var(&name, val);
        },
        None => unsafe {
          env::remove_var(&name);
        },
      }
    }
  }
}
