//! Structured error types for form date extraction.
//!
//! Date parsing itself never fails; these cover the document and process edges.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormDateError {
  #[error("config: {var}: {reason}")]
  Config { var: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl FormDateError {
  pub fn config(var: &str, reason: impl Into<String>) -> Self {
    Self::Config {
      var: var.to_string(),
      reason: reason.into(),
    }
  }
}
