//! Structured error types for the release notes pipeline.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
  #[error("{mode} mode not implemented yet")]
  UnsupportedMode { mode: String },

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },
}

impl PipelineError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn unsupported(mode: &str) -> Self {
    Self::UnsupportedMode {
      mode: mode.to_string(),
    }
  }

  /// Field the error refers to, if any.
  pub fn field(&self) -> Option<&str> {
    match self {
      Self::Validation { field, .. } => Some(field),
      Self::UnsupportedMode { .. } => None,
    }
  }
}

impl From<serde_json::Error> for PipelineError {
  fn from(e: serde_json::Error) -> Self {
    Self::validation("request", &e.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unsupported_mode_message_is_fixed() {
    let err = PipelineError::unsupported("remote");
    assert_eq!(err.to_string(), "remote mode not implemented yet");
    assert_eq!(err.field(), None);
  }

  #[test]
  fn malformed_json_becomes_validation_error() {
    let err: PipelineError = serde_json::from_str::<serde_json::Value>("{not json")
      .unwrap_err()
      .into();
    assert_eq!(err.field(), Some("request"));
    assert!(err.to_string().starts_with("validation: request:"));
  }
}
