use thiserror::Error;

/// Errors raised eagerly at process construction, never during sampling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
  /// A grid or process parameter violates its contract.
  #[error("invalid configuration for `{field}`: {reason}")]
  InvalidConfiguration { field: &'static str, reason: String },

  /// A deliberately unsupported configuration, not a usage mistake.
  #[error("unsupported configuration: {0}")]
  Unsupported(String),
}

pub type Result<T> = std::result::Result<T, ProcessError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_configuration_display_names_the_field() {
    let err = ProcessError::InvalidConfiguration {
      field: "num_steps",
      reason: "must be at least 2".to_string(),
    };

    let display = format!("{}", err);
    assert!(display.contains("num_steps"));
    assert!(display.contains("at least 2"));
  }

  #[test]
  fn unsupported_display() {
    let err = ProcessError::Unsupported("zero-dimensional processes".to_string());
    assert!(format!("{}", err).contains("unsupported configuration"));
  }
}
