//! Error types for fence-permission
//!
//! This module defines the error hierarchy used throughout the crate.
//! The evaluator itself cannot fail: its inputs are statically typed. Errors
//! arise at the edges, when configuration is loaded or when an untyped
//! request document is turned into typed input.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Errors raised while validating an untyped evaluation request.
///
/// All of these are reported before any rule is evaluated.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("category must be a string, got {found}")]
    InvalidCategoryType { found: &'static str },

    #[error("condition '{condition}' must be a boolean, got {found}")]
    InvalidConditionType {
        condition: String,
        found: &'static str,
    },

    #[error("unknown condition '{0}'")]
    UnknownCondition(String),

    #[error("request must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("malformed JSON request: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl InputError {
    pub fn invalid_condition(condition: impl Into<String>, found: &'static str) -> Self {
        Self::InvalidConditionType {
            condition: condition.into(),
            found,
        }
    }

    /// Whether this is one of the two type violations (as opposed to a
    /// structural problem with the request document).
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            InputError::InvalidCategoryType { .. } | InputError::InvalidConditionType { .. }
        )
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        let err = InputError::InvalidCategoryType { found: "number" };
        assert_eq!(err.to_string(), "category must be a string, got number");

        let err = InputError::invalid_condition("is_highway_adjacent", "string");
        assert!(err.to_string().contains("is_highway_adjacent"));
        assert!(err.to_string().contains("string"));

        let err = InputError::UnknownCondition("has_moat".into());
        assert!(err.to_string().contains("has_moat"));
    }

    #[test]
    fn test_type_error_classification() {
        assert!(InputError::InvalidCategoryType { found: "null" }.is_type_error());
        assert!(InputError::invalid_condition("is_aonb", "number").is_type_error());
        assert!(!InputError::UnknownCondition("x".into()).is_type_error());
        assert!(!InputError::NotAnObject { found: "array" }.is_type_error());
    }

    #[test]
    fn test_config_error_messages() {
        let err: AppError = ConfigError::Load("Configuration file not found: x.toml".into()).into();
        assert!(matches!(err, AppError::Config(ConfigError::Load(_))));
        assert!(err.to_string().starts_with("Configuration error: Failed to load"));

        let err = ConfigError::Invalid {
            message: "bad level".into(),
        };
        assert_eq!(err.to_string(), "Invalid configuration: bad level");
    }

    #[test]
    fn test_app_error_wraps_input_error() {
        let err: AppError = InputError::NotAnObject { found: "array" }.into();
        assert!(matches!(err, AppError::Input(_)));
        assert!(err.to_string().starts_with("Invalid input:"));
    }
}
