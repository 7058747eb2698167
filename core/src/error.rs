use serde::Serialize;
use thiserror::Error;

/// Unified error type for the Specsketch application.
///
/// This enum provides structured error information that can be
/// serialized to JSON for the frontend to handle appropriately.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Generation error: {message}")]
    Generation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a Generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create a Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (retrying the same input may succeed)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // The upstream service may answer on the next attempt
            Self::Generation { .. } => true,
            // The input or the environment must change first
            Self::Validation { .. } | Self::Config { .. } => false,
        }
    }
}

// Convert from AiError
impl From<crate::ai::AiError> for AppError {
    fn from(err: crate::ai::AiError) -> Self {
        AppError::generation(err.to_string())
    }
}

// Convert from ConfigError
impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

// Convert to String for simple frontend error messages
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = AppError::validation("Prompt is required");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"Validation\""));
        assert!(json.contains("\"message\":\"Prompt is required\""));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(AppError::generation("upstream timeout").is_recoverable());
        assert!(!AppError::validation("Prompt is required").is_recoverable());
        assert!(!AppError::config("OPENAI_API_KEY not set").is_recoverable());
    }

    #[test]
    fn test_helper_constructors() {
        let err = AppError::generation("no content");
        match err {
            AppError::Generation { message } => assert_eq!(message, "no content"),
            _ => panic!("Wrong variant"),
        }
    }

    #[test]
    fn test_from_ai_error() {
        let err: AppError = crate::ai::AiError::EmptyResponse.into();
        match err {
            AppError::Generation { message } => {
                assert!(message.contains("Empty response"));
            }
            _ => panic!("Wrong variant"),
        }
    }
}
