use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for linestamp
#[derive(Error, Debug)]
pub enum LinestampError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Document error: {message}")]
    Document {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Repository error: {message}")]
    Repository {
        code: u16,
        message: String,
        file_id: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl LinestampError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a document error with specific code and path
    pub fn document_with_code(
        code: u16,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Self {
        Self::Document {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a repository error with specific code and file ID
    pub fn repository_with_code(
        code: u16,
        message: impl Into<String>,
        file_id: Option<String>,
    ) -> Self {
        Self::Repository {
            code,
            message: message.into(),
            file_id,
            source: None,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Placeholder token rejected before a rewrite pass starts
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::validation_with_code(
            ErrorCode::VALIDATION_MALFORMED_TOKEN,
            message,
            Some("placeholder".to_string()),
        )
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Document { source: src, .. }
            | Self::Repository { source: src, .. }
            | Self::Validation { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Document { message, .. }
            | Self::Repository { message, .. }
            | Self::Validation { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Attach a file path to a document error
    pub fn with_path(mut self, new_path: impl Into<PathBuf>) -> Self {
        if let Self::Document { ref mut path, .. } = self {
            *path = Some(new_path.into());
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Document { .. } => 3,
            Self::Repository { .. } => 4,
            Self::Validation { .. } => 8,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Document { code, .. }
            | Self::Repository { code, .. }
            | Self::Validation { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Document { message, path, .. } => {
                if let Some(p) = path {
                    format!("Bot document {}: {}", p.display(), message)
                } else {
                    format!("Bot document error: {}", message)
                }
            }
            Self::Repository {
                message, file_id, ..
            } => {
                if let Some(id) = file_id {
                    format!("Bot {} could not be accessed: {}", id, message)
                } else {
                    format!("Repository error: {}", message)
                }
            }
            Self::Validation { message, field, .. } => {
                if let Some(f) = field {
                    format!("Invalid {}: {}", f, message)
                } else {
                    format!("Validation error: {}", message)
                }
            }
        }
    }

    /// Get a developer-friendly error message with the code description
    pub fn developer_message(&self) -> String {
        format!("{:#} ({})", self, describe_error_code(self.code()))
    }
}

/// Type alias for Results using LinestampError
pub type Result<T> = std::result::Result<T, LinestampError>;

impl From<std::io::Error> for LinestampError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let (code, message) = match err.kind() {
            ErrorKind::NotFound => (ErrorCode::REPOSITORY_NOT_FOUND, "File not found"),
            _ => (ErrorCode::REPOSITORY_IO_ERROR, "IO operation failed"),
        };

        LinestampError::repository_with_code(code, message, None).with_source(err)
    }
}

impl From<serde_json::Error> for LinestampError {
    fn from(err: serde_json::Error) -> Self {
        LinestampError::document_with_code(
            ErrorCode::DOCUMENT_INVALID_JSON,
            "Invalid JSON syntax",
            None,
        )
        .with_source(err)
    }
}

impl From<toml::de::Error> for LinestampError {
    fn from(err: toml::de::Error) -> Self {
        LinestampError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid TOML syntax")
            .with_source(err)
    }
}

impl From<reqwest::Error> for LinestampError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out"
        } else if err.is_connect() {
            "Could not connect to the control room"
        } else {
            "Request failed"
        };
        LinestampError::repository_with_code(ErrorCode::REPOSITORY_REQUEST_FAILED, message, None)
            .with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_and_chaining() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "bot.json");
        let err = LinestampError::document_with_code(
            ErrorCode::DOCUMENT_INVALID_JSON,
            "Cannot read bot",
            None,
        )
        .with_source(io_err)
        .with_context("while counting lines");

        assert_eq!(err.code(), ErrorCode::DOCUMENT_INVALID_JSON);
        assert!(err.to_string().contains("[E2001]"));
        assert!(err.user_message().contains("Cannot read bot: while counting lines"));
    }

    #[test]
    fn test_malformed_token_is_validation_error() {
        let err = LinestampError::malformed_token("Too short (minimum 2 characters)");
        assert_eq!(err.code(), ErrorCode::VALIDATION_MALFORMED_TOKEN);
        assert_eq!(err.exit_code(), 8);
        assert_eq!(
            err.user_message(),
            "Invalid placeholder: Too short (minimum 2 characters)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: LinestampError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.code(), ErrorCode::REPOSITORY_NOT_FOUND);
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_document_path_in_user_message() {
        let err = LinestampError::document_with_code(
            ErrorCode::DOCUMENT_INVALID_JSON,
            "Invalid JSON syntax",
            None,
        )
        .with_path("bots/main.json");
        assert_eq!(
            err.user_message(),
            "Bot document bots/main.json: Invalid JSON syntax"
        );
    }

    #[test]
    fn test_developer_message_describes_code() {
        let err = LinestampError::malformed_token("Too short (minimum 2 characters)");
        let message = err.developer_message();
        assert!(message.starts_with("[E7001] Validation error: Too short"));
        assert!(message.ends_with("(Placeholder token is malformed)"));
    }
}
