// src/error.rs

//! Unified error handling for the notice fetcher.
//!
//! Two layers live here:
//! - [`NoticeError`]: the closed set of expected outcomes a fetch or a
//!   filter setter can report instead of a value.
//! - [`AppError`]: everything around it (config files, client setup, CLI).

use std::fmt;

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Expected failure signals of the notice board.
///
/// None of these carry a payload; diagnostics are logged by the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeError {
    /// The request did not finish within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The request failed at the transport or HTTP level
    #[error("invalid URL or server error")]
    InvalidUrl,

    /// The board reported no posts, or every row was skipped
    #[error("no notices found")]
    NoNotice,

    /// The category label is not in the category table
    #[error("invalid category")]
    InvalidCategory,
}

impl NoticeError {
    /// Stable identifier used in JSON output and logs.
    pub fn code(&self) -> &'static str {
        match self {
            NoticeError::Timeout => "timeout",
            NoticeError::InvalidUrl => "invalid_url",
            NoticeError::NoNotice => "no_notice",
            NoticeError::InvalidCategory => "invalid_category",
        }
    }
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A notice board outcome surfaced through the application layer
    #[error("Notice error: {0}")]
    Notice(#[from] NoticeError),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_error_converts_into_app_error() {
        let err: AppError = NoticeError::NoNotice.into();
        assert!(matches!(err, AppError::Notice(NoticeError::NoNotice)));
        assert_eq!(err.to_string(), "Notice error: no notices found");
    }

    #[test]
    fn notice_error_codes_are_distinct() {
        let codes = [
            NoticeError::Timeout.code(),
            NoticeError::InvalidUrl.code(),
            NoticeError::NoNotice.code(),
            NoticeError::InvalidCategory.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn selector_error_message() {
        let err = AppError::selector("[[bad", "unexpected token");
        assert_eq!(err.to_string(), "Invalid selector '[[bad': unexpected token");
    }
}
