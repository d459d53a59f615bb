//! Errors surfaced by the entry points.

use thiserror::Error;

use super::codes::ErrorCode;

/// Errors that can occur outside the matchers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The cancellation token fired; the partial result was discarded.
    #[error("parse cancelled")]
    Cancelled,

    /// No language is registered under this name.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// No language claims this file extension.
    #[error("no language for file extension: {0}")]
    UnknownExtension(String),

    /// A language was registered twice.
    #[error("language already registered: {0}")]
    DuplicateLanguage(String),
}

impl ParseError {
    /// Create an unknown language error.
    pub fn unknown_language(name: impl Into<String>) -> Self {
        Self::UnknownLanguage(name.into())
    }

    /// Create an unknown extension error.
    pub fn unknown_extension(extension: impl Into<String>) -> Self {
        Self::UnknownExtension(extension.into())
    }

    /// Create a duplicate language error.
    pub fn duplicate_language(name: impl Into<String>) -> Self {
        Self::DuplicateLanguage(name.into())
    }

    /// The categorized code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Cancelled => ErrorCode::E0101,
            Self::UnknownLanguage(_) => ErrorCode::E0201,
            Self::UnknownExtension(_) => ErrorCode::E0202,
            Self::DuplicateLanguage(_) => ErrorCode::E0203,
        }
    }

    /// Format the error with its code
    pub fn format(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}

/// Result type for the entry points
pub type ParseResult<T> = Result<T, ParseError>;
