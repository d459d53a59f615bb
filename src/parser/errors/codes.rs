//! Error code definitions
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Parse lifecycle errors (cancellation)
//! - E02xx: Language registry errors

use std::fmt;

/// Error codes for parsing entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Parse lifecycle errors
    // =========================================================================
    /// Parse was cancelled between top-level elements
    E0101,

    // =========================================================================
    // E02xx: Language registry errors
    // =========================================================================
    /// No language registered under that name
    E0201,
    /// No language registered for that file extension
    E0202,
    /// A language with that name is already registered
    E0203,
}

impl ErrorCode {
    /// Get the string representation of this error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
        }
    }

    /// Get a short description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            Self::E0101 => "parse cancelled",
            Self::E0201 => "unknown language",
            Self::E0202 => "unknown file extension",
            Self::E0203 => "duplicate language",
        }
    }

    /// Check if this is a registry (configuration) error
    pub fn is_registry(&self) -> bool {
        matches!(self, Self::E0201 | Self::E0202 | Self::E0203)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
