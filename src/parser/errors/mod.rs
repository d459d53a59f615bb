//! Error handling for the parsing entry points
//!
//! Matchers never fail loudly: a failed match is a `false` return and an
//! unchanged cursor. Errors only exist at the edges:
//! - Categorized error codes for filtering and documentation
//! - A `thiserror` enum for the entry points and the language registry

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ParseError, ParseResult};
