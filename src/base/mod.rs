//! Foundation types for the codescope toolchain.
//!
//! This module provides fundamental types used throughout the parser:
//! - [`FilePosition`], [`Span`] - 1-based line/char positions of elements
//! - [`SymbolPath`] - Fully qualified, separator-independent names
//! - [`ScopeContext`], [`UsingRule`] - Scope plus aliasing rules
//! - [`AccessLevel`] - Declared visibility
//! - [`LanguageId`] - Registered language identifiers
//!
//! This module has NO dependencies on other codescope modules.

mod access;
mod context;
mod language_id;
mod position;
mod symbol;

pub use access::AccessLevel;
pub use context::{ScopeContext, UsingRule};
pub use language_id::LanguageId;
pub use position::{FilePosition, Span};
pub use symbol::SymbolPath;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
