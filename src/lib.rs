//! # codescope-base
//!
//! Core library for turning source text into documentable code elements,
//! syntax highlighting and structured declaration prototypes.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Analysis entry points, multi-file batch extraction
//!   ↓
//! prototype → ParsedPrototype, generic prototype marker
//!   ↓
//! hir       → Element / ParentElement / Topic, keyword → kind registry
//!   ↓
//! parser    → Logos lexer, token buffer, cursors, lexical primitives, grammars
//!   ↓
//! base      → Primitives (FilePosition, AccessLevel, SymbolPath, ScopeContext)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → hir → prototype → ide)
// ============================================================================

/// Foundation types: positions, access levels, symbol paths, scope context
pub mod base;

/// Parser: logos lexer, token buffer, cursors, grammars
pub mod parser;

/// Code elements and the documentable-kind registry
pub mod hir;

/// Structured declaration signatures
pub mod prototype;

/// Entry points: extraction, highlighting, prototype parsing
pub mod ide;

// Re-export foundation types
pub use base::{AccessLevel, FilePosition, LanguageId, ScopeContext, SymbolPath, UsingRule};

// Re-export the entry points
pub use hir::{Element, KeywordTable, KindId, KindRegistry, ParentElement, Topic};
pub use ide::Analysis;
pub use parser::{CSharp, Language, LanguageRegistry, ParseError, ParseMode, ParseResult, SystemVerilog, TokenBuffer};
pub use prototype::ParsedPrototype;
