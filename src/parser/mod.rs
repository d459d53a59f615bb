//! Token stream and grammars
//!
//! Every language shares one token model and one matching protocol:
//! - **logos** classifies characters into fundamental tokens
//! - a [`TokenBuffer`] owns the text, the tokens and their annotation slots
//! - [`Cursor`]s walk the buffer and are copied freely for lookahead
//! - grammars are [`BaseGrammar`] implementations whose matchers run in one
//!   of four [`ParseMode`]s
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → FundamentalKind tokens
//!     ↓
//! TokenBuffer → text, token ranges, lazily allocated annotation slots
//!     ↓
//! Grammar matchers (try_to_skip_*) → elements, highlighting or prototype roles
//! ```
//!
//! ## Matcher contract
//!
//! A matcher takes `&mut Cursor`, works on a copy and writes it back only on
//! success. On failure it clears whatever it annotated in its mode's slot and
//! returns `false`, so a failed attempt is never observable.

mod annotations;
mod buffer;
mod cursor;
mod errors;
pub mod grammar;
mod language;
mod lexer;
mod mode;
mod primitives;

pub use annotations::{CommentRole, HighlightKind, PrototypeRole};
pub use buffer::TokenBuffer;
pub use cursor::Cursor;
pub use errors::{ErrorCode, ParseError, ParseResult};
pub use grammar::{CSharp, Language, LanguageRegistry, SystemVerilog};
pub use language::LanguageSyntax;
pub use lexer::{FundamentalKind, Lexer, RawToken, fundamental_kind_of, tokenize};
pub use mode::ParseMode;
pub use primitives::BaseGrammar;

/// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
