//! Prototype structure
//!
//! - [`ParsedPrototype`] - a declaration signature split into sections,
//!   parameters and role-labelled tokens
//! - [`mark_prototype`] - the language-independent marker grammars fall back
//!   to when they have no dedicated matcher for a kind

mod marker;
mod parsed;

pub use marker::{mark_prototype, parse_generic_prototype};
pub use parsed::{ParameterList, ParameterStyle, ParsedPrototype, PrototypeToken, Section};
