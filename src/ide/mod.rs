//! IDE-facing entry points.
//!
//! The surface a documentation engine or editor calls: element extraction,
//! syntax highlighting and prototype parsing, one file at a time or as a
//! parallel batch. Everything is built on the grammars in [`crate::parser`].

mod analysis;

pub use analysis::Analysis;
