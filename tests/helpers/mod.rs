//! Shared test helpers
//!
//! - `element_helpers` - a shared analysis and shortcuts into it
//! - `element_assertions` - lookups and assertions over element lists
//! - `source_fixtures` - C# and SystemVerilog sources used by several tests

#![allow(dead_code)]

pub mod element_assertions;
pub mod element_helpers;
pub mod source_fixtures;
