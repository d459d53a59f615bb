//! Helpers for running extraction, highlighting and prototype parsing.

use std::sync::Arc;

use codescope::parser::HighlightKind;
use codescope::{Analysis, Element, KeywordTable, KindId, KindRegistry, LanguageId, ParsedPrototype, TokenBuffer};
use once_cell::sync::Lazy;

/// The standard keyword table, shared by every test
pub static KINDS: Lazy<Arc<KeywordTable>> = Lazy::new(|| Arc::new(KeywordTable::standard()));

/// An analysis over the built-in grammars
pub static ANALYSIS: Lazy<Analysis> = Lazy::new(|| Analysis::with_builtins(KINDS.clone()));

/// Elements of a C# source.
pub fn csharp_elements(source: &str) -> Vec<Element> {
    ANALYSIS
        .extract_elements("C#", source)
        .expect("C# extraction should not fail")
}

/// Elements of a SystemVerilog source.
pub fn verilog_elements(source: &str) -> Vec<Element> {
    ANALYSIS
        .extract_elements("SystemVerilog", source)
        .expect("SystemVerilog extraction should not fail")
}

/// Kind id of a declaring keyword in a language.
pub fn kind(keyword: &str, language: LanguageId) -> KindId {
    KINDS.id_from_keyword(keyword, language)
}

/// Prototype of a C# declaration of the given keyword's kind.
pub fn csharp_prototype(text: &str, keyword: &str) -> ParsedPrototype {
    ANALYSIS
        .parse_prototype("C#", text, kind(keyword, codescope::CSharp::ID))
        .expect("C# is registered")
}

/// Prototype of a SystemVerilog declaration of the given keyword's kind.
pub fn verilog_prototype(text: &str, keyword: &str) -> ParsedPrototype {
    ANALYSIS
        .parse_prototype("SystemVerilog", text, kind(keyword, codescope::SystemVerilog::ID))
        .expect("SystemVerilog is registered")
}

/// Highlighted runs of a source as (text, kind) pairs.
pub fn highlighted(language: &str, source: &str) -> Vec<(String, HighlightKind)> {
    let buffer = ANALYSIS
        .highlight(language, source)
        .expect("language is registered");
    highlighted_runs(&buffer)
}

/// Highlighted runs of an already highlighted buffer.
pub fn highlighted_runs(buffer: &TokenBuffer) -> Vec<(String, HighlightKind)> {
    buffer
        .highlighted_ranges()
        .into_iter()
        .map(|(range, kind)| (buffer.raw_text()[range].to_string(), kind))
        .collect()
}
