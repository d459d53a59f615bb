//! Generic prototype marker tests.
//!
//! The marker is the fallback for kinds a grammar has no matcher for, so it is
//! exercised both directly and through the analysis entry point.

use crate::helpers::element_helpers::*;
use codescope::parser::PrototypeRole;
use codescope::prototype::{ParameterStyle, mark_prototype, parse_generic_prototype};
use codescope::{CSharp, ParsedPrototype, SystemVerilog, TokenBuffer};
use rstest::rstest;

fn csharp() -> CSharp {
    CSharp::new(KINDS.clone())
}

#[test]
fn test_c_style_function() {
    let parsed = parse_generic_prototype(&csharp(), "int add(int a, int b = 0)");

    assert_eq!(parsed.style(), ParameterStyle::C);
    assert_eq!(parsed.name(), Some("add"));
    assert_eq!(parsed.base_type(), Some("int"));
    assert_eq!(parsed.parameter_count(), 2);
    assert_eq!(parsed.parameter_name(0), Some("a"));
    assert_eq!(parsed.parameter_base_type(1), Some("int"));
    assert_eq!(parsed.parameter_default_value(1), Some("0"));
}

#[test]
fn test_pascal_style_function() {
    let parsed = parse_generic_prototype(&csharp(), "function F(a, b: integer): string");

    assert_eq!(parsed.style(), ParameterStyle::Pascal);
    assert_eq!(parsed.parameter_name(0), Some("a"));
    // a takes the type of the next parameter that has one
    assert_eq!(parsed.parameter_base_type(0), Some("integer"));
    assert_eq!(parsed.base_type(), Some("string"));
}

#[rstest]
#[case("x: int", ParameterStyle::Pascal, "x", "int")]
#[case("static unsigned int counter", ParameterStyle::C, "counter", "int")]
fn test_declarations_without_parameters(
    #[case] text: &str,
    #[case] style: ParameterStyle,
    #[case] name: &str,
    #[case] base_type: &str,
) {
    let buffer = TokenBuffer::new(text);
    assert_eq!(mark_prototype(&csharp(), &buffer), style);
    assert!(buffer.has_prototype_roles());

    let parsed = ParsedPrototype::from_buffer(&buffer, style);
    assert_eq!(parsed.parameter_count(), 0);
    assert_eq!(parsed.name(), Some(name));
    assert_eq!(parsed.base_type(), Some(base_type));
}

#[test]
fn test_modifiers_before_the_type() {
    let parsed = parse_generic_prototype(&csharp(), "static unsigned int counter = 5");

    assert_eq!(parsed.texts_with_role(PrototypeRole::TypeModifier), vec!["static", "unsigned"]);
    assert_eq!(parsed.texts_with_role(PrototypeRole::DefaultValue), vec!["5"]);
}

#[test]
fn test_pointer_belongs_to_the_parameter() {
    let parsed = parse_generic_prototype(&csharp(), "void f(char* text)");

    assert_eq!(parsed.parameter_base_type(0), Some("char"));
    assert_eq!(parsed.parameter_name(0), Some("text"));
    assert_eq!(parsed.texts_with_role(PrototypeRole::ParamModifier), vec!["*"]);
}

#[test]
fn test_analysis_falls_back_for_unmatched_kinds() {
    let text = "namespace top";
    let parsed = verilog_prototype(text, "namespace");
    let generic = parse_generic_prototype(&SystemVerilog::new(KINDS.clone()), text);

    assert_eq!(parsed, generic);
    assert_eq!(parsed.name(), Some("top"));
}

#[test]
fn test_marking_is_repeatable() {
    let text = "function F(a, b: integer): string";
    assert_eq!(
        parse_generic_prototype(&csharp(), text),
        parse_generic_prototype(&csharp(), text)
    );
}
