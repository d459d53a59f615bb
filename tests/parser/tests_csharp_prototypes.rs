//! C# prototype tests.
//!
//! Prototypes are parsed in isolation with the kind of the declaration they
//! came from, and every token is classified by its role.

use crate::helpers::element_helpers::*;
use codescope::AccessLevel;
use codescope::parser::PrototypeRole;

#[test]
fn test_function_roles() {
    let parsed = csharp_prototype("int add(int a, int b = 0)", "function");

    assert_eq!(
        parsed.marked_runs(),
        vec![
            (PrototypeRole::Type, "int"),
            (PrototypeRole::Name, "add"),
            (PrototypeRole::StartOfParams, "("),
            (PrototypeRole::Type, "int"),
            (PrototypeRole::Name, "a"),
            (PrototypeRole::ParamSeparator, ","),
            (PrototypeRole::Type, "int"),
            (PrototypeRole::Name, "b"),
            (PrototypeRole::DefaultValueSeparator, "="),
            (PrototypeRole::DefaultValue, "0"),
            (PrototypeRole::EndOfParams, ")"),
        ]
    );
    assert_eq!(parsed.name(), Some("add"));
    assert_eq!(parsed.base_type(), Some("int"));
}

#[test]
fn test_function_parameters() {
    let parsed = csharp_prototype("int add(int a, int b = 0)", "function");

    assert_eq!(parsed.sections().len(), 1);
    assert_eq!(parsed.parameter_count(), 2);
    assert_eq!(parsed.parameter_text(0), Some("int a"));
    assert_eq!(parsed.parameter_text(1), Some("int b = 0"));
    assert_eq!(parsed.parameter_name(1), Some("b"));
    assert_eq!(parsed.parameter_base_type(1), Some("int"));
    assert_eq!(parsed.parameter_default_value(1), Some("0"));
    assert_eq!(parsed.parameter_default_value(0), None);
    assert_eq!(parsed.before_parameters(), "int add(");
    assert_eq!(parsed.after_parameters(), Some(")"));
}

#[test]
fn test_qualified_return_type_and_modifiers() {
    let parsed = csharp_prototype(
        "public static System.String Join(string separator, params string[] values)",
        "function",
    );

    assert_eq!(parsed.base_type(), Some("System.String"));
    assert_eq!(parsed.access_level(), AccessLevel::Public);
    assert_eq!(parsed.parameter_name(1), Some("values"));
    assert_eq!(parsed.parameter_base_type(1), Some("string"));
    assert!(parsed.texts_with_role(PrototypeRole::TypeModifier).contains(&"params"));
}

#[test]
fn test_constant_roles() {
    let parsed = csharp_prototype("const int Max = 10", "constant");

    assert_eq!(
        parsed.marked_runs(),
        vec![
            (PrototypeRole::TypeModifier, "const"),
            (PrototypeRole::Type, "int"),
            (PrototypeRole::Name, "Max"),
            (PrototypeRole::DefaultValueSeparator, "="),
            (PrototypeRole::DefaultValue, "10"),
        ]
    );
    assert_eq!(parsed.parameter_count(), 0);
    assert!(parsed.parameter_list().is_none());
}

#[test]
fn test_property() {
    let parsed = csharp_prototype("public int Count { get; private set; }", "property");

    assert_eq!(parsed.name(), Some("Count"));
    assert_eq!(parsed.base_type(), Some("int"));
    assert_eq!(parsed.access_level(), AccessLevel::Public);
    assert_eq!(parsed.parameter_count(), 2);
    assert_eq!(parsed.parameter_text(1), Some("private set"));
}

#[test]
fn test_indexer() {
    let parsed = csharp_prototype("int this[int i] { get; }", "operator");

    assert_eq!(parsed.main_section_index(), 0);
    assert_eq!(parsed.parameter_count(), 1);
    assert_eq!(parsed.parameter_name(0), Some("i"));
    assert_eq!(parsed.name(), Some("this"));
    // the accessor block is a second parameter list
    assert_eq!(parsed.sections().len(), 2);
    assert_eq!(parsed.texts_with_role(PrototypeRole::KeywordName), vec!["this", "get"]);
}

#[test]
fn test_access_level_combines_modifiers() {
    let parsed = csharp_prototype("protected internal void Run()", "function");
    assert_eq!(parsed.access_level(), AccessLevel::ProtectedInternal);
}

#[test]
fn test_kind_without_matcher_uses_generic_marker() {
    let parsed = csharp_prototype("namespace Shop", "namespace");
    let generic = codescope::prototype::parse_generic_prototype(
        &codescope::CSharp::new(KINDS.clone()),
        "namespace Shop",
    );

    assert_eq!(parsed, generic);
    assert_eq!(parsed.name(), Some("Shop"));
}

#[test]
fn test_parsing_twice_gives_equal_results() {
    let text = "public void Add<U>(U item, bool check = true) where U : T";
    assert_eq!(csharp_prototype(text, "function"), csharp_prototype(text, "function"));
}
