//! C# element extraction tests.
//!
//! These tests verify the element list a C# file produces: which declarations
//! become elements, their symbols and titles, and the scope data parents carry.

use crate::helpers::element_assertions::*;
use crate::helpers::element_helpers::*;
use crate::helpers::source_fixtures::*;
use codescope::hir::children_of;
use codescope::{AccessLevel, FilePosition, SymbolPath, UsingRule};
use rstest::rstest;

// =============================================================================
// NESTING AND SYMBOLS
// =============================================================================

#[test]
fn test_class_with_function() {
    let elements = csharp_elements(CLASS_WITH_FUNCTION);

    assert_eq!(elements.len(), 3);
    assert!(elements[0].is_root());

    let class = &elements[1];
    assert!(class.is_parent());
    let topic = class.topic.as_ref().unwrap();
    assert_eq!(topic.title, "Foo");
    assert_eq!(topic.symbol.to_string(), "Foo");
    assert_keyword(topic, "class");

    let function = elements[2].topic.as_ref().unwrap();
    assert_eq!(function.title, "Bar");
    assert_eq!(function.symbol.to_string(), "Foo.Bar");
    assert_eq!(function.prototype.as_deref(), Some("int Bar()"));
    assert_keyword(function, "function");

    // Bar lies inside Foo's range
    let span = class.span().unwrap();
    assert!(span.contains(elements[2].position));
    assert_eq!(children_of(&elements, 1), vec![2]);
}

#[test]
fn test_namespace_scopes_class() {
    let elements = csharp_elements(NAMESPACE_WITH_CLASS);

    assert_eq!(elements.len(), 3);
    let namespace = &elements[1];
    assert!(namespace.topic.is_none());
    assert_eq!(namespace.child_context().unwrap().scope, SymbolPath::from_text("N"));

    let class = get_topic(&elements, "N.C");
    assert_eq!(class.title, "N.C");
    assert_eq!(class.symbol, SymbolPath::from_text("N") + SymbolPath::from_text("C"));
}

#[test]
fn test_class_without_name_is_skipped() {
    let elements = csharp_elements("class { }");
    assert_root_only(&elements);
}

#[test]
fn test_unrecognized_groups_are_consumed() {
    let elements = csharp_elements("{ x = 1; } class A { } { y(); } class B { }");

    assert_eq!(topic_titles(&elements), vec!["A", "B"]);
    assert_eq!(children_of(&elements, 0), vec![1, 2]);
}

#[rstest]
#[case("class A { } class B { } struct S { }", 3)]
#[case("interface I { } record R; enum E { X }", 3)]
#[case("namespace N { } namespace M { }", 2)]
#[case("class A { class Inner { } }", 1)]
fn test_top_level_children(#[case] source: &str, #[case] expected: usize) {
    let elements = csharp_elements(source);
    assert_eq!(children_of(&elements, 0).len(), expected);
}

#[test]
fn test_file_scoped_namespace() {
    let elements = csharp_elements("namespace App.Core;\n\nclass Service { void Run() { } }\n");

    let class = get_topic(&elements, "App.Core.Service");
    assert_eq!(class.line, 3);
    get_topic(&elements, "App.Core.Service.Run");
}

#[test]
fn test_root_element() {
    let elements = csharp_elements("");

    assert_root_only(&elements);
    let root = &elements[0];
    assert!(root.in_code);
    assert_eq!(root.end(), Some(FilePosition::END_OF_FILE));
    let parent = root.parent.as_ref().unwrap();
    assert_eq!(parent.default_declared_child_access, AccessLevel::Internal);
    assert_eq!(parent.maximum_effective_child_access, AccessLevel::Public);
    assert_eq!(parent.default_child_language, codescope::CSharp::ID);
}

// =============================================================================
// MEMBERS
// =============================================================================

#[test]
fn test_class_members_in_order() {
    let elements = csharp_elements(CLASS_MEMBERS);

    assert_eq!(
        topic_titles(&elements),
        vec![
            "Shop.Orders.Order",
            "MaxItems",
            "MinItems",
            "name",
            "count",
            "Order",
            "~Order",
            "Count",
            "this []",
            "Changed",
            "operator +",
            "operator int",
            "Add",
            "Shop.Orders.Status",
            "Open",
            "Closed",
            "Handler",
            "Shop.Orders.Point",
            "X",
            "Y",
        ]
    );
}

#[rstest]
#[case("Shop.Orders.Order.MaxItems", "constant")]
#[case("Shop.Orders.Order.MinItems", "constant")]
#[case("Shop.Orders.Order.name", "variable")]
#[case("Shop.Orders.Order.Order", "constructor")]
#[case("Shop.Orders.Order.~Order", "destructor")]
#[case("Shop.Orders.Order.Count", "property")]
#[case("Shop.Orders.Order.this", "operator")]
#[case("Shop.Orders.Order.Changed", "event")]
#[case("Shop.Orders.Order.Add", "function")]
#[case("Shop.Orders.Status", "enum")]
#[case("Shop.Orders.Handler", "delegate")]
#[case("Shop.Orders.Point", "record")]
#[case("Shop.Orders.Point.X", "property")]
fn test_member_keywords(#[case] symbol: &str, #[case] keyword: &str) {
    let elements = csharp_elements(CLASS_MEMBERS);
    let topic = get_topic(&elements, symbol);
    assert_keyword(topic, keyword);
    assert!(!topic.kind.is_none(), "'{}' should have a documentable kind", symbol);
}

#[test]
fn test_member_access_levels() {
    let elements = csharp_elements(CLASS_MEMBERS);

    assert_eq!(get_topic(&elements, "Shop.Orders.Order").access, AccessLevel::Public);
    assert_eq!(get_topic(&elements, "Shop.Orders.Order.MaxItems").access, AccessLevel::Private);
    assert_eq!(get_topic(&elements, "Shop.Orders.Order.name").access, AccessLevel::ProtectedInternal);
    // no modifier: declared access stays unknown, the parent holds the default
    assert_eq!(get_topic(&elements, "Shop.Orders.Order.count").access, AccessLevel::Unknown);

    let class = get_element(&elements, "Shop.Orders.Order");
    let parent = class.parent.as_ref().unwrap();
    assert_eq!(parent.default_declared_child_access, AccessLevel::Private);
    assert_eq!(parent.maximum_effective_child_access, AccessLevel::Public);
}

#[test]
fn test_property_prototypes() {
    let elements = csharp_elements(CLASS_MEMBERS);

    assert_eq!(
        get_topic(&elements, "Shop.Orders.Order.Count").prototype.as_deref(),
        Some("public int Count { get; private set }")
    );
    assert_eq!(
        get_topic(&elements, "Shop.Orders.Order.this").prototype.as_deref(),
        Some("public T this[int index] { get }")
    );

    let elements = csharp_elements("class C { int X { get; set; } }");
    assert_eq!(get_topic(&elements, "C.X").prototype.as_deref(), Some("int X { get; set }"));
}

#[test]
fn test_property_with_invalid_accessor_is_skipped() {
    let elements = csharp_elements("int X { get; foo; }");
    assert_root_only(&elements);
}

#[test]
fn test_multi_declarator_prototypes() {
    let elements = csharp_elements(CLASS_MEMBERS);

    assert_eq!(
        get_topic(&elements, "Shop.Orders.Order.MaxItems").prototype.as_deref(),
        Some("private const int MaxItems")
    );
    assert_eq!(
        get_topic(&elements, "Shop.Orders.Order.MinItems").prototype.as_deref(),
        Some("private const int MinItems")
    );
}

#[test]
fn test_enum_values_are_embedded() {
    let elements = csharp_elements(CLASS_MEMBERS);

    let open = get_topic(&elements, "Shop.Orders.Status.Open");
    assert_eq!(open.title, "Open");
    assert!(open.is_embedded);
    assert_keyword(open, "constant");
    assert!(get_topic(&elements, "Shop.Orders.Status.Closed").is_embedded);
    assert!(!get_topic(&elements, "Shop.Orders.Status").is_embedded);
}

#[test]
fn test_record_parameters_become_properties() {
    let elements = csharp_elements(CLASS_MEMBERS);

    let x = get_topic(&elements, "Shop.Orders.Point.X");
    assert_eq!(x.prototype.as_deref(), Some("public int X { get; init }"));
    assert_eq!(x.access, AccessLevel::Public);
}

#[test]
fn test_record_skips_properties_passed_to_base() {
    let elements = csharp_elements("record Derived(int A, int B) : Base(A);");

    assert_eq!(topic_titles(&elements), vec!["Derived", "B"]);
}

#[test]
fn test_topic_lines() {
    let elements = csharp_elements(CLASS_MEMBERS);

    assert_eq!(get_topic(&elements, "Shop.Orders.Order").line, 7);
    assert_eq!(get_topic(&elements, "Shop.Orders.Order.MaxItems").line, 9);
    assert_eq!(get_topic(&elements, "Shop.Orders.Point").line, 33);
}

// =============================================================================
// USING DIRECTIVES
// =============================================================================

#[test]
fn test_using_rules_on_root() {
    let elements = csharp_elements(CLASS_MEMBERS);

    let rules = elements[0].child_context().unwrap().using_rules();
    assert_eq!(
        rules,
        &[
            UsingRule::AddPrefix(SymbolPath::from_text("System")),
            UsingRule::ReplacePrefix {
                remove: SymbolPath::from_text("Col"),
                add: SymbolPath::from_text("System.Collections.Generic"),
            },
        ]
    );
}

#[test]
fn test_nested_scopes_inherit_using_rules() {
    let elements = csharp_elements("namespace N { using X = A.B; class C { } }");

    let class = get_element(&elements, "N.C");
    let rule = UsingRule::ReplacePrefix {
        remove: SymbolPath::from_text("X"),
        add: SymbolPath::from_text("A.B"),
    };
    assert_eq!(class.child_context().unwrap().using_rules(), &[rule.clone()]);
    // the alias lands on the namespace, not the root
    assert!(elements[0].child_context().unwrap().using_rules().is_empty());
    assert_eq!(rule.apply(&SymbolPath::from_text("X.Y")), Some(SymbolPath::from_text("A.B.Y")));
}

// =============================================================================
// LEXICAL EDGE CASES
// =============================================================================

#[rstest]
#[case("class A { string s = \"}\"; } class B { }")]
#[case("class A { char c = '}'; } class B { }")]
#[case("class A { string s = @\"a\"\"}\"; } class B { }")]
#[case("class A { string s = $\"{x}}}\"; } class B { }")]
#[case("class A { /* } */ } class B { }")]
#[case("class A { // }\n } class B { }")]
#[case("#if DEBUG\nclass A { }\n#endif\nclass B { }")]
fn test_braces_in_strings_and_comments(#[case] source: &str) {
    let elements = csharp_elements(source);
    assert_eq!(children_of(&elements, 0).len(), 2);
    get_topic(&elements, "B");
}

#[test]
fn test_attributes_before_declarations() {
    let elements = csharp_elements("[assembly: Version(\"1\")]\n[Serializable] public class A { [Obsolete] int x; }");

    assert_eq!(topic_titles(&elements), vec!["A", "x"]);
    assert_eq!(
        get_topic(&elements, "A").prototype.as_deref(),
        Some("[Serializable] public class A")
    );
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let elements = csharp_elements("class A { string s = \"open; } class B { }");
    assert_eq!(topic_titles(&elements), vec!["A", "s"]);
}
