//! Analysis entry point tests: language selection, cancellation and batches.

use std::sync::Arc;

use crate::helpers::element_assertions::*;
use crate::helpers::element_helpers::*;
use codescope::{CSharp, LanguageRegistry, ParseError, SystemVerilog};
use rstest::rstest;
use tokio_util::sync::CancellationToken;

#[rstest]
#[case("C#", "C#")]
#[case("c#", "C#")]
#[case("cs", "C#")]
#[case(".csx", "C#")]
#[case("SystemVerilog", "SystemVerilog")]
#[case("sv", "SystemVerilog")]
#[case("SVH", "SystemVerilog")]
#[case("v", "SystemVerilog")]
fn test_language_by_name_or_extension(#[case] query: &str, #[case] expected: &str) {
    let language = ANALYSIS.language(query).unwrap();
    assert_eq!(language.syntax().name, expected);
}

#[test]
fn test_unknown_language() {
    assert_eq!(
        ANALYSIS.language("cobol").err(),
        Some(ParseError::UnknownLanguage("cobol".to_string()))
    );
    assert!(ANALYSIS.extract_elements("cobol", "IDENTIFICATION DIVISION.").is_err());
    assert!(ANALYSIS.highlight("cobol", "").is_err());
}

#[rstest]
#[case("src/Order.cs", Some("C#"))]
#[case("rtl/top.sv", Some("SystemVerilog"))]
#[case("rtl/legacy.V", Some("SystemVerilog"))]
#[case("README", None)]
#[case("notes.txt", None)]
fn test_language_for_file(#[case] file_name: &str, #[case] expected: Option<&str>) {
    let name = ANALYSIS
        .language_for_file(file_name)
        .ok()
        .map(|language| language.syntax().name.to_string());
    assert_eq!(name.as_deref(), expected);
}

#[test]
fn test_registry_rejects_duplicates() {
    let mut registry = LanguageRegistry::new();
    assert!(registry.register(Arc::new(CSharp::new(KINDS.clone()))).is_ok());
    assert!(registry.register(Arc::new(SystemVerilog::new(KINDS.clone()))).is_ok());

    let again = registry.register(Arc::new(CSharp::new(KINDS.clone())));
    assert_eq!(again.err(), Some(ParseError::DuplicateLanguage("C#".to_string())));
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["C#", "SystemVerilog"]);
    assert_eq!(registry.len(), 2);
}

// =============================================================================
// CANCELLATION
// =============================================================================

#[rstest]
#[case("C#", "class A { } class B { }")]
#[case("SystemVerilog", "module a; endmodule")]
fn test_cancelled_extraction_discards_results(#[case] language: &str, #[case] source: &str) {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = ANALYSIS.extract_elements_with_cancel(language, source, &cancel);
    assert_eq!(result.err(), Some(ParseError::Cancelled));
}

#[test]
fn test_live_token_does_not_interfere() {
    let cancel = CancellationToken::new();
    let elements = ANALYSIS
        .extract_elements_with_cancel("C#", "class A { }", &cancel)
        .unwrap();
    assert_eq!(topic_titles(&elements), vec!["A"]);
}

// =============================================================================
// BATCHES
// =============================================================================

#[test]
fn test_extract_many_keeps_input_order() {
    let files = [
        ("Order.cs", "class Order { }"),
        ("top.sv", "module top;\nendmodule\n"),
        ("notes.txt", "plain text"),
        ("Empty.cs", ""),
    ];
    let results = ANALYSIS.extract_many(&files);

    assert_eq!(results.len(), 4);
    assert_eq!(topic_titles(results[0].as_ref().unwrap()), vec!["Order"]);
    assert_eq!(topic_titles(results[1].as_ref().unwrap()), vec!["top"]);
    assert_eq!(
        results[2].as_ref().err(),
        Some(&ParseError::UnknownExtension("txt".to_string()))
    );
    assert_root_only(results[3].as_ref().unwrap());
}

#[test]
fn test_analysis_is_shared_across_threads() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                scope.spawn(move || {
                    let source = format!("class C{i} {{ void Run() {{ }} }}");
                    csharp_elements(&source)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let elements = handle.join().unwrap();
            assert_eq!(topic_titles(&elements), vec![format!("C{i}"), "Run".to_string()]);
        }
    });
}
