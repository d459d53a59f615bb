//! Syntax highlighting tests.

use crate::helpers::element_helpers::*;
use codescope::parser::HighlightKind;

fn has_run(runs: &[(String, HighlightKind)], text: &str, kind: HighlightKind) -> bool {
    runs.iter().any(|(t, k)| t == text && *k == kind)
}

const CSHARP_SOURCE: &str = "[Serializable]\npublic class A {\n  int[] xs = new int[3];\n  string s = \"hi\"; // done\n  int n = 42;\n}\n#if DEBUG\nclass B { }\n#endif\n";

const VERILOG_SOURCE: &str = "`define W 8\n(* keep *)\nmodule m;\n  initial $display(\"v=%d\", 8'hFF);\n  logic \\module ;\nendmodule // done\n";

// =============================================================================
// C#
// =============================================================================

#[test]
fn test_csharp_keywords() {
    let runs = highlighted("C#", CSHARP_SOURCE);

    for keyword in ["public", "class", "int", "new", "string"] {
        assert!(has_run(&runs, keyword, HighlightKind::Keyword), "'{}' should be a keyword", keyword);
    }
    assert!(!runs.iter().any(|(text, _)| text == "A" || text == "xs"));
}

#[test]
fn test_csharp_literals_and_comments() {
    let runs = highlighted("C#", CSHARP_SOURCE);

    assert!(has_run(&runs, "\"hi\"", HighlightKind::String));
    assert!(has_run(&runs, "42", HighlightKind::Number));
    assert!(has_run(&runs, "// done", HighlightKind::Comment));
}

#[test]
fn test_csharp_attributes_are_metadata() {
    let runs = highlighted("C#", CSHARP_SOURCE);

    assert!(has_run(&runs, "[Serializable]", HighlightKind::Metadata));
    // array ranks and indexing are not attributes
    let metadata = runs
        .iter()
        .filter(|(_, kind)| *kind == HighlightKind::Metadata)
        .count();
    assert_eq!(metadata, 1);
}

#[test]
fn test_csharp_preprocessing_directives() {
    let runs = highlighted("C#", CSHARP_SOURCE);

    assert!(
        runs.iter()
            .any(|(text, kind)| text.starts_with("#if DEBUG") && *kind == HighlightKind::PreprocessingDirective)
    );
    assert!(
        runs.iter()
            .any(|(text, kind)| text.starts_with("#endif") && *kind == HighlightKind::PreprocessingDirective)
    );
}

#[test]
fn test_csharp_verbatim_identifier_is_not_keyword() {
    let runs = highlighted("C#", "var @class = 1;");
    assert!(!runs.iter().any(|(text, _)| text.contains("class")));
}

#[test]
fn test_plain_code_has_no_highlighting() {
    let buffer = ANALYSIS.highlight("C#", "x = y;").unwrap();
    assert!(highlighted_runs(&buffer).is_empty());
}

// =============================================================================
// SYSTEMVERILOG
// =============================================================================

#[test]
fn test_verilog_keywords() {
    let runs = highlighted("SystemVerilog", VERILOG_SOURCE);

    for keyword in ["module", "initial", "logic", "endmodule"] {
        assert!(has_run(&runs, keyword, HighlightKind::Keyword), "'{}' should be a keyword", keyword);
    }
    // the escaped identifier \module is not the keyword
    let modules = runs
        .iter()
        .filter(|(text, kind)| text == "module" && *kind == HighlightKind::Keyword)
        .count();
    assert_eq!(modules, 1);
}

#[test]
fn test_verilog_system_tasks_are_plain() {
    let runs = highlighted("SystemVerilog", VERILOG_SOURCE);
    assert!(!runs.iter().any(|(text, _)| text.contains("display")));
}

#[test]
fn test_verilog_literals_and_comments() {
    let runs = highlighted("SystemVerilog", VERILOG_SOURCE);

    assert!(has_run(&runs, "8'hFF", HighlightKind::Number));
    assert!(has_run(&runs, "\"v=%d\"", HighlightKind::String));
    assert!(has_run(&runs, "// done", HighlightKind::Comment));
}

#[test]
fn test_verilog_directives_and_attributes() {
    let runs = highlighted("SystemVerilog", VERILOG_SOURCE);

    assert!(has_run(&runs, "`define W 8", HighlightKind::PreprocessingDirective));
    assert!(has_run(&runs, "(* keep *)", HighlightKind::Metadata));
}
