//! SystemVerilog element and prototype tests.

use crate::helpers::element_assertions::*;
use crate::helpers::element_helpers::*;
use crate::helpers::source_fixtures::*;
use codescope::hir::children_of;
use codescope::parser::PrototypeRole;
use rstest::rstest;

// =============================================================================
// ELEMENTS
// =============================================================================

#[test]
fn test_module_with_ports() {
    let elements = verilog_elements(MODULE_WITH_PORTS);

    assert_eq!(elements.len(), 2);
    assert!(elements[0].is_root());

    let module = &elements[1];
    assert!(module.is_parent());
    let topic = module.topic.as_ref().unwrap();
    assert_eq!(topic.title, "m");
    assert_keyword(topic, "module");
    assert_eq!(topic.prototype.as_deref(), Some("module m(input a, output b)"));
    assert_eq!(module.end().map(|end| end.line), Some(3));
}

#[test]
fn test_module_items_in_order() {
    let elements = verilog_elements(COUNTER_MODULE);

    assert_eq!(
        topic_titles(&elements),
        vec!["counter", "MAX", "MIN", "a", "b", "state_t", "add", "run"]
    );
    // everything is declared inside the module
    assert_eq!(children_of(&elements, 0), vec![1]);
    assert_eq!(children_of(&elements, 1).len(), 7);
}

#[rstest]
#[case("counter", "module")]
#[case("counter.MAX", "constant")]
#[case("counter.MIN", "constant")]
#[case("counter.a", "variable")]
#[case("counter.state_t", "type")]
#[case("counter.add", "function")]
#[case("counter.run", "task")]
fn test_module_item_keywords(#[case] symbol: &str, #[case] keyword: &str) {
    let elements = verilog_elements(COUNTER_MODULE);
    assert_keyword(get_topic(&elements, symbol), keyword);
}

#[test]
fn test_declarator_prototypes() {
    let elements = verilog_elements(COUNTER_MODULE);

    assert_eq!(
        get_topic(&elements, "counter.MAX").prototype.as_deref(),
        Some("localparam int MAX")
    );
    assert_eq!(
        get_topic(&elements, "counter.MIN").prototype.as_deref(),
        Some("localparam int MIN")
    );
    assert_eq!(get_topic(&elements, "counter.b").prototype.as_deref(), Some("logic b"));
    assert_eq!(
        get_topic(&elements, "counter.add").prototype.as_deref(),
        Some("function automatic int add(int x, int y)")
    );
}

#[rstest]
#[case("module t;\n  initial begin\n    fork\n      a = 1;\n    join\n  end\nendmodule\nmodule u;\nendmodule\n")]
#[case("module t;\n  initial fork a = 1; join_none\nendmodule\nmodule u;\nendmodule\n")]
#[case("module t;\n  initial begin\n    wait fork;\n    disable fork;\n  end\nendmodule\nmodule u;\nendmodule\n")]
fn test_fork_blocks_do_not_swallow_siblings(#[case] source: &str) {
    let elements = verilog_elements(source);
    assert_eq!(topic_titles(&elements), vec!["t", "u"]);
    assert_eq!(children_of(&elements, 0), vec![1, 2]);
}

#[test]
fn test_wait_fork_inside_task() {
    let elements = verilog_elements("module t;\n  task x;\n    wait fork;\n  endtask\nendmodule\nmodule u;\nendmodule\n");
    assert_eq!(topic_titles(&elements), vec!["t", "x", "u"]);
}

#[test]
fn test_package_with_class() {
    let elements = verilog_elements(CLASS_PACKAGE);

    assert_eq!(
        topic_summary(&elements),
        vec![
            ("pkg".to_string(), "pkg".to_string()),
            ("N".to_string(), "pkg.N".to_string()),
            ("packet".to_string(), "pkg.packet".to_string()),
            ("data".to_string(), "pkg.packet.data".to_string()),
            ("pack".to_string(), "pkg.packet.pack".to_string()),
            ("new".to_string(), "pkg.packet.new".to_string()),
        ]
    );
    assert_keyword(get_topic(&elements, "pkg"), "package");
    assert_keyword(get_topic(&elements, "pkg.packet"), "class");
    assert_keyword(get_topic(&elements, "pkg.packet.pack"), "function");
}

#[test]
fn test_extern_function_has_no_body() {
    let elements = verilog_elements(CLASS_PACKAGE);

    // `new` follows the extern declaration as a sibling
    let class = elements
        .iter()
        .position(|e| e.topic.as_ref().is_some_and(|t| t.title == "packet"))
        .unwrap();
    assert_eq!(children_of(&elements, class).len(), 3);
    assert_eq!(
        get_topic(&elements, "pkg.packet.pack").prototype.as_deref(),
        Some("extern function void pack()")
    );
}

#[rstest]
#[case("class c;\n  extern protected virtual function void f();\n  function void g();\n  endfunction\nendclass\n", vec!["c", "f", "g"])]
#[case("virtual class c;\n  pure virtual protected function void f();\n  function void g();\n  endfunction\nendclass\n", vec!["c", "f", "g"])]
#[case("class c;\n  extern static local task t();\n  task u();\n  endtask\nendclass\n", vec!["c", "t", "u"])]
#[case("module m;\n  import \"DPI-C\" context function int f(int a);\n  function void g();\n  endfunction\nendmodule\n", vec!["m", "g"])]
#[case("module m;\n  export \"DPI-C\" function g;\n  function void g();\n  endfunction\nendmodule\n", vec!["m", "g"])]
fn test_bodiless_subroutines_keep_siblings(#[case] source: &str, #[case] expected: Vec<&str>) {
    let elements = verilog_elements(source);

    assert_eq!(topic_titles(&elements), expected);
    let scope = expected[0];
    let sibling = expected[expected.len() - 1];
    get_topic(&elements, &format!("{}.{}", scope, sibling));
}

#[test]
fn test_interface_with_modport() {
    let elements = verilog_elements("interface bus_if;\n  logic req;\n  modport m (input req);\nendinterface\n");

    assert_eq!(topic_titles(&elements), vec!["bus_if", "req"]);
    assert_keyword(get_topic(&elements, "bus_if"), "interface");
}

#[rstest]
#[case("module m(a, b);\n  input a;\n  output b;\nendmodule\n", vec!["m"])]
#[case("module top;\n  sub u1 (.clk(clk));\n  sub #(8) u2 (clk);\nendmodule\n", vec!["top"])]
#[case("`define W 8\nmodule m;\n  `my_macro(x)\n  logic [`W-1:0] x;\nendmodule\n", vec!["m", "x"])]
#[case("(* keep *) module m;\nendmodule\n", vec!["m"])]
fn test_skipped_items(#[case] source: &str, #[case] expected: Vec<&str>) {
    let elements = verilog_elements(source);
    assert_eq!(topic_titles(&elements), expected);
}

#[test]
fn test_unclosed_module_runs_to_end() {
    let elements = verilog_elements("module m;\n  logic x;\n");
    assert_eq!(topic_titles(&elements), vec!["m", "x"]);
    assert!(elements[1].end().is_some());
}

// =============================================================================
// PROTOTYPES
// =============================================================================

#[test]
fn test_module_prototype_ports() {
    let parsed = verilog_prototype("module m(input a, output b);", "module");

    assert_eq!(parsed.sections().len(), 1);
    assert_eq!(parsed.parameter_count(), 2);
    assert_eq!(parsed.texts_with_role(PrototypeRole::TypeModifier), vec!["input", "output"]);
    assert_eq!(parsed.name(), Some("m"));
    assert_eq!(parsed.parameter_name(0), Some("a"));
    assert_eq!(parsed.parameter_name(1), Some("b"));
}

#[test]
fn test_parameter_ports_are_a_section() {
    let parsed = verilog_prototype(
        "module counter #(parameter WIDTH = 8) (input logic clk, output logic [7:0] count);",
        "module",
    );

    assert_eq!(parsed.sections().len(), 3);
    assert_eq!(parsed.main_section_index(), 2);
    assert_eq!(parsed.name(), Some("counter"));
    assert_eq!(parsed.parameter_count(), 2);
    assert_eq!(parsed.parameter_name(1), Some("count"));
    assert_eq!(parsed.parameter_base_type(0), Some("logic"));

    let parameters = parsed.with_main_section(1);
    assert_eq!(parameters.parameter_name(0), Some("WIDTH"));
    assert_eq!(parameters.parameter_default_value(0), Some("8"));
}

#[test]
fn test_function_prototype() {
    let parsed = verilog_prototype("function automatic int add(int x, int y);", "function");

    assert_eq!(parsed.name(), Some("add"));
    assert_eq!(parsed.base_type(), Some("int"));
    assert_eq!(parsed.parameter_count(), 2);
    assert_eq!(parsed.parameter_name(1), Some("y"));
    assert_eq!(parsed.parameter_base_type(1), Some("int"));
}

#[test]
fn test_constant_prototype() {
    let parsed = verilog_prototype("parameter int N = 4", "constant");

    assert_eq!(parsed.name(), Some("N"));
    assert_eq!(parsed.base_type(), Some("int"));
    assert_eq!(parsed.texts_with_role(PrototypeRole::DefaultValue), vec!["4"]);
}

#[test]
fn test_verilog_parsing_twice_gives_equal_results() {
    let text = "module m #(parameter W = 8) (input [W-1:0] d);";
    assert_eq!(verilog_prototype(text, "module"), verilog_prototype(text, "module"));
}
