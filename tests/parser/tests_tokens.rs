//! Tokenizer and cursor tests.

use codescope::TokenBuffer;
use codescope::parser::{FundamentalKind, tokenize};
use rstest::rstest;

fn kinds(input: &str) -> Vec<(FundamentalKind, &str)> {
    tokenize(input)
        .into_iter()
        .map(|t| (t.kind, &input[t.range]))
        .collect()
}

#[rstest]
#[case("int x1", vec![(FundamentalKind::Text, "int"), (FundamentalKind::Whitespace, " "), (FundamentalKind::Text, "x1")])]
#[case("a\r\nb", vec![(FundamentalKind::Text, "a"), (FundamentalKind::LineBreak, "\r\n"), (FundamentalKind::Text, "b")])]
#[case("\r\r", vec![(FundamentalKind::LineBreak, "\r"), (FundamentalKind::LineBreak, "\r")])]
#[case("a+=b", vec![
    (FundamentalKind::Text, "a"),
    (FundamentalKind::Symbol, "+"),
    (FundamentalKind::Symbol, "="),
    (FundamentalKind::Text, "b"),
])]
#[case("größe", vec![(FundamentalKind::Text, "größe")])]
#[case(" \t ", vec![(FundamentalKind::Whitespace, " \t ")])]
#[case("_x", vec![(FundamentalKind::Symbol, "_"), (FundamentalKind::Text, "x")])]
fn test_fundamental_kinds(#[case] input: &str, #[case] expected: Vec<(FundamentalKind, &str)>) {
    assert_eq!(kinds(input), expected);
}

#[test]
fn test_empty_text_has_no_tokens() {
    assert!(tokenize("").is_empty());
    let buffer = TokenBuffer::new("");
    assert!(buffer.is_empty());
    assert!(!buffer.first().is_in_bounds());
}

#[rstest]
#[case("class Foo { int Bar() { return 1; } }")]
#[case("module m(input a);\r\n  assign b = ~a;\nendmodule")]
#[case("/* ünïcödé */ \t$display(\"%d\", 8'hFF);")]
fn test_tokens_cover_the_text(#[case] input: &str) {
    let joined: String = tokenize(input)
        .iter()
        .map(|t| &input[t.range])
        .collect();
    assert_eq!(joined, input);
}

#[test]
fn test_lines_follow_line_breaks() {
    let buffer = TokenBuffer::with_starting_line("a\nb\r\nc", 10);
    let mut cursor = buffer.first();
    assert_eq!(cursor.line(), 10);

    cursor.next_n(2);
    assert_eq!(cursor.text(), "b");
    assert_eq!(cursor.line(), 11);

    cursor.next_n(2);
    assert_eq!(cursor.text(), "c");
    assert_eq!(cursor.line(), 12);

    // cursors made directly agree with walked ones
    assert_eq!(buffer.cursor_at(4).line(), 12);
}

#[test]
fn test_char_numbers_restart_on_each_line() {
    let buffer = TokenBuffer::new("int x;\n  y");
    let x = buffer.cursor_at(2);
    assert_eq!(x.text(), "x");
    assert_eq!(x.char_number(), 5);

    let y = buffer.cursor_at(6);
    assert_eq!(y.text(), "y");
    assert_eq!(y.char_number(), 3);
}

#[test]
fn test_cursor_copies_move_independently() {
    let buffer = TokenBuffer::new("a b c");
    let start = buffer.first();
    let mut lookahead = start;
    lookahead.next_n(2);

    assert_eq!(start.text(), "a");
    assert_eq!(lookahead.text(), "b");
    assert!(start < lookahead);
    assert_eq!(buffer.text_between(&start, &lookahead), "a ");
    assert_eq!(start.text_to(&lookahead), "a ");
}

#[test]
fn test_movement_stops_at_the_ends() {
    let buffer = TokenBuffer::new("a");
    let mut cursor = buffer.first();
    cursor.previous();
    assert_eq!(cursor.index(), 0);

    cursor.next_n(5);
    assert_eq!(cursor.index(), 1);
    assert_eq!(cursor.fundamental(), FundamentalKind::Null);
    assert_eq!(cursor.text(), "");
}
