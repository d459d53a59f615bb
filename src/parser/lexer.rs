//! Logos-based fundamental lexer
//!
//! Splits raw text into runs of one fundamental kind. No language knowledge
//! lives here: every grammar works on top of these four kinds.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// The language-independent classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundamentalKind {
    /// A maximal run of ASCII letters, digits and any character above U+007F
    Text,
    /// A run of spaces and tabs
    Whitespace,
    /// `\r\n`, `\r` or `\n`
    LineBreak,
    /// Any other single character
    Symbol,
    /// Out of bounds
    Null,
}

/// A token with its kind and byte range into the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken {
    pub kind: FundamentalKind,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    /// Symbols split out of a multi-character error span, in reverse order
    pending: Vec<RawToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            pending: Vec::new(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop() {
            return Some(token);
        }

        let logos_token = self.inner.next()?;
        let span = self.inner.span();
        let start = TextSize::new(span.start as u32);
        let end = TextSize::new(span.end as u32);

        let kind = match logos_token {
            Ok(LogosToken::Text) => FundamentalKind::Text,
            Ok(LogosToken::Whitespace) => FundamentalKind::Whitespace,
            Ok(LogosToken::LineBreak) => FundamentalKind::LineBreak,
            Err(()) => {
                // Every symbol character is its own token.
                let mut offset = start;
                for c in self.inner.slice().chars() {
                    let len = TextSize::of(c);
                    self.pending.push(RawToken {
                        kind: FundamentalKind::Symbol,
                        range: TextRange::at(offset, len),
                    });
                    offset += len;
                }
                self.pending.reverse();
                return self.pending.pop();
            }
        };

        Some(RawToken {
            kind,
            range: TextRange::new(start, end),
        })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<RawToken> {
    Lexer::new(input).collect()
}

/// Classify a single character the same way the lexer would
pub fn fundamental_kind_of(c: char) -> FundamentalKind {
    if c.is_ascii_alphanumeric() || (c as u32) > 0x7F {
        FundamentalKind::Text
    } else if c == ' ' || c == '\t' {
        FundamentalKind::Whitespace
    } else if c == '\r' || c == '\n' {
        FundamentalKind::LineBreak
    } else {
        FundamentalKind::Symbol
    }
}

/// Logos token enum - symbols fall through to the error branch
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[regex(r"[a-zA-Z0-9\u{80}-\u{10FFFF}]+")]
    Text,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\r\n")]
    #[token("\r")]
    #[token("\n")]
    LineBreak,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(FundamentalKind, &str)> {
        tokenize(input)
            .into_iter()
            .map(|t| (t.kind, &input[t.range]))
            .collect()
    }

    #[test]
    fn test_word_runs_include_digits() {
        assert_eq!(
            kinds("foo123 bar"),
            vec![
                (FundamentalKind::Text, "foo123"),
                (FundamentalKind::Whitespace, " "),
                (FundamentalKind::Text, "bar"),
            ]
        );
    }

    #[test]
    fn test_each_symbol_is_its_own_token() {
        assert_eq!(
            kinds("a::b_c"),
            vec![
                (FundamentalKind::Text, "a"),
                (FundamentalKind::Symbol, ":"),
                (FundamentalKind::Symbol, ":"),
                (FundamentalKind::Text, "b"),
                (FundamentalKind::Symbol, "_"),
                (FundamentalKind::Text, "c"),
            ]
        );
    }

    #[test]
    fn test_crlf_is_one_line_break() {
        assert_eq!(
            kinds("a\r\n\nb"),
            vec![
                (FundamentalKind::Text, "a"),
                (FundamentalKind::LineBreak, "\r\n"),
                (FundamentalKind::LineBreak, "\n"),
                (FundamentalKind::Text, "b"),
            ]
        );
    }

    #[test]
    fn test_non_ascii_is_text() {
        assert_eq!(kinds("größe"), vec![(FundamentalKind::Text, "größe")]);
        assert_eq!(fundamental_kind_of('é'), FundamentalKind::Text);
        assert_eq!(fundamental_kind_of('$'), FundamentalKind::Symbol);
    }
}
