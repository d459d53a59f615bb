//! Lexical primitives shared by every grammar
//!
//! [`BaseGrammar`] holds the skip routines as provided methods. A grammar
//! implements `syntax()` and overrides only the primitives whose rules
//! differ for its language:
//! - whitespace and comments, driven by the [`LanguageSyntax`] descriptor
//! - quoted strings and numeric literals
//! - generic balanced-delimiter skipping and statement recovery
//! - the word scanner and text normalization the prototype marker relies on
//!
//! Every `try_to_skip_*` routine follows the matcher contract: on success
//! the cursor moves past the match, on failure it is left untouched.

use super::annotations::{CommentRole, HighlightKind};
use super::buffer::TokenBuffer;
use super::cursor::Cursor;
use super::language::LanguageSyntax;
use super::lexer::FundamentalKind;
use super::mode::ParseMode;

/// Provided lexical primitives over a [`LanguageSyntax`]
pub trait BaseGrammar {
    fn syntax(&self) -> &LanguageSyntax;

    /// Whether the current token is `keyword`, honoring the language's case rules
    fn matches_keyword(&self, it: &Cursor<'_>, keyword: &str) -> bool {
        it.matches_token(keyword, self.syntax().ignore_case())
    }

    // =========================================================================
    // WHITESPACE AND COMMENTS
    // =========================================================================

    /// Skip any run of whitespace, line breaks and comments
    fn try_to_skip_whitespace(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        let start = it.index();
        loop {
            match it.fundamental() {
                FundamentalKind::Whitespace | FundamentalKind::LineBreak => it.next(),
                _ if self.try_to_skip_comment(it, mode) => {}
                _ => break,
            }
        }
        it.index() != start
    }

    fn try_to_skip_comment(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        self.try_to_skip_line_comment(it, mode) || self.try_to_skip_block_comment(it, mode)
    }

    /// A line comment runs up to, not including, the line break
    fn try_to_skip_line_comment(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        let Some(symbol) = self
            .syntax()
            .line_comments
            .iter()
            .find(|symbol| it.matches_across_tokens(symbol, false))
        else {
            return false;
        };

        let start = *it;
        it.next_by_characters(symbol.len());
        let content = *it;
        while it.is_in_bounds() && it.fundamental() != FundamentalKind::LineBreak {
            it.next();
        }

        mark_comment(&start, &content, it, it, mode);
        true
    }

    /// An unterminated block comment runs to the end of the text
    fn try_to_skip_block_comment(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        let Some((opening, closing)) = self
            .syntax()
            .block_comments
            .iter()
            .find(|(opening, _)| it.matches_across_tokens(opening, false))
        else {
            return false;
        };

        let start = *it;
        it.next_by_characters(opening.len());
        let content = *it;
        while it.is_in_bounds() && !it.matches_across_tokens(closing, false) {
            it.next();
        }
        let content_end = *it;
        if it.is_in_bounds() {
            it.next_by_characters(closing.len());
        }

        mark_comment(&start, &content, &content_end, it, mode);
        true
    }

    // =========================================================================
    // LITERALS
    // =========================================================================

    /// `"` or `'` quoted, backslash escapes. Unterminated strings run to the end.
    fn try_to_skip_string(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        let quote = it.character();
        if quote != '"' && quote != '\'' {
            return false;
        }

        let mut lookahead = *it;
        lookahead.next();
        while lookahead.is_in_bounds() {
            match lookahead.character() {
                '\\' => lookahead.next_n(2),
                c if c == quote => {
                    lookahead.next();
                    break;
                }
                _ => lookahead.next(),
            }
        }

        if mode.is_highlight() {
            it.set_highlight_to(&lookahead, HighlightKind::String);
        }
        *it = lookahead;
        true
    }

    /// Decimal, fractional, hex and exponent literals with an optional sign
    fn try_to_skip_number(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        let first = it.character();
        if !(first.is_ascii_digit() || first == '-' || first == '.') {
            return false;
        }

        let mut lookahead = *it;
        if first == '-' {
            if follows_identifier(it) {
                return false;
            }
            lookahead.next();
        }

        let mut passed_period = false;
        if lookahead.character() == '.' {
            lookahead.next();
            passed_period = true;
        }
        if !lookahead.character().is_ascii_digit() {
            return false;
        }

        let digits = lookahead.text();
        let is_hex = digits.starts_with("0x") || digits.starts_with("0X");
        let mut last_char_was_e = digits.ends_with(['e', 'E']);
        lookahead.next();
        let mut end = lookahead;

        if !passed_period && !is_hex && lookahead.character() == '.' {
            let mut fraction = lookahead;
            fraction.next();
            if fraction.character().is_ascii_digit() {
                last_char_was_e = fraction.text().ends_with(['e', 'E']);
                fraction.next();
                lookahead = fraction;
                end = fraction;
            }
        }

        if last_char_was_e && !is_hex && matches!(lookahead.character(), '+' | '-') {
            let mut exponent = lookahead;
            exponent.next();
            if exponent.character().is_ascii_digit() {
                exponent.next();
                end = exponent;
            }
        }

        if mode.is_highlight() {
            it.set_highlight_to(&end, HighlightKind::Number);
        }
        *it = end;
        true
    }

    // =========================================================================
    // GENERIC SKIPPING
    // =========================================================================

    /// Skip one semantic unit: a balanced region, a string, whitespace or one token
    fn generic_skip(&self, it: &mut Cursor<'_>) {
        let closing = match it.character() {
            '(' => ')',
            '[' => ']',
            '{' => '}',
            _ => {
                if !(self.try_to_skip_string(it, ParseMode::IterateOnly)
                    || self.try_to_skip_whitespace(it, ParseMode::IterateOnly))
                {
                    it.next();
                }
                return;
            }
        };
        it.next();
        self.generic_skip_until_after(it, closing);
    }

    /// Apply [`BaseGrammar::generic_skip`] until `symbol` is consumed at this level
    fn generic_skip_until_after(&self, it: &mut Cursor<'_>, symbol: char) {
        while it.is_in_bounds() {
            if it.character() == symbol {
                it.next();
                break;
            }
            self.generic_skip(it);
        }
    }

    /// Recovery: skip to after the next unenclosed `;` or brace block
    fn skip_rest_of_statement(&self, it: &mut Cursor<'_>) {
        while it.is_in_bounds() {
            match it.character() {
                ';' => {
                    it.next();
                    break;
                }
                '{' => {
                    it.next();
                    self.generic_skip_until_after(it, '}');
                    break;
                }
                _ => self.generic_skip(it),
            }
        }
    }

    /// Skip a stack-matched `( [ {` region, and `<` when asked.
    ///
    /// Comments and strings inside are skipped whole. An unclosed region runs to the end.
    fn try_to_skip_block(&self, it: &mut Cursor<'_>, include_angle_brackets: bool) -> bool {
        let opens = |c: char| matches!(c, '(' | '[' | '{') || (c == '<' && include_angle_brackets);
        if !opens(it.character()) {
            return false;
        }

        let mut stack = vec![it.character()];
        it.next();
        while it.is_in_bounds() {
            let c = it.character();
            if opens(c) {
                stack.push(c);
                it.next();
            } else if stack.last().is_some_and(|&open| closes(open, c)) {
                stack.pop();
                it.next();
                if stack.is_empty() {
                    break;
                }
            } else if !(self.try_to_skip_comment(it, ParseMode::IterateOnly)
                || self.try_to_skip_string(it, ParseMode::IterateOnly))
            {
                it.next();
            }
        }
        true
    }

    /// Skip an identifier-like word for the prototype word counter.
    ///
    /// Accepts qualifiers, pointer and reference symbols, template blocks,
    /// array suffixes and trailing `*`, `&`, `^` or `const` after whitespace.
    fn try_to_skip_type_or_var_name<'a>(&self, it: &mut Cursor<'a>, limit: &Cursor<'a>) -> bool {
        if *it >= *limit || !(it.fundamental() == FundamentalKind::Text || is_word_start(it.character())) {
            return false;
        }

        it.next();
        while *it < *limit {
            let c = it.character();
            if it.fundamental() == FundamentalKind::Text || is_word_start(c) || c == '.' || c == '?' {
                it.next();
            } else if it.matches_across_tokens("::", false) {
                it.next_n(2);
            } else if c == '<' {
                let mut before = *it;
                before.previous_past_whitespace();
                if self.matches_keyword(&before, "operator") || !self.try_to_skip_block(it, true) {
                    it.next();
                    while it.character() == '<' {
                        it.next();
                    }
                }
            } else if matches!(c, '(' | '[' | '{') {
                self.try_to_skip_block(it, false);
            } else if it.fundamental() == FundamentalKind::Whitespace {
                let mut lookahead = *it;
                lookahead.next_past_whitespace();
                while lookahead < *limit {
                    let accepted = if matches!(lookahead.character(), '*' | '&' | '^') {
                        lookahead.next();
                        true
                    } else if self.matches_keyword(&lookahead, "const") {
                        lookahead.next();
                        lookahead.character() != '_'
                    } else {
                        false
                    };
                    if !accepted {
                        break;
                    }
                    *it = lookahead;
                    lookahead.next_past_whitespace();
                }
                break;
            } else {
                break;
            }
        }
        true
    }

    // =========================================================================
    // NORMALIZATION
    // =========================================================================

    /// Collapse whitespace, line breaks and comments into single spaces.
    ///
    /// Strings are kept verbatim and trailing space is removed.
    fn normalize_prototype(&self, text: &str) -> String {
        let buffer = TokenBuffer::new(text);
        let mut output = String::with_capacity(text.len());
        let mut last_was_whitespace = true;

        let mut it = buffer.first();
        while it.is_in_bounds() {
            if matches!(
                it.fundamental(),
                FundamentalKind::Whitespace | FundamentalKind::LineBreak
            ) {
                push_space(&mut output, &mut last_was_whitespace);
                it.next();
            } else if let Some(extender) = self
                .syntax()
                .line_extender
                .as_ref()
                .filter(|extender| it.matches_across_tokens(extender, false))
            {
                if extender == "_" && is_inside_identifier(&it) {
                    output.push_str(it.text());
                    last_was_whitespace = false;
                } else {
                    push_space(&mut output, &mut last_was_whitespace);
                }
                it.next_by_characters(extender.len());
            } else if self.try_to_skip_comment(&mut it, ParseMode::IterateOnly) {
                push_space(&mut output, &mut last_was_whitespace);
            } else {
                let start = it;
                if !self.try_to_skip_string(&mut it, ParseMode::IterateOnly) {
                    it.next();
                }
                output.push_str(start.text_to(&it));
                last_was_whitespace = false;
            }
        }

        output.truncate(output.trim_end().len());
        output
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn push_space(output: &mut String, last_was_whitespace: &mut bool) {
    if !*last_was_whitespace {
        output.push(' ');
        *last_was_whitespace = true;
    }
}

fn closes(open: char, close: char) -> bool {
    matches!((open, close), ('(', ')') | ('[', ']') | ('{', '}') | ('<', '>'))
}

fn is_word_start(c: char) -> bool {
    matches!(c, '_' | '*' | '&' | '^' | '$' | '@' | '%')
}

/// Whether the previous non-whitespace token is part of an identifier, so a
/// following `-` is an operator rather than a sign
pub(crate) fn follows_identifier(it: &Cursor<'_>) -> bool {
    let mut lookbehind = *it;
    lookbehind.previous_past_whitespace();
    lookbehind != *it
        && (lookbehind.fundamental() == FundamentalKind::Text || lookbehind.character() == '_')
}

fn is_inside_identifier(it: &Cursor<'_>) -> bool {
    let is_identifier = |c: &Cursor<'_>| c.fundamental() == FundamentalKind::Text || c.character() == '_';
    let mut before = *it;
    before.previous();
    let mut after = *it;
    after.next();
    (before != *it && is_identifier(&before)) || is_identifier(&after)
}

/// Write the annotation a comment gets in `mode`
fn mark_comment(
    start: &Cursor<'_>,
    content: &Cursor<'_>,
    content_end: &Cursor<'_>,
    end: &Cursor<'_>,
    mode: ParseMode,
) {
    let buffer = start.buffer();
    match mode {
        ParseMode::SyntaxHighlight => {
            buffer.set_highlight_between(start, end, Some(HighlightKind::Comment));
        }
        ParseMode::ParsePrototype => {
            buffer.set_comment_role_between(start, content, Some(CommentRole::CommentSymbol));
            buffer.set_comment_role_between(content, content_end, Some(CommentRole::CommentContent));
            buffer.set_comment_role_between(content_end, end, Some(CommentRole::CommentSymbol));
        }
        ParseMode::IterateOnly | ParseMode::CreateElements => {}
    }
}
