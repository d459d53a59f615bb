use super::*;
use crate::parser::primitives::follows_identifier;

// =============================================================================
// Lexical overrides: directives, strings, numbers
// =============================================================================

impl CSharp {
    /// `#` as the first non-whitespace on its line, through the line break or a `//` comment
    pub(super) fn try_to_skip_preprocessing_directive(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
    ) -> bool {
        if it.character() != '#' {
            return false;
        }

        if !starts_line(it) {
            return false;
        }

        let start = *it;
        let mut lookahead = *it;
        loop {
            lookahead.next();
            if !lookahead.is_in_bounds()
                || lookahead.fundamental() == FundamentalKind::LineBreak
                || lookahead.matches_across_tokens("//", false)
            {
                break;
            }
        }

        if mode.is_highlight() {
            start.set_highlight_to(&lookahead, HighlightKind::PreprocessingDirective);
        }
        *it = lookahead;
        true
    }

    /// Regular, verbatim `@"..."` and interpolated `$"..."` strings and char literals.
    ///
    /// Verbatim strings escape quotes by doubling them, interpolated strings
    /// skip `{...}` holes and `{{` escapes. Unterminated strings run to the end.
    pub(super) fn try_to_skip_csharp_string(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if !matches!(it.character(), '\'' | '"' | '@' | '$') {
            return false;
        }

        let mut lookahead = *it;
        let (interpolated, verbatim) =
            if lookahead.matches_across_tokens("$@", false) || lookahead.matches_across_tokens("@$", false) {
                lookahead.next_n(2);
                (true, true)
            } else if lookahead.character() == '@' {
                lookahead.next();
                (false, true)
            } else if lookahead.character() == '$' {
                lookahead.next();
                (true, false)
            } else {
                (false, false)
            };

        let closing = lookahead.character();
        if closing != '"' && closing != '\'' {
            return false;
        }
        lookahead.next();

        while lookahead.is_in_bounds() {
            if (verbatim && lookahead.matches_across_tokens("\"\"", false))
                || (!verbatim && lookahead.character() == '\\')
                || (interpolated && lookahead.matches_across_tokens("{{", false))
            {
                lookahead.next_n(2);
            } else if interpolated && lookahead.character() == '{' {
                lookahead.next();
                self.generic_skip_until_after(&mut lookahead, '}');
            } else if lookahead.character() == closing {
                lookahead.next();
                break;
            } else {
                lookahead.next();
            }
        }

        if mode.is_highlight() {
            it.set_highlight_to(&lookahead, HighlightKind::String);
        }
        *it = lookahead;
        true
    }

    /// Numbers with `_` separators, `0x`/`0b` prefixes, fractions, exponents and type suffixes.
    ///
    /// The lexer keeps letters and digits together, so suffixes like `UL` and
    /// hex digits arrive in the same token as the digits before them.
    pub(super) fn try_to_skip_csharp_number(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        let first = it.character();
        if !(first.is_ascii_digit() || matches!(first, '-' | '+' | '.')) {
            return false;
        }

        let mut lookahead = *it;
        if matches!(first, '-' | '+') {
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
        let is_prefixed = digits.len() > 1
            && digits.starts_with('0')
            && matches!(digits.as_bytes()[1], b'x' | b'X' | b'b' | b'B');
        lookahead.next();
        skip_digit_groups(&mut lookahead);
        let mut end = lookahead;
        let mut last_was_e = ends_with_e(&end);

        if lookahead.character() == '.' && !passed_period && !is_prefixed {
            let mut fraction = lookahead;
            fraction.next();
            if fraction.character().is_ascii_digit() {
                fraction.next();
                skip_digit_groups(&mut fraction);
                end = fraction;
                lookahead = fraction;
                last_was_e = ends_with_e(&end);
            }
        }

        if last_was_e && !is_prefixed && matches!(lookahead.character(), '-' | '+') {
            let mut exponent = lookahead;
            exponent.next();
            if exponent.character().is_ascii_digit() {
                exponent.next();
                skip_digit_groups(&mut exponent);
                end = exponent;
            }
        }

        if mode.is_highlight() {
            it.set_highlight_to(&end, HighlightKind::Number);
        }
        *it = end;
        true
    }
}

/// `_1_000` continuation groups after the first digit token
fn skip_digit_groups(it: &mut Cursor<'_>) {
    while it.fundamental() == FundamentalKind::Text || it.character() == '_' {
        it.next();
    }
}

fn ends_with_e(end: &Cursor<'_>) -> bool {
    let mut last = *end;
    last.previous();
    last.text().ends_with(['e', 'E'])
}

/// Whether only whitespace separates the cursor from the previous line break or the text start
fn starts_line(it: &Cursor<'_>) -> bool {
    let mut lookbehind = *it;
    while lookbehind.index() > 0 {
        lookbehind.previous();
        match lookbehind.fundamental() {
            FundamentalKind::Whitespace => {}
            FundamentalKind::LineBreak => return true,
            _ => return false,
        }
    }
    true
}
