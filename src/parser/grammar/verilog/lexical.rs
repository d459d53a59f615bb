use super::*;
use crate::parser::primitives::follows_identifier;

// =============================================================================
// Lexical overrides: strings, numbers, identifiers
// =============================================================================

impl SystemVerilog {
    /// `"` strings with backslash escapes. `'` starts a based literal, not a string.
    pub(super) fn try_to_skip_verilog_string(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if it.character() != '"' {
            return false;
        }

        let mut lookahead = *it;
        lookahead.next();
        while lookahead.is_in_bounds() {
            match lookahead.character() {
                '\\' => lookahead.next_n(2),
                '"' => {
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

    /// Sized, based, real and time literals: `42`, `1_000`, `3.5e-2`, `8'hFF`,
    /// `4 'b10xz`, `'1`, `10ns`
    pub(super) fn try_to_skip_verilog_number(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        let first = it.character();
        if !(first.is_ascii_digit() || matches!(first, '-' | '+' | '\'')) {
            return false;
        }
        let Some(end) = number_end(it) else {
            return false;
        };

        if mode.is_highlight() {
            it.set_highlight_to(&end, HighlightKind::Number);
        }
        *it = end;
        true
    }

    /// Simple identifiers start with a letter or `_` and continue with letters,
    /// digits, `_` and `$`. Escaped identifiers run from `\` to whitespace.
    pub(super) fn try_to_skip_identifier(&self, it: &mut Cursor<'_>) -> bool {
        let mut lookahead = *it;
        if lookahead.character() == '\\' {
            lookahead.next();
            let start = lookahead;
            while matches!(lookahead.fundamental(), FundamentalKind::Text | FundamentalKind::Symbol) {
                lookahead.next();
            }
            if lookahead == start {
                return false;
            }
        } else {
            let first = lookahead.character();
            let starts = first == '_'
                || (lookahead.fundamental() == FundamentalKind::Text && !first.is_ascii_digit());
            if !starts {
                return false;
            }
            while lookahead.fundamental() == FundamentalKind::Text
                || matches!(lookahead.character(), '_' | '$')
            {
                lookahead.next();
            }
        }
        *it = lookahead;
        true
    }

    /// Identifier text at the cursor, advancing past it
    pub(super) fn skip_identifier_text<'a>(&self, it: &mut Cursor<'a>) -> Option<&'a str> {
        let start = *it;
        self.try_to_skip_identifier(it).then(|| start.text_to(it))
    }

    /// The identifier at the cursor and the position after it, without moving
    pub(super) fn word_at<'a>(&self, it: &Cursor<'a>) -> Option<(&'a str, Cursor<'a>)> {
        let mut end = *it;
        self.skip_identifier_text(&mut end).map(|word| (word, end))
    }

    /// Whether the cursor is on exactly the word `keyword`
    pub(super) fn at_word(&self, it: &Cursor<'_>, keyword: &str) -> bool {
        self.word_at(it).is_some_and(|(word, _)| word == keyword)
    }

    // =========================================================================
    // ATTRIBUTES AND DIRECTIVES
    // =========================================================================

    /// Attribute instances `(* name = value, flag *)`.
    ///
    /// Prototype mode brackets the instance like a parameter list and marks
    /// each attribute's name and value; highlighting marks it all as metadata.
    pub(super) fn try_to_skip_attributes(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if !it.matches_across_tokens("(*", false) {
            return false;
        }

        let mut lookahead = *it;
        if mode.is_prototype() {
            lookahead.set_prototype_role_by_characters(PrototypeRole::StartOfParams, 2);
        }
        lookahead.next_by_characters(2);

        loop {
            if !lookahead.is_in_bounds() {
                return reject(it, &lookahead, mode);
            }
            if lookahead.matches_across_tokens("*)", false) {
                if mode.is_prototype() {
                    lookahead.set_prototype_role_by_characters(PrototypeRole::EndOfParams, 2);
                }
                lookahead.next_by_characters(2);
                break;
            }
            match lookahead.character() {
                '=' => {
                    if mode.is_prototype() {
                        lookahead.set_prototype_role(PrototypeRole::PropertyValueSeparator);
                    }
                    lookahead.next();
                }
                ',' => {
                    if mode.is_prototype() {
                        lookahead.set_prototype_role(PrototypeRole::ParamSeparator);
                    }
                    lookahead.next();
                }
                // `@(*)` and similar
                ')' => return reject(it, &lookahead, mode),
                _ => self.generic_skip(&mut lookahead),
            }
        }

        if mode.is_prototype() {
            let mut role = PrototypeRole::Name;
            let mut token = *it;
            while token < lookahead {
                match token.prototype_role() {
                    Some(PrototypeRole::PropertyValueSeparator) => role = PrototypeRole::PropertyValue,
                    Some(PrototypeRole::ParamSeparator) => role = PrototypeRole::Name,
                    Some(_) => {}
                    None if matches!(
                        token.fundamental(),
                        FundamentalKind::Whitespace | FundamentalKind::LineBreak
                    ) => {}
                    None => token.set_prototype_role(role),
                }
                token.next();
            }
        } else if mode.is_highlight() {
            it.set_highlight_to(&lookahead, HighlightKind::Metadata);
        }

        *it = lookahead;
        true
    }

    /// `` `define `` and the other directives, through the end of the line.
    /// A `` `define `` body continues past lines ending in `\`.
    pub(super) fn try_to_skip_compiler_directive(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if it.character() != '`' {
            return false;
        }
        let mut lookahead = *it;
        lookahead.next();
        let Some((directive, _)) = self.word_at(&lookahead) else {
            return false;
        };
        if !DIRECTIVES.contains(directive) {
            return false;
        }

        let continues = directive == "define";
        while lookahead.is_in_bounds() {
            if lookahead.fundamental() == FundamentalKind::LineBreak {
                let mut before = lookahead;
                before.previous();
                if !(continues && before.character() == '\\') {
                    break;
                }
            } else if lookahead.matches_across_tokens("//", false) {
                break;
            }
            lookahead.next();
        }

        if mode.is_highlight() {
            it.set_highlight_to(&lookahead, HighlightKind::PreprocessingDirective);
        }
        trace!("[VERILOG] directive `{} at line {}", directive, it.line());
        *it = lookahead;
        true
    }

    /// `` `name `` or `` `name(args) `` for a user macro
    pub(super) fn try_to_skip_macro_invocation(&self, it: &mut Cursor<'_>) -> bool {
        if it.character() != '`' {
            return false;
        }
        let mut lookahead = *it;
        lookahead.next();
        match self.skip_identifier_text(&mut lookahead) {
            Some(name) if !DIRECTIVES.contains(name) => {}
            _ => return false,
        }
        if lookahead.character() == '(' {
            self.generic_skip(&mut lookahead);
        }
        *it = lookahead;
        true
    }

    /// `: label` after a closing keyword
    pub(super) fn try_to_skip_end_label(&self, it: &mut Cursor<'_>) -> bool {
        let mut lookahead = *it;
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        if lookahead.character() != ':' || lookahead.matches_across_tokens("::", false) {
            return false;
        }
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        if !self.try_to_skip_identifier(&mut lookahead) {
            return false;
        }
        *it = lookahead;
        true
    }
}

// =============================================================================
// Number scanning
// =============================================================================

/// End of the literal starting at `start`, if there is one
fn number_end<'a>(start: &Cursor<'a>) -> Option<Cursor<'a>> {
    let mut lookahead = *start;
    if matches!(lookahead.character(), '-' | '+') {
        if follows_identifier(start) {
            return None;
        }
        lookahead.next();
    }

    let mut end = None;
    if lookahead.character().is_ascii_digit() {
        skip_digits(&mut lookahead);
        end = Some(lookahead);

        if lookahead.character() == '.' {
            let mut fraction = lookahead;
            fraction.next();
            if !fraction.character().is_ascii_digit() {
                return end;
            }
            skip_digits(&mut fraction);
            lookahead = fraction;
            end = Some(lookahead);
        }

        // the sign of `1e-3` is a separate token
        if matches!(lookahead.character(), '-' | '+') {
            let mut before = lookahead;
            before.previous();
            if !before.text().ends_with(['e', 'E']) {
                return end;
            }
            let mut exponent = lookahead;
            exponent.next();
            if !exponent.character().is_ascii_digit() {
                return end;
            }
            skip_digits(&mut exponent);
            lookahead = exponent;
            end = Some(lookahead);
        }

        // a size may be separated from its base
        lookahead.next_past_whitespace();
    }

    if lookahead.character() == '\'' {
        let mut based = lookahead;
        based.next();
        if !skip_based_value(&mut based) {
            return end;
        }
        lookahead = based;
        end = Some(lookahead);
    }

    let value_end = end?;
    let mut unit = value_end;
    unit.next_past_whitespace();
    if TIME_UNITS.iter().any(|time_unit| unit.matches_token(time_unit, false)) {
        unit.next();
        return Some(unit);
    }
    Some(value_end)
}

/// Digits with `_` separators; letters are taken along for suffixes like `10ns`
fn skip_digits(it: &mut Cursor<'_>) {
    while it.fundamental() == FundamentalKind::Text || it.character() == '_' {
        it.next();
    }
}

/// The part after `'`: an unsized `0 1 x z`, or `[s]base digits`
fn skip_based_value(it: &mut Cursor<'_>) -> bool {
    let token = it.text();
    if token.len() == 1 && matches!(it.character(), '0' | '1' | 'x' | 'X' | 'z' | 'Z') {
        it.next();
        return true;
    }
    if it.fundamental() != FundamentalKind::Text {
        return false;
    }

    let signed = token.starts_with(['s', 'S']) && token.len() > 1;
    let base_index = usize::from(signed);
    let base = token[base_index..].chars().next();
    if !matches!(base, Some('d' | 'D' | 'h' | 'H' | 'b' | 'B' | 'o' | 'O')) {
        return false;
    }
    let base_only = token.len() == base_index + 1;
    it.next();

    if base_only {
        it.next_past_whitespace();
        if !is_based_digit(it.character()) {
            return false;
        }
        it.next();
    }
    while is_based_digit(it.character()) || it.character() == '_' {
        it.next();
    }
    true
}

fn is_based_digit(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c, 'x' | 'X' | 'z' | 'Z' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> SystemVerilog {
        SystemVerilog::new(Arc::new(crate::hir::KeywordTable::standard()))
    }

    fn number_text(text: &str) -> Option<String> {
        let buffer = TokenBuffer::new(text);
        let mut it = buffer.first();
        grammar()
            .try_to_skip_verilog_number(&mut it, ParseMode::IterateOnly)
            .then(|| buffer.first().text_to(&it).to_string())
    }

    #[test]
    fn test_sized_and_based_numbers() {
        assert_eq!(number_text("8'hFF;").as_deref(), Some("8'hFF"));
        assert_eq!(number_text("4 'b10xz)").as_deref(), Some("4 'b10xz"));
        assert_eq!(number_text("16'sd 42,").as_deref(), Some("16'sd 42"));
        assert_eq!(number_text("'1;").as_deref(), Some("'1"));
        assert_eq!(number_text("1_000 ").as_deref(), Some("1_000"));
    }

    #[test]
    fn test_real_and_time_numbers() {
        assert_eq!(number_text("3.5e-2;").as_deref(), Some("3.5e-2"));
        assert_eq!(number_text("10 ns;").as_deref(), Some("10 ns"));
        assert_eq!(number_text("1.5;").as_deref(), Some("1.5"));
    }

    #[test]
    fn test_not_numbers() {
        assert_eq!(number_text("'q"), None);
        assert_eq!(number_text("-x"), None);
    }

    #[test]
    fn test_escaped_identifier_runs_to_whitespace() {
        let buffer = TokenBuffer::new("\\bus[0] x");
        let mut it = buffer.first();
        assert!(grammar().try_to_skip_identifier(&mut it));
        assert_eq!(buffer.first().text_to(&it), "\\bus[0]");
    }

    #[test]
    fn test_identifier_with_dollar() {
        let buffer = TokenBuffer::new("data_out$1 ");
        let mut it = buffer.first();
        assert_eq!(grammar().skip_identifier_text(&mut it), Some("data_out$1"));
    }
}
