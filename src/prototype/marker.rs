//! Language-independent prototype marking
//!
//! Used when a grammar has no dedicated matcher for a prototype's kind. The
//! marker finds the parameter list, then classifies words right to left:
//! `[modifier]* type name` for C style, `[modifier]* name: [modifier]* type`
//! for Pascal style. Each classification counts words in a first pass
//! without writing anything, then commits roles in a second pass.

use crate::parser::{BaseGrammar, Cursor, FundamentalKind, ParseMode, PrototypeRole, TokenBuffer};

use super::parsed::{ParameterStyle, ParsedPrototype};

/// Mark a whole prototype buffer and return the parameter style it uses
pub fn mark_prototype<G: BaseGrammar + ?Sized>(grammar: &G, buffer: &TokenBuffer) -> ParameterStyle {
    Marker { grammar }.mark(buffer)
}

/// Tokenize, mark and snapshot a prototype in one step
pub fn parse_generic_prototype<G: BaseGrammar + ?Sized>(grammar: &G, text: &str) -> ParsedPrototype {
    let buffer = TokenBuffer::new(text);
    let style = mark_prototype(grammar, &buffer);
    ParsedPrototype::from_buffer(&buffer, style)
}

struct Marker<'g, G: ?Sized> {
    grammar: &'g G,
}

impl<G: BaseGrammar + ?Sized> Marker<'_, G> {
    fn mark(&self, buffer: &TokenBuffer) -> ParameterStyle {
        let start = buffer.first();
        let end = buffer.end();

        let Some((opening, closing)) = self.find_parameters(start) else {
            let style = self.detect_style(start, end);
            self.mark_parameter(start, end, style);
            return style;
        };
        self.mark_delimiters(opening, closing);

        let interim = ParsedPrototype::from_buffer(buffer, ParameterStyle::C);
        let Some(list) = interim.parameter_list() else {
            return ParameterStyle::C;
        };

        let parameters: Vec<(Cursor<'_>, Cursor<'_>)> = list
            .parameters
            .iter()
            .map(|range| (buffer.cursor_at(range.start), buffer.cursor_at(range.end)))
            .collect();
        let style = if parameters
            .iter()
            .any(|(s, e)| self.detect_style(*s, *e) == ParameterStyle::Pascal)
        {
            ParameterStyle::Pascal
        } else {
            ParameterStyle::C
        };
        for (parameter_start, parameter_end) in &parameters {
            self.mark_parameter(*parameter_start, *parameter_end, style);
        }

        // A colon right after the parameters introduces a Pascal-style return type.
        let mut after = buffer.cursor_at(list.after.start);
        let after_end = buffer.cursor_at(list.after.end);
        if after.prototype_role() == Some(PrototypeRole::EndOfParams) {
            after.next();
            while after < after_end && after.prototype_role() == Some(PrototypeRole::ClosingExtensionSymbol) {
                after.next();
            }
            skip_whitespace_to(&mut after, &after_end);
        }

        if after < after_end && after.character() == ':' {
            after.next();
            skip_whitespace_to(&mut after, &after_end);
            if after < after_end {
                self.mark_type_and_modifiers(after, after_end);
            }
        } else {
            let before_start = buffer.cursor_at(list.before.start);
            let mut before_end = buffer.cursor_at(list.before.end);
            before_end.previous();
            let before_end = trim_whitespace_end(&before_start, before_end);
            if before_start < before_end {
                self.mark_c_parameter(before_start, before_end);
            }
        }

        style
    }

    fn mark_parameter<'a>(&self, start: Cursor<'a>, end: Cursor<'a>, style: ParameterStyle) {
        match style {
            ParameterStyle::C => self.mark_c_parameter(start, end),
            ParameterStyle::Pascal => self.mark_pascal_parameter(start, end),
        }
    }

    // =========================================================================
    // PARAMETER LIST
    // =========================================================================

    /// The first unenclosed `(`, `{`, or `[` after `this`, with its closer
    fn find_parameters<'a>(&self, start: Cursor<'a>) -> Option<(Cursor<'a>, char)> {
        let mut it = start;
        while it.is_in_bounds() {
            match it.character() {
                '(' => return Some((it, ')')),
                '{' => return Some((it, '}')),
                '[' => {
                    let mut lookbehind = it;
                    lookbehind.previous_past_whitespace();
                    if lookbehind != it && self.grammar.matches_keyword(&lookbehind, "this") {
                        return Some((it, ']'));
                    }
                    it.next();
                }
                _ => {
                    if !(self.grammar.try_to_skip_comment(&mut it, ParseMode::IterateOnly)
                        || self.grammar.try_to_skip_string(&mut it, ParseMode::IterateOnly))
                    {
                        it.next();
                    }
                }
            }
        }
        None
    }

    fn mark_delimiters(&self, opening: Cursor<'_>, closing: char) {
        opening.set_prototype_role(PrototypeRole::StartOfParams);
        let mut it = opening;
        it.next();
        while it.is_in_bounds() {
            match it.character() {
                ',' | ';' => {
                    it.set_prototype_role(PrototypeRole::ParamSeparator);
                    it.next();
                }
                c if c == closing => {
                    it.set_prototype_role(PrototypeRole::EndOfParams);
                    break;
                }
                _ => {
                    // Angle brackets count as a block so `Map<K, V>` keeps its comma.
                    if !(self.grammar.try_to_skip_comment(&mut it, ParseMode::IterateOnly)
                        || self.grammar.try_to_skip_string(&mut it, ParseMode::IterateOnly)
                        || self.grammar.try_to_skip_block(&mut it, true))
                    {
                        it.next();
                    }
                }
            }
        }
    }

    fn detect_style<'a>(&self, start: Cursor<'a>, end: Cursor<'a>) -> ParameterStyle {
        let mut it = start;
        while it < end {
            if it.character() == '=' || it.matches_across_tokens(":=", false) {
                break;
            } else if it.matches_across_tokens("::", false) {
                it.next_n(2);
            } else if it.character() == ':' {
                return ParameterStyle::Pascal;
            } else if self.skip_word(&mut it, &end).is_none() {
                it.next();
            }
        }
        ParameterStyle::C
    }

    // =========================================================================
    // PARAMETERS
    // =========================================================================

    fn mark_c_parameter<'a>(&self, start: Cursor<'a>, end: Cursor<'a>) {
        let mut words = 0usize;
        let mut it = start;
        while it < end {
            if self.try_to_mark_default_value(&mut it, &end) {
                break;
            } else if it.prototype_role() == Some(PrototypeRole::ParamSeparator) {
                break;
            } else if self.skip_word(&mut it, &end).is_some() {
                words += 1;
            } else {
                it.next();
            }
        }

        let mut it = start;
        while it < end {
            if matches!(
                it.prototype_role(),
                Some(PrototypeRole::DefaultValueSeparator | PrototypeRole::ParamSeparator)
            ) {
                break;
            }
            let word_start = it;
            let Some(is_block) = self.skip_word(&mut it, &end) else {
                it.next();
                continue;
            };
            let word_end = it;

            match words {
                0 => {}
                1 => self.mark_name(word_start, word_end),
                2 => {
                    self.mark_type(word_start, word_end);
                    // `int* x` reads as `int *x`: trailing pointer symbols belong to the parameter.
                    let mut lookbehind = word_end;
                    while lookbehind > word_start {
                        let mut previous = lookbehind;
                        previous.previous();
                        match previous.character() {
                            '*' | '&' | '^' => previous.set_prototype_role(PrototypeRole::ParamModifier),
                            _ if is_whitespace(&previous) => {}
                            _ => break,
                        }
                        lookbehind = previous;
                    }
                }
                _ => mark_modifier_word(
                    word_start,
                    word_end,
                    is_block,
                    PrototypeRole::TypeModifier,
                    PrototypeRole::OpeningTypeModifier,
                    PrototypeRole::ClosingTypeModifier,
                ),
            }
            words = words.saturating_sub(1);
        }
    }

    fn mark_pascal_parameter<'a>(&self, start: Cursor<'a>, end: Cursor<'a>) {
        let mut words = 0usize;
        let mut words_before_colon = 0usize;
        let mut it = start;
        while it < end {
            if self.try_to_mark_default_value(&mut it, &end) {
                break;
            } else if it.character() == ':' && !it.matches_across_tokens("::", false) {
                words_before_colon = words;
                it.set_prototype_role(PrototypeRole::NameTypeSeparator);
                it.next();
            } else if it.prototype_role() == Some(PrototypeRole::ParamSeparator) {
                break;
            } else if self.skip_word(&mut it, &end).is_some() {
                words += 1;
            } else {
                it.next();
            }
        }

        let mut words_after_colon = 0;
        if words_before_colon == 0 {
            words_before_colon = words;
        } else {
            words_after_colon = words - words_before_colon;
        }

        // Before the colon: [modifier]* name
        let mut it = start;
        while it < end {
            if matches!(
                it.prototype_role(),
                Some(
                    PrototypeRole::DefaultValueSeparator
                        | PrototypeRole::ParamSeparator
                        | PrototypeRole::NameTypeSeparator
                )
            ) {
                break;
            }
            let word_start = it;
            let Some(is_block) = self.skip_word(&mut it, &end) else {
                it.next();
                continue;
            };
            match words_before_colon {
                0 => {}
                1 => self.mark_name(word_start, it),
                _ => mark_modifier_word(
                    word_start,
                    it,
                    is_block,
                    PrototypeRole::ParamModifier,
                    PrototypeRole::OpeningParamModifier,
                    PrototypeRole::ClosingParamModifier,
                ),
            }
            words_before_colon = words_before_colon.saturating_sub(1);
        }

        // After the colon: [modifier]* type
        if words_after_colon == 0 {
            return;
        }
        while it < end && it.prototype_role() == Some(PrototypeRole::NameTypeSeparator) {
            it.next();
        }
        while it < end {
            if matches!(
                it.prototype_role(),
                Some(PrototypeRole::DefaultValueSeparator | PrototypeRole::ParamSeparator)
            ) {
                break;
            }
            let word_start = it;
            let Some(is_block) = self.skip_word(&mut it, &end) else {
                it.next();
                continue;
            };
            match words_after_colon {
                0 => {}
                1 => self.mark_type(word_start, it),
                _ => mark_modifier_word(
                    word_start,
                    it,
                    is_block,
                    PrototypeRole::TypeModifier,
                    PrototypeRole::OpeningTypeModifier,
                    PrototypeRole::ClosingTypeModifier,
                ),
            }
            words_after_colon = words_after_colon.saturating_sub(1);
        }
    }

    /// Mark `=` or `:=` and the value after it, trimmed of trailing separators
    fn try_to_mark_default_value<'a>(&self, it: &mut Cursor<'a>, end: &Cursor<'a>) -> bool {
        let width = if it.character() == '=' {
            1
        } else if it.matches_across_tokens(":=", false) {
            2
        } else {
            return false;
        };

        let mut value = *it;
        value.next_by_characters(width);
        it.set_prototype_role_to(&value, PrototypeRole::DefaultValueSeparator);
        skip_whitespace_to(&mut value, end);

        let mut value_end = *end;
        while value_end > value {
            let mut previous = value_end;
            previous.previous();
            if previous.prototype_role() != Some(PrototypeRole::ParamSeparator) {
                break;
            }
            value_end = previous;
        }
        let value_end = trim_whitespace_end(&value, value_end);
        if value < value_end {
            value.set_prototype_role_to(&value_end, PrototypeRole::DefaultValue);
        }

        *it = *end;
        true
    }

    // =========================================================================
    // TYPES AND NAMES
    // =========================================================================

    fn mark_type_and_modifiers<'a>(&self, start: Cursor<'a>, end: Cursor<'a>) {
        let words = self.count_words(start, end);
        let mut remaining = words;
        let mut it = start;
        while it < end {
            if matches!(
                it.prototype_role(),
                Some(
                    PrototypeRole::DefaultValueSeparator
                        | PrototypeRole::ParamSeparator
                        | PrototypeRole::NameTypeSeparator
                )
            ) {
                break;
            }
            let word_start = it;
            if self.skip_word(&mut it, &end).is_none() {
                it.next();
                continue;
            }
            match remaining {
                0 => {}
                1 => self.mark_type(word_start, it),
                _ => word_start.set_prototype_role_to(&it, PrototypeRole::TypeModifier),
            }
            remaining = remaining.saturating_sub(1);
        }
    }

    /// Leading symbols, then `Qualifier.` parts, the type itself and any suffix
    fn mark_type<'a>(&self, start: Cursor<'a>, end: Cursor<'a>) {
        let mut start = start;
        while start < end && !is_identifier_part(&start) {
            start.set_prototype_role(PrototypeRole::TypeModifier);
            start.next();
        }

        let mut it = start;
        let mut qualifier_end = start;
        while it < end {
            if it.character() == '.' {
                it.next();
                qualifier_end = it;
            } else if it.matches_across_tokens("::", false) {
                it.next_n(2);
                qualifier_end = it;
            } else if is_identifier_part(&it) {
                it.next();
            } else {
                break;
            }
        }

        if qualifier_end > start {
            start.set_prototype_role_to(&qualifier_end, PrototypeRole::TypeQualifier);
        }
        if it > qualifier_end {
            qualifier_end.set_prototype_role_to(&it, PrototypeRole::Type);
        }
        if it < end {
            self.mark_type_suffix(it, end);
        }
    }

    /// Brackets after a type, searching them for nested types like `List<A, B>`
    fn mark_type_suffix<'a>(&self, start: Cursor<'a>, end: Cursor<'a>) {
        let mut it = start;
        while it < end {
            let opening = it;
            if self.grammar.try_to_skip_block(&mut it, true) {
                clamp(&mut it, &end);
                opening.set_prototype_role(PrototypeRole::OpeningTypeModifier);
                let mut closing = it;
                closing.previous();
                if closing > opening {
                    closing.set_prototype_role(PrototypeRole::ClosingTypeModifier);
                    let mut inner = opening;
                    inner.next();
                    self.mark_type_suffix_parameters(inner, closing);
                }
            } else {
                it.set_prototype_role(PrototypeRole::TypeModifier);
                it.next();
            }
        }
    }

    fn mark_type_suffix_parameters<'a>(&self, start: Cursor<'a>, end: Cursor<'a>) {
        let mut it = start;
        while it < end {
            let mut type_start = it;
            while it < end && !matches!(it.character(), ',' | ';') {
                if self.skip_word(&mut it, &end).is_none() {
                    it.next();
                }
            }
            let type_end = trim_whitespace_end(&type_start, it);
            skip_whitespace_to(&mut type_start, &type_end);
            if type_start < type_end {
                let words = self.count_words(type_start, type_end);
                let mut remaining = words;
                let mut word = type_start;
                while word < type_end {
                    let word_start = word;
                    if self.skip_word(&mut word, &type_end).is_none() {
                        word.next();
                        continue;
                    }
                    match remaining {
                        0 => {}
                        1 => self.mark_type(word_start, word),
                        _ => word_start.set_prototype_role_to(&word, PrototypeRole::TypeModifier),
                    }
                    remaining = remaining.saturating_sub(1);
                }
            }
            it.next();
        }
    }

    /// Leading symbols as modifiers, the qualified name, then trailing modifiers
    fn mark_name<'a>(&self, start: Cursor<'a>, end: Cursor<'a>) {
        let mut it = start;
        while it < end && !is_identifier_part(&it) {
            it.set_prototype_role(PrototypeRole::ParamModifier);
            it.next();
        }

        while it < end {
            if is_identifier_part(&it) || it.character() == '.' {
                it.set_prototype_role(PrototypeRole::Name);
                it.next();
            } else if it.matches_across_tokens("::", false) {
                it.set_prototype_role_by_characters(PrototypeRole::Name, 2);
                it.next_n(2);
            } else {
                break;
            }
        }

        while it < end {
            let mut block_end = it;
            if self.grammar.try_to_skip_block(&mut block_end, true) && block_end <= end {
                it.set_prototype_role(PrototypeRole::OpeningParamModifier);
                let mut closing = block_end;
                closing.previous();
                closing.set_prototype_role(PrototypeRole::ClosingParamModifier);
                it = block_end;
            } else {
                it.set_prototype_role(PrototypeRole::ParamModifier);
                it.next();
            }
        }
    }

    // =========================================================================
    // WORDS
    // =========================================================================

    /// Skip one word, returning whether it was a block, comment or string
    fn skip_word<'a>(&self, it: &mut Cursor<'a>, end: &Cursor<'a>) -> Option<bool> {
        let is_block = if self.grammar.try_to_skip_type_or_var_name(it, end) {
            false
        } else if self.grammar.try_to_skip_comment(it, ParseMode::IterateOnly)
            || self.grammar.try_to_skip_string(it, ParseMode::IterateOnly)
            || self.grammar.try_to_skip_block(it, true)
        {
            true
        } else {
            return None;
        };
        clamp(it, end);
        Some(is_block)
    }

    fn count_words<'a>(&self, start: Cursor<'a>, end: Cursor<'a>) -> usize {
        let mut words = 0;
        let mut it = start;
        while it < end {
            if self.skip_word(&mut it, &end).is_some() {
                words += 1;
            } else {
                it.next();
            }
        }
        words
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// A modifier word: bracketed words mark only their brackets
fn mark_modifier_word<'a>(
    start: Cursor<'a>,
    end: Cursor<'a>,
    is_block: bool,
    plain: PrototypeRole,
    opening: PrototypeRole,
    closing: PrototypeRole,
) {
    if is_block && end.index() - start.index() >= 2 {
        start.set_prototype_role(opening);
        let mut last = end;
        last.previous();
        last.set_prototype_role(closing);
    } else {
        start.set_prototype_role_to(&end, plain);
    }
}

fn is_whitespace(it: &Cursor<'_>) -> bool {
    matches!(it.fundamental(), FundamentalKind::Whitespace | FundamentalKind::LineBreak)
}

fn is_identifier_part(it: &Cursor<'_>) -> bool {
    it.fundamental() == FundamentalKind::Text || it.character() == '_'
}

fn clamp<'a>(it: &mut Cursor<'a>, end: &Cursor<'a>) {
    if *it > *end {
        *it = *end;
    }
}

fn skip_whitespace_to<'a>(it: &mut Cursor<'a>, end: &Cursor<'a>) {
    while *it < *end && is_whitespace(it) {
        it.next();
    }
}

fn trim_whitespace_end<'a>(start: &Cursor<'a>, end: Cursor<'a>) -> Cursor<'a> {
    let mut end = end;
    while end > *start {
        let mut previous = end;
        previous.previous();
        if !is_whitespace(&previous) {
            break;
        }
        end = previous;
    }
    end
}
