use super::*;

/// One piece of a declaration before its terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    /// An identifier, keyword or macro invocation, with any `::` scope,
    /// `.modport` or `#(...)` parameters attached
    Word,
    /// `[...]`
    Dimension,
    /// `{...}`, an enum or struct body
    Body,
    /// `(* ... *)`
    Attribute,
}

// =============================================================================
// Typed names
// =============================================================================

impl SystemVerilog {
    /// `[modifiers] [type] [dimensions] name [dimensions]` up to `=` or one of `stops`.
    ///
    /// Every part but the name is optional, so `signed x`, `[7:0] x` and a lone
    /// `x` are all valid. The words are counted first without annotating
    /// anything; the second walk knows which word is the name. Returns the
    /// name's start and text.
    pub(super) fn skip_typed_name<'a>(
        &self,
        it: &mut Cursor<'a>,
        mode: ParseMode,
        stops: &[char],
    ) -> Option<(Cursor<'a>, &'a str)> {
        let count = self.count_words(it, stops)?;
        if count == 0 {
            return None;
        }

        let mut lookahead = *it;
        let mut words = 0;
        let mut name = None;
        loop {
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            if at_stop(&lookahead, stops) {
                break;
            }
            let start = lookahead;
            let part = self.skip_declaration_part(&mut lookahead)?;
            match part {
                Part::Word => {
                    words += 1;
                    if words == count {
                        name = Some((start, start.text_to(&lookahead)));
                    }
                }
                Part::Dimension | Part::Body | Part::Attribute => {}
            }
            if mode.is_prototype() {
                let role = match part {
                    Part::Word if words == count => Some(PrototypeRole::Name),
                    Part::Word if is_modifier(start.text_to(&lookahead)) => Some(PrototypeRole::TypeModifier),
                    Part::Word | Part::Body => Some(PrototypeRole::Type),
                    Part::Dimension if words == count => Some(PrototypeRole::NameSuffixPartOfType),
                    Part::Dimension => Some(PrototypeRole::TypeModifier),
                    Part::Attribute => None,
                };
                if let Some(role) = role {
                    start.set_prototype_role_to(&lookahead, role);
                }
            }
        }

        *it = lookahead;
        name
    }

    /// Words before the terminator, or `None` if something else is in the way
    fn count_words(&self, it: &Cursor<'_>, stops: &[char]) -> Option<usize> {
        let mut lookahead = *it;
        let mut count = 0;
        loop {
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            if at_stop(&lookahead, stops) {
                return Some(count);
            }
            if self.skip_declaration_part(&mut lookahead)? == Part::Word {
                count += 1;
            }
        }
    }

    fn skip_declaration_part(&self, it: &mut Cursor<'_>) -> Option<Part> {
        if self.try_to_skip_attributes(it, ParseMode::IterateOnly) {
            return Some(Part::Attribute);
        }
        match it.character() {
            '[' => {
                self.generic_skip(it);
                Some(Part::Dimension)
            }
            '{' => {
                self.generic_skip(it);
                Some(Part::Body)
            }
            '`' => self.try_to_skip_macro_invocation(it).then_some(Part::Word),
            _ => {
                if !self.try_to_skip_identifier(it) {
                    return None;
                }
                loop {
                    let mut member = *it;
                    if member.matches_across_tokens("::", false) {
                        member.next_n(2);
                    } else if member.character() == '.' {
                        member.next();
                    } else {
                        break;
                    }
                    if !self.try_to_skip_identifier(&mut member) {
                        break;
                    }
                    *it = member;
                }
                let mut parameters = *it;
                self.try_to_skip_whitespace(&mut parameters, ParseMode::IterateOnly);
                if parameters.character() == '#' {
                    parameters.next();
                    self.try_to_skip_whitespace(&mut parameters, ParseMode::IterateOnly);
                    if parameters.character() == '(' {
                        self.generic_skip(&mut parameters);
                        *it = parameters;
                    }
                }
                Some(Part::Word)
            }
        }
    }

    // =========================================================================
    // PORTS
    // =========================================================================

    /// `#(parameter W = 8, type T = logic)`, a prototype section of its own
    pub(super) fn try_to_skip_parameter_ports(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if it.character() != '#' {
            return false;
        }
        let mut lookahead = *it;
        if mode.is_prototype() {
            lookahead.set_prototype_role(PrototypeRole::StartOfPrototypeSection);
        }
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        if !self.try_to_skip_port_list(&mut lookahead, mode) {
            return reject(it, &lookahead, mode);
        }
        *it = lookahead;
        true
    }

    /// `(port, port, ...)`. A port that is not a typed name, like a
    /// non-ANSI `.a(x)`, is stepped over without annotations.
    pub(super) fn try_to_skip_port_list(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if it.character() != '(' {
            return false;
        }
        let mut lookahead = *it;
        if mode.is_prototype() {
            lookahead.set_prototype_role(PrototypeRole::StartOfParams);
        }
        lookahead.next();

        loop {
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            match lookahead.character() {
                ')' => {
                    if mode.is_prototype() {
                        lookahead.set_prototype_role(PrototypeRole::EndOfParams);
                    }
                    lookahead.next();
                    break;
                }
                ',' => {
                    if mode.is_prototype() {
                        lookahead.set_prototype_role(PrototypeRole::ParamSeparator);
                    }
                    lookahead.next();
                }
                _ if !lookahead.is_in_bounds() => return reject(it, &lookahead, mode),
                _ => {
                    if !self.try_to_skip_port(&mut lookahead, mode) {
                        while lookahead.is_in_bounds() && !matches!(lookahead.character(), ',' | ')') {
                            self.generic_skip(&mut lookahead);
                        }
                    }
                }
            }
        }

        *it = lookahead;
        true
    }

    /// `[attributes] [direction] [type] name [dimensions] [= default]`
    fn try_to_skip_port(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        let mut lookahead = *it;
        if self.skip_typed_name(&mut lookahead, mode, &[',', ')']).is_none() {
            return reject(it, &lookahead, mode);
        }

        if lookahead.character() == '=' {
            if mode.is_prototype() {
                lookahead.set_prototype_role(PrototypeRole::DefaultValueSeparator);
            }
            lookahead.next();
            let value_start = lookahead;
            while lookahead.is_in_bounds() && !matches!(lookahead.character(), ',' | ')') {
                self.generic_skip(&mut lookahead);
            }
            if mode.is_prototype() {
                mark_trimmed(&value_start, &lookahead, PrototypeRole::DefaultValue);
            }
        }

        if !matches!(lookahead.character(), ',' | ')') {
            return reject(it, &lookahead, mode);
        }
        *it = lookahead;
        true
    }

    // =========================================================================
    // DATA DECLARATIONS
    // =========================================================================

    /// Nets, variables, parameters and typedefs, with extra declarators after `,`.
    ///
    /// A declaration that starts with a user type needs a second word, so
    /// statements like `a = b;` and instantiations like `sub u1 (...)` do not match.
    pub(super) fn try_to_skip_data_declaration(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        let Some((first, _)) = self.word_at(&lookahead) else {
            return false;
        };

        let keyword = match first {
            "typedef" => "type",
            "parameter" | "localparam" | "specparam" => "constant",
            _ if DATA_TYPES.contains(&first) || DECLARATION_MODIFIERS.contains(&first) => "variable",
            _ if KEYWORDS.contains(first) => return false,
            _ => {
                if self.count_words(&lookahead, &[',', ';']).is_none_or(|count| count < 2) {
                    return false;
                }
                "variable"
            }
        };

        let is_typedef = keyword == "type";
        if is_typedef {
            if mode.is_prototype() {
                lookahead.set_prototype_role(PrototypeRole::TypeModifier);
            }
            lookahead.next();
        }
        let type_start = lookahead;

        let Some((name_start, name)) = self.skip_typed_name(&mut lookahead, mode, &[',', ';']) else {
            return reject(it, &lookahead, mode);
        };
        // `typedef class C;` only forward-declares
        let is_forward = is_typedef
            && match self.word_at(&self.after_whitespace(&type_start)) {
                Some(("class", _)) => true,
                Some(("interface", after)) => self.at_word(&self.after_whitespace(&after), "class"),
                _ => false,
            };
        let end_of_prototype = lookahead;

        let mut declarators = vec![(name_start, name)];
        loop {
            if lookahead.character() == '=' {
                if mode.is_prototype() {
                    lookahead.set_prototype_role(PrototypeRole::DefaultValueSeparator);
                }
                lookahead.next();
                let value_start = lookahead;
                while lookahead.is_in_bounds() && !matches!(lookahead.character(), ',' | ';') {
                    self.generic_skip(&mut lookahead);
                }
                if mode.is_prototype() {
                    mark_trimmed(&value_start, &lookahead, PrototypeRole::DefaultValue);
                }
            }
            if lookahead.character() != ',' || mode.is_prototype() {
                break;
            }
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            let declarator_start = lookahead;
            let Some(extra) = self.skip_identifier_text(&mut lookahead) else {
                return reject(it, &lookahead, mode);
            };
            declarators.push((declarator_start, extra));
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            while lookahead.character() == '[' {
                self.generic_skip(&mut lookahead);
                self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            }
        }

        if lookahead.is_in_bounds() && lookahead.character() != ';' && !mode.is_prototype() {
            return reject(it, &lookahead, mode);
        }

        if mode.creates_elements() && !is_forward {
            let type_text = start.text_to(&name_start).trim_end();
            for (index, (position, declared)) in declarators.iter().enumerate() {
                let symbol = scope + &SymbolPath::from_text(declared);
                let Some(topic) = self.topic(keyword, *declared, symbol, position) else {
                    break;
                };
                let prototype = if index == 0 {
                    self.normalize_prototype(start.text_to(&end_of_prototype))
                } else {
                    self.normalize_prototype(&format!("{type_text} {declared}"))
                };
                elements.push(Element::new(position.position()).with_topic(topic.with_prototype(prototype)));
            }
        }

        if lookahead.character() == ';' {
            lookahead.next();
        }
        *it = lookahead;
        true
    }

    /// The cursor moved past whitespace and comments
    pub(super) fn after_whitespace<'a>(&self, it: &Cursor<'a>) -> Cursor<'a> {
        let mut lookahead = *it;
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        lookahead
    }
}

/// Whether a declaration part list ends at the cursor
fn at_stop(it: &Cursor<'_>, stops: &[char]) -> bool {
    !it.is_in_bounds() || it.character() == '=' || stops.contains(&it.character())
}
