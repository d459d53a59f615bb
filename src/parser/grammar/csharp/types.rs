use super::*;

// =============================================================================
// Identifiers, types and parameter lists
// =============================================================================

impl CSharp {
    /// A word starting with a letter, `_` or `@`, without qualifiers
    pub(super) fn try_to_skip_unqualified_identifier(&self, it: &mut Cursor<'_>) -> bool {
        let mut lookahead = *it;
        if lookahead.character() == '@' {
            lookahead.next();
        }
        let starts = match lookahead.fundamental() {
            FundamentalKind::Text => unicode_ident::is_xid_start(lookahead.character()),
            FundamentalKind::Symbol => lookahead.character() == '_',
            _ => false,
        };
        if !starts {
            return false;
        }
        loop {
            lookahead.next();
            if !(lookahead.fundamental() == FundamentalKind::Text || lookahead.character() == '_') {
                break;
            }
        }
        *it = lookahead;
        true
    }

    /// A possibly qualified identifier: `A.B`, `alias::A`, `A<T>.B`.
    ///
    /// In prototype mode a `Type` role marks the qualifiers as `TypeQualifier`
    /// and only the last segment as `Type`. A template after the last segment
    /// is left for the caller.
    pub(super) fn try_to_skip_identifier(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        role: PrototypeRole,
    ) -> bool {
        let mut lookahead = *it;
        let mut end_of_qualifier = *it;
        let end_of_identifier = loop {
            let segment = lookahead;
            if !self.try_to_skip_unqualified_identifier(&mut lookahead) {
                return reject(it, &lookahead, mode);
            }
            let end_of_identifier = lookahead;
            // The operator symbol follows, not a template or qualifier
            if segment.matches_token("operator", false) {
                break end_of_identifier;
            }
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            if self.try_to_skip_template_signature(&mut lookahead, mode, role == PrototypeRole::Type) {
                self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            }

            if lookahead.character() == '.' {
                if lookahead.matches_across_tokens("..", false) {
                    break end_of_identifier;
                }
                lookahead.next();
            } else if lookahead.matches_across_tokens("::", false) {
                lookahead.next_n(2);
            } else {
                break end_of_identifier;
            }
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            end_of_qualifier = lookahead;
        };

        // Clear a trailing template the caller will mark itself
        if lookahead > end_of_identifier {
            end_of_identifier.buffer().reset_between(&end_of_identifier, &lookahead, mode);
        }

        if mode.is_prototype() {
            if role == PrototypeRole::Type {
                if end_of_qualifier > *it {
                    it.set_prototype_role_to(&end_of_qualifier, PrototypeRole::TypeQualifier);
                }
                end_of_qualifier.set_prototype_role_to(&end_of_identifier, PrototypeRole::Type);
            } else {
                it.set_prototype_role_to(&end_of_identifier, role);
            }
        }
        *it = end_of_identifier;
        true
    }

    /// [`CSharp::try_to_skip_identifier`] that also returns the matched text
    pub(super) fn skip_identifier_text<'a>(
        &self,
        it: &mut Cursor<'a>,
        mode: ParseMode,
        role: PrototypeRole,
    ) -> Option<&'a str> {
        let start = *it;
        if self.try_to_skip_identifier(it, mode, role) {
            Some(start.text_to(it))
        } else {
            None
        }
    }

    /// A type with its template, nullable, pointer and array suffixes, or a tuple or function pointer
    pub(super) fn try_to_skip_type(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if self.try_to_skip_tuple(it, mode) || self.try_to_skip_function_pointer(it, mode) {
            return true;
        }

        let mut lookahead = *it;
        if !self.try_to_skip_identifier(&mut lookahead, mode, PrototypeRole::Type) {
            return false;
        }
        let mut end = lookahead;
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        if self.try_to_skip_template_signature(&mut lookahead, mode, true) {
            end = lookahead;
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        for suffix in ['?', '*'] {
            if lookahead.character() == suffix {
                if mode.is_prototype() {
                    lookahead.set_prototype_role(PrototypeRole::TypeModifier);
                }
                lookahead.next();
                end = lookahead;
                self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            }
        }

        // Array ranks: [] and [,,]
        while lookahead.character() == '[' {
            let opening = lookahead;
            let mut closing = lookahead;
            closing.next();
            self.try_to_skip_whitespace(&mut closing, ParseMode::IterateOnly);
            while closing.character() == ',' {
                closing.next();
                self.try_to_skip_whitespace(&mut closing, ParseMode::IterateOnly);
            }
            if closing.character() != ']' {
                break;
            }
            if mode.is_prototype() {
                opening.set_prototype_role(PrototypeRole::OpeningTypeModifier);
                closing.set_prototype_role(PrototypeRole::ClosingTypeModifier);
            }
            closing.next();
            end = closing;
            lookahead = closing;
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        *it = end;
        true
    }

    /// `(int a, string b)`; members may be nested tuples and names are optional
    pub(super) fn try_to_skip_tuple(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if it.character() != '(' {
            return false;
        }

        let mut lookahead = *it;
        if mode.is_prototype() {
            lookahead.set_prototype_role(PrototypeRole::StartOfTuple);
        }
        lookahead.next();
        lookahead.next_past_whitespace();

        loop {
            match lookahead.character() {
                ')' => {
                    if mode.is_prototype() {
                        lookahead.set_prototype_role(PrototypeRole::EndOfTuple);
                    }
                    lookahead.next();
                    *it = lookahead;
                    return true;
                }
                ',' => {
                    if mode.is_prototype() {
                        lookahead.set_prototype_role(PrototypeRole::TupleMemberSeparator);
                    }
                    lookahead.next();
                    lookahead.next_past_whitespace();
                }
                _ if self.try_to_skip_tuple_member(&mut lookahead, mode) => {
                    lookahead.next_past_whitespace();
                }
                _ => return reject(it, &lookahead, mode),
            }
        }
    }

    fn try_to_skip_tuple_member(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if !self.try_to_skip_type(it, mode) {
            return false;
        }

        let mut name = *it;
        name.next_past_whitespace();
        let start_of_name = name;
        if self.try_to_skip_unqualified_identifier(&mut name) {
            if mode.is_prototype() {
                start_of_name.set_prototype_role_to(&name, PrototypeRole::TupleMemberName);
            }
            *it = name;
        }
        true
    }

    /// `delegate* unmanaged[Cdecl]<int, void>`
    pub(super) fn try_to_skip_function_pointer(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if !it.matches_token("delegate", false) {
            return false;
        }

        let mut lookahead = *it;
        let mark = |at: &Cursor<'_>, role: PrototypeRole| {
            if mode.is_prototype() {
                at.set_prototype_role(role);
            }
        };

        mark(&lookahead, PrototypeRole::Type);
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        if lookahead.character() != '*' {
            return reject(it, &lookahead, mode);
        }
        mark(&lookahead, PrototypeRole::TypeModifier);
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        if lookahead.matches_token("managed", false) {
            mark(&lookahead, PrototypeRole::TypeModifier);
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        } else if lookahead.matches_token("unmanaged", false) {
            mark(&lookahead, PrototypeRole::TypeModifier);
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

            // Calling convention
            if lookahead.character() == '[' {
                mark(&lookahead, PrototypeRole::OpeningTypeModifier);
                self.try_to_skip_block(&mut lookahead, false);
                let mut closing = lookahead;
                closing.previous();
                mark(&closing, PrototypeRole::ClosingTypeModifier);
                self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            }
        }

        if !self.try_to_skip_template_signature(&mut lookahead, mode, true) {
            return reject(it, &lookahead, mode);
        }
        *it = lookahead;
        true
    }

    /// `<...>` of types, or of parameter names with optional `in`/`out` variance when `is_type` is false
    pub(super) fn try_to_skip_template_signature(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        is_type: bool,
    ) -> bool {
        if it.character() != '<' {
            return false;
        }

        let mut lookahead = *it;
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        while lookahead.is_in_bounds() && lookahead.character() != '>' {
            loop {
                if is_type {
                    if !self.try_to_skip_type(&mut lookahead, mode) {
                        return reject(it, &lookahead, mode);
                    }
                } else {
                    if lookahead.matches_token("in", false) || lookahead.matches_token("out", false) {
                        lookahead.next();
                        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
                    }
                    if !self.try_to_skip_unqualified_identifier(&mut lookahead) {
                        return reject(it, &lookahead, mode);
                    }
                }
                self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
                if lookahead.character() != ',' {
                    break;
                }
                lookahead.next();
                self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            }
        }

        if lookahead.character() != '>' {
            return reject(it, &lookahead, mode);
        }
        if mode.is_prototype() {
            let (opening, closing) = if is_type {
                (PrototypeRole::OpeningTypeModifier, PrototypeRole::ClosingTypeModifier)
            } else {
                (PrototypeRole::OpeningParamModifier, PrototypeRole::ClosingParamModifier)
            };
            it.set_prototype_role(opening);
            lookahead.set_prototype_role(closing);
        }
        lookahead.next();
        *it = lookahead;
        true
    }

    /// `where T : class?, new()` constraint clause, ending before trailing whitespace
    pub(super) fn try_to_skip_where_clause(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        if !it.matches_token("where", false) {
            return false;
        }

        let mut lookahead = *it;
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        if !self.try_to_skip_unqualified_identifier(&mut lookahead) {
            return false;
        }
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        if lookahead.character() != ':' {
            return false;
        }
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        let mut end_of_clause;
        loop {
            if ["struct", "notnull", "unmanaged", "default"]
                .iter()
                .any(|word| lookahead.matches_token(word, false))
            {
                lookahead.next();
            } else if lookahead.matches_token("class", false) {
                lookahead.next();
                let mut nullable = lookahead;
                self.try_to_skip_whitespace(&mut nullable, ParseMode::IterateOnly);
                if nullable.character() == '?' {
                    nullable.next();
                    lookahead = nullable;
                }
            } else if lookahead.matches_token("new", false) {
                lookahead.next();
                self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
                if lookahead.character() != '(' {
                    return false;
                }
                lookahead.next();
                self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
                if lookahead.character() != ')' {
                    return false;
                }
                lookahead.next();
            } else if !self.try_to_skip_type(&mut lookahead, ParseMode::IterateOnly) {
                return false;
            }
            end_of_clause = lookahead;
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

            if lookahead.character() != ',' {
                break;
            }
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        if mode.is_prototype() {
            it.set_prototype_role(PrototypeRole::StartOfPrototypeSection);
        }
        *it = end_of_clause;
        true
    }

    // =========================================================================
    // PARAMETERS
    // =========================================================================

    /// A parameter list opened by `opening`: `(`, `[` for indexers or `<`
    pub(super) fn try_to_skip_parameters(&self, it: &mut Cursor<'_>, mode: ParseMode, opening: char) -> bool {
        if it.character() != opening {
            return false;
        }
        let closing = match opening {
            '(' => ')',
            '[' => ']',
            _ => '>',
        };

        let mut lookahead = *it;
        if mode.is_prototype() {
            lookahead.set_prototype_role(PrototypeRole::StartOfParams);
        }
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, mode);

        while lookahead.is_in_bounds() && lookahead.character() != closing {
            if lookahead.character() == ',' {
                if mode.is_prototype() {
                    lookahead.set_prototype_role(PrototypeRole::ParamSeparator);
                }
                lookahead.next();
                self.try_to_skip_whitespace(&mut lookahead, mode);
            } else if self.try_to_skip_parameter(&mut lookahead, closing, mode) {
                self.try_to_skip_whitespace(&mut lookahead, mode);
            } else {
                break;
            }
        }

        if lookahead.character() != closing {
            return reject(it, &lookahead, mode);
        }
        if mode.is_prototype() {
            lookahead.set_prototype_role(PrototypeRole::EndOfParams);
        }
        lookahead.next();
        *it = lookahead;
        true
    }

    /// `[attributes] ref|in|out|params|this Type name = default`, stopping at `,` or `closing`
    fn try_to_skip_parameter(&self, it: &mut Cursor<'_>, closing: char, mode: ParseMode) -> bool {
        let mut lookahead = *it;
        if self.try_to_skip_attributes(&mut lookahead, AttributeTarget::LocalOnly, mode, PrototypeRole::TypeModifier) {
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }

        while ["ref", "in", "out", "params", "this"]
            .iter()
            .any(|word| lookahead.matches_token(word, false))
        {
            if mode.is_prototype() {
                lookahead.set_prototype_role(PrototypeRole::TypeModifier);
            }
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }

        if !self.try_to_skip_type(&mut lookahead, mode) {
            return reject(it, &lookahead, mode);
        }
        self.try_to_skip_whitespace(&mut lookahead, mode);

        if !self.try_to_skip_identifier(&mut lookahead, mode, PrototypeRole::Name) {
            return reject(it, &lookahead, mode);
        }
        self.try_to_skip_whitespace(&mut lookahead, mode);

        if lookahead.character() == '=' {
            if mode.is_prototype() {
                lookahead.set_prototype_role(PrototypeRole::DefaultValueSeparator);
            }
            lookahead.next();
            let start_of_value = lookahead;
            while lookahead.is_in_bounds() && lookahead.character() != ',' && lookahead.character() != closing {
                self.generic_skip(&mut lookahead);
            }
            if mode.is_prototype() {
                mark_trimmed(&start_of_value, &lookahead, PrototypeRole::DefaultValue);
            }
        }

        if lookahead.character() != ',' && lookahead.character() != closing {
            return reject(it, &lookahead, mode);
        }
        *it = lookahead;
        true
    }
}
