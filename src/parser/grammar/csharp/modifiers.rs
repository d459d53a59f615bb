use super::*;

// =============================================================================
// Attributes and modifiers
// =============================================================================

/// Which attribute targets a caller accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeTarget {
    Any,
    /// Attributes on the following declaration
    LocalOnly,
    /// `[assembly: ...]` and `[module: ...]`
    GlobalOnly,
}

impl CSharp {
    /// One or more attributes separated by whitespace
    pub(super) fn try_to_skip_attributes(
        &self,
        it: &mut Cursor<'_>,
        target: AttributeTarget,
        mode: ParseMode,
        role: PrototypeRole,
    ) -> bool {
        if !self.try_to_skip_attribute(it, target, mode, role) {
            return false;
        }
        loop {
            let mut lookahead = *it;
            self.try_to_skip_whitespace(&mut lookahead, mode);
            if !self.try_to_skip_attribute(&mut lookahead, target, mode, role) {
                break;
            }
            *it = lookahead;
        }
        true
    }

    /// A single `[...]` attribute.
    ///
    /// In prototype mode, section and modifier roles mark only the brackets
    /// with their opening and closing pair; any other role covers the whole attribute.
    pub(super) fn try_to_skip_attribute(
        &self,
        it: &mut Cursor<'_>,
        target: AttributeTarget,
        mode: ParseMode,
        role: PrototypeRole,
    ) -> bool {
        if it.character() != '[' {
            return false;
        }

        if target != AttributeTarget::Any {
            let mut lookahead = *it;
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            let is_global = lookahead.matches_token("assembly", false)
                || lookahead.matches_token("module", false);
            if is_global != (target == AttributeTarget::GlobalOnly) {
                return false;
            }
        }

        let start = *it;
        it.next();
        self.generic_skip_until_after(it, ']');

        if mode.is_highlight() {
            start.set_highlight_to(it, HighlightKind::Metadata);
        } else if mode.is_prototype() {
            let pair = match role {
                PrototypeRole::StartOfPrototypeSection => Some((
                    PrototypeRole::StartOfPrototypeSection,
                    PrototypeRole::EndOfPrototypeSection,
                )),
                PrototypeRole::TypeModifier | PrototypeRole::OpeningTypeModifier => Some((
                    PrototypeRole::OpeningTypeModifier,
                    PrototypeRole::ClosingTypeModifier,
                )),
                PrototypeRole::ParamModifier | PrototypeRole::OpeningParamModifier => Some((
                    PrototypeRole::OpeningParamModifier,
                    PrototypeRole::ClosingParamModifier,
                )),
                _ => None,
            };
            match pair {
                Some((opening, closing)) => {
                    start.set_prototype_role(opening);
                    let mut lookbehind = *it;
                    lookbehind.previous();
                    if lookbehind.character() == ']' {
                        lookbehind.set_prototype_role(closing);
                    }
                }
                None => start.set_prototype_role_to(it, role),
            }
        }
        true
    }

    /// Access and non-access modifiers, stopping before trailing whitespace.
    ///
    /// Returns the access level they declare, `None` when there were no modifiers.
    pub(super) fn try_to_skip_modifiers(&self, it: &mut Cursor<'_>, mode: ParseMode) -> Option<AccessLevel> {
        let mut access = AccessLevel::Unknown;
        let mut found = false;
        let mut lookahead = *it;

        while lookahead.is_in_bounds() {
            let word = lookahead.text();
            match word {
                "public" => access = AccessLevel::Public,
                "private" => access = access.combine(AccessLevel::Private),
                "protected" => access = access.combine(AccessLevel::Protected),
                "internal" => access = access.combine(AccessLevel::Internal),
                _ if NON_ACCESS_MODIFIERS.contains(word) => {}
                _ => break,
            }
            found = true;
            if mode.is_highlight() {
                lookahead.set_highlight(HighlightKind::Keyword);
            } else if mode.is_prototype() {
                lookahead.set_prototype_role(PrototypeRole::TypeModifier);
            }
            lookahead.next();
            *it = lookahead;
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }

        found.then_some(access)
    }

    /// Attributes then modifiers, each followed by whitespace, as every member declaration starts
    pub(super) fn skip_declaration_prefix(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        attribute_role: PrototypeRole,
    ) -> AccessLevel {
        if self.try_to_skip_attributes(it, AttributeTarget::LocalOnly, mode, attribute_role) {
            self.try_to_skip_whitespace(it, mode);
        }
        match self.try_to_skip_modifiers(it, mode) {
            Some(access) => {
                self.try_to_skip_whitespace(it, mode);
                access
            }
            None => AccessLevel::Unknown,
        }
    }
}
