use super::*;

// =============================================================================
// Syntax highlighting
// =============================================================================

impl CSharp {
    /// Token-level pass: directives, comments, strings, numbers, attributes and keywords.
    ///
    /// `[` starts an attribute only where a declaration could begin, so array
    /// indexing and array types stay plain.
    pub(super) fn highlight(&self, buffer: &TokenBuffer) {
        let mode = ParseMode::SyntaxHighlight;
        let mut it = buffer.first();
        let mut last_code_token = buffer.end();

        while it.is_in_bounds() {
            if self.try_to_skip_preprocessing_directive(&mut it, mode)
                || self.try_to_skip_whitespace(&mut it, mode)
            {
                continue;
            }

            if self.try_to_skip_string(&mut it, mode) || self.try_to_skip_number(&mut it, mode) {
                last_code_token = token_before(&it);
            } else if it.character() == '[' {
                if starts_attribute(&last_code_token)
                    && self.try_to_skip_attribute(&mut it, AttributeTarget::Any, mode, PrototypeRole::TypeModifier)
                {
                    last_code_token = token_before(&it);
                } else {
                    last_code_token = it;
                    it.next();
                }
            } else if it.character() == '@' {
                // @class is an identifier, never a keyword
                let mut identifier = it;
                if self.try_to_skip_unqualified_identifier(&mut identifier) {
                    it = identifier;
                } else {
                    it.next();
                }
                last_code_token = token_before(&it);
            } else if it.fundamental() == FundamentalKind::Text || it.character() == '_' {
                let start = it;
                while it.fundamental() == FundamentalKind::Text || it.character() == '_' {
                    it.next();
                }
                if is_keyword(start.text_to(&it)) {
                    start.set_highlight_to(&it, HighlightKind::Keyword);
                }
                last_code_token = token_before(&it);
            } else {
                last_code_token = it;
                it.next();
            }
        }
    }
}

fn token_before<'a>(it: &Cursor<'a>) -> Cursor<'a> {
    let mut before = *it;
    before.previous();
    before
}

/// Whether a `[` after `last` opens an attribute rather than an index or array rank
fn starts_attribute(last: &Cursor<'_>) -> bool {
    if !last.is_in_bounds() {
        return true;
    }
    match last.character() {
        '(' | '[' | '{' | ',' | ';' | '}' => true,
        ']' => last.highlight() == Some(HighlightKind::Metadata),
        _ => false,
    }
}
