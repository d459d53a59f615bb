use super::*;

// =============================================================================
// Syntax highlighting
// =============================================================================

impl SystemVerilog {
    /// Token-level pass: attributes, comments, directives, strings, numbers and keywords.
    ///
    /// Escaped identifiers and system tasks like `$display` are never keywords.
    pub(super) fn highlight(&self, buffer: &TokenBuffer) {
        let mode = ParseMode::SyntaxHighlight;
        let mut it = buffer.first();

        while it.is_in_bounds() {
            if self.try_to_skip_attributes(&mut it, mode)
                || self.try_to_skip_comment(&mut it, mode)
                || self.try_to_skip_compiler_directive(&mut it, mode)
                || self.try_to_skip_verilog_string(&mut it, mode)
                || self.try_to_skip_verilog_number(&mut it, mode)
            {
                continue;
            }

            if it.character() == '\\' {
                if !self.try_to_skip_identifier(&mut it) {
                    it.next();
                }
            } else if it.fundamental() == FundamentalKind::Text || matches!(it.character(), '_' | '$') {
                let start = it;
                while it.fundamental() == FundamentalKind::Text || matches!(it.character(), '_' | '$') {
                    it.next();
                }
                let word = start.text_to(&it);
                if word.starts_with(|c: char| c.is_ascii_lowercase()) && KEYWORDS.contains(word) {
                    start.set_highlight_to(&it, HighlightKind::Keyword);
                }
            } else {
                it.next();
            }
        }
    }
}
