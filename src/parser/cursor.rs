//! Copyable position into a [`TokenBuffer`]
//!
//! A cursor is a buffer reference, a token index and the line that token
//! starts on. Copying one is free, so matchers take a `lookahead` copy,
//! advance it speculatively and only write it back on success.

use std::cmp::Ordering;

use text_size::TextSize;

use crate::base::FilePosition;

use super::annotations::{HighlightKind, PrototypeRole};
use super::buffer::TokenBuffer;
use super::lexer::FundamentalKind;

#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    buffer: &'a TokenBuffer,
    index: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buffer: &'a TokenBuffer, index: usize, line: usize) -> Self {
        Self {
            buffer,
            index,
            line,
        }
    }

    pub fn buffer(&self) -> &'a TokenBuffer {
        self.buffer
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based line the current token starts on
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based char number of the current token within its line
    pub fn char_number(&self) -> usize {
        self.buffer.char_number_at(self.raw_text_index())
    }

    /// Line and char number of the current token
    pub fn position(&self) -> FilePosition {
        FilePosition::new(self.line, self.char_number())
    }

    pub fn raw_text_index(&self) -> TextSize {
        self.buffer.offset_at(self.index)
    }

    pub fn is_in_bounds(&self) -> bool {
        self.index < self.buffer.len()
    }

    pub fn fundamental(&self) -> FundamentalKind {
        self.buffer.kind_at(self.index)
    }

    /// Text of the current token, empty when out of bounds
    pub fn text(&self) -> &'a str {
        self.buffer.text_at(self.index)
    }

    /// Byte length of the current token
    pub fn raw_text_length(&self) -> usize {
        self.text().len()
    }

    /// First character of the current token, `'\0'` when out of bounds
    pub fn character(&self) -> char {
        self.text().chars().next().unwrap_or('\0')
    }

    // =========================================================================
    // MOVEMENT
    // =========================================================================

    pub fn next(&mut self) {
        if self.index >= self.buffer.len() {
            return;
        }
        if self.fundamental() == FundamentalKind::LineBreak {
            self.line += 1;
        }
        self.index += 1;
    }

    pub fn next_n(&mut self, count: usize) {
        for _ in 0..count {
            self.next();
        }
    }

    /// Move to the token before this one. Stays put at the first token.
    pub fn previous(&mut self) {
        if self.index == 0 {
            return;
        }
        self.index -= 1;
        if self.fundamental() == FundamentalKind::LineBreak {
            self.line -= 1;
        }
    }

    pub fn previous_n(&mut self, count: usize) {
        for _ in 0..count {
            self.previous();
        }
    }

    /// Advance by whole tokens until at least `bytes` bytes were passed
    pub fn next_by_characters(&mut self, bytes: usize) {
        let target = usize::from(self.raw_text_index()) + bytes;
        while self.is_in_bounds() && usize::from(self.raw_text_index()) < target {
            self.next();
        }
    }

    /// Move back by whole tokens until at least `bytes` bytes were passed
    pub fn previous_by_characters(&mut self, bytes: usize) {
        let target = usize::from(self.raw_text_index()).saturating_sub(bytes);
        while self.index > 0 && usize::from(self.raw_text_index()) > target {
            self.previous();
        }
    }

    pub fn next_past_whitespace(&mut self) {
        while matches!(
            self.fundamental(),
            FundamentalKind::Whitespace | FundamentalKind::LineBreak
        ) {
            self.next();
        }
    }

    /// Step back over whitespace, leaving the cursor on the previous
    /// non-whitespace token. Stays put if there is none.
    pub fn previous_past_whitespace(&mut self) {
        let mut candidate = *self;
        loop {
            if candidate.index == 0 {
                return;
            }
            candidate.previous();
            if !matches!(
                candidate.fundamental(),
                FundamentalKind::Whitespace | FundamentalKind::LineBreak
            ) {
                *self = candidate;
                return;
            }
        }
    }

    // =========================================================================
    // COMPARISON
    // =========================================================================

    /// Whether the current token is exactly `text`
    pub fn matches_token(&self, text: &str, ignore_case: bool) -> bool {
        let token = self.text();
        if ignore_case {
            token.eq_ignore_ascii_case(text)
        } else {
            token == text
        }
    }

    /// Whether `phrase` starts at this token and ends on a token boundary
    pub fn matches_across_tokens(&self, phrase: &str, ignore_case: bool) -> bool {
        if !self.is_in_bounds() || phrase.is_empty() {
            return false;
        }
        let rest = &self.buffer.raw_text()[usize::from(self.raw_text_index())..];
        let Some(candidate) = rest.get(..phrase.len()) else {
            return false;
        };
        let equal = if ignore_case {
            candidate.eq_ignore_ascii_case(phrase)
        } else {
            candidate == phrase
        };
        if !equal {
            return false;
        }
        let mut end = *self;
        end.next_by_characters(phrase.len());
        usize::from(end.raw_text_index()) == usize::from(self.raw_text_index()) + phrase.len()
    }

    /// Text from this cursor up to `end`
    pub fn text_to(&self, end: &Cursor<'a>) -> &'a str {
        self.buffer.text_between(self, end)
    }

    // =========================================================================
    // ANNOTATIONS
    // =========================================================================

    pub fn highlight(&self) -> Option<HighlightKind> {
        self.buffer.highlight_at(self.index)
    }

    pub fn set_highlight(&self, kind: HighlightKind) {
        let mut end = *self;
        end.next();
        self.buffer.set_highlight_between(self, &end, Some(kind));
    }

    /// Highlight every token from here up to `end`
    pub fn set_highlight_to(&self, end: &Cursor<'a>, kind: HighlightKind) {
        self.buffer.set_highlight_between(self, end, Some(kind));
    }

    /// Highlight the tokens covering the next `bytes` bytes
    pub fn set_highlight_by_characters(&self, kind: HighlightKind, bytes: usize) {
        let mut end = *self;
        end.next_by_characters(bytes);
        self.buffer.set_highlight_between(self, &end, Some(kind));
    }

    pub fn prototype_role(&self) -> Option<PrototypeRole> {
        self.buffer.prototype_role_at(self.index)
    }

    pub fn set_prototype_role(&self, role: PrototypeRole) {
        let mut end = *self;
        end.next();
        self.buffer.set_prototype_role_between(self, &end, Some(role));
    }

    /// Assign `role` to every token from here up to `end`
    pub fn set_prototype_role_to(&self, end: &Cursor<'a>, role: PrototypeRole) {
        self.buffer.set_prototype_role_between(self, end, Some(role));
    }

    pub fn set_prototype_role_by_characters(&self, role: PrototypeRole, bytes: usize) {
        let mut end = *self;
        end.next_by_characters(bytes);
        self.buffer.set_prototype_role_between(self, &end, Some(role));
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(std::ptr::eq(self.buffer, other.buffer));
        self.index == other.index
    }
}

impl Eq for Cursor<'_> {}

impl PartialOrd for Cursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(std::ptr::eq(self.buffer, other.buffer));
        self.index.cmp(&other.index)
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("line", &self.line)
            .field("text", &self.text())
            .finish()
    }
}
