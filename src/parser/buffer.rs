//! Token buffer
//!
//! Owns the source text and its tokens. The text and token boundaries are
//! immutable after construction; only the annotation slots change, and they
//! use interior mutability so any number of [`Cursor`]s can stay alive while
//! matchers annotate.

use std::cell::{Cell, OnceCell};

use text_size::{TextRange, TextSize};

use super::annotations::{CommentRole, HighlightKind, PrototypeRole};
use super::cursor::Cursor;
use super::lexer::{FundamentalKind, RawToken, tokenize};
use super::mode::ParseMode;

/// One annotation slot per token, allocated on first write
struct AnnotationSlot<T: Copy> {
    cells: OnceCell<Box<[Cell<Option<T>>]>>,
    len: usize,
}

impl<T: Copy> AnnotationSlot<T> {
    fn new(len: usize) -> Self {
        Self {
            cells: OnceCell::new(),
            len,
        }
    }

    fn get(&self, index: usize) -> Option<T> {
        self.cells.get()?.get(index)?.get()
    }

    fn set_between(&self, start: usize, end: usize, value: Option<T>) {
        let end = end.min(self.len);
        if start >= end {
            return;
        }
        if value.is_none() && self.cells.get().is_none() {
            return;
        }
        let cells = self
            .cells
            .get_or_init(|| (0..self.len).map(|_| Cell::new(None)).collect());
        for cell in &cells[start..end] {
            cell.set(value);
        }
    }

    fn is_allocated(&self) -> bool {
        self.cells.get().is_some()
    }
}

/// Tokenized source text with per-token annotation slots
pub struct TokenBuffer {
    text: String,
    tokens: Vec<RawToken>,
    starting_line: usize,
    last_line: usize,
    highlight: AnnotationSlot<HighlightKind>,
    prototype: AnnotationSlot<PrototypeRole>,
    comment: AnnotationSlot<CommentRole>,
}

impl TokenBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_starting_line(text, 1)
    }

    /// Tokenize text that begins on `starting_line` of its file
    pub fn with_starting_line(text: impl Into<String>, starting_line: usize) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        let line_breaks = tokens
            .iter()
            .filter(|t| t.kind == FundamentalKind::LineBreak)
            .count();
        let len = tokens.len();

        Self {
            text,
            tokens,
            starting_line,
            last_line: starting_line + line_breaks,
            highlight: AnnotationSlot::new(len),
            prototype: AnnotationSlot::new(len),
            comment: AnnotationSlot::new(len),
        }
    }

    // =========================================================================
    // CURSORS
    // =========================================================================

    /// Cursor at the first token
    pub fn first(&self) -> Cursor<'_> {
        Cursor::new(self, 0, self.starting_line)
    }

    /// Cursor one past the last token
    pub fn end(&self) -> Cursor<'_> {
        Cursor::new(self, self.tokens.len(), self.last_line)
    }

    /// Cursor at the last token, or the end cursor for empty text
    pub fn last(&self) -> Cursor<'_> {
        let mut cursor = self.end();
        cursor.previous();
        cursor
    }

    /// Cursor at a token index, clamped to the end cursor
    pub fn cursor_at(&self, index: usize) -> Cursor<'_> {
        let index = index.min(self.tokens.len());
        let line_breaks = self.tokens[..index]
            .iter()
            .filter(|t| t.kind == FundamentalKind::LineBreak)
            .count();
        Cursor::new(self, index, self.starting_line + line_breaks)
    }

    // =========================================================================
    // RAW ACCESS
    // =========================================================================

    pub fn raw_text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn starting_line(&self) -> usize {
        self.starting_line
    }

    pub(crate) fn kind_at(&self, index: usize) -> FundamentalKind {
        self.tokens
            .get(index)
            .map_or(FundamentalKind::Null, |t| t.kind)
    }

    pub(crate) fn range_at(&self, index: usize) -> Option<TextRange> {
        self.tokens.get(index).map(|t| t.range)
    }

    /// Byte offset of the token start, or the text length past the end
    pub(crate) fn offset_at(&self, index: usize) -> TextSize {
        self.tokens
            .get(index)
            .map_or(TextSize::of(self.text.as_str()), |t| t.range.start())
    }

    pub(crate) fn text_at(&self, index: usize) -> &str {
        self.range_at(index).map_or("", |range| &self.text[range])
    }

    /// Text covered by the tokens in `[start, end)`
    pub fn text_between(&self, start: &Cursor<'_>, end: &Cursor<'_>) -> &str {
        let from = self.offset_at(start.index());
        let to = self.offset_at(end.index());
        if from >= to {
            return "";
        }
        &self.text[TextRange::new(from, to)]
    }

    /// 1-based char number of a byte offset within its line
    pub(crate) fn char_number_at(&self, offset: TextSize) -> usize {
        let before = &self.text[..usize::from(offset)];
        let line_start = before.rfind(['\n', '\r']).map_or(0, |i| i + 1);
        before[line_start..].chars().count() + 1
    }

    // =========================================================================
    // ANNOTATIONS
    // =========================================================================

    pub fn highlight_at(&self, index: usize) -> Option<HighlightKind> {
        self.highlight.get(index)
    }

    pub fn prototype_role_at(&self, index: usize) -> Option<PrototypeRole> {
        self.prototype.get(index)
    }

    pub fn comment_role_at(&self, index: usize) -> Option<CommentRole> {
        self.comment.get(index)
    }

    pub fn set_highlight_between(
        &self,
        start: &Cursor<'_>,
        end: &Cursor<'_>,
        kind: Option<HighlightKind>,
    ) {
        self.highlight.set_between(start.index(), end.index(), kind);
    }

    pub fn set_prototype_role_between(
        &self,
        start: &Cursor<'_>,
        end: &Cursor<'_>,
        role: Option<PrototypeRole>,
    ) {
        self.prototype.set_between(start.index(), end.index(), role);
    }

    pub fn set_comment_role_between(
        &self,
        start: &Cursor<'_>,
        end: &Cursor<'_>,
        role: Option<CommentRole>,
    ) {
        self.comment.set_between(start.index(), end.index(), role);
    }

    /// Clear the slots `mode` writes over `[start, end)`.
    ///
    /// Modes that do not annotate leave every slot alone.
    pub fn reset_between(&self, start: &Cursor<'_>, end: &Cursor<'_>, mode: ParseMode) {
        match mode {
            ParseMode::SyntaxHighlight => self.set_highlight_between(start, end, None),
            ParseMode::ParsePrototype => {
                self.set_prototype_role_between(start, end, None);
                self.set_comment_role_between(start, end, None);
            }
            ParseMode::IterateOnly | ParseMode::CreateElements => {}
        }
    }

    pub fn has_highlighting(&self) -> bool {
        self.highlight.is_allocated()
    }

    pub fn has_prototype_roles(&self) -> bool {
        self.prototype.is_allocated()
    }

    /// Highlighted byte ranges, merging neighbouring tokens of the same kind
    pub fn highlighted_ranges(&self) -> Vec<(TextRange, HighlightKind)> {
        let mut ranges: Vec<(TextRange, HighlightKind)> = Vec::new();
        if !self.highlight.is_allocated() {
            return ranges;
        }
        for (index, token) in self.tokens.iter().enumerate() {
            let Some(kind) = self.highlight.get(index) else {
                continue;
            };
            match ranges.last_mut() {
                Some((range, last)) if *last == kind && range.end() == token.range.start() => {
                    *range = range.cover(token.range);
                }
                _ => ranges.push((token.range, kind)),
            }
        }
        ranges
    }
}

impl std::fmt::Debug for TokenBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenBuffer")
            .field("tokens", &self.tokens.len())
            .field("starting_line", &self.starting_line)
            .finish()
    }
}
