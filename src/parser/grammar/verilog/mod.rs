//! SystemVerilog grammar
//!
//! Blocks are delimited by keyword pairs rather than braces. The grammar
//! creates elements for design units (`module`, `interface`, `program`,
//! `package`, `class`), subroutines and data declarations, and skips
//! everything else a statement or keyword block at a time.
//!
//! Declarations before a name may omit the type, so the typed-name matcher
//! counts words first and annotates on a second walk.

mod blocks;
mod declarations;
mod highlight;
mod keywords;
mod lexical;

// Shared imports for submodules
pub(super) use std::sync::{Arc, LazyLock};

pub(super) use rustc_hash::FxHashSet;
pub(super) use tracing::{debug, trace, warn};

pub(super) use super::{Language, child_context, mark_trimmed, reject};
pub(super) use crate::base::{AccessLevel, LanguageId, SymbolPath};
pub(super) use crate::hir::{Element, KindId, KindRegistry, ParentElement, Topic};
pub(super) use crate::parser::{
    BaseGrammar, Cursor, FundamentalKind, HighlightKind, LanguageSyntax, ParseError, ParseMode,
    ParseResult, PrototypeRole, TokenBuffer,
};
pub(super) use crate::prototype::{ParameterStyle, ParsedPrototype, parse_generic_prototype};

pub(super) use self::keywords::*;

pub use self::keywords::{DIRECTIONS, KEYWORDS};

use tokio_util::sync::CancellationToken;

/// The SystemVerilog grammar, which also reads plain Verilog
pub struct SystemVerilog {
    syntax: LanguageSyntax,
    kinds: Arc<dyn KindRegistry>,
}

impl SystemVerilog {
    pub const ID: LanguageId = LanguageId(2);

    pub fn new(kinds: Arc<dyn KindRegistry>) -> Self {
        let syntax = LanguageSyntax::new("SystemVerilog", Self::ID)
            .with_extensions(&["sv", "svh", "v", "vh"])
            .with_line_comment("//")
            .with_block_comment("/*", "*/")
            .with_member_operator("::")
            .with_default_child_access(AccessLevel::Public);
        Self { syntax, kinds }
    }

    fn topic(
        &self,
        keyword: &str,
        title: impl Into<String>,
        symbol: SymbolPath,
        start: &Cursor<'_>,
    ) -> Option<Topic> {
        let kind = self.kinds.id_from_keyword(keyword, self.syntax.id);
        if kind.is_none() {
            return None;
        }
        Some(
            Topic::new(title, symbol, keyword)
                .with_kind(kind)
                .at_line(start.line())
                .in_language(self.syntax.id),
        )
    }

    // =========================================================================
    // DRIVER
    // =========================================================================

    /// Items until one of `closers` has been consumed or the text ends
    fn parse_items(
        &self,
        it: &mut Cursor<'_>,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
        closers: &[&str],
    ) {
        while it.is_in_bounds() && self.parse_item(it, elements, scope, closers) {}
    }

    /// One item at the cursor. Returns false once a keyword in `closers`
    /// and its label have been consumed.
    fn parse_item(
        &self,
        it: &mut Cursor<'_>,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
        closers: &[&str],
    ) -> bool {
        let skipped = self.try_to_skip_whitespace(it, ParseMode::IterateOnly)
            || self.try_to_skip_compiler_directive(it, ParseMode::IterateOnly);
        if skipped {
            return true;
        }

        if let Some((word, after)) = self.word_at(it) {
            if closers.contains(&word) {
                *it = after;
                self.try_to_skip_end_label(it);
                return false;
            }
        }

        let mode = ParseMode::CreateElements;
        let matched = self.try_to_skip_design_unit(it, mode, elements, scope)
            || self.try_to_skip_subroutine(it, mode, elements, scope)
            || self.try_to_skip_data_declaration(it, mode, elements, scope)
            || self.try_to_skip_attributes(it, ParseMode::IterateOnly);

        if !matched {
            trace!("[VERILOG] no declaration at line {}, skipping statement", it.line());
            self.skip_statement(it);
        }
        true
    }
}

impl BaseGrammar for SystemVerilog {
    fn syntax(&self) -> &LanguageSyntax {
        &self.syntax
    }

    fn try_to_skip_string(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        self.try_to_skip_verilog_string(it, mode)
    }

    fn try_to_skip_number(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        self.try_to_skip_verilog_number(it, mode)
    }

    /// Attribute instances are one unit; `(`, `[` and `{` are balanced
    fn generic_skip(&self, it: &mut Cursor<'_>) {
        if self.try_to_skip_attributes(it, ParseMode::IterateOnly) {
            return;
        }
        let closing = match it.character() {
            '(' => ')',
            '[' => ']',
            '{' => '}',
            _ => {
                if !(self.try_to_skip_string(it, ParseMode::IterateOnly)
                    || self.try_to_skip_whitespace(it, ParseMode::IterateOnly))
                {
                    it.next();
                }
                return;
            }
        };
        it.next();
        self.generic_skip_until_after(it, closing);
    }
}

impl Language for SystemVerilog {
    fn get_code_elements(
        &self,
        buffer: &TokenBuffer,
        cancel: &CancellationToken,
    ) -> ParseResult<Vec<Element>> {
        let mut elements = vec![Element::root(self.syntax.id, self.syntax.default_child_access)];
        let scope = SymbolPath::global();
        let mut it = buffer.first();

        while it.is_in_bounds() {
            if cancel.is_cancelled() {
                warn!("[VERILOG] parse cancelled at line {}", it.line());
                return Err(ParseError::Cancelled);
            }
            self.parse_item(&mut it, &mut elements, &scope, &[]);
        }

        debug!("[VERILOG] extracted {} elements", elements.len());
        Ok(elements)
    }

    fn syntax_highlight(&self, buffer: &TokenBuffer) {
        self.highlight(buffer);
    }

    /// Ports are the main parameter list, so a module's parameter ports
    /// stay in a section of their own
    fn parse_prototype(&self, text: &str, kind: KindId) -> ParsedPrototype {
        let buffer = TokenBuffer::new(text);
        let is = |keywords: &[&str]| self.kinds.is_any_of(kind, keywords, self.syntax.id);
        let mode = ParseMode::ParsePrototype;
        let mut scratch = Vec::new();
        let global = SymbolPath::global();

        let parsed = (is(&["module", "program", "interface", "package", "class"])
            && self.try_to_skip_design_unit(&mut buffer.first(), mode, &mut scratch, &global))
            || (is(&["function", "task"])
                && self.try_to_skip_subroutine(&mut buffer.first(), mode, &mut scratch, &global))
            || (is(&["variable", "constant", "type"])
                && self.try_to_skip_data_declaration(&mut buffer.first(), mode, &mut scratch, &global));

        if !parsed {
            trace!("[VERILOG] no dedicated prototype matcher for {:?}", kind);
            return parse_generic_prototype(self, text);
        }
        let prototype = ParsedPrototype::from_buffer(&buffer, ParameterStyle::C);
        match prototype.sections().iter().rposition(|section| section.parameters.is_some()) {
            Some(main) => prototype.with_main_section(main),
            None => prototype,
        }
    }
}

impl std::fmt::Debug for SystemVerilog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemVerilog").field("syntax", &self.syntax).finish()
    }
}
