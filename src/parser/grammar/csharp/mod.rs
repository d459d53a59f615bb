//! C# grammar
//!
//! Recognizes the declarations that produce code elements:
//! - `using` directives and aliases, namespaces (block and file-scoped)
//! - classes, structs, interfaces and records, with record parameter properties
//! - functions, delegates, operators, conversion operators, constructors, destructors
//! - variables, constants, events, properties, indexers and enums
//!
//! Matchers live in submodules as inherent `impl CSharp` blocks and share
//! imports through `use super::*;`.

mod declarations;
mod highlight;
mod keywords;
mod lexical;
mod members;
mod modifiers;
mod types;

// Shared imports for submodules
pub(super) use std::sync::{Arc, LazyLock};

pub(super) use rustc_hash::FxHashSet;
pub(super) use tracing::{debug, trace, warn};

pub(super) use super::{Language, child_context, mark_trimmed, reject};
pub(super) use crate::base::{AccessLevel, LanguageId, SymbolPath, UsingRule};
pub(super) use crate::hir::{Element, KindId, KindRegistry, ParentElement, Topic, add_using_rule};
pub(super) use crate::parser::{
    BaseGrammar, Cursor, FundamentalKind, HighlightKind, LanguageSyntax, ParseError, ParseMode,
    ParseResult, PrototypeRole, TokenBuffer,
};
pub(super) use crate::prototype::{ParameterStyle, ParsedPrototype, parse_generic_prototype};

pub(super) use self::keywords::*;
pub(super) use self::modifiers::AttributeTarget;

pub use self::keywords::{BUILT_IN_TYPES, KEYWORDS, NON_ACCESS_MODIFIERS};

use tokio_util::sync::CancellationToken;

/// The C# grammar
pub struct CSharp {
    syntax: LanguageSyntax,
    kinds: Arc<dyn KindRegistry>,
}

impl CSharp {
    pub const ID: LanguageId = LanguageId(1);

    pub fn new(kinds: Arc<dyn KindRegistry>) -> Self {
        let syntax = LanguageSyntax::new("C#", Self::ID)
            .with_extensions(&["cs", "csx"])
            .with_line_comment("//")
            .with_block_comment("/*", "*/")
            .with_default_child_access(AccessLevel::Internal);
        Self { syntax, kinds }
    }

    /// Whether `name` is a type the language defines itself
    pub fn is_built_in_type(&self, name: &str) -> bool {
        BUILT_IN_TYPES.contains(name)
    }

    /// Documentable kind of a declaring keyword
    fn kind_of(&self, keyword: &str) -> KindId {
        self.kinds.id_from_keyword(keyword, self.syntax.id)
    }

    /// A topic for a declaration starting at `start`, or `None` when `keyword` is not documentable
    fn topic(
        &self,
        keyword: &str,
        title: impl Into<String>,
        symbol: SymbolPath,
        start: &Cursor<'_>,
    ) -> Option<Topic> {
        let kind = self.kind_of(keyword);
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

    /// Elements from a position after `{` through the matching `}`
    fn parse_body(&self, it: &mut Cursor<'_>, elements: &mut Vec<Element>, scope: &SymbolPath) {
        while it.is_in_bounds() {
            if it.character() == '}' {
                it.next();
                break;
            }
            self.parse_next(it, elements, scope);
        }
    }

    /// Elements through the end of the text, for file-scoped namespaces
    fn parse_to_end(&self, it: &mut Cursor<'_>, elements: &mut Vec<Element>, scope: &SymbolPath) {
        while it.is_in_bounds() {
            self.parse_next(it, elements, scope);
        }
    }

    /// Try each declaration at the cursor in turn, skipping the statement when none match
    fn parse_next(&self, it: &mut Cursor<'_>, elements: &mut Vec<Element>, scope: &SymbolPath) {
        let mode = ParseMode::CreateElements;
        let matched = self.try_to_skip_whitespace(it, ParseMode::IterateOnly)
            || self.try_to_skip_preprocessing_directive(it, ParseMode::IterateOnly)
            || self.try_to_skip_using(it, mode, elements)
            || self.try_to_skip_namespace(it, mode, elements, scope)
            || self.try_to_skip_class(it, mode, elements, scope)
            || self.try_to_skip_function(it, mode, elements, scope)
            || self.try_to_skip_constructor(it, mode, elements, scope)
            || self.try_to_skip_variable(it, mode, elements, scope)
            || self.try_to_skip_property(it, mode, elements, scope)
            || self.try_to_skip_enum(it, mode, elements, scope)
            || self.try_to_skip_conversion_operator(it, mode, elements, scope)
            // A single attribute, since a global one may precede a local one
            // that belongs to the next declaration
            || self.try_to_skip_attribute(it, AttributeTarget::Any, ParseMode::IterateOnly, PrototypeRole::TypeModifier);

        if !matched {
            trace!("[CSHARP] no declaration at line {}, skipping statement", it.line());
            self.skip_rest_of_statement(it);
        }
    }
}

impl BaseGrammar for CSharp {
    fn syntax(&self) -> &LanguageSyntax {
        &self.syntax
    }

    fn try_to_skip_string(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        self.try_to_skip_csharp_string(it, mode)
    }

    fn try_to_skip_number(&self, it: &mut Cursor<'_>, mode: ParseMode) -> bool {
        self.try_to_skip_csharp_number(it, mode)
    }

    /// Angle brackets are not blocks here; `<` is skipped on its own
    fn generic_skip(&self, it: &mut Cursor<'_>) {
        let closing = match it.character() {
            '(' => ')',
            '[' => ']',
            '{' => '}',
            '<' => {
                it.next();
                return;
            }
            _ => {
                if !(self.try_to_skip_string(it, ParseMode::IterateOnly)
                    || self.try_to_skip_whitespace(it, ParseMode::IterateOnly)
                    || self.try_to_skip_preprocessing_directive(it, ParseMode::IterateOnly))
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

impl Language for CSharp {
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
                warn!("[CSHARP] parse cancelled at line {}", it.line());
                return Err(ParseError::Cancelled);
            }
            self.parse_next(&mut it, &mut elements, &scope);
        }

        debug!("[CSHARP] extracted {} elements", elements.len());
        Ok(elements)
    }

    fn syntax_highlight(&self, buffer: &TokenBuffer) {
        self.highlight(buffer);
    }

    fn parse_prototype(&self, text: &str, kind: KindId) -> ParsedPrototype {
        let buffer = TokenBuffer::new(text);
        let is = |keywords: &[&str]| self.kinds.is_any_of(kind, keywords, self.syntax.id);
        let mode = ParseMode::ParsePrototype;
        let mut scratch = Vec::new();
        let global = SymbolPath::global();

        let parsed = (is(&["function", "delegate", "operator"])
            && self.try_to_skip_function(&mut buffer.first(), mode, &mut scratch, &global))
            || (is(&["variable", "constant", "event"])
                && self.try_to_skip_variable(&mut buffer.first(), mode, &mut scratch, &global))
            || (is(&["property", "operator", "function", "event"])
                && self.try_to_skip_property(&mut buffer.first(), mode, &mut scratch, &global))
            || (is(&["function", "constructor", "destructor"])
                && self.try_to_skip_constructor(&mut buffer.first(), mode, &mut scratch, &global))
            || (is(&["class", "struct", "interface", "record", "type"])
                && self.try_to_skip_class(&mut buffer.first(), mode, &mut scratch, &global))
            || (is(&["enum", "type"])
                && self.try_to_skip_enum(&mut buffer.first(), mode, &mut scratch, &global))
            || (is(&["operator", "function"])
                && self.try_to_skip_conversion_operator(
                    &mut buffer.first(),
                    mode,
                    &mut scratch,
                    &global,
                ));

        if parsed {
            ParsedPrototype::from_buffer(&buffer, ParameterStyle::C)
        } else {
            trace!("[CSHARP] no dedicated prototype matcher for {:?}", kind);
            parse_generic_prototype(self, text)
        }
    }
}

impl std::fmt::Debug for CSharp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CSharp").field("syntax", &self.syntax).finish()
    }
}
