//! Language grammars
//!
//! Each grammar is a [`BaseGrammar`] that overrides the lexical primitives
//! its language needs and adds its own matchers:
//! - `csharp` - the object-oriented grammar: brace blocks, namespaces, types, members
//! - `verilog` - the hardware-description grammar: keyword-delimited blocks, ports
//!
//! [`Language`] is the entry-point surface a driver calls; [`LanguageRegistry`]
//! selects one by name or file extension.

pub mod csharp;
pub mod verilog;

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tokio_util::sync::CancellationToken;

use crate::base::{FilePosition, ScopeContext, SymbolPath};
use crate::hir::{Element, KindId, KindRegistry, innermost_open_parent};
use crate::prototype::ParsedPrototype;

use super::buffer::TokenBuffer;
use super::cursor::Cursor;
use super::annotations::PrototypeRole;
use super::errors::{ParseError, ParseResult};
use super::language::normalize_extension;
use super::lexer::FundamentalKind;
use super::mode::ParseMode;
use super::primitives::BaseGrammar;

pub use csharp::CSharp;
pub use verilog::SystemVerilog;

/// Entry points of one language grammar
pub trait Language: BaseGrammar + Send + Sync {
    /// Build the flat element list for a whole file, root element first.
    ///
    /// `cancel` is checked between top-level elements only.
    fn get_code_elements(
        &self,
        buffer: &TokenBuffer,
        cancel: &CancellationToken,
    ) -> ParseResult<Vec<Element>>;

    /// Write highlight kinds over the whole buffer
    fn syntax_highlight(&self, buffer: &TokenBuffer);

    /// Classify an isolated declaration signature of the given kind
    fn parse_prototype(&self, text: &str, kind: KindId) -> ParsedPrototype;
}

/// Clear what a failed attempt annotated between `start` and `lookahead` and report failure
pub(crate) fn reject(start: &Cursor<'_>, lookahead: &Cursor<'_>, mode: ParseMode) -> bool {
    start.buffer().reset_between(start, lookahead, mode);
    false
}

/// Mark `start..end` with `role`, leaving out whitespace at either end
pub(crate) fn mark_trimmed(start: &Cursor<'_>, end: &Cursor<'_>, role: PrototypeRole) {
    let is_blank = |c: &Cursor<'_>| {
        matches!(c.fundamental(), FundamentalKind::Whitespace | FundamentalKind::LineBreak)
    };
    let mut first = *start;
    while first < *end && is_blank(&first) {
        first.next();
    }
    let mut last = *end;
    while last > first {
        let mut before = last;
        before.previous();
        if !is_blank(&before) {
            break;
        }
        last = before;
    }
    if first < last {
        first.set_prototype_role_to(&last, role);
    }
}

/// Scope context for a new parent: `scope` plus the using rules visible at `position`
pub(crate) fn child_context(
    elements: &[Element],
    position: FilePosition,
    scope: SymbolPath,
) -> ScopeContext {
    let mut context = ScopeContext::new(scope);
    if let Some(outer) = innermost_open_parent(elements, position)
        .and_then(|index| elements[index].child_context())
    {
        context.inherit_using_rules(outer);
    }
    context
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Languages by name, in registration order, with an extension index
#[derive(Default)]
pub struct LanguageRegistry {
    by_name: IndexMap<SmolStr, Arc<dyn Language>>,
    by_extension: IndexMap<SmolStr, SmolStr>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the C# and SystemVerilog grammars
    pub fn with_builtins(kinds: Arc<dyn KindRegistry>) -> Self {
        let mut registry = Self::new();
        let builtins: [Arc<dyn Language>; 2] = [
            Arc::new(CSharp::new(kinds.clone())),
            Arc::new(SystemVerilog::new(kinds)),
        ];
        for language in builtins {
            let registered = registry.register(language);
            debug_assert!(registered.is_ok(), "built-in language rejected: {:?}", registered);
        }
        registry
    }

    /// Add a language. Extensions already claimed keep their first owner.
    pub fn register(&mut self, language: Arc<dyn Language>) -> ParseResult<()> {
        let syntax = language.syntax();
        let key = name_key(&syntax.name);
        if self.by_name.contains_key(&key) {
            return Err(ParseError::duplicate_language(syntax.name.as_str()));
        }
        for extension in &syntax.extensions {
            self.by_extension
                .entry(extension.clone())
                .or_insert_with(|| key.clone());
        }
        self.by_name.insert(key, language);
        Ok(())
    }

    /// Case-insensitive lookup by name
    pub fn by_name(&self, name: &str) -> ParseResult<Arc<dyn Language>> {
        self.by_name
            .get(&name_key(name))
            .cloned()
            .ok_or_else(|| ParseError::unknown_language(name))
    }

    /// Lookup by file extension, with or without the leading dot
    pub fn by_extension(&self, extension: &str) -> ParseResult<Arc<dyn Language>> {
        self.by_extension
            .get(&normalize_extension(extension))
            .and_then(|name| self.by_name.get(name))
            .cloned()
            .ok_or_else(|| ParseError::unknown_extension(extension))
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.values().map(|language| language.syntax().name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl std::fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("languages", &self.by_name.keys().collect::<Vec<_>>())
            .field("extensions", &self.by_extension)
            .finish()
    }
}

fn name_key(name: &str) -> SmolStr {
    SmolStr::new(name.trim().to_lowercase())
}
