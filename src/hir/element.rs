//! Code elements and the topics they carry.
//!
//! Elements form a flat, source-ordered list. Nesting is implied by ranges:
//! a parent element's range encloses its children's.

use crate::base::{AccessLevel, FilePosition, LanguageId, ScopeContext, Span, SymbolPath, UsingRule};

use super::registry::KindId;

// ============================================================================
// TOPIC
// ============================================================================

/// The documentable unit derived from an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub title: String,
    pub symbol: SymbolPath,
    pub prototype: Option<String>,
    /// Declaring keyword, e.g. `class` or `function`
    pub keyword: String,
    /// Resolved via the kind registry; `KindId::NONE` when not documentable
    pub kind: KindId,
    pub access: AccessLevel,
    /// 1-based source line of the declaration
    pub line: usize,
    pub language: LanguageId,
    /// Whether the topic is documented as part of its parent, like enum values
    pub is_embedded: bool,
}

impl Topic {
    pub fn new(title: impl Into<String>, symbol: SymbolPath, keyword: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            symbol,
            prototype: None,
            keyword: keyword.into(),
            kind: KindId::NONE,
            access: AccessLevel::Unknown,
            line: 0,
            language: LanguageId::NONE,
            is_embedded: false,
        }
    }

    pub fn with_prototype(mut self, prototype: impl Into<String>) -> Self {
        self.prototype = Some(prototype.into());
        self
    }

    pub fn with_kind(mut self, kind: KindId) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn in_language(mut self, language: LanguageId) -> Self {
        self.language = language;
        self
    }

    pub fn embedded(mut self) -> Self {
        self.is_embedded = true;
        self
    }

    pub fn is_documentable(&self) -> bool {
        !self.kind.is_none()
    }
}

// ============================================================================
// ELEMENTS
// ============================================================================

/// Scope-related data carried by elements that can have children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentElement {
    pub is_root: bool,
    pub child_context: ScopeContext,
    pub default_declared_child_access: AccessLevel,
    pub maximum_effective_child_access: AccessLevel,
    pub default_child_language: LanguageId,
}

impl ParentElement {
    pub fn new(child_context: ScopeContext) -> Self {
        Self {
            is_root: false,
            child_context,
            default_declared_child_access: AccessLevel::Unknown,
            maximum_effective_child_access: AccessLevel::Unknown,
            default_child_language: LanguageId::NONE,
        }
    }

    pub fn with_default_access(mut self, access: AccessLevel) -> Self {
        self.default_declared_child_access = access;
        self
    }

    pub fn with_maximum_access(mut self, access: AccessLevel) -> Self {
        self.maximum_effective_child_access = access;
        self
    }
}

/// A recognized source construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub position: FilePosition,
    end: Option<FilePosition>,
    pub in_code: bool,
    pub topic: Option<Topic>,
    pub parent: Option<ParentElement>,
}

impl Element {
    /// A leaf element in code
    pub fn new(position: FilePosition) -> Self {
        Self {
            position,
            end: None,
            in_code: true,
            topic: None,
            parent: None,
        }
    }

    /// An element that scopes children; its end is set later with [`Element::close`]
    pub fn new_parent(position: FilePosition, parent: ParentElement) -> Self {
        Self {
            parent: Some(parent),
            ..Self::new(position)
        }
    }

    /// The per-file root: in code, sentinel end, public at most
    pub fn root(language: LanguageId, default_child_access: AccessLevel) -> Self {
        let mut parent = ParentElement::new(ScopeContext::default())
            .with_default_access(default_child_access)
            .with_maximum_access(AccessLevel::Public);
        parent.is_root = true;
        parent.default_child_language = language;

        Self {
            end: Some(FilePosition::END_OF_FILE),
            ..Self::new_parent(FilePosition::new(1, 1), parent)
        }
    }

    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    pub fn end(&self) -> Option<FilePosition> {
        self.end
    }

    /// Finalize the end of the range. Only the first call has any effect.
    pub fn close(&mut self, end: FilePosition) {
        debug_assert!(self.end.is_none(), "element end set twice");
        if self.end.is_none() {
            self.end = Some(end);
        }
    }

    pub fn span(&self) -> Option<Span> {
        self.end.map(|end| Span::new(self.position, end))
    }

    pub fn is_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn is_root(&self) -> bool {
        self.parent.as_ref().is_some_and(|p| p.is_root)
    }

    /// Whether `position` is inside this element's range, treating an unset end as open
    pub fn is_open_at(&self, position: FilePosition) -> bool {
        self.position <= position && self.end.is_none_or(|end| end > position)
    }

    pub fn child_context(&self) -> Option<&ScopeContext> {
        self.parent.as_ref().map(|p| &p.child_context)
    }
}

// ============================================================================
// LIST HELPERS
// ============================================================================

/// Index of the innermost parent element still open at `position`.
///
/// Scans backwards, so the most recently opened parent wins.
pub fn innermost_open_parent(elements: &[Element], position: FilePosition) -> Option<usize> {
    elements
        .iter()
        .rposition(|e| e.is_parent() && e.is_open_at(position))
}

/// Append a using rule to the innermost parent open at `position`
pub fn add_using_rule(elements: &mut [Element], position: FilePosition, rule: UsingRule) -> bool {
    let Some(index) = innermost_open_parent(elements, position) else {
        return false;
    };
    match elements[index].parent.as_mut() {
        Some(parent) => {
            parent.child_context.add_using_rule(rule);
            true
        }
        None => false,
    }
}

/// Indices of the immediate children of the element at `parent`
pub fn children_of(elements: &[Element], parent: usize) -> Vec<usize> {
    let Some(span) = elements.get(parent).and_then(Element::span) else {
        return Vec::new();
    };
    let mut children = Vec::new();
    let mut index = parent + 1;
    while index < elements.len() && span.contains(elements[index].position) {
        children.push(index);
        index = match elements[index].span() {
            Some(child) if elements[index].is_parent() => elements[index + 1..]
                .iter()
                .position(|e| !child.contains(e.position))
                .map_or(elements.len(), |offset| index + 1 + offset),
            _ => index + 1,
        };
    }
    children
}
