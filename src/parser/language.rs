//! Per-language syntax descriptor
//!
//! A `LanguageSyntax` is built once when a grammar is constructed and never
//! changes afterwards, so it can be shared between concurrent parses.

use smol_str::SmolStr;

use crate::base::{AccessLevel, LanguageId};

/// Lexical facts about one language that the shared primitives need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSyntax {
    pub name: SmolStr,
    pub id: LanguageId,
    /// File extensions without the leading dot, lowercase
    pub extensions: Vec<SmolStr>,
    pub line_comments: Vec<SmolStr>,
    /// Opening and closing symbol pairs
    pub block_comments: Vec<(SmolStr, SmolStr)>,
    pub case_sensitive: bool,
    /// Separator used when formatting symbols, `.` or `::`
    pub member_operator: SmolStr,
    /// Symbol that continues a statement on the next line, like `_` in Basic
    pub line_extender: Option<SmolStr>,
    /// Declared access of root-level children that do not state one
    pub default_child_access: AccessLevel,
}

impl LanguageSyntax {
    pub fn new(name: &str, id: LanguageId) -> Self {
        Self {
            name: SmolStr::new(name),
            id,
            extensions: Vec::new(),
            line_comments: Vec::new(),
            block_comments: Vec::new(),
            case_sensitive: true,
            member_operator: SmolStr::new_static("."),
            line_extender: None,
            default_child_access: AccessLevel::Public,
        }
    }

    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions
            .extend(extensions.iter().map(|e| normalize_extension(e)));
        self
    }

    pub fn with_line_comment(mut self, symbol: &str) -> Self {
        self.line_comments.push(SmolStr::new(symbol));
        self
    }

    pub fn with_block_comment(mut self, opening: &str, closing: &str) -> Self {
        self.block_comments
            .push((SmolStr::new(opening), SmolStr::new(closing)));
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    pub fn with_member_operator(mut self, operator: &str) -> Self {
        self.member_operator = SmolStr::new(operator);
        self
    }

    pub fn with_line_extender(mut self, extender: &str) -> Self {
        self.line_extender = Some(SmolStr::new(extender));
        self
    }

    pub fn with_default_child_access(mut self, access: AccessLevel) -> Self {
        self.default_child_access = access;
        self
    }

    /// Whether token comparisons ignore case
    pub fn ignore_case(&self) -> bool {
        !self.case_sensitive
    }

    /// Case-insensitive, tolerates a leading dot
    pub fn handles_extension(&self, extension: &str) -> bool {
        let extension = normalize_extension(extension);
        self.extensions.contains(&extension)
    }
}

pub(crate) fn normalize_extension(extension: &str) -> SmolStr {
    SmolStr::new(extension.trim().trim_start_matches('.').to_ascii_lowercase())
}
