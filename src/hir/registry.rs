//! Keyword → documentable kind registry.
//!
//! Loading the table from configuration files happens elsewhere; the parser
//! only needs lookups. [`KeywordTable`] is the in-memory implementation.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::LanguageId;

/// Identifier of a documentable kind. `KindId::NONE` means the keyword is
/// recognized grammatically but produces no documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KindId(pub u32);

impl KindId {
    pub const NONE: KindId = KindId(0);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for KindId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Maps declaration keywords to documentable kinds.
///
/// Implementations are shared read-only between concurrent parses.
pub trait KindRegistry: Send + Sync {
    /// Kind for `keyword` in `language`, `KindId::NONE` if it has none
    fn id_from_keyword(&self, keyword: &str, language: LanguageId) -> KindId;

    /// Whether `kind` is the kind of any of `keywords` in `language`
    fn is_any_of(&self, kind: KindId, keywords: &[&str], language: LanguageId) -> bool {
        !kind.is_none()
            && keywords
                .iter()
                .any(|keyword| self.id_from_keyword(keyword, language) == kind)
    }
}

/// Case-insensitive keyword table, optionally overridden per language
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    global: FxHashMap<SmolStr, KindId>,
    per_language: FxHashMap<(LanguageId, SmolStr), KindId>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a keyword for every language
    pub fn with(mut self, keyword: &str, kind: impl Into<KindId>) -> Self {
        self.insert(keyword, kind.into());
        self
    }

    /// Register a keyword for one language only
    pub fn with_for_language(
        mut self,
        language: LanguageId,
        keyword: &str,
        kind: impl Into<KindId>,
    ) -> Self {
        self.per_language
            .insert((language, normalize(keyword)), kind.into());
        self
    }

    pub fn insert(&mut self, keyword: &str, kind: KindId) {
        self.global.insert(normalize(keyword), kind);
    }

    /// A table covering the keywords the built-in grammars declare with
    pub fn standard() -> Self {
        const KEYWORDS: &[(&str, u32)] = &[
            ("class", 1),
            ("struct", 1),
            ("interface", 2),
            ("record", 1),
            ("namespace", 3),
            ("package", 3),
            ("function", 4),
            ("delegate", 5),
            ("operator", 6),
            ("constructor", 7),
            ("destructor", 8),
            ("variable", 9),
            ("constant", 10),
            ("event", 11),
            ("property", 12),
            ("enum", 13),
            ("type", 14),
            ("module", 15),
            ("program", 15),
            ("task", 4),
        ];
        let mut table = Self::new();
        for (keyword, kind) in KEYWORDS {
            table.insert(keyword, KindId(*kind));
        }
        table
    }
}

fn normalize(keyword: &str) -> SmolStr {
    SmolStr::new(keyword.trim().to_ascii_lowercase())
}

impl KindRegistry for KeywordTable {
    fn id_from_keyword(&self, keyword: &str, language: LanguageId) -> KindId {
        let key = normalize(keyword);
        if let Some(kind) = self.per_language.get(&(language, key.clone())) {
            return *kind;
        }
        self.global.get(&key).copied().unwrap_or(KindId::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = KeywordTable::new().with("Class", 3);
        assert_eq!(table.id_from_keyword("CLASS", LanguageId(1)), KindId(3));
        assert_eq!(table.id_from_keyword("namespace", LanguageId(1)), KindId::NONE);
    }

    #[test]
    fn test_language_override_wins() {
        let table = KeywordTable::new()
            .with("package", 3)
            .with_for_language(LanguageId(2), "package", 9);
        assert_eq!(table.id_from_keyword("package", LanguageId(1)), KindId(3));
        assert_eq!(table.id_from_keyword("package", LanguageId(2)), KindId(9));
    }

    #[test]
    fn test_is_any_of_ignores_none() {
        let table = KeywordTable::new().with("function", 4);
        assert!(table.is_any_of(KindId(4), &["variable", "function"], LanguageId(1)));
        assert!(!table.is_any_of(KindId::NONE, &["namespace"], LanguageId(1)));
    }
}
