use super::*;

// =============================================================================
// Keyword tables
// =============================================================================

/// Reserved and contextual keywords, highlighted as Keyword
pub static KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
        "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
        "virtual", "void", "volatile", "while",
        // contextual
        "get", "set", "var", "alias", "partial", "dynamic", "yield", "where", "add", "remove",
        "value", "async", "await", "nameof", "when", "unmanaged", "notnull", "global", "with",
        "init", "record", "and", "or", "not", "nint", "nuint", "managed",
        // query expressions
        "from", "let", "join", "on", "equals", "into", "orderby", "ascending", "descending",
        "select", "group", "by",
    ]
    .into_iter()
    .collect()
});

/// Modifiers that do not affect access
pub static NON_ACCESS_MODIFIERS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "new", "abstract", "sealed", "static", "partial", "readonly", "volatile", "virtual",
        "override", "extern", "unsafe", "async", "ref", "fixed", "required", "file",
    ]
    .into_iter()
    .collect()
});

/// Types the language defines itself
pub static BUILT_IN_TYPES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "byte", "sbyte", "int", "uint", "short", "ushort", "long", "ulong", "float", "double",
        "decimal", "char", "string", "bool", "void", "object", "dynamic", "nint", "nuint",
        "delegate", "managed", "unmanaged",
    ]
    .into_iter()
    .collect()
});

/// Keywords that start declarations other matchers own
pub(super) const FOREIGN_DECLARATION_KEYWORDS: &[&str] =
    &["const", "event", "implicit", "explicit", "enum", "using", "delegate"];

pub(super) fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}
