//! Per-token annotation kinds
//!
//! Each token has one independent slot per kind. The slots start unset and
//! are written by matchers running in the corresponding [`ParseMode`].
//!
//! [`ParseMode`]: super::ParseMode

/// Highlight kinds consumed by a presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Keyword,
    Comment,
    String,
    Number,
    Metadata,
    PreprocessingDirective,
}

impl HighlightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Comment => "comment",
            Self::String => "string",
            Self::Number => "number",
            Self::Metadata => "metadata",
            Self::PreprocessingDirective => "preprocessing-directive",
        }
    }
}

/// Role of a token inside an isolated declaration signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrototypeRole {
    // =========================================================================
    // NAMES AND TYPES
    // =========================================================================
    Name,
    Type,
    TypeModifier,
    TypeQualifier,
    ParamModifier,
    KeywordName,
    /// Symbols before a name that belong to the type, like `*` in `int *x`
    NamePrefixPartOfType,
    /// Symbols after a name that belong to the type, like `[]` in `int x[]`
    NameSuffixPartOfType,
    /// Separator between name and type in Pascal-style parameters, `x: int`
    NameTypeSeparator,

    // =========================================================================
    // PARAMETERS
    // =========================================================================
    StartOfParams,
    EndOfParams,
    ParamSeparator,
    DefaultValueSeparator,
    DefaultValue,

    // =========================================================================
    // BRACKETED MODIFIERS
    // =========================================================================
    OpeningTypeModifier,
    ClosingTypeModifier,
    OpeningParamModifier,
    ClosingParamModifier,
    OpeningExtensionSymbol,
    ClosingExtensionSymbol,

    // =========================================================================
    // SECTIONS AND PROPERTIES
    // =========================================================================
    StartOfPrototypeSection,
    EndOfPrototypeSection,
    PropertyValueSeparator,
    PropertyValue,

    // =========================================================================
    // TUPLES
    // =========================================================================
    StartOfTuple,
    EndOfTuple,
    TupleMemberSeparator,
    TupleMemberName,
}

impl PrototypeRole {
    /// Whether the role marks a parameter list boundary
    pub fn is_param_boundary(&self) -> bool {
        matches!(
            self,
            Self::StartOfParams | Self::EndOfParams | Self::ParamSeparator
        )
    }
}

/// Comment boundary markers, written while normalizing prototypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentRole {
    CommentSymbol,
    CommentContent,
}
