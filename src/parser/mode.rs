//! Execution modes shared by every matcher.

/// What a successful match records.
///
/// Matchers receive the mode explicitly; there is no implied default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Advance only, write nothing
    #[default]
    IterateOnly,
    /// Append elements and topics to the accumulator and track scope
    CreateElements,
    /// Write highlight kinds
    SyntaxHighlight,
    /// Write prototype roles over an isolated declaration signature
    ParsePrototype,
}

impl ParseMode {
    /// Decode a raw mode value. Unknown values behave as `IterateOnly`.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::CreateElements,
            2 => Self::SyntaxHighlight,
            3 => Self::ParsePrototype,
            _ => Self::IterateOnly,
        }
    }

    /// Whether the mode writes a per-token annotation slot
    pub fn annotates(self) -> bool {
        matches!(self, Self::SyntaxHighlight | Self::ParsePrototype)
    }

    pub fn is_highlight(self) -> bool {
        self == Self::SyntaxHighlight
    }

    pub fn is_prototype(self) -> bool {
        self == Self::ParsePrototype
    }

    pub fn creates_elements(self) -> bool {
        self == Self::CreateElements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_raw_modes_iterate_only() {
        assert_eq!(ParseMode::from_raw(3), ParseMode::ParsePrototype);
        assert_eq!(ParseMode::from_raw(0), ParseMode::IterateOnly);
        assert_eq!(ParseMode::from_raw(42), ParseMode::IterateOnly);
        assert!(!ParseMode::from_raw(200).annotates());
    }
}
