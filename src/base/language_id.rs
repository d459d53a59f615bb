/// Identifier of a registered language, stable for the life of a registry.
///
/// `LanguageId(0)` is never assigned to a real language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageId(pub u16);

impl LanguageId {
    pub const NONE: LanguageId = LanguageId(0);

    pub fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn index(self) -> u16 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u16> for LanguageId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}
