//! Declared and effective access levels.

/// Visibility of a declaration as written in source.
///
/// `Unknown` means the declaration carried no access modifier; the parent's
/// default applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    #[default]
    Unknown,
    Private,
    PrivateProtected,
    Protected,
    Internal,
    ProtectedInternal,
    Public,
}

impl AccessLevel {
    /// Get string representation as it appears in C#-like source
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Private => "private",
            Self::PrivateProtected => "private protected",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedInternal => "protected internal",
            Self::Public => "public",
        }
    }

    /// Fold another access keyword into this one.
    ///
    /// `protected` and `internal` combine into `protected internal`,
    /// `private` and `protected` into `private protected`. Any other
    /// combination keeps the most recent keyword.
    pub fn combine(self, next: AccessLevel) -> AccessLevel {
        match (self, next) {
            (Self::Protected, Self::Internal) | (Self::Internal, Self::Protected) => {
                Self::ProtectedInternal
            }
            (Self::Private, Self::Protected) | (Self::Protected, Self::Private) => {
                Self::PrivateProtected
            }
            (_, next) => next,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_modifiers() {
        assert_eq!(
            AccessLevel::Protected.combine(AccessLevel::Internal),
            AccessLevel::ProtectedInternal
        );
        assert_eq!(
            AccessLevel::Private.combine(AccessLevel::Protected),
            AccessLevel::PrivateProtected
        );
        assert_eq!(
            AccessLevel::Unknown.combine(AccessLevel::Public),
            AccessLevel::Public
        );
    }
}
