//! Scope context: the current scope plus the aliasing rules in effect.

use super::symbol::SymbolPath;

/// One `using`/`import` directive in normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsingRule {
    /// `using A.B;` lets `Symbol` be read as `A.B.Symbol`
    AddPrefix(SymbolPath),
    /// `using X = A.B;` lets `X.Symbol` be read as `A.B.Symbol`
    ReplacePrefix { remove: SymbolPath, add: SymbolPath },
}

impl UsingRule {
    /// Candidate interpretations of `symbol` under this rule
    pub fn apply(&self, symbol: &SymbolPath) -> Option<SymbolPath> {
        match self {
            Self::AddPrefix(prefix) => Some(prefix + symbol),
            Self::ReplacePrefix { remove, add } => {
                if !symbol.starts_with(remove) {
                    return None;
                }
                let rest = symbol.segments().skip(remove.len());
                Some(add + &SymbolPath::from_segments(rest))
            }
        }
    }
}

/// The [`SymbolPath`] in effect at a point in a file plus visible aliasing rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScopeContext {
    pub scope: SymbolPath,
    using: Vec<UsingRule>,
}

impl ScopeContext {
    pub fn new(scope: SymbolPath) -> Self {
        Self {
            scope,
            using: Vec::new(),
        }
    }

    pub fn using_rules(&self) -> &[UsingRule] {
        &self.using
    }

    pub fn has_using_rules(&self) -> bool {
        !self.using.is_empty()
    }

    /// Add a rule unless an identical one is already present
    pub fn add_using_rule(&mut self, rule: UsingRule) {
        if !self.using.contains(&rule) {
            self.using.push(rule);
        }
    }

    /// Copy rules from an enclosing context so they stay visible in a nested scope
    pub fn inherit_using_rules(&mut self, outer: &ScopeContext) {
        for rule in &outer.using {
            self.add_using_rule(rule.clone());
        }
    }

    pub fn is_global(&self) -> bool {
        self.scope.is_global()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_prefix_applies_only_on_match() {
        let rule = UsingRule::ReplacePrefix {
            remove: SymbolPath::from_text("Alias"),
            add: SymbolPath::from_text("System.Text"),
        };
        assert_eq!(
            rule.apply(&SymbolPath::from_text("Alias.Builder")),
            Some(SymbolPath::from_text("System.Text.Builder"))
        );
        assert_eq!(rule.apply(&SymbolPath::from_text("Other.Builder")), None);
    }

    #[test]
    fn test_duplicate_rules_are_ignored() {
        let mut context = ScopeContext::new(SymbolPath::from_text("N"));
        context.add_using_rule(UsingRule::AddPrefix(SymbolPath::from_text("System")));
        context.add_using_rule(UsingRule::AddPrefix(SymbolPath::from_text("System")));
        assert_eq!(context.using_rules().len(), 1);
    }
}
