//! Structured view of a marked prototype
//!
//! A [`ParsedPrototype`] is a snapshot of a token buffer after prototype
//! marking. It owns its text and roles, so it can outlive the buffer and be
//! sent across threads.

use std::ops::Range;

use text_size::TextRange;

use crate::base::AccessLevel;
use crate::parser::{FundamentalKind, PrototypeRole, TokenBuffer};

/// How parameters order their name and type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParameterStyle {
    /// `int x`: modifiers, type, then name
    #[default]
    C,
    /// `x: int`: name, separator, then type
    Pascal,
}

/// One token of the prototype with the role marking gave it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrototypeToken {
    pub range: TextRange,
    pub kind: FundamentalKind,
    pub role: Option<PrototypeRole>,
}

impl PrototypeToken {
    fn is_whitespace(&self) -> bool {
        matches!(self.kind, FundamentalKind::Whitespace | FundamentalKind::LineBreak)
    }
}

/// Token ranges of a section that contains a parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterList {
    /// From the section start through the opening bracket
    pub before: Range<usize>,
    /// Each parameter without separators or surrounding whitespace
    pub parameters: Vec<Range<usize>>,
    /// From the closing bracket to the section end
    pub after: Range<usize>,
}

/// A whitespace-trimmed token range of the prototype
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub tokens: Range<usize>,
    pub parameters: Option<ParameterList>,
}

impl Section {
    fn has_role(&self, tokens: &[PrototypeToken], wanted: &[PrototypeRole]) -> bool {
        tokens[self.tokens.clone()]
            .iter()
            .any(|t| t.role.is_some_and(|role| wanted.contains(&role)))
    }
}

/// A declaration signature with every token classified by role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrototype {
    text: String,
    tokens: Vec<PrototypeToken>,
    style: ParameterStyle,
    sections: Vec<Section>,
    main_section: usize,
}

impl ParsedPrototype {
    /// Snapshot the roles currently written in `buffer`
    pub fn from_buffer(buffer: &TokenBuffer, style: ParameterStyle) -> Self {
        let tokens: Vec<PrototypeToken> = (0..buffer.len())
            .filter_map(|index| {
                buffer.range_at(index).map(|range| PrototypeToken {
                    range,
                    kind: buffer.kind_at(index),
                    role: buffer.prototype_role_at(index),
                })
            })
            .collect();
        let sections = compute_sections(&tokens);
        let main_section = find_main_section(&tokens, &sections);

        Self {
            text: buffer.raw_text().to_string(),
            tokens,
            style,
            sections,
            main_section,
        }
    }

    /// Override which section the parameter accessors read from
    pub fn with_main_section(mut self, index: usize) -> Self {
        if index < self.sections.len() {
            self.main_section = index;
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[PrototypeToken] {
        &self.tokens
    }

    pub fn style(&self) -> ParameterStyle {
        self.style
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn main_section_index(&self) -> usize {
        self.main_section
    }

    pub fn token_text(&self, index: usize) -> &str {
        self.tokens
            .get(index)
            .map_or("", |token| &self.text[token.range])
    }

    pub fn role_at(&self, index: usize) -> Option<PrototypeRole> {
        self.tokens.get(index).and_then(|token| token.role)
    }

    /// Text covered by a token range
    pub fn range_text(&self, range: Range<usize>) -> &str {
        let end = range.end.min(self.tokens.len());
        if range.start >= end {
            return "";
        }
        let span = TextRange::new(
            self.tokens[range.start].range.start(),
            self.tokens[end - 1].range.end(),
        );
        &self.text[span]
    }

    /// Adjacent tokens sharing a role, merged. Unmarked tokens are left out.
    pub fn marked_runs(&self) -> Vec<(PrototypeRole, &str)> {
        let mut runs = Vec::new();
        let mut index = 0;
        while index < self.tokens.len() {
            let Some(role) = self.tokens[index].role else {
                index += 1;
                continue;
            };
            let start = index;
            while index < self.tokens.len() && self.tokens[index].role == Some(role) {
                index += 1;
            }
            runs.push((role, self.range_text(start..index)));
        }
        runs
    }

    /// Every run marked with `role`, in order
    pub fn texts_with_role(&self, role: PrototypeRole) -> Vec<&str> {
        self.marked_runs()
            .into_iter()
            .filter(|(r, _)| *r == role)
            .map(|(_, text)| text)
            .collect()
    }

    // =========================================================================
    // PARAMETERS
    // =========================================================================

    pub fn parameter_list(&self) -> Option<&ParameterList> {
        self.sections
            .get(self.main_section)
            .and_then(|section| section.parameters.as_ref())
    }

    pub fn parameter_count(&self) -> usize {
        self.parameter_list().map_or(0, |list| list.parameters.len())
    }

    pub fn parameter_text(&self, index: usize) -> Option<&str> {
        self.parameter_range(index).map(|range| self.range_text(range))
    }

    pub fn parameter_name(&self, index: usize) -> Option<&str> {
        let range = self.parameter_range(index)?;
        self.find_run(range, &[PrototypeRole::Name])
            .map(|run| self.range_text(run))
    }

    /// The base type of a parameter, excluding modifiers.
    ///
    /// A parameter without its own type takes the nearest earlier one in C
    /// style (`int x, y`) and the nearest later one in Pascal style (`x, y: int`).
    pub fn parameter_base_type(&self, index: usize) -> Option<&str> {
        if let Some(found) = self.explicit_parameter_type(index) {
            return Some(found);
        }
        let count = self.parameter_count();
        match self.style {
            ParameterStyle::C => (0..index.min(count))
                .rev()
                .find_map(|i| self.explicit_parameter_type(i)),
            ParameterStyle::Pascal => (index + 1..count).find_map(|i| self.explicit_parameter_type(i)),
        }
    }

    pub fn parameter_default_value(&self, index: usize) -> Option<&str> {
        let range = self.parameter_range(index)?;
        self.find_run(range, &[PrototypeRole::DefaultValue])
            .map(|run| self.range_text(run))
    }

    /// Text before the parameters including the opening bracket, or the whole main section
    pub fn before_parameters(&self) -> &str {
        match (self.parameter_list(), self.sections.get(self.main_section)) {
            (Some(list), _) => self.range_text(list.before.clone()),
            (None, Some(section)) => self.range_text(section.tokens.clone()),
            (None, None) => "",
        }
    }

    /// Text from the closing bracket to the end of the main section
    pub fn after_parameters(&self) -> Option<&str> {
        self.parameter_list()
            .map(|list| self.range_text(list.after.clone()))
    }

    // =========================================================================
    // DECLARATION
    // =========================================================================

    /// The declared name, searched outside parameter lists, main section first
    pub fn name(&self) -> Option<&str> {
        self.find_outside_parameters(&[PrototypeRole::Name, PrototypeRole::KeywordName])
    }

    /// The declared type without modifiers, like the return type of a function
    pub fn base_type(&self) -> Option<&str> {
        self.find_outside_parameters(&[PrototypeRole::Type, PrototypeRole::TypeQualifier])
    }

    /// Access keywords marked as modifiers before the parameters
    pub fn access_level(&self) -> AccessLevel {
        let Some(section) = self.sections.get(self.main_section) else {
            return AccessLevel::Unknown;
        };
        let range = self
            .parameter_list()
            .map_or(section.tokens.clone(), |list| list.before.clone());

        let mut access = AccessLevel::Unknown;
        let mut previous_was_underscore = false;
        for index in range {
            let token = &self.tokens[index];
            if token.kind == FundamentalKind::Text
                && token.role == Some(PrototypeRole::TypeModifier)
                && !previous_was_underscore
            {
                let keyword = match self.token_text(index) {
                    "public" => AccessLevel::Public,
                    "private" => AccessLevel::Private,
                    "protected" => AccessLevel::Protected,
                    "internal" => AccessLevel::Internal,
                    _ => continue,
                };
                access = access.combine(keyword);
            } else {
                previous_was_underscore = self.token_text(index) == "_";
            }
        }
        access
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn parameter_range(&self, index: usize) -> Option<Range<usize>> {
        self.parameter_list()?.parameters.get(index).cloned()
    }

    fn explicit_parameter_type(&self, index: usize) -> Option<&str> {
        let range = self.parameter_range(index)?;
        self.find_run(range, &[PrototypeRole::Type, PrototypeRole::TypeQualifier])
            .map(|run| self.range_text(run))
    }

    fn find_run(&self, range: Range<usize>, roles: &[PrototypeRole]) -> Option<Range<usize>> {
        let matches = |index: usize| {
            self.tokens[index]
                .role
                .is_some_and(|role| roles.contains(&role))
        };
        let start = range.clone().find(|&index| matches(index))?;
        let end = (start..range.end)
            .find(|&index| !matches(index))
            .unwrap_or(range.end);
        Some(start..end)
    }

    fn find_outside_parameters(&self, roles: &[PrototypeRole]) -> Option<&str> {
        let order = std::iter::once(self.main_section)
            .chain((0..self.sections.len()).filter(|&i| i != self.main_section));
        for section_index in order {
            let Some(section) = self.sections.get(section_index) else {
                continue;
            };
            let regions = match &section.parameters {
                Some(list) => vec![list.before.clone(), list.after.clone()],
                None => vec![section.tokens.clone()],
            };
            if let Some(run) = regions
                .into_iter()
                .find_map(|region| self.find_run(region, roles))
            {
                return Some(self.range_text(run));
            }
        }
        None
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Split marked tokens into sections.
///
/// A section ends before a `StartOfPrototypeSection` run, after an
/// `EndOfPrototypeSection` run, and before a second parameter list.
pub(crate) fn compute_sections(tokens: &[PrototypeToken]) -> Vec<Section> {
    let role = |index: usize| tokens.get(index).and_then(|t| t.role);
    let mut bounds = Vec::new();
    let mut start = 0;
    let mut has_parameters = false;

    for index in 0..tokens.len() {
        let continues_run = |wanted| index > 0 && role(index - 1) == Some(wanted);
        match role(index) {
            Some(PrototypeRole::StartOfPrototypeSection)
                if index > start && !continues_run(PrototypeRole::StartOfPrototypeSection) =>
            {
                bounds.push(start..index);
                start = index;
                has_parameters = false;
            }
            Some(PrototypeRole::StartOfParams) if !continues_run(PrototypeRole::StartOfParams) => {
                if has_parameters && index > start {
                    bounds.push(start..index);
                    start = index;
                }
                has_parameters = true;
            }
            Some(PrototypeRole::EndOfPrototypeSection)
                if role(index + 1) != Some(PrototypeRole::EndOfPrototypeSection) =>
            {
                bounds.push(start..index + 1);
                start = index + 1;
                has_parameters = false;
            }
            _ => {}
        }
    }
    bounds.push(start..tokens.len());

    let sections: Vec<Section> = bounds
        .into_iter()
        .map(|range| trim_whitespace(tokens, range))
        .filter(|range| !range.is_empty())
        .map(|range| Section {
            parameters: parameter_list(tokens, range.clone()),
            tokens: range,
        })
        .collect();

    if sections.is_empty() {
        return vec![Section {
            tokens: 0..tokens.len(),
            parameters: None,
        }];
    }
    sections
}

fn parameter_list(tokens: &[PrototypeToken], range: Range<usize>) -> Option<ParameterList> {
    let is = |index: usize, role| tokens[index].role == Some(role);
    let opening = range
        .clone()
        .find(|&index| is(index, PrototypeRole::StartOfParams))?;
    let mut first = opening + 1;
    while first < range.end && is(first, PrototypeRole::StartOfParams) {
        first += 1;
    }
    let closing = (first..range.end)
        .find(|&index| is(index, PrototypeRole::EndOfParams))
        .unwrap_or(range.end);

    let mut parameters = Vec::new();
    let mut current = first;
    for index in first..closing {
        if is(index, PrototypeRole::ParamSeparator) {
            parameters.push(trim_whitespace(tokens, current..index));
            current = index + 1;
        }
    }
    parameters.push(trim_whitespace(tokens, current..closing));

    if parameters.last().is_some_and(Range::is_empty) {
        parameters.pop();
    }

    Some(ParameterList {
        before: range.start..first,
        parameters,
        after: closing..range.end,
    })
}

fn find_main_section(tokens: &[PrototypeToken], sections: &[Section]) -> usize {
    if sections.len() <= 1 {
        return 0;
    }
    sections
        .iter()
        .position(|s| s.has_role(tokens, &[PrototypeRole::Name, PrototypeRole::KeywordName]))
        .or_else(|| sections.iter().position(|s| s.parameters.is_some()))
        .unwrap_or(0)
}

fn trim_whitespace(tokens: &[PrototypeToken], range: Range<usize>) -> Range<usize> {
    let mut start = range.start;
    let mut end = range.end;
    while start < end && tokens[start].is_whitespace() {
        start += 1;
    }
    while end > start && tokens[end - 1].is_whitespace() {
        end -= 1;
    }
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(buffer: &TokenBuffer, from: usize, to: usize, role: PrototypeRole) {
        buffer.set_prototype_role_between(&buffer.cursor_at(from), &buffer.cursor_at(to), Some(role));
    }

    #[test]
    fn test_parameters_split_on_separators() {
        // int f ( int a , long b )
        let buffer = TokenBuffer::new("int f(int a, long b)");
        mark(&buffer, 0, 1, PrototypeRole::Type);
        mark(&buffer, 2, 3, PrototypeRole::Name);
        mark(&buffer, 3, 4, PrototypeRole::StartOfParams);
        mark(&buffer, 7, 8, PrototypeRole::ParamSeparator);
        mark(&buffer, 12, 13, PrototypeRole::EndOfParams);

        let parsed = ParsedPrototype::from_buffer(&buffer, ParameterStyle::C);
        assert_eq!(parsed.sections().len(), 1);
        assert_eq!(parsed.parameter_count(), 2);
        assert_eq!(parsed.parameter_text(0), Some("int a"));
        assert_eq!(parsed.parameter_text(1), Some("long b"));
        assert_eq!(parsed.before_parameters(), "int f(");
        assert_eq!(parsed.after_parameters(), Some(")"));
        assert_eq!(parsed.name(), Some("f"));
        assert_eq!(parsed.base_type(), Some("int"));
    }

    #[test]
    fn test_empty_parameter_list() {
        let buffer = TokenBuffer::new("void f()");
        mark(&buffer, 3, 4, PrototypeRole::StartOfParams);
        mark(&buffer, 4, 5, PrototypeRole::EndOfParams);
        let parsed = ParsedPrototype::from_buffer(&buffer, ParameterStyle::C);
        assert_eq!(parsed.parameter_count(), 0);
        assert!(parsed.parameter_list().is_some());
    }

    #[test]
    fn test_section_markers_split() {
        // [ A ] _ void _ f ( )
        let buffer = TokenBuffer::new("[A] void f()");
        mark(&buffer, 0, 1, PrototypeRole::StartOfPrototypeSection);
        mark(&buffer, 2, 3, PrototypeRole::EndOfPrototypeSection);
        mark(&buffer, 6, 7, PrototypeRole::Name);
        mark(&buffer, 7, 8, PrototypeRole::StartOfParams);
        mark(&buffer, 8, 9, PrototypeRole::EndOfParams);

        let parsed = ParsedPrototype::from_buffer(&buffer, ParameterStyle::C);
        assert_eq!(parsed.sections().len(), 2);
        assert_eq!(parsed.main_section_index(), 1);
        assert_eq!(parsed.range_text(parsed.sections()[0].tokens.clone()), "[A]");
    }

    #[test]
    fn test_access_level_combines() {
        let buffer = TokenBuffer::new("protected internal int x");
        mark(&buffer, 0, 1, PrototypeRole::TypeModifier);
        mark(&buffer, 2, 3, PrototypeRole::TypeModifier);
        let parsed = ParsedPrototype::from_buffer(&buffer, ParameterStyle::C);
        assert_eq!(parsed.access_level(), AccessLevel::ProtectedInternal);
    }
}
