use super::*;

// =============================================================================
// Scope-creating declarations: using, namespace, types, enums
// =============================================================================

const TYPE_KEYWORDS: [&str; 4] = ["class", "struct", "interface", "record"];

impl CSharp {
    /// `using A.B` or `using X = A.B`. The `;` is left for the caller.
    ///
    /// In create mode the rule is added to the innermost parent open at the directive.
    pub(super) fn try_to_skip_using(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
    ) -> bool {
        if !it.matches_token("using", false) {
            return false;
        }

        let mut lookahead = *it;
        lookahead.next();
        if !self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly) {
            return false;
        }
        if lookahead.matches_token("static", false) {
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        let Some(first) = self.skip_identifier_text(&mut lookahead, ParseMode::IterateOnly, PrototypeRole::Name)
        else {
            return false;
        };
        let mut end = lookahead;
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        let rule = if lookahead.character() == '=' {
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            let Some(target) = self.skip_identifier_text(&mut lookahead, ParseMode::IterateOnly, PrototypeRole::Name)
            else {
                return false;
            };
            end = lookahead;
            UsingRule::ReplacePrefix {
                remove: SymbolPath::from_text(first),
                add: SymbolPath::from_text(target),
            }
        } else {
            UsingRule::AddPrefix(SymbolPath::from_text(first))
        };

        if mode.creates_elements() && !add_using_rule(elements, it.position(), rule) {
            trace!("[CSHARP] no open parent for using at line {}", it.line());
        }
        *it = end;
        true
    }

    /// `namespace A.B { ... }` or the file-scoped `namespace A.B;`
    pub(super) fn try_to_skip_namespace(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        if !it.matches_token("namespace", false) {
            return false;
        }

        let mut lookahead = *it;
        lookahead.next();
        if !self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly) {
            return false;
        }
        let Some(name) = self.skip_identifier_text(&mut lookahead, ParseMode::IterateOnly, PrototypeRole::Name)
        else {
            return false;
        };
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        let has_body = match lookahead.character() {
            '{' => true,
            ';' => false,
            _ => return false,
        };
        lookahead.next();

        if mode.creates_elements() {
            let symbol = scope + &SymbolPath::from_text(name);
            let mut parent = ParentElement::new(child_context(elements, it.position(), symbol.clone()))
                .with_default_access(AccessLevel::Internal)
                .with_maximum_access(AccessLevel::Public);
            parent.default_child_language = self.syntax.id;

            let index = elements.len();
            elements.push(Element::new_parent(it.position(), parent));
            if has_body {
                self.parse_body(&mut lookahead, elements, &symbol);
            } else {
                self.parse_to_end(&mut lookahead, elements, &symbol);
            }
            elements[index].close(lookahead.position());
        } else if has_body {
            self.generic_skip_until_after(&mut lookahead, '}');
        }

        *it = lookahead;
        true
    }

    // =========================================================================
    // TYPES
    // =========================================================================

    /// Classes, structs, interfaces and records with their base lists and constraints.
    ///
    /// Positional record parameters become property elements unless they are
    /// passed on to a base record.
    pub(super) fn try_to_skip_class(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        let access = self.skip_declaration_prefix(&mut lookahead, mode, PrototypeRole::StartOfPrototypeSection);

        let Some(keyword) = TYPE_KEYWORDS
            .into_iter()
            .find(|keyword| lookahead.matches_token(keyword, false))
        else {
            return reject(it, &lookahead, mode);
        };
        lookahead.next();

        // record class, record struct
        if keyword == "record" {
            let mut qualifier = lookahead;
            self.try_to_skip_whitespace(&mut qualifier, ParseMode::IterateOnly);
            if qualifier.matches_token("class", false) || qualifier.matches_token("struct", false) {
                qualifier.next();
                lookahead = qualifier;
            }
        }

        if !self.try_to_skip_whitespace(&mut lookahead, mode) {
            return reject(it, &lookahead, mode);
        }
        let Some(name) = self.skip_identifier_text(&mut lookahead, mode, PrototypeRole::Name) else {
            return reject(it, &lookahead, mode);
        };
        self.try_to_skip_whitespace(&mut lookahead, mode);

        if self.try_to_skip_template_signature(&mut lookahead, mode, false) {
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }

        let mut record_parameters = None;
        if keyword == "record" {
            let parameters_start = lookahead;
            if self.try_to_skip_parameters(&mut lookahead, mode, '(') {
                record_parameters = Some((parameters_start, lookahead));
                self.try_to_skip_whitespace(&mut lookahead, mode);
            }
        }

        // Base list; names passed to a base record are its properties, not ours
        let mut inherited = FxHashSet::default();
        if lookahead.character() == ':' {
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, mode);
            loop {
                if !self.try_to_skip_identifier(&mut lookahead, mode, PrototypeRole::Type) {
                    return reject(it, &lookahead, mode);
                }
                self.try_to_skip_whitespace(&mut lookahead, mode);
                if self.try_to_skip_template_signature(&mut lookahead, mode, true) {
                    self.try_to_skip_whitespace(&mut lookahead, mode);
                }
                if lookahead.character() == '(' {
                    if !self.skip_base_record_arguments(&mut lookahead, &mut inherited) {
                        return reject(it, &lookahead, mode);
                    }
                    self.try_to_skip_whitespace(&mut lookahead, mode);
                }
                if lookahead.character() != ',' {
                    break;
                }
                lookahead.next();
                self.try_to_skip_whitespace(&mut lookahead, mode);
            }
        }

        while self.try_to_skip_where_clause(&mut lookahead, mode) {
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }

        if lookahead.is_in_bounds() && !matches!(lookahead.character(), '{' | ';') {
            return reject(it, &lookahead, mode);
        }

        if mode.creates_elements() {
            let symbol = scope + &SymbolPath::from_text(name);
            let default_access = match keyword {
                "interface" | "record" => AccessLevel::Public,
                _ => AccessLevel::Private,
            };
            let mut parent = ParentElement::new(child_context(elements, start.position(), symbol.clone()))
                .with_default_access(default_access)
                .with_maximum_access(access);
            parent.default_child_language = self.syntax.id;

            let mut element = Element::new_parent(start.position(), parent);
            if let Some(topic) = self.topic(keyword, symbol.format_with_separator("."), symbol.clone(), &start) {
                let prototype = self.normalize_prototype(start.text_to(&lookahead));
                element = element.with_topic(topic.with_prototype(prototype).with_access(access));
            }
            let index = elements.len();
            elements.push(element);

            if let Some((parameters_start, parameters_end)) = record_parameters {
                self.add_record_properties(&parameters_start, &parameters_end, &symbol, &inherited, elements);
            }

            match lookahead.character() {
                '{' => {
                    lookahead.next();
                    self.parse_body(&mut lookahead, elements, &symbol);
                }
                ';' => lookahead.next(),
                _ => {}
            }
            elements[index].close(lookahead.position());
        } else if lookahead.character() == '{' {
            lookahead.next();
            self.generic_skip_until_after(&mut lookahead, '}');
        }

        *it = lookahead;
        true
    }

    /// `(a, b: x)` after a base record, collecting the last word of each argument
    fn skip_base_record_arguments<'a>(&self, it: &mut Cursor<'a>, inherited: &mut FxHashSet<&'a str>) -> bool {
        let mut lookahead = *it;
        lookahead.next();
        let mut last_word = None;

        while lookahead.is_in_bounds() && lookahead.character() != ')' {
            if lookahead.character() == ',' {
                inherited.extend(last_word.take());
                lookahead.next();
            } else if lookahead.fundamental() == FundamentalKind::Text {
                last_word = Some(lookahead.text());
                lookahead.next();
            } else {
                self.generic_skip(&mut lookahead);
            }
        }
        if lookahead.character() != ')' {
            return false;
        }
        inherited.extend(last_word);
        lookahead.next();
        *it = lookahead;
        true
    }

    /// One `public T Name { get; init }` property element per positional record parameter
    fn add_record_properties(
        &self,
        parameters_start: &Cursor<'_>,
        parameters_end: &Cursor<'_>,
        record: &SymbolPath,
        inherited: &FxHashSet<&str>,
        elements: &mut Vec<Element>,
    ) {
        if self.kind_of("property").is_none() {
            return;
        }

        let buffer = TokenBuffer::with_starting_line(parameters_start.text_to(parameters_end), parameters_start.line());
        if !self.try_to_skip_parameters(&mut buffer.first(), ParseMode::ParsePrototype, '(') {
            return;
        }
        let parsed = ParsedPrototype::from_buffer(&buffer, ParameterStyle::C);
        let Some(list) = parsed.parameter_list() else {
            return;
        };

        for (index, range) in list.parameters.iter().enumerate() {
            let Some(name) = parsed.parameter_name(index) else {
                continue;
            };
            if inherited.contains(name) {
                continue;
            }

            // Drop the default value
            let mut end = range.end;
            while end > range.start {
                let trailing = matches!(
                    parsed.role_at(end - 1),
                    Some(
                        PrototypeRole::ParamSeparator
                            | PrototypeRole::DefaultValue
                            | PrototypeRole::DefaultValueSeparator
                    )
                ) || matches!(
                    parsed.tokens()[end - 1].kind,
                    FundamentalKind::Whitespace | FundamentalKind::LineBreak
                );
                if !trailing {
                    break;
                }
                end -= 1;
            }

            let mut declaration_start = buffer.cursor_at(range.start);
            let attributes = if self.try_to_skip_attributes(
                &mut declaration_start,
                AttributeTarget::LocalOnly,
                ParseMode::IterateOnly,
                PrototypeRole::TypeModifier,
            ) {
                let attributes = parsed.range_text(range.start..declaration_start.index());
                declaration_start.next_past_whitespace();
                Some(attributes)
            } else {
                None
            };

            let mut declaration = parsed.range_text(declaration_start.index()..end);
            for modifier in ["in", "params"] {
                if let Some(rest) = declaration.strip_prefix(modifier) {
                    if rest.starts_with(char::is_whitespace) {
                        declaration = rest.trim_start();
                    }
                }
            }

            let prototype = match attributes {
                Some(attributes) => format!("{attributes} public {declaration} {{ get; init }}"),
                None => format!("public {declaration} {{ get; init }}"),
            };
            let at = parameters_start.buffer().cursor_at(parameters_start.index() + range.start);
            let symbol = record + &SymbolPath::from_text(name);
            if let Some(topic) = self.topic("property", name, symbol, &at) {
                let topic = topic
                    .with_prototype(self.normalize_prototype(&prototype))
                    .with_access(AccessLevel::Public);
                elements.push(Element::new(at.position()).with_topic(topic));
            }
        }
    }

    // =========================================================================
    // ENUMS
    // =========================================================================

    /// `enum E : byte { A, B = 2, }` with one embedded constant per value
    pub(super) fn try_to_skip_enum(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        let access = self.skip_declaration_prefix(&mut lookahead, mode, PrototypeRole::StartOfPrototypeSection);

        if !lookahead.matches_token("enum", false) {
            return reject(it, &lookahead, mode);
        }
        lookahead.next();
        if !self.try_to_skip_whitespace(&mut lookahead, mode) {
            return reject(it, &lookahead, mode);
        }
        let Some(name) = self.skip_identifier_text(&mut lookahead, mode, PrototypeRole::Name) else {
            return reject(it, &lookahead, mode);
        };
        self.try_to_skip_whitespace(&mut lookahead, mode);

        if lookahead.character() == ':' {
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, mode);
            if !self.try_to_skip_type(&mut lookahead, mode) {
                return reject(it, &lookahead, mode);
            }
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }

        if lookahead.is_in_bounds() && lookahead.character() != '{' {
            return reject(it, &lookahead, mode);
        }

        let saved = elements.len();
        let symbol = scope + &SymbolPath::from_text(name);
        let mut index = None;
        if mode.creates_elements() {
            let mut parent = ParentElement::new(child_context(elements, start.position(), symbol.clone()))
                .with_default_access(AccessLevel::Public)
                .with_maximum_access(access);
            parent.default_child_language = self.syntax.id;

            let mut element = Element::new_parent(start.position(), parent);
            if let Some(topic) = self.topic("enum", symbol.format_with_separator("."), symbol.clone(), &start) {
                let prototype = self.normalize_prototype(start.text_to(&lookahead));
                element = element.with_topic(topic.with_prototype(prototype).with_access(access));
            }
            index = Some(elements.len());
            elements.push(element);
        }

        if lookahead.character() == '{' && !self.try_to_skip_enum_values(&mut lookahead, mode, elements, &symbol) {
            elements.truncate(saved);
            return reject(it, &lookahead, mode);
        }

        if let Some(index) = index {
            elements[index].close(lookahead.position());
        }
        *it = lookahead;
        true
    }

    /// `{ [Attr] A, B = 1 << 2 }`; a trailing comma is allowed
    fn try_to_skip_enum_values(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        enum_symbol: &SymbolPath,
    ) -> bool {
        let mut lookahead = *it;
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, mode);

        loop {
            if lookahead.character() == '}' {
                lookahead.next();
                break;
            }

            if self.try_to_skip_attributes(&mut lookahead, AttributeTarget::LocalOnly, mode, PrototypeRole::ParamModifier) {
                self.try_to_skip_whitespace(&mut lookahead, mode);
            }
            let name_start = lookahead;
            if !self.try_to_skip_unqualified_identifier(&mut lookahead) {
                return reject(it, &lookahead, mode);
            }
            let name = name_start.text_to(&lookahead);
            self.try_to_skip_whitespace(&mut lookahead, mode);

            if lookahead.character() == '=' {
                lookahead.next();
                while lookahead.is_in_bounds() && !matches!(lookahead.character(), ',' | '}') {
                    self.generic_skip(&mut lookahead);
                }
            }

            if mode.creates_elements() {
                let symbol = enum_symbol + &SymbolPath::from_text(name);
                if let Some(topic) = self.topic("constant", name, symbol, &name_start) {
                    elements.push(Element::new(name_start.position()).with_topic(topic.embedded()));
                }
            }

            match lookahead.character() {
                ',' => {
                    lookahead.next();
                    self.try_to_skip_whitespace(&mut lookahead, mode);
                }
                '}' => {}
                _ => return reject(it, &lookahead, mode),
            }
        }

        *it = lookahead;
        true
    }
}
