use super::*;

// =============================================================================
// Members: functions, constructors, operators, variables, properties
// =============================================================================

impl CSharp {
    /// Functions, delegates and operators, with templates, parameters and constraints
    pub(super) fn try_to_skip_function(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        let access = self.skip_declaration_prefix(&mut lookahead, mode, PrototypeRole::StartOfPrototypeSection);

        let mut keyword = "function";
        if lookahead.matches_token("delegate", false) && !self.is_function_pointer(&lookahead) {
            keyword = "delegate";
            lookahead.next();
            if !self.try_to_skip_whitespace(&mut lookahead, mode) {
                return reject(it, &lookahead, mode);
            }
        }
        if self.starts_foreign_declaration(&lookahead) && !self.is_function_pointer(&lookahead) {
            return reject(it, &lookahead, mode);
        }

        if !self.try_to_skip_type(&mut lookahead, mode) {
            return reject(it, &lookahead, mode);
        }
        self.try_to_skip_whitespace(&mut lookahead, mode);

        let name_start = lookahead;
        let Some(name) = self.skip_identifier_text(&mut lookahead, mode, PrototypeRole::Name) else {
            return reject(it, &lookahead, mode);
        };
        let mut name = name.to_string();
        self.try_to_skip_whitespace(&mut lookahead, mode);

        if SymbolPath::from_text(&name).last_segment() == Some("operator") {
            keyword = "operator";
            let symbol_start = lookahead;
            if lookahead.matches_token("true", false) || lookahead.matches_token("false", false) {
                lookahead.next();
            } else {
                while lookahead.fundamental() == FundamentalKind::Symbol && lookahead.character() != '(' {
                    lookahead.next();
                }
            }
            if lookahead == symbol_start {
                return reject(it, &lookahead, mode);
            }
            name = format!("{name} {}", symbol_start.text_to(&lookahead));
            if mode.is_prototype() {
                name_start.set_prototype_role_to(&lookahead, PrototypeRole::KeywordName);
            }
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }

        if self.try_to_skip_template_signature(&mut lookahead, mode, false) {
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }
        if !self.try_to_skip_parameters(&mut lookahead, mode, '(') {
            return reject(it, &lookahead, mode);
        }
        self.try_to_skip_whitespace(&mut lookahead, mode);
        while self.try_to_skip_where_clause(&mut lookahead, mode) {
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }

        if !at_body_or_end(&lookahead) {
            return reject(it, &lookahead, mode);
        }

        if mode.creates_elements() {
            let symbol = scope + &SymbolPath::from_text(&name);
            if let Some(topic) = self.topic(keyword, name, symbol, &start) {
                let prototype = self.normalize_prototype(start.text_to(&lookahead));
                elements.push(
                    Element::new(start.position()).with_topic(topic.with_prototype(prototype).with_access(access)),
                );
            }
        }

        self.skip_member_body(&mut lookahead);
        *it = lookahead;
        true
    }

    /// Constructors with an optional `: base(...)` or `: this(...)` call, and `~Name()` destructors
    pub(super) fn try_to_skip_constructor(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        let access = self.skip_declaration_prefix(&mut lookahead, mode, PrototypeRole::StartOfPrototypeSection);

        let is_destructor = lookahead.character() == '~';
        if is_destructor {
            if mode.is_prototype() {
                lookahead.set_prototype_role(PrototypeRole::Name);
            }
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }
        if self.starts_foreign_declaration(&lookahead) {
            return reject(it, &lookahead, mode);
        }

        let Some(name) = self.skip_identifier_text(&mut lookahead, mode, PrototypeRole::Name) else {
            return reject(it, &lookahead, mode);
        };
        self.try_to_skip_whitespace(&mut lookahead, mode);
        if !self.try_to_skip_parameters(&mut lookahead, mode, '(') {
            return reject(it, &lookahead, mode);
        }
        let end_of_prototype = lookahead;
        self.try_to_skip_whitespace(&mut lookahead, mode);

        if !is_destructor && lookahead.character() == ':' {
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            if !(lookahead.matches_token("base", false) || lookahead.matches_token("this", false)) {
                return reject(it, &lookahead, mode);
            }
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
            if !self.try_to_skip_block(&mut lookahead, false) {
                return reject(it, &lookahead, mode);
            }
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        if !at_body_or_end(&lookahead) {
            return reject(it, &lookahead, mode);
        }

        if mode.creates_elements() {
            let (keyword, title) = if is_destructor {
                ("destructor", format!("~{name}"))
            } else {
                ("constructor", name.to_string())
            };
            let symbol = scope + &SymbolPath::from_text(&title);
            if let Some(topic) = self.topic(keyword, title, symbol, &start) {
                let prototype = self.normalize_prototype(start.text_to(&end_of_prototype));
                elements.push(
                    Element::new(start.position()).with_topic(topic.with_prototype(prototype).with_access(access)),
                );
            }
        }

        self.skip_member_body(&mut lookahead);
        *it = lookahead;
        true
    }

    /// `implicit operator T(...)` and `explicit operator T(...)`
    pub(super) fn try_to_skip_conversion_operator(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        let access = self.skip_declaration_prefix(&mut lookahead, mode, PrototypeRole::StartOfPrototypeSection);

        if !(lookahead.matches_token("implicit", false) || lookahead.matches_token("explicit", false)) {
            return reject(it, &lookahead, mode);
        }
        if mode.is_prototype() {
            lookahead.set_prototype_role(PrototypeRole::TypeModifier);
        }
        lookahead.next();
        if !self.try_to_skip_whitespace(&mut lookahead, mode) || !lookahead.matches_token("operator", false) {
            return reject(it, &lookahead, mode);
        }
        let name_start = lookahead;
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, mode);

        let type_start = lookahead;
        if !self.try_to_skip_type(&mut lookahead, ParseMode::IterateOnly) {
            return reject(it, &lookahead, mode);
        }
        if mode.is_prototype() {
            name_start.set_prototype_role_to(&lookahead, PrototypeRole::KeywordName);
        }
        let name = format!("operator {}", type_start.text_to(&lookahead));
        self.try_to_skip_whitespace(&mut lookahead, mode);

        if !self.try_to_skip_parameters(&mut lookahead, mode, '(') {
            return reject(it, &lookahead, mode);
        }
        self.try_to_skip_whitespace(&mut lookahead, mode);
        if !at_body_or_end(&lookahead) {
            return reject(it, &lookahead, mode);
        }

        if mode.creates_elements() {
            let symbol = scope + &SymbolPath::from_text(&name);
            if let Some(topic) = self.topic("operator", name, symbol, &start) {
                let prototype = self.normalize_prototype(start.text_to(&lookahead));
                elements.push(
                    Element::new(start.position()).with_topic(topic.with_prototype(prototype).with_access(access)),
                );
            }
        }

        self.skip_member_body(&mut lookahead);
        *it = lookahead;
        true
    }

    // =========================================================================
    // VARIABLES AND PROPERTIES
    // =========================================================================

    /// Fields, constants and field-like events, including `int a = 1, b;` lists
    /// and `fixed byte buffer[16]` buffers
    pub(super) fn try_to_skip_variable(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        let access = self.skip_declaration_prefix(&mut lookahead, mode, PrototypeRole::StartOfPrototypeSection);

        let keyword = if lookahead.matches_token("const", false) {
            "constant"
        } else if lookahead.matches_token("event", false) {
            "event"
        } else {
            "variable"
        };
        if keyword != "variable" {
            if mode.is_prototype() {
                lookahead.set_prototype_role(PrototypeRole::TypeModifier);
            }
            lookahead.next();
            if !self.try_to_skip_whitespace(&mut lookahead, mode) {
                return reject(it, &lookahead, mode);
            }
        }
        if self.starts_foreign_declaration(&lookahead) && !self.is_function_pointer(&lookahead) {
            return reject(it, &lookahead, mode);
        }

        if !self.try_to_skip_type(&mut lookahead, mode) {
            return reject(it, &lookahead, mode);
        }
        let end_of_type = lookahead;
        self.try_to_skip_whitespace(&mut lookahead, mode);

        let Some(name) = self.skip_identifier_text(&mut lookahead, mode, PrototypeRole::Name) else {
            return reject(it, &lookahead, mode);
        };
        self.try_to_skip_whitespace(&mut lookahead, mode);

        if lookahead.character() == '[' {
            let opening = lookahead;
            self.try_to_skip_block(&mut lookahead, false);
            if mode.is_prototype() {
                let mut closing = lookahead;
                closing.previous();
                opening.set_prototype_role(PrototypeRole::OpeningParamModifier);
                closing.set_prototype_role(PrototypeRole::ClosingParamModifier);
            }
            self.try_to_skip_whitespace(&mut lookahead, mode);
        }

        let ends_declarator = matches!(lookahead.character(), ';' | ',' | '=')
            && !lookahead.matches_across_tokens("=>", false);
        if lookahead.is_in_bounds() && !ends_declarator {
            return reject(it, &lookahead, mode);
        }

        if mode.creates_elements() {
            let symbol = scope + &SymbolPath::from_text(name);
            if let Some(topic) = self.topic(keyword, name, symbol, &start) {
                let prototype = self.normalize_prototype(start.text_to(&lookahead));
                elements.push(
                    Element::new(start.position()).with_topic(topic.with_prototype(prototype).with_access(access)),
                );
            }
        }

        loop {
            if lookahead.character() == '=' {
                if mode.is_prototype() {
                    lookahead.set_prototype_role(PrototypeRole::DefaultValueSeparator);
                }
                lookahead.next();
                let value_start = lookahead;
                while lookahead.is_in_bounds() && !matches!(lookahead.character(), ',' | ';') {
                    self.generic_skip(&mut lookahead);
                }
                if mode.is_prototype() {
                    mark_trimmed(&value_start, &lookahead, PrototypeRole::DefaultValue);
                }
            }
            if lookahead.character() != ',' {
                break;
            }
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

            let name_start = lookahead;
            let Some(name) = self.skip_identifier_text(&mut lookahead, ParseMode::IterateOnly, PrototypeRole::Name)
            else {
                break;
            };
            if mode.creates_elements() {
                let symbol = scope + &SymbolPath::from_text(name);
                if let Some(topic) = self.topic(keyword, name, symbol, &name_start) {
                    let prototype = self.normalize_prototype(&format!("{} {name}", start.text_to(&end_of_type)));
                    elements.push(
                        Element::new(name_start.position())
                            .with_topic(topic.with_prototype(prototype).with_access(access)),
                    );
                }
            }
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        if lookahead.character() == ';' {
            lookahead.next();
        }
        *it = lookahead;
        true
    }

    /// Properties, indexers and events with accessor blocks or `=>` bodies.
    ///
    /// The prototype lists the accessors in place of their bodies:
    /// `public int X { get; private set }`.
    pub(super) fn try_to_skip_property(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        let access = self.skip_declaration_prefix(&mut lookahead, mode, PrototypeRole::StartOfPrototypeSection);

        let mut keyword = "property";
        if lookahead.matches_token("event", false) {
            keyword = "event";
            if mode.is_prototype() {
                lookahead.set_prototype_role(PrototypeRole::TypeModifier);
            }
            lookahead.next();
            if !self.try_to_skip_whitespace(&mut lookahead, mode) {
                return reject(it, &lookahead, mode);
            }
        }
        if self.starts_foreign_declaration(&lookahead) {
            return reject(it, &lookahead, mode);
        }

        if !self.try_to_skip_type(&mut lookahead, mode) {
            return reject(it, &lookahead, mode);
        }
        self.try_to_skip_whitespace(&mut lookahead, mode);

        let name_start = lookahead;
        let Some(name) = self.skip_identifier_text(&mut lookahead, mode, PrototypeRole::Name) else {
            return reject(it, &lookahead, mode);
        };
        let is_indexer = name == "this" || name.ends_with(".this");
        if is_indexer {
            keyword = "operator";
            if mode.is_prototype() {
                name_start.set_prototype_role_to(&lookahead, PrototypeRole::KeywordName);
            }
            self.try_to_skip_whitespace(&mut lookahead, mode);
            if !self.try_to_skip_parameters(&mut lookahead, mode, '[') {
                return reject(it, &lookahead, mode);
            }
        }
        let end_of_prototype = lookahead;
        self.try_to_skip_whitespace(&mut lookahead, mode);

        let accessors = if lookahead.character() == '{' {
            match self.skip_accessors(&mut lookahead, mode, keyword == "event") {
                Some(accessors) => accessors,
                None => return reject(it, &lookahead, mode),
            }
        } else if lookahead.matches_across_tokens("=>", false) {
            self.skip_member_body(&mut lookahead);
            vec![String::from("get")]
        } else {
            return reject(it, &lookahead, mode);
        };

        if mode.creates_elements() {
            let symbol = scope + &SymbolPath::from_text(name);
            let title = if is_indexer { format!("{name} []") } else { name.to_string() };
            if let Some(topic) = self.topic(keyword, title, symbol, &start) {
                let prototype = format!(
                    "{} {{ {} }}",
                    self.normalize_prototype(start.text_to(&end_of_prototype)),
                    accessors.join("; ")
                );
                elements.push(
                    Element::new(start.position()).with_topic(topic.with_prototype(prototype).with_access(access)),
                );
            }
        }

        // Auto-property initializer
        let mut initializer = lookahead;
        self.try_to_skip_whitespace(&mut initializer, ParseMode::IterateOnly);
        if initializer.character() == '=' && !initializer.matches_across_tokens("=>", false) {
            self.skip_rest_of_statement(&mut initializer);
            lookahead = initializer;
        }

        *it = lookahead;
        true
    }

    /// `{ get; private set; }` or `{ add { } remove { } }`, returning each accessor
    /// with its modifiers. Any other word inside the block fails the match and
    /// clears what the block annotated.
    fn skip_accessors(&self, it: &mut Cursor<'_>, mode: ParseMode, is_event: bool) -> Option<Vec<String>> {
        let valid: &[&str] = if is_event { &["add", "remove"] } else { &["get", "set", "init"] };

        let mut lookahead = *it;
        if mode.is_prototype() {
            lookahead.set_prototype_role(PrototypeRole::StartOfParams);
        }
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, mode);

        let mut accessors = Vec::new();
        while lookahead.character() != '}' {
            if !lookahead.is_in_bounds() {
                reject(it, &lookahead, mode);
                return None;
            }
            if self.try_to_skip_attributes(&mut lookahead, AttributeTarget::LocalOnly, mode, PrototypeRole::TypeModifier) {
                self.try_to_skip_whitespace(&mut lookahead, mode);
            }

            let modifiers_start = lookahead;
            let modifiers = self
                .try_to_skip_modifiers(&mut lookahead, mode)
                .map(|_| modifiers_start.text_to(&lookahead));
            self.try_to_skip_whitespace(&mut lookahead, mode);

            let Some(accessor) = valid.iter().find(|accessor| lookahead.matches_token(accessor, false)) else {
                reject(it, &lookahead, mode);
                return None;
            };
            if mode.is_prototype() {
                lookahead.set_prototype_role(PrototypeRole::KeywordName);
            }
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, mode);

            match lookahead.character() {
                ';' => {
                    if mode.is_prototype() {
                        lookahead.set_prototype_role(PrototypeRole::ParamSeparator);
                    }
                    lookahead.next();
                }
                '{' => self.generic_skip(&mut lookahead),
                '=' if lookahead.matches_across_tokens("=>", false) => self.skip_member_body(&mut lookahead),
                '}' => {}
                _ => {
                    reject(it, &lookahead, mode);
                    return None;
                }
            }
            self.try_to_skip_whitespace(&mut lookahead, mode);

            accessors.push(match modifiers {
                Some(modifiers) => format!("{} {accessor}", self.normalize_prototype(modifiers)),
                None => accessor.to_string(),
            });
        }

        if mode.is_prototype() {
            lookahead.set_prototype_role(PrototypeRole::EndOfParams);
        }
        lookahead.next();
        *it = lookahead;
        Some(accessors)
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Skip a `{ ... }` block, an `=> ...;` expression body or a lone `;`
    fn skip_member_body(&self, it: &mut Cursor<'_>) {
        if it.character() == '{' {
            it.next();
            self.generic_skip_until_after(it, '}');
        } else if it.matches_across_tokens("=>", false) {
            it.next_n(2);
            self.generic_skip_until_after(it, ';');
        } else if it.character() == ';' {
            it.next();
        }
    }

    /// Whether the cursor is on a keyword another declaration matcher owns
    fn starts_foreign_declaration(&self, it: &Cursor<'_>) -> bool {
        FOREIGN_DECLARATION_KEYWORDS
            .iter()
            .any(|keyword| it.matches_token(keyword, false))
    }

    /// `delegate*` starts a function pointer type rather than a delegate declaration
    fn is_function_pointer(&self, it: &Cursor<'_>) -> bool {
        let mut lookahead = *it;
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        it.matches_token("delegate", false) && lookahead.character() == '*'
    }
}

/// Whether a member prototype is complete: a body, `;`, `=>` or the end of the text follow
fn at_body_or_end(it: &Cursor<'_>) -> bool {
    !it.is_in_bounds() || matches!(it.character(), '{' | ';') || it.matches_across_tokens("=>", false)
}
