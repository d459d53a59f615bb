use super::*;

// =============================================================================
// Design units and subroutines
// =============================================================================

impl SystemVerilog {
    /// `module`, `macromodule`, `interface`, `program`, `package` and `class`
    /// blocks through their closing keyword.
    ///
    /// The header runs to `;` and holds the name, package imports, parameter
    /// ports, the port list and, for classes, `extends` and `implements`.
    pub(super) fn try_to_skip_design_unit(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        if self.try_to_skip_attributes(&mut lookahead, mode) {
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        let preceding = if self.at_word(&lookahead, "virtual") {
            self.skip_modifier(&mut lookahead, mode);
            Preceding::after("virtual")
        } else {
            Preceding::default()
        };
        let Some((mut keyword, after_keyword)) = self.word_at(&lookahead) else {
            return reject(it, &lookahead, mode);
        };
        let Some(closers) = block_closers(keyword, preceding) else {
            return reject(it, &lookahead, mode);
        };
        if !matches!(keyword, "module" | "macromodule" | "interface" | "program" | "package" | "class") {
            return reject(it, &lookahead, mode);
        }
        lookahead = after_keyword;
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        // `interface class`
        let mut closers = closers;
        if keyword == "interface" && self.at_word(&lookahead, "class") {
            keyword = "class";
            closers = &["endclass"];
            lookahead.next();
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        if self.at_word(&lookahead, "automatic") || self.at_word(&lookahead, "static") {
            self.skip_modifier(&mut lookahead, mode);
        }

        let name_start = lookahead;
        let Some(name) = self.skip_identifier_text(&mut lookahead) else {
            return reject(it, &lookahead, mode);
        };
        if mode.is_prototype() {
            name_start.set_prototype_role_to(&lookahead, PrototypeRole::Name);
        }
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        // header imports
        while self.at_word(&lookahead, "import") {
            self.generic_skip_until_after(&mut lookahead, ';');
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        if lookahead.character() == '#' {
            if !self.try_to_skip_parameter_ports(&mut lookahead, mode) {
                return reject(it, &lookahead, mode);
            }
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        if keyword == "class" {
            self.skip_class_inheritance(&mut lookahead, mode);
        }

        if lookahead.character() == '(' {
            if !self.try_to_skip_port_list(&mut lookahead, mode) {
                return reject(it, &lookahead, mode);
            }
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        let end_of_header = lookahead;
        if lookahead.is_in_bounds() && lookahead.character() != ';' {
            trace!("[VERILOG] {} header at line {} not followed by ';'", keyword, start.line());
            return reject(it, &lookahead, mode);
        }
        if mode.is_prototype() {
            *it = lookahead;
            return true;
        }
        lookahead.next();

        if mode.creates_elements() {
            let symbol = scope + &SymbolPath::from_text(name);
            let mut parent = ParentElement::new(child_context(elements, start.position(), symbol.clone()))
                .with_default_access(AccessLevel::Public)
                .with_maximum_access(AccessLevel::Public);
            parent.default_child_language = self.syntax.id;

            let topic_keyword = if keyword == "macromodule" { "module" } else { keyword };
            let mut element = Element::new_parent(start.position(), parent);
            if let Some(topic) = self.topic(topic_keyword, name, symbol.clone(), &start) {
                let prototype = self.normalize_prototype(start.text_to(&end_of_header));
                element = element.with_topic(topic.with_prototype(prototype));
            }
            let index = elements.len();
            elements.push(element);
            self.parse_items(&mut lookahead, elements, &symbol, closers);
            elements[index].close(lookahead.position());
        } else {
            self.skip_block_body(&mut lookahead, closers);
        }

        *it = lookahead;
        true
    }

    /// `extends Base #(...) (...)` and `implements A, B`
    fn skip_class_inheritance(&self, it: &mut Cursor<'_>, mode: ParseMode) {
        for keyword in ["extends", "implements"] {
            if !self.at_word(it, keyword) {
                continue;
            }
            self.skip_modifier(it, mode);
            loop {
                let base_start = *it;
                if self.skip_type_word(it) && mode.is_prototype() {
                    base_start.set_prototype_role_to(it, PrototypeRole::Type);
                }
                self.try_to_skip_whitespace(it, ParseMode::IterateOnly);
                // constructor arguments
                if keyword == "extends" && it.character() == '(' {
                    self.generic_skip(it);
                    self.try_to_skip_whitespace(it, ParseMode::IterateOnly);
                }
                if it.character() != ',' {
                    break;
                }
                it.next();
                self.try_to_skip_whitespace(it, ParseMode::IterateOnly);
            }
        }
    }

    /// A possibly scoped and parameterized type name like `pkg::base #(8)`
    fn skip_type_word(&self, it: &mut Cursor<'_>) -> bool {
        if !self.try_to_skip_identifier(it) {
            return false;
        }
        while it.matches_across_tokens("::", false) {
            let mut member = *it;
            member.next_n(2);
            if !self.try_to_skip_identifier(&mut member) {
                break;
            }
            *it = member;
        }
        let mut parameters = *it;
        self.try_to_skip_whitespace(&mut parameters, ParseMode::IterateOnly);
        if parameters.matches_across_tokens("#(", false) {
            parameters.next();
            self.generic_skip(&mut parameters);
            *it = parameters;
        }
        true
    }

    /// A qualifier word marked as a type modifier, with the whitespace after it
    fn skip_modifier(&self, it: &mut Cursor<'_>, mode: ParseMode) {
        let start = *it;
        self.try_to_skip_identifier(it);
        if mode.is_prototype() {
            start.set_prototype_role_to(it, PrototypeRole::TypeModifier);
        }
        self.try_to_skip_whitespace(it, ParseMode::IterateOnly);
    }

    /// `function` and `task` declarations with their bodies.
    ///
    /// `extern`, `pure virtual` and DPI `import` declarations end at the
    /// header; everything else runs to `endfunction` or `endtask`.
    pub(super) fn try_to_skip_subroutine(
        &self,
        it: &mut Cursor<'_>,
        mode: ParseMode,
        elements: &mut Vec<Element>,
        scope: &SymbolPath,
    ) -> bool {
        let start = *it;
        let mut lookahead = *it;
        if self.try_to_skip_attributes(&mut lookahead, mode) {
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        let mut bodiless = false;
        let keyword = loop {
            let Some((word, _)) = self.word_at(&lookahead) else {
                return reject(it, &lookahead, mode);
            };
            match word {
                "function" | "task" => break word,
                "extern" | "pure" | "virtual" | "static" | "protected" | "local" => {
                    bodiless |= marks_bodiless(word);
                    self.skip_modifier(&mut lookahead, mode);
                }
                _ => return reject(it, &lookahead, mode),
            }
        };
        let closer = if keyword == "function" { "endfunction" } else { "endtask" };
        lookahead.next();
        self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);

        if self.at_word(&lookahead, "automatic") || self.at_word(&lookahead, "static") {
            self.skip_modifier(&mut lookahead, mode);
        }

        let Some((_, name)) = self.skip_typed_name(&mut lookahead, mode, &['(', ';']) else {
            return reject(it, &lookahead, mode);
        };
        if lookahead.character() == '(' {
            if !self.try_to_skip_port_list(&mut lookahead, mode) {
                return reject(it, &lookahead, mode);
            }
            self.try_to_skip_whitespace(&mut lookahead, ParseMode::IterateOnly);
        }

        let end_of_header = lookahead;
        if lookahead.is_in_bounds() && lookahead.character() != ';' {
            return reject(it, &lookahead, mode);
        }
        if mode.is_prototype() {
            *it = lookahead;
            return true;
        }

        if mode.creates_elements() {
            let symbol = scope + &SymbolPath::from_text(name);
            if let Some(topic) = self.topic(keyword, name, symbol, &start) {
                let prototype = self.normalize_prototype(start.text_to(&end_of_header));
                elements.push(Element::new(start.position()).with_topic(topic.with_prototype(prototype)));
            }
        }

        lookahead.next();
        if !bodiless {
            self.skip_block_body(&mut lookahead, &[closer]);
        }
        *it = lookahead;
        true
    }

    // =========================================================================
    // KEYWORD BLOCKS AND STATEMENTS
    // =========================================================================

    /// An opening keyword through its closing keyword, nested blocks included.
    ///
    /// `preceding` holds what came before the cursor in the same item so that
    /// `wait fork`, `typedef class` and body-less subroutines are not taken as blocks.
    pub(super) fn try_to_skip_keyword_block(&self, it: &mut Cursor<'_>, preceding: Preceding<'_>) -> bool {
        let Some((word, after)) = self.word_at(it) else {
            return false;
        };
        let Some(closers) = block_closers(word, preceding) else {
            return false;
        };
        let mut lookahead = after;
        self.skip_block_body(&mut lookahead, closers);
        *it = lookahead;
        true
    }

    /// Skip through the first of `closers` at this nesting level and its label.
    /// An unclosed block runs to the end of the text.
    pub(super) fn skip_block_body(&self, it: &mut Cursor<'_>, closers: &[&str]) {
        let mut preceding = Preceding::default();
        while it.is_in_bounds() {
            let Some((word, after)) = self.word_at(it) else {
                if it.character() == ';' {
                    preceding.end_item();
                }
                self.generic_skip(it);
                continue;
            };
            if closers.contains(&word) {
                *it = after;
                self.try_to_skip_end_label(it);
                return;
            }
            if self.try_to_skip_keyword_block(it, preceding) {
                preceding.end_item();
            } else {
                *it = after;
                preceding.push(word);
            }
        }
    }

    /// One statement or unrecognized item: through `;`, or through the first
    /// keyword block, stopping before a closing keyword that belongs to an
    /// enclosing block.
    pub(super) fn skip_statement(&self, it: &mut Cursor<'_>) {
        let start = *it;
        let mut preceding = Preceding::default();
        while it.is_in_bounds() {
            if it.character() == ';' {
                it.next();
                return;
            }
            if it.character() == '{' {
                self.generic_skip(it);
                return;
            }
            let at_start = *it == start;
            if self.try_to_skip_macro_invocation(it) {
                // a macro call that starts an item is the whole item
                if at_start {
                    return;
                }
                continue;
            }
            let Some((word, after)) = self.word_at(it) else {
                self.generic_skip(it);
                continue;
            };
            if is_closing_keyword(word) {
                // a stray closer on its own is consumed
                if *it == start {
                    *it = after;
                    self.try_to_skip_end_label(it);
                }
                return;
            }
            if self.try_to_skip_keyword_block(it, preceding) {
                return;
            }
            *it = after;
            preceding.push(word);
        }
    }
}
