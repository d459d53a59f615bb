use super::*;

// =============================================================================
// Keyword tables
// =============================================================================

/// IEEE 1800-2017 reserved words, highlighted as Keyword
pub static KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "accept_on", "alias", "always", "always_comb", "always_ff", "always_latch", "and",
        "assert", "assign", "assume", "automatic", "before", "begin", "bind", "bins", "binsof",
        "bit", "break", "buf", "bufif0", "bufif1", "byte", "case", "casex", "casez", "cell",
        "chandle", "checker", "class", "clocking", "cmos", "config", "const", "constraint",
        "context", "continue", "cover", "covergroup", "coverpoint", "cross", "deassign",
        "default", "defparam", "design", "disable", "dist", "do", "edge", "else", "end",
        "endcase", "endchecker", "endclass", "endclocking", "endconfig", "endfunction",
        "endgenerate", "endgroup", "endinterface", "endmodule", "endpackage", "endprimitive",
        "endprogram", "endproperty", "endspecify", "endsequence", "endtable", "endtask", "enum",
        "event", "eventually", "expect", "export", "extends", "extern", "final", "first_match",
        "for", "force", "foreach", "forever", "fork", "forkjoin", "function", "generate",
        "genvar", "global", "highz0", "highz1", "if", "iff", "ifnone", "ignore_bins",
        "illegal_bins", "implements", "implies", "import", "incdir", "include", "initial",
        "inout", "input", "inside", "instance", "int", "integer", "interconnect", "interface",
        "intersect", "join", "join_any", "join_none", "large", "let", "liblist", "library",
        "local", "localparam", "logic", "longint", "macromodule", "matches", "medium", "modport",
        "module", "nand", "negedge", "nettype", "new", "nexttime", "nmos", "nor",
        "noshowcancelled", "not", "notif0", "notif1", "null", "or", "output", "package",
        "packed", "parameter", "pmos", "posedge", "primitive", "priority", "program", "property",
        "protected", "pull0", "pull1", "pulldown", "pullup", "pulsestyle_ondetect",
        "pulsestyle_onevent", "pure", "rand", "randc", "randcase", "randsequence", "rcmos",
        "real", "realtime", "ref", "reg", "reject_on", "release", "repeat", "restrict", "return",
        "rnmos", "rpmos", "rtran", "rtranif0", "rtranif1", "s_always", "s_eventually",
        "s_nexttime", "s_until", "s_until_with", "scalared", "sequence", "shortint", "shortreal",
        "showcancelled", "signed", "small", "soft", "solve", "specify", "specparam", "static",
        "string", "strong", "strong0", "strong1", "struct", "super", "supply0", "supply1",
        "sync_accept_on", "sync_reject_on", "table", "tagged", "task", "this", "throughout",
        "time", "timeprecision", "timeunit", "tran", "tranif0", "tranif1", "tri", "tri0", "tri1",
        "triand", "trior", "trireg", "type", "typedef", "union", "unique", "unique0", "unsigned",
        "until", "until_with", "untyped", "use", "uwire", "var", "vectored", "virtual", "void",
        "wait", "wait_order", "wand", "weak", "weak0", "weak1", "while", "wildcard", "wire",
        "with", "within", "wor", "xnor", "xor",
    ]
    .into_iter()
    .collect()
});

/// Compiler directives that run to the end of their line
pub static DIRECTIVES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "begin_keywords", "celldefine", "default_nettype", "define", "else", "elsif",
        "end_keywords", "endcelldefine", "endif", "ifdef", "ifndef", "include", "line",
        "nounconnected_drive", "pragma", "resetall", "timescale", "unconnected_drive", "undef",
        "undefineall",
    ]
    .into_iter()
    .collect()
});

/// Port directions, marked as type modifiers in prototypes
pub const DIRECTIONS: [&str; 4] = ["input", "output", "inout", "ref"];

/// Words before a declared name that qualify it rather than name its type
pub const DECLARATION_MODIFIERS: [&str; 17] = [
    "const", "var", "static", "automatic", "parameter", "localparam", "specparam", "signed",
    "unsigned", "rand", "randc", "local", "protected", "virtual", "interconnect", "scalared",
    "vectored",
];

/// Built-in data types and net types that can start a declaration
pub const DATA_TYPES: [&str; 32] = [
    "bit", "logic", "reg", "byte", "shortint", "int", "longint", "integer", "time", "real",
    "realtime", "shortreal", "string", "chandle", "event", "enum", "struct", "union", "wire",
    "tri", "tri0", "tri1", "triand", "trior", "trireg", "wand", "wor", "uwire", "supply0",
    "supply1", "genvar", "type",
];

/// Time units a literal may carry
pub const TIME_UNITS: [&str; 6] = ["s", "ms", "us", "ns", "ps", "fs"];

/// Whether `word` is a direction or modifier rather than a type
pub(super) fn is_modifier(word: &str) -> bool {
    DIRECTIONS.contains(&word) || DECLARATION_MODIFIERS.contains(&word)
}

/// Whether `word` closes some keyword block
pub(super) fn is_closing_keyword(word: &str) -> bool {
    (word.starts_with("end") && KEYWORDS.contains(word)) || matches!(word, "join" | "join_any" | "join_none")
}

// =============================================================================
// Keyword blocks
// =============================================================================

/// Words read so far in the current item, as seen by a possible block opener
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Preceding<'a> {
    /// The word directly before the opener
    pub last: &'a str,
    /// Set by `extern`, `pure`, `import` or `export` and held until the next `;`
    pub bodiless: bool,
}

impl<'a> Preceding<'a> {
    pub fn after(word: &'a str) -> Self {
        let mut preceding = Self::default();
        preceding.push(word);
        preceding
    }

    pub fn push(&mut self, word: &'a str) {
        self.last = word;
        if marks_bodiless(word) {
            self.bodiless = true;
        }
    }

    /// A `;` ends the item
    pub fn end_item(&mut self) {
        *self = Self::default();
    }
}

/// Keywords that close the block `opening` starts, or `None` when `opening`
/// starts no block after the words in `preceding`.
pub(super) fn block_closers(opening: &str, preceding: Preceding<'_>) -> Option<&'static [&'static str]> {
    let last = preceding.last;
    let closers: &'static [&'static str] = match opening {
        "begin" => &["end"],
        "fork" if matches!(last, "wait" | "disable") => return None,
        "fork" => &["join", "join_any", "join_none"],
        "case" | "casex" | "casez" | "randcase" => &["endcase"],
        "randsequence" => &["endsequence"],
        "generate" => &["endgenerate"],
        "specify" => &["endspecify"],
        "table" => &["endtable"],
        "covergroup" => &["endgroup"],
        "clocking" => &["endclocking"],
        "property" | "sequence" if is_assertion(last) => return None,
        "property" => &["endproperty"],
        "sequence" => &["endsequence"],
        "checker" => &["endchecker"],
        "config" => &["endconfig"],
        "primitive" => &["endprimitive"],
        "module" | "macromodule" => &["endmodule"],
        "interface" if last == "virtual" => return None,
        "interface" => &["endinterface"],
        "program" => &["endprogram"],
        "package" => &["endpackage"],
        "class" if last == "typedef" => return None,
        "class" => &["endclass"],
        "function" | "task" if preceding.bodiless => return None,
        "function" => &["endfunction"],
        "task" => &["endtask"],
        _ => return None,
    };
    Some(closers)
}

fn is_assertion(word: &str) -> bool {
    matches!(word, "assert" | "assume" | "cover" | "expect" | "restrict")
}

/// `extern`, `pure virtual` and DPI subroutines have no body
pub(super) fn marks_bodiless(word: &str) -> bool {
    matches!(word, "extern" | "import" | "export" | "pure")
}
