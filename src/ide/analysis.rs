//! Analysis: the entry points a documentation engine calls.
//!
//! An `Analysis` owns a [`LanguageRegistry`] and turns source text into
//! element lists, highlighted buffers and parsed prototypes. Languages are
//! selected by registered name or by file extension.
//!
//! ## Usage
//!
//! ```ignore
//! let analysis = Analysis::with_builtins(Arc::new(KeywordTable::standard()));
//!
//! let elements = analysis.extract_elements("cs", "class C { }")?;
//! let buffer = analysis.highlight("SystemVerilog", "module m; endmodule")?;
//! ```

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::hir::{Element, KindId, KindRegistry};
use crate::parser::{Language, LanguageRegistry, ParseError, ParseResult, TokenBuffer};
use crate::prototype::ParsedPrototype;

/// Parsing entry points over a set of languages.
///
/// Every call works on its own buffer and element list, so one `Analysis`
/// can serve any number of threads at once.
#[derive(Debug)]
pub struct Analysis {
    languages: LanguageRegistry,
}

impl Analysis {
    pub fn new(languages: LanguageRegistry) -> Self {
        Self { languages }
    }

    /// An analysis over the built-in grammars
    pub fn with_builtins(kinds: Arc<dyn KindRegistry>) -> Self {
        Self::new(LanguageRegistry::with_builtins(kinds))
    }

    pub fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    /// A language by registered name, falling back to file extension
    pub fn language(&self, name_or_extension: &str) -> ParseResult<Arc<dyn Language>> {
        self.languages
            .by_name(name_or_extension)
            .or_else(|_| self.languages.by_extension(name_or_extension))
            .map_err(|_| ParseError::unknown_language(name_or_extension))
    }

    /// The language that claims a file's extension
    pub fn language_for_file(&self, file_name: &str) -> ParseResult<Arc<dyn Language>> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default();
        self.languages.by_extension(extension)
    }

    // ==================== Single file ====================

    /// The flat element list for `source`, root element first
    pub fn extract_elements(&self, language: &str, source: &str) -> ParseResult<Vec<Element>> {
        self.extract_elements_with_cancel(language, source, &CancellationToken::new())
    }

    /// Like [`Analysis::extract_elements`], giving up with
    /// [`ParseError::Cancelled`] once `cancel` fires.
    ///
    /// The token is checked between top-level elements only.
    pub fn extract_elements_with_cancel(
        &self,
        language: &str,
        source: &str,
        cancel: &CancellationToken,
    ) -> ParseResult<Vec<Element>> {
        let language = self.language(language)?;
        let buffer = TokenBuffer::new(source);
        language.get_code_elements(&buffer, cancel)
    }

    /// A token buffer for `source` with highlight kinds written
    pub fn highlight(&self, language: &str, source: &str) -> ParseResult<TokenBuffer> {
        let language = self.language(language)?;
        let buffer = TokenBuffer::new(source);
        language.syntax_highlight(&buffer);
        Ok(buffer)
    }

    /// Structure an isolated declaration signature of the given kind
    pub fn parse_prototype(&self, language: &str, prototype: &str, kind: KindId) -> ParseResult<ParsedPrototype> {
        let language = self.language(language)?;
        Ok(language.parse_prototype(prototype, kind))
    }

    // ==================== Batch ====================

    /// Element lists for many `(file name, text)` pairs, parsed in parallel.
    ///
    /// Each file's language comes from its extension. Results are in input order.
    pub fn extract_many(&self, files: &[(&str, &str)]) -> Vec<ParseResult<Vec<Element>>> {
        let results: Vec<_> = files
            .par_iter()
            .map(|(file_name, source)| {
                let language = self.language_for_file(file_name)?;
                let buffer = TokenBuffer::new(*source);
                language.get_code_elements(&buffer, &CancellationToken::new())
            })
            .collect();

        debug!(
            "[ANALYSIS] extracted {} files, {} failed",
            results.len(),
            results.iter().filter(|result| result.is_err()).count()
        );
        results
    }
}
