//! The conversion orchestrator.
//!
//! Drives the line classifier and the inline span rewriter over a
//! document, line by line, accumulating HTML into a single buffer.

use crate::block;
use crate::error::CompileError;
use crate::lexer::Lexer;
use crate::rewrite;

/// Compiles a fixed-subset markup document into HTML.
///
/// The compiler holds the immutable source text; each call to
/// [`compile`](Compiler::compile) renders into a fresh buffer, so a
/// single compiler can be reused and shared freely across calls.
///
/// # Example
///
/// ```rust
/// use marklite_core::Compiler;
///
/// let compiler = Compiler::new("## Usage\n\nSee the *manual*.").unwrap();
/// assert_eq!(
///     compiler.compile(),
///     "<h2>Usage</h2>\n<p>See the <em>manual</em>.</p>\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Compiler {
    text: String,
}

impl Compiler {
    /// Create a compiler for the given markup text.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::EmptyInput`] if `text` is empty.
    pub fn new(text: impl Into<String>) -> Result<Self, CompileError> {
        let text = text.into();
        if text.is_empty() {
            return Err(CompileError::EmptyInput);
        }
        Ok(Self { text })
    }

    /// The source markup text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render the document to HTML.
    ///
    /// Each line is classified into a block-level fragment and appended
    /// to the output buffer; the inline rewriter then runs over the
    /// entire accumulated buffer (links to fixed point, then emphasis
    /// to fixed point) before the next line is processed.
    ///
    /// Re-scanning the whole buffer on every line is deliberate: an
    /// emphasis span may open on one rendered line and close after a
    /// later fragment is appended, and that cross-line behavior is part
    /// of the output contract.
    pub fn compile(&self) -> String {
        let mut html = String::new();

        for line in Lexer::new(&self.text) {
            if let Some(fragment) = block::classify(line) {
                html.push_str(&fragment);
            }

            html = rewrite::rewrite_links(html);
            html = rewrite::rewrite_emphasis(html);
        }

        html
    }
}
