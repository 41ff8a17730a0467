//! # Marklite Core
//!
//! A small, fixed-subset markup to HTML compiler.
//!
//! Marklite recognizes headings (`#` through `######`), paragraphs,
//! `[text](url)` links, and `*` emphasis (italic, bold, bold-italic) —
//! and nothing else. It is meant as an embeddable text-rendering
//! component, not a document pipeline: no lists, tables, code blocks,
//! or nested block structures.
//!
//! Rendering is two-phase: each line is classified into a block-level
//! fragment, then the inline span rewriter runs over the accumulated
//! output to fixed point. See [`Compiler::compile`] for the details.
//!
//! ## Quick Start
//!
//! ```rust
//! use marklite_core::Compiler;
//!
//! let compiler = Compiler::new("# Hello\n\nThis is a **paragraph**.").unwrap();
//! let html = compiler.compile();
//!
//! assert_eq!(html, "<h1>Hello</h1>\n<p>This is a <strong>paragraph</strong>.</p>\n");
//! ```
//!
//! ## Empty input
//!
//! An empty document is rejected at construction; malformed markup
//! never fails, unmatched markers simply pass through:
//!
//! ```rust
//! use marklite_core::{CompileError, Compiler};
//!
//! assert_eq!(Compiler::new("").unwrap_err(), CompileError::EmptyInput);
//! ```

pub mod block;
pub mod compiler;
pub mod error;
pub mod lexer;
pub mod rewrite;

mod html;
mod patterns;

pub use compiler::Compiler;
pub use error::CompileError;
