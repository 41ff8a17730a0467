use std::fmt;

/// Errors produced when constructing a [`Compiler`](crate::Compiler).
///
/// Malformed markup is never an error: unmatched markers pass through
/// to the output untouched. The only rejected input is the empty
/// document, refused at construction time so callers get a clear
/// contract instead of a silently empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    /// No markup content was supplied.
    EmptyInput,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::EmptyInput => write!(f, "no markup content supplied"),
        }
    }
}

impl std::error::Error for CompileError {}
