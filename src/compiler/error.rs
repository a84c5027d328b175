//! Error types shared by the compilation pipeline.
//!
//! The first error aborts the whole run: there is no recovery, no
//! multi-error batching, and no partial output. Errors are returned as
//! values up the call chain; the driver decides process exit behavior.
use std::error;
use std::fmt;

use super::lexer::Token;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CompileError {
    /// A required token or grammar form was absent or of the wrong kind.
    Syntax { expected: String, found: Token },
    /// A variable was declared more than once.
    DuplicateDeclaration { name: String, line: usize },
    /// A variable was used or assigned before being declared.
    UndeclaredVariable { name: String, line: usize },
    /// An internal consistency violation in the code generator, not a
    /// user-facing mistake.
    CodegenInvariant { detail: String },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompileError::Syntax { expected, found } => write!(
                f,
                "Syntax error (line {}): {}. Got token '{}' ({:?})",
                found.line, expected, found.text, found.kind
            ),
            CompileError::DuplicateDeclaration { name, line } => write!(
                f,
                "Semantic error (line {}): variable '{}' already declared",
                line, name
            ),
            CompileError::UndeclaredVariable { name, line } => write!(
                f,
                "Semantic error (line {}): variable '{}' used before declaration",
                line, name
            ),
            CompileError::CodegenInvariant { detail } => {
                write!(f, "Codegen internal error: {}", detail)
            }
        }
    }
}

impl error::Error for CompileError {}
