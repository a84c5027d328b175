//! The Compiler module is in charge of taking a
//! SimpleLang source file and producing assembly text
//! for the target accumulator machine.
//!
//! It does this by implementing a simple tokenizer,
//! a one-token-lookahead recursive descent parser, and
//! a tree-walking code generator backed by a flat symbol
//! table and a label allocator.

pub mod ast;
pub mod codegen;
pub mod error;
pub mod labels;
pub mod lexer;
pub mod parser;
pub mod symbol;

pub use error::{CompileError, CompileResult};

use codegen::CodeGenerator;
use labels::LabelAllocator;
use lexer::Lexer;
use parser::Parser;
use symbol::SymbolTable;

/// Compile a SimpleLang source string into assembly text.
pub fn compile(source: &str) -> CompileResult<String> {
    let program = Parser::new(Lexer::new(source)).run()?;
    let mut symbols = SymbolTable::new();
    let mut labels = LabelAllocator::new();
    CodeGenerator::new(&mut symbols, &mut labels).run(&program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_end_to_end() {
        let asm = compile("int x;\nx = 5;\nint y;\ny = x + 3;").unwrap();
        assert!(asm.starts_with("// SimpleLang -> assembly\n"));
        assert!(asm.contains("mov M A 0x11"));
        assert!(asm.ends_with("hlt\n"));
    }

    #[test]
    fn test_pipeline_propagates_errors() {
        assert!(matches!(compile("int x int y;"), Err(CompileError::Syntax { .. })));
        assert!(matches!(
            compile("y = 1;"),
            Err(CompileError::UndeclaredVariable { .. })
        ));
    }
}
