//! A flat, append-only symbol table mapping variable names to storage
//! addresses in the machine's variable region.
//!
//! SimpleLang has no block scoping: a name declared inside a
//! conditional body remains visible for the rest of the program, and
//! declaring the same name twice anywhere is an error. Addresses are
//! assigned sequentially in declaration order and are never reused.
use super::error::{CompileError, CompileResult};

/// First address of the contiguous variable region.
pub const VAR_BASE_ADDR: u32 = 0x10;

pub struct SymbolTable {
    entries: Vec<(String, u32)>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { entries: Vec::new() }
    }

    /// Records `name` and assigns it the next sequential address.
    /// `line` is only used for the diagnostic on redeclaration.
    pub fn declare(&mut self, name: &str, line: usize) -> CompileResult<u32> {
        if self.lookup(name).is_some() {
            return Err(CompileError::DuplicateDeclaration {
                name: name.to_string(),
                line,
            });
        }
        let addr = VAR_BASE_ADDR + self.entries.len() as u32;
        self.entries.push((name.to_string(), addr));
        Ok(addr)
    }

    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, addr)| *addr)
    }
}
