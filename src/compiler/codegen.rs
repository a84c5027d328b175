//! The Code Generator walks the AST once, depth-first, and emits the
//! textual instruction stream for the target machine.
//!
//! The target is a two-register, memory-mapped accumulator machine:
//! register A is the implicit operand and result of every arithmetic
//! and compare instruction, register B holds the second operand.
//! Two-operand evaluation spills the accumulator to a single fixed
//! scratch address; the slot holds at most one pending value at a time
//! because operands are evaluated strictly left-then-right and the
//! parent consumes the spill before the slot is reused.
use super::ast::{BinOp, Condition, Expr, Program, Stmt};
use super::error::{CompileError, CompileResult};
use super::labels::LabelAllocator;
use super::symbol::{SymbolTable, VAR_BASE_ADDR};

/// Scratch address used for spilled accumulator values.
pub const TEMP_ADDR: u32 = 0x00;

pub struct CodeGenerator<'a> {
    symbols: &'a mut SymbolTable,
    labels: &'a mut LabelAllocator,
    out: String,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(symbols: &'a mut SymbolTable, labels: &'a mut LabelAllocator) -> Self {
        CodeGenerator { symbols, labels, out: String::new() }
    }

    /// Emits the whole program: header comments, every top-level
    /// statement in source order, and a terminal halt.
    pub fn run(mut self, program: &Program) -> CompileResult<String> {
        self.emit("// SimpleLang -> assembly");
        self.emit(format!(
            "// TEMP at 0x{:02X}, variables from 0x{:02X} upward",
            TEMP_ADDR, VAR_BASE_ADDR
        ));
        self.emit("");
        for stmt in &program.stmts {
            self.statement(stmt)?;
        }
        self.emit("hlt");
        Ok(self.out)
    }

    fn statement(&mut self, stmt: &Stmt) -> CompileResult<()> {
        match stmt {
            Stmt::Declaration { name, line } => {
                let addr = self.symbols.declare(name, *line)?;
                // Addresses are one-byte instruction operands.
                if addr > 0xFF {
                    return Err(CompileError::CodegenInvariant {
                        detail: format!(
                            "variable region exhausted declaring '{}' (address 0x{:X})",
                            name, addr
                        ),
                    });
                }
                self.emit(format!("// decl {} -> 0x{:02X}", name, addr));
                self.emit("ldi A 0");
                self.emit(format!("mov M A 0x{:02X}", addr));
            }
            Stmt::Assignment { name, value, line } => {
                let addr = self.lookup(name, *line)?;
                self.expression(value)?;
                self.emit(format!("mov M A 0x{:02X}", addr));
                self.emit(format!("// {} := [stored at 0x{:02X}]", name, addr));
            }
            Stmt::Conditional { condition, body, .. } => {
                let then_label = self.labels.fresh("L_then_");
                let end_label = self.labels.fresh("L_end_");
                self.condition(condition)?;
                // Equality takes the then-branch; inequality falls
                // through to the jmp that skips the block.
                self.emit(format!("jz {}", then_label));
                self.emit(format!("jmp {}", end_label));
                self.emit(format!("{}:", then_label));
                for stmt in body {
                    self.statement(stmt)?;
                }
                self.emit(format!("{}:", end_label));
            }
        }
        Ok(())
    }

    fn expression(&mut self, expr: &Expr) -> CompileResult<()> {
        match expr {
            Expr::Number { value, .. } => {
                self.emit(format!("ldi A {}", value));
            }
            Expr::Identifier { name, line } => {
                let addr = self.lookup(name, *line)?;
                self.emit(format!("mov A M 0x{:02X}", addr));
            }
            Expr::Binary { op, left, right, .. } => {
                self.spill_to_temp(left)?;
                self.expression(right)?;
                self.emit("mov B A");
                self.emit(format!("mov A M 0x{:02X}", TEMP_ADDR));
                match op {
                    BinOp::Add => self.emit("add"),
                    BinOp::Sub => self.emit("sub"),
                }
            }
        }
        Ok(())
    }

    fn condition(&mut self, cond: &Condition) -> CompileResult<()> {
        self.spill_to_temp(&cond.left)?;
        self.expression(&cond.right)?;
        self.emit("mov B A");
        self.emit(format!("mov A M 0x{:02X}", TEMP_ADDR));
        self.emit("cmp");
        Ok(())
    }

    // Evaluates `expr` into the accumulator and parks it in the
    // scratch slot for the parent to reload.
    fn spill_to_temp(&mut self, expr: &Expr) -> CompileResult<()> {
        self.expression(expr)?;
        self.emit(format!("mov M A 0x{:02X}", TEMP_ADDR));
        Ok(())
    }

    fn lookup(&self, name: &str, line: usize) -> CompileResult<u32> {
        self.symbols.lookup(name).ok_or_else(|| CompileError::UndeclaredVariable {
            name: name.to_string(),
            line,
        })
    }

    fn emit(&mut self, line: impl AsRef<str>) {
        self.out.push_str(line.as_ref());
        self.out.push('\n');
    }
}
