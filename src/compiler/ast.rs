//! This AST describes a parsed SimpleLang program.
//!
//! SimpleLang is a minimal imperative language: integer variable
//! declarations, assignments, equality-gated `if` blocks, and
//! left-associative `+`/`-` expressions over identifiers and integer
//! literals. Comments are prefixed with `//` and are single-line only.
//!
//! Grammar accepted by the parser:
//!
//! ```text
//! Program    := Statement* End
//! Statement  := Declaration | Assignment | Conditional
//! Declaration:= 'int' Identifier ';'
//! Assignment := Identifier '=' Expression ';'
//! Conditional:= 'if' '(' Condition ')' '{' Statement* '}'
//! Condition  := Expression '==' Expression
//! Expression := Term (('+'|'-') Term)*
//! Term       := Identifier | NumberLiteral
//! ```
//!
//! Example source file:
//!
//! ```text
//! int x;
//! x = 5 + 3;      // x is 8
//! int y;
//! if (x == 8) {
//!     y = x - 1;
//! }
//! ```
//!
//! The tree is strictly ownership-shaped: every child has exactly one
//! parent. It is built bottom-up by the parser and consumed top-down
//! by the code generator.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BinOp {
    Add,
    Sub,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    Number { value: i64, line: usize },
    Identifier { name: String, line: usize },
    Binary { op: BinOp, left: Box<Expr>, right: Box<Expr>, line: usize },
}

/// The two comparands of an `if` condition. Equality is the only
/// comparison in the language and is not composable inside expressions.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Condition {
    pub left: Expr,
    pub right: Expr,
    pub line: usize,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Stmt {
    Declaration { name: String, line: usize },
    Assignment { name: String, value: Expr, line: usize },
    Conditional { condition: Condition, body: Vec<Stmt>, line: usize },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Program (stmts={})", self.stmts.len())?;
        for stmt in &self.stmts {
            fmt_stmt(f, stmt, 2)?;
        }
        Ok(())
    }
}

fn fmt_stmt(f: &mut fmt::Formatter, stmt: &Stmt, indent: usize) -> fmt::Result {
    let pad = " ".repeat(indent);
    match stmt {
        Stmt::Declaration { name, line } => writeln!(f, "{}Decl: int {} (line {})", pad, name, line),
        Stmt::Assignment { name, value, .. } => {
            writeln!(f, "{}Assign: {} =", pad, name)?;
            fmt_expr(f, value, indent + 2)
        }
        Stmt::Conditional { condition, body, line } => {
            writeln!(f, "{}If (line {})", pad, line)?;
            writeln!(f, "{}  Condition:", pad)?;
            fmt_expr(f, &condition.left, indent + 4)?;
            writeln!(f, "{}    ==", pad)?;
            fmt_expr(f, &condition.right, indent + 4)?;
            writeln!(f, "{}  Block (stmts={}):", pad, body.len())?;
            for stmt in body {
                fmt_stmt(f, stmt, indent + 4)?;
            }
            Ok(())
        }
    }
}

fn fmt_expr(f: &mut fmt::Formatter, expr: &Expr, indent: usize) -> fmt::Result {
    let pad = " ".repeat(indent);
    match expr {
        Expr::Number { value, line } => writeln!(f, "{}Number: {} (line {})", pad, value, line),
        Expr::Identifier { name, line } => writeln!(f, "{}Ident: {} (line {})", pad, name, line),
        Expr::Binary { op, left, right, .. } => {
            writeln!(f, "{}Binop ({})", pad, op)?;
            fmt_expr(f, left, indent + 2)?;
            fmt_expr(f, right, indent + 2)
        }
    }
}
