//! The Parser module pulls tokens on demand from the Lexer and
//! converts them into an AST.
//!
//! It is a one-token-lookahead recursive descent parser. Any grammar
//! violation is unrecoverable: parsing halts at the first error and
//! reports the offending line, the expected construct, and the token
//! actually found.
use super::ast::{BinOp, Condition, Expr, Program, Stmt};
use super::error::{CompileError, CompileResult};
use super::lexer::{Lexer, Token, TokenKind};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    /// Run the parser, consuming itself and returning the program AST.
    pub fn run(mut self) -> CompileResult<Program> {
        let mut stmts = Vec::new();
        while self.current.kind != TokenKind::Eof {
            stmts.push(self.statement()?);
        }
        Ok(Program { stmts })
    }

    fn statement(&mut self) -> CompileResult<Stmt> {
        match self.current.kind {
            TokenKind::Int => self.declaration(),
            TokenKind::Identifier => self.assignment(),
            TokenKind::If => self.conditional(),
            _ => Err(self.syntax_error("Expected a statement (declaration, assignment, or if)")),
        }
    }

    fn declaration(&mut self) -> CompileResult<Stmt> {
        let line = self.current.line;
        self.expect(TokenKind::Int, "Expected 'int' for declaration")?;
        if self.current.kind != TokenKind::Identifier {
            return Err(self.syntax_error("Expected identifier after 'int'"));
        }
        let name = self.current.text.clone();
        self.advance();
        self.expect(TokenKind::Semicolon, "Expected ';' after declaration")?;
        Ok(Stmt::Declaration { name, line })
    }

    fn assignment(&mut self) -> CompileResult<Stmt> {
        let line = self.current.line;
        if self.current.kind != TokenKind::Identifier {
            return Err(self.syntax_error("Expected identifier at assignment start"));
        }
        let name = self.current.text.clone();
        self.advance();
        self.expect(TokenKind::Assign, "Expected '=' in assignment")?;
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expected ';' after assignment")?;
        Ok(Stmt::Assignment { name, value, line })
    }

    fn conditional(&mut self) -> CompileResult<Stmt> {
        let line = self.current.line;
        self.expect(TokenKind::If, "Expected 'if'")?;
        self.expect(TokenKind::LParen, "Expected '(' after if")?;
        let condition = self.condition()?;
        self.expect(TokenKind::RParen, "Expected ')' after condition")?;
        self.expect(TokenKind::LBrace, "Expected '{' to start if block")?;
        let mut body = Vec::new();
        // Reaching Eof here leaves the brace mismatch for expect() to report.
        while self.current.kind != TokenKind::RBrace && self.current.kind != TokenKind::Eof {
            body.push(self.statement()?);
        }
        self.expect(TokenKind::RBrace, "Expected '}' to end if block")?;
        Ok(Stmt::Conditional { condition, body, line })
    }

    fn condition(&mut self) -> CompileResult<Condition> {
        let line = self.current.line;
        let left = self.expression()?;
        self.expect(TokenKind::Equal, "Expected '==' in condition")?;
        let right = self.expression()?;
        Ok(Condition { left, right, line })
    }

    fn expression(&mut self) -> CompileResult<Expr> {
        let mut left = self.term()?;
        while self.current.kind == TokenKind::Plus || self.current.kind == TokenKind::Minus {
            let op = match self.current.kind {
                TokenKind::Plus => BinOp::Add,
                _ => BinOp::Sub,
            };
            let line = self.current.line;
            self.advance();
            let right = self.term()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                line,
            };
        }
        Ok(left)
    }

    fn term(&mut self) -> CompileResult<Expr> {
        match self.current.kind {
            TokenKind::Identifier => {
                let expr = Expr::Identifier {
                    name: self.current.text.clone(),
                    line: self.current.line,
                };
                self.advance();
                Ok(expr)
            }
            TokenKind::Number => {
                let expr = Expr::Number {
                    value: number_value(&self.current.text),
                    line: self.current.line,
                };
                self.advance();
                Ok(expr)
            }
            _ => Err(self.syntax_error("Expected identifier or number in expression")),
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> CompileResult<()> {
        if self.current.kind != kind {
            return Err(self.syntax_error(expected));
        }
        self.advance();
        Ok(())
    }

    /// Replaces the lookahead token with the next one from the lexer.
    #[inline]
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn syntax_error(&self, expected: &str) -> CompileError {
        CompileError::Syntax {
            expected: expected.to_string(),
            found: self.current.clone(),
        }
    }
}

// Literals are digit runs; there is no overflow checking, the value
// wraps in the native integer range.
fn number_value(text: &str) -> i64 {
    text.bytes()
        .fold(0i64, |acc, b| acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0')))
}
