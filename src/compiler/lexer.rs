//! This lexer tokenizes SimpleLang source text.
use std::iter::Peekable;
use std::str::Chars;

/// Token text longer than this is truncated, not rejected.
pub const MAX_TOKEN_LEN: usize = 100;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Int,
    If,
    Identifier,
    Number,
    Assign,
    Equal,
    Plus,
    Minus,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Eof,
    Unknown,
}

// Tokens carry the matched source text and the 1-based line they start on.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Token { kind, text: text.into(), line }
    }
}

/// Produces one token per call, on demand. The lexer never fails:
/// characters it does not recognize come back as `Unknown` tokens and
/// it is the parser's job to reject them. Once the input is exhausted,
/// every further call yields another `Eof` token.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer { chars: source.chars().peekable(), line: 1 }
    }

    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.chars.next() {
            if c == '\n' {
                self.line += 1;
                continue;
            }
            if c.is_whitespace() {
                continue;
            }

            if c.is_ascii_alphabetic() {
                let text = self.take_run(c, |c| c.is_ascii_alphanumeric());
                let kind = match text.as_str() {
                    "int" => TokenKind::Int,
                    "if" => TokenKind::If,
                    _ => TokenKind::Identifier,
                };
                return Token::new(kind, text, self.line);
            }

            if c.is_ascii_digit() {
                let text = self.take_run(c, |c| c.is_ascii_digit());
                return Token::new(TokenKind::Number, text, self.line);
            }

            match c {
                '=' => {
                    // One-character lookahead: '==' is equality,
                    // a lone '=' is assignment.
                    if self.chars.peek() == Some(&'=') {
                        self.chars.next();
                        return Token::new(TokenKind::Equal, "==", self.line);
                    }
                    return Token::new(TokenKind::Assign, "=", self.line);
                }
                '+' => return Token::new(TokenKind::Plus, "+", self.line),
                '-' => return Token::new(TokenKind::Minus, "-", self.line),
                '(' => return Token::new(TokenKind::LParen, "(", self.line),
                ')' => return Token::new(TokenKind::RParen, ")", self.line),
                '{' => return Token::new(TokenKind::LBrace, "{", self.line),
                '}' => return Token::new(TokenKind::RBrace, "}", self.line),
                ';' => return Token::new(TokenKind::Semicolon, ";", self.line),
                '/' => {
                    if self.chars.peek() == Some(&'/') {
                        // Line comment: discard through end of line.
                        while let Some(n) = self.chars.next() {
                            if n == '\n' {
                                break;
                            }
                        }
                        self.line += 1;
                        continue;
                    }
                    return Token::new(TokenKind::Unknown, "/", self.line);
                }
                other => return Token::new(TokenKind::Unknown, other.to_string(), self.line),
            }
        }

        Token::new(TokenKind::Eof, "EOF", self.line)
    }

    // Greedily accumulates a run of characters matching `keep`, starting
    // with the already-consumed `first`. Characters past the length cap
    // are consumed but dropped.
    fn take_run(&mut self, first: char, keep: fn(&char) -> bool) -> String {
        let mut text = String::new();
        text.push(first);
        while let Some(c) = self.chars.peek() {
            if !keep(c) {
                break;
            }
            if text.len() < MAX_TOKEN_LEN - 1 {
                text.push(*c);
            }
            self.chars.next();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Drains the lexer up to and including the first Eof token.
    fn tokenize(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            let done = tok.kind == TokenKind::Eof;
            out.push(tok);
            if done {
                break;
            }
        }
        out
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("int if x intx if2"),
            vec![
                TokenKind::Int,
                TokenKind::If,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );

        let toks = tokenize("counter");
        assert_eq!(toks[0], Token::new(TokenKind::Identifier, "counter", 1));
    }

    #[test]
    fn test_numbers() {
        let toks = tokenize("0 42 007");
        assert_eq!(toks[0], Token::new(TokenKind::Number, "0", 1));
        assert_eq!(toks[1], Token::new(TokenKind::Number, "42", 1));
        assert_eq!(toks[2], Token::new(TokenKind::Number, "007", 1));
    }

    #[test]
    fn test_assign_vs_equal() {
        assert_eq!(
            kinds("= == = = =="),
            vec![
                TokenKind::Assign,
                TokenKind::Equal,
                TokenKind::Assign,
                TokenKind::Assign,
                TokenKind::Equal,
                TokenKind::Eof,
            ]
        );

        // '===' is equality followed by assignment.
        assert_eq!(
            kinds("==="),
            vec![TokenKind::Equal, TokenKind::Assign, TokenKind::Eof]
        );
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            kinds("+-(){};"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("int x; // declare x\nx = 1;"),
            vec![
                TokenKind::Int,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lone_slash_is_unknown() {
        let toks = tokenize("x / y");
        assert_eq!(toks[1], Token::new(TokenKind::Unknown, "/", 1));
    }

    #[test]
    fn test_unknown_characters_are_surfaced_not_fatal() {
        let toks = tokenize("x @ y");
        assert_eq!(toks[0].kind, TokenKind::Identifier);
        assert_eq!(toks[1], Token::new(TokenKind::Unknown, "@", 1));
        assert_eq!(toks[2].kind, TokenKind::Identifier);
        assert_eq!(toks[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_line_tracking() {
        let toks = tokenize("int x;\nx = 1;\n\n// comment line\nif (x == 1) {\n}");
        assert_eq!(toks[0].line, 1); // int
        assert_eq!(toks[3].line, 2); // x
        assert_eq!(toks[7].line, 5); // if
        assert_eq!(toks.last().unwrap().line, 6); // EOF after final brace
    }

    #[test]
    fn test_eof_is_repeatable() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Eof, "EOF", 1));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Eof, "EOF", 1));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Eof, "EOF", 1));
    }

    #[test]
    fn test_long_tokens_are_truncated() {
        let long = "a".repeat(250);
        let toks = tokenize(&long);
        assert_eq!(toks[0].kind, TokenKind::Identifier);
        assert_eq!(toks[0].text.len(), MAX_TOKEN_LEN - 1);
        // The remainder of the run is consumed, not re-tokenized.
        assert_eq!(toks[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_round_trip_up_to_whitespace() {
        let source = "int x;\nx = 5 + 3; // trailing comment\nif (x == 8) { int y; y = x - 1; }";
        let rebuilt: Vec<String> = tokenize(source)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| t.text)
            .collect();
        let normalized: Vec<&str> = vec![
            "int", "x", ";", "x", "=", "5", "+", "3", ";", "if", "(", "x", "==", "8", ")", "{",
            "int", "y", ";", "y", "=", "x", "-", "1", ";", "}",
        ];
        assert_eq!(rebuilt, normalized);
    }
}
