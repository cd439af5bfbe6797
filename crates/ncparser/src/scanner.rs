//! Phase one: turn source text into a stream of tokens, tracking line and
//! column for error reporting.

use crate::error::ParseError;
use ncarith::Rational;
use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(Rational),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
}

pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        Scanner { chars: text.chars().collect(), pos: 0, line: 1, col: 1 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();
        let (line, col) = (self.line, self.col);
        let c = match self.peek() {
            None => return Ok(Token { kind: TokenKind::Eof, line, col }),
            Some(c) => c,
        };
        if c.is_ascii_digit() {
            return self.scan_number(line, col);
        }
        if c == '{' {
            return self.scan_braced_ident(line, col);
        }
        if c.is_alphabetic() {
            self.advance();
            return Ok(Token { kind: TokenKind::Ident(c.to_string()), line, col });
        }
        self.advance();
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            other => return Err(ParseError::UnexpectedChar { ch: other, line, col }),
        };
        Ok(Token { kind, line, col })
    }

    fn scan_number(&mut self, line: usize, col: usize) -> Result<Token, ParseError> {
        let mut digits = String::new();
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            digits.push(self.advance().unwrap());
        }
        let value: BigInt =
            digits.parse().map_err(|_| ParseError::InvalidNumber { text: digits.clone(), line, col })?;
        Ok(Token { kind: TokenKind::Number(Rational::from_integer(value)), line, col })
    }

    fn scan_braced_ident(&mut self, line: usize, col: usize) -> Result<Token, ParseError> {
        self.advance();
        let mut name = String::new();
        loop {
            match self.advance() {
                Some('}') => break,
                Some(c) => name.push(c),
                None => return Err(ParseError::UnterminatedBrace { line, col }),
            }
        }
        if name.is_empty() {
            return Err(ParseError::EmptyIdentifier { line, col });
        }
        Ok(Token { kind: TokenKind::Ident(name), line, col })
    }
}
