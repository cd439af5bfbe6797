//! The parser's external-boundary error: malformed input text, reported
//! with a human-readable message and a line/column location.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}, column {col}: unexpected character '{ch}'")]
    UnexpectedChar { ch: char, line: usize, col: usize },
    #[error("line {line}, column {col}: invalid numeric literal '{text}'")]
    InvalidNumber { text: String, line: usize, col: usize },
    #[error("line {line}, column {col}: unterminated '{{' identifier")]
    UnterminatedBrace { line: usize, col: usize },
    #[error("line {line}, column {col}: empty '{{}}' identifier")]
    EmptyIdentifier { line: usize, col: usize },
    #[error("line {line}, column {col}: unknown variable '{name}'")]
    UnknownVariable { name: String, line: usize, col: usize },
    #[error("line {line}, column {col}: expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String, line: usize, col: usize },
    #[error("line {line}, column {col}: exponent must be a nonnegative integer")]
    InvalidExponent { line: usize, col: usize },
    #[error("line {line}, column {col}: divisor must be a nonzero scalar constant")]
    DivisorNotScalar { line: usize, col: usize },
    #[error("line {line}, column {col}: unexpected trailing input")]
    TrailingInput { line: usize, col: usize },
}
