//! Phase two: recursive-descent parsing of the token stream into a
//! `Polynomial`, with precedence `+ - < * / < ^` (right-associative `^`),
//! implicit multiplication by juxtaposition, and parenthesised
//! subexpressions.

use crate::error::ParseError;
use crate::scanner::{Scanner, Token, TokenKind};
use ncarith::Rational;
use ncmonomial::{Monomial, Order, Symbol};
use ncpoly::Polynomial;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use std::collections::HashMap;
use std::rc::Rc;

/// Parse `text` into a `Polynomial` under `order`, resolving identifiers
/// through the caller-supplied `variables` map.
pub fn parse(variables: &HashMap<String, Symbol>, order: Rc<dyn Order>, text: &str) -> Result<Polynomial, ParseError> {
    let mut parser = Parser::new(variables, order, text)?;
    let result = parser.parse_expr()?;
    parser.expect_eof()?;
    Ok(result)
}

struct Parser<'a> {
    scanner: Scanner,
    current: Token,
    variables: &'a HashMap<String, Symbol>,
    order: Rc<dyn Order>,
}

impl<'a> Parser<'a> {
    fn new(variables: &'a HashMap<String, Symbol>, order: Rc<dyn Order>, text: &'a str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(text);
        let current = scanner.next_token()?;
        Ok(Parser { scanner, current, variables, order })
    }

    fn current_pos(&self) -> (usize, usize) {
        (self.current.line, self.current.col)
    }

    fn advance_token(&mut self) -> Result<Token, ParseError> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        if matches!(self.current.kind, TokenKind::RParen) {
            self.advance_token()?;
            Ok(())
        } else {
            let (line, col) = self.current_pos();
            Err(ParseError::UnexpectedToken { expected: "')'".to_string(), found: describe(&self.current.kind), line, col })
        }
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        if matches!(self.current.kind, TokenKind::Eof) {
            Ok(())
        } else {
            let (line, col) = self.current_pos();
            Err(ParseError::TrailingInput { line, col })
        }
    }

    fn lookup(&self, name: &str, line: usize, col: usize) -> Result<Symbol, ParseError> {
        self.variables.get(name).copied().ok_or_else(|| ParseError::UnknownVariable { name: name.to_string(), line, col })
    }

    fn at_atom_start(&self) -> bool {
        matches!(self.current.kind, TokenKind::Number(_) | TokenKind::Ident(_) | TokenKind::LParen)
    }

    /// `term ((+|-) term)*`
    fn parse_expr(&mut self) -> Result<Polynomial, ParseError> {
        let mut lhs = self.parse_term()?;
        loop {
            match self.current.kind {
                TokenKind::Plus => {
                    self.advance_token()?;
                    lhs = lhs.add(&self.parse_term()?);
                }
                TokenKind::Minus => {
                    self.advance_token()?;
                    lhs = lhs.sub(&self.parse_term()?);
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    /// `unary ((*|/|<implicit>) unary)*`
    fn parse_term(&mut self) -> Result<Polynomial, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            match self.current.kind {
                TokenKind::Star => {
                    self.advance_token()?;
                    lhs = lhs.mul(&self.parse_unary()?);
                }
                TokenKind::Slash => {
                    let (line, col) = self.current_pos();
                    self.advance_token()?;
                    let rhs = self.parse_unary()?;
                    let scalar = as_scalar(&rhs).ok_or(ParseError::DivisorNotScalar { line, col })?;
                    if scalar.is_zero() {
                        return Err(ParseError::DivisorNotScalar { line, col });
                    }
                    lhs = lhs.mul_scalar(&scalar.inv());
                }
                _ if self.at_atom_start() => {
                    lhs = lhs.mul(&self.parse_unary()?);
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    /// `(+|-) unary | power`
    fn parse_unary(&mut self) -> Result<Polynomial, ParseError> {
        match self.current.kind {
            TokenKind::Minus => {
                self.advance_token()?;
                Ok(self.parse_unary()?.negate())
            }
            TokenKind::Plus => {
                self.advance_token()?;
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    /// `atom ('^' exponent)?`, right-associative.
    fn parse_power(&mut self) -> Result<Polynomial, ParseError> {
        let base = self.parse_atom()?;
        if matches!(self.current.kind, TokenKind::Caret) {
            self.advance_token()?;
            let exponent = self.parse_exponent()?;
            Ok(base.pow(exponent))
        } else {
            Ok(base)
        }
    }

    /// An integer literal, optionally itself the base of a right-associative
    /// chain of `^`. Powers must have integer exponents.
    fn parse_exponent(&mut self) -> Result<u64, ParseError> {
        let tok = self.advance_token()?;
        let n = match tok.kind {
            TokenKind::Number(r) => nonneg_u64(&r, tok.line, tok.col)?,
            _ => return Err(ParseError::InvalidExponent { line: tok.line, col: tok.col }),
        };
        if matches!(self.current.kind, TokenKind::Caret) {
            self.advance_token()?;
            let rest = self.parse_exponent()?;
            let exp32 = u32::try_from(rest).unwrap_or(u32::MAX);
            Ok(n.pow(exp32))
        } else {
            Ok(n)
        }
    }

    fn parse_atom(&mut self) -> Result<Polynomial, ParseError> {
        let tok = self.advance_token()?;
        match tok.kind {
            TokenKind::Number(r) => Ok(Polynomial::new(self.order.clone(), vec![(r, Monomial::new())])),
            TokenKind::Ident(name) => {
                let sym = self.lookup(&name, tok.line, tok.col)?;
                Ok(Polynomial::new(self.order.clone(), vec![(Rational::one(), vec![sym])]))
            }
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            other => Err(ParseError::UnexpectedToken {
                expected: "number, identifier, or '('".to_string(),
                found: describe(&other),
                line: tok.line,
                col: tok.col,
            }),
        }
    }
}

/// A polynomial is a bare scalar iff it has at most one term and that
/// term's monomial is the empty word.
fn as_scalar(p: &Polynomial) -> Option<Rational> {
    if p.is_zero() {
        return Some(Rational::zero());
    }
    if p.num_terms() == 1 {
        let (c, m) = p.leading_term();
        if m.is_empty() {
            return Some(c);
        }
    }
    None
}

fn nonneg_u64(r: &Rational, line: usize, col: usize) -> Result<u64, ParseError> {
    if r.denom() != &BigInt::from(1) || r.numer().is_negative() {
        return Err(ParseError::InvalidExponent { line, col });
    }
    r.numer().to_u64().ok_or(ParseError::InvalidExponent { line, col })
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Number(r) => format!("number '{r}'"),
        TokenKind::Ident(name) => format!("identifier '{name}'"),
        TokenKind::Plus => "'+'".to_string(),
        TokenKind::Minus => "'-'".to_string(),
        TokenKind::Star => "'*'".to_string(),
        TokenKind::Slash => "'/'".to_string(),
        TokenKind::Caret => "'^'".to_string(),
        TokenKind::LParen => "'('".to_string(),
        TokenKind::RParen => "')'".to_string(),
        TokenKind::Eof => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncmonomial::Deglex;

    fn vars(names: &[(&str, u32)]) -> HashMap<String, Symbol> {
        names.iter().map(|(n, id)| (n.to_string(), Symbol::new(*id))).collect()
    }

    fn order() -> Rc<dyn Order> {
        Rc::new(Deglex)
    }

    /// Scenario 4: `-x^2y^3 + 5/3(y-x)x` under Deglex `x=1, y=2` yields
    /// exactly three terms.
    #[test]
    fn scenario_4_parse_mixed_expression() {
        let variables = vars(&[("x", 1), ("y", 2)]);
        let p = parse(&variables, order(), "-x^2y^3 + 5/3(y-x)x").unwrap();
        assert_eq!(p.num_terms(), 3);
        let x = Symbol::new(1);
        let y = Symbol::new(2);
        let mut found_first = false;
        let mut found_second = false;
        let mut found_third = false;
        for (c, m) in p.terms() {
            if m == [x, x, y, y, y] {
                assert_eq!(*c, Rational::from_integer(-1));
                found_first = true;
            } else if m == [y, x] {
                assert_eq!(*c, Rational::new(5, 3));
                found_second = true;
            } else if m == [x, x] {
                assert_eq!(*c, Rational::new(-5, 3));
                found_third = true;
            }
        }
        assert!(found_first && found_second && found_third);
    }

    #[test]
    fn implicit_multiplication_by_juxtaposition() {
        let variables = vars(&[("x", 1), ("y", 2)]);
        let p = parse(&variables, order(), "2xy").unwrap();
        assert_eq!(p.num_terms(), 1);
        let (c, m) = p.leading_term();
        assert_eq!(c, Rational::from_integer(2));
        assert_eq!(m, vec![Symbol::new(1), Symbol::new(2)]);
    }

    #[test]
    fn unknown_variable_is_an_error() {
        let variables = vars(&[("x", 1)]);
        let err = parse(&variables, order(), "y").unwrap_err();
        assert!(matches!(err, ParseError::UnknownVariable { .. }));
    }

    #[test]
    fn division_by_nonscalar_is_an_error() {
        let variables = vars(&[("x", 1)]);
        let err = parse(&variables, order(), "1/x").unwrap_err();
        assert!(matches!(err, ParseError::DivisorNotScalar { .. }));
    }

    #[test]
    fn parenthesised_subexpression_and_power() {
        let variables = vars(&[("x", 1)]);
        let p = parse(&variables, order(), "(x+1)^2").unwrap();
        // (x+1)^2 = x^2 + 2x + 1, three terms under Deglex.
        assert_eq!(p.num_terms(), 3);
    }

    #[test]
    fn trailing_input_is_rejected() {
        let variables = vars(&[("x", 1)]);
        let err = parse(&variables, order(), "x)").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. } | ParseError::TrailingInput { .. }));
    }
}
