//! ncpoly: sparse polynomials over the free associative algebra, with exact
//! rational coefficients, plus the multivariate division that underlies
//! Gröbner basis computation.
//!
//! A `Polynomial` is an ordered sparse sum of terms, canonical by construction:
//! monomials appear in strictly decreasing order under an associated `Order`,
//! and no term carries a zero coefficient. Arithmetic methods take `&self` and
//! return a new `Polynomial` (value semantics) rather than mutating through an
//! aliasable output parameter — see `DESIGN.md` for why that reading of the
//! reference's mutable-buffer contract was chosen.

#![deny(warnings)]

pub mod division;

use ncarith::Rational;
pub use ncmonomial::{Monomial, Order, Symbol};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

/// A single `(coefficient, monomial)` term.
pub type PolynomialTerm = (Rational, Monomial);

/// An ordered sparse sum of terms over a fixed monomial order.
#[derive(Clone)]
pub struct Polynomial {
    /// Strictly decreasing under `order`; no zero coefficients.
    terms: Vec<PolynomialTerm>,
    order: Rc<dyn Order>,
}

impl Polynomial {
    /// Build a polynomial from possibly-unsorted, possibly-duplicate terms:
    /// duplicate monomials are summed, zero terms are dropped, and the result
    /// is sorted descending under `order`.
    pub fn new(order: Rc<dyn Order>, terms: Vec<PolynomialTerm>) -> Self {
        let mut combined: HashMap<Monomial, Rational> = HashMap::new();
        for (c, m) in terms {
            let entry = combined.entry(m).or_insert_with(Rational::zero);
            *entry = entry.add(&c);
        }
        let mut v: Vec<PolynomialTerm> =
            combined.into_iter().filter(|(_, c)| !c.is_zero()).map(|(m, c)| (c, m)).collect();
        v.sort_by(|a, b| order.cmp(&a.1, &b.1).reverse());
        Polynomial { terms: v, order }
    }

    /// Build directly from terms already sorted strictly descending and free
    /// of duplicate monomials/zero coefficients. Used internally where that
    /// invariant is established by construction (e.g. conjugation by a fixed
    /// prefix/suffix under an admissible order preserves relative order).
    fn from_sorted_unchecked(order: Rc<dyn Order>, terms: Vec<PolynomialTerm>) -> Self {
        if cfg!(debug_assertions) {
            for w in terms.windows(2) {
                debug_assert_eq!(order.cmp(&w[0].1, &w[1].1), Ordering::Greater);
            }
            debug_assert!(terms.iter().all(|(c, _)| !c.is_zero()));
        }
        Polynomial { terms, order }
    }

    pub fn zero(order: Rc<dyn Order>) -> Self {
        Polynomial { terms: Vec::new(), order }
    }

    pub fn one(order: Rc<dyn Order>) -> Self {
        Polynomial::new(order, vec![(Rational::one(), Monomial::new())])
    }

    /// `dst ← src`: copy contents and order.
    pub fn set(&mut self, src: &Self) {
        self.terms = src.terms.clone();
        self.order = src.order.clone();
    }

    pub fn order(&self) -> Rc<dyn Order> {
        self.order.clone()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_monic(&self) -> bool {
        !self.is_zero() && self.terms[0].0.is_one()
    }

    /// Leading `(coefficient, monomial)`. By convention, the zero polynomial's
    /// leading term is `(0, ε)`.
    pub fn leading_term(&self) -> (Rational, Monomial) {
        self.terms.first().cloned().unwrap_or((Rational::zero(), Monomial::new()))
    }

    pub fn leading_coefficient(&self) -> Rational {
        self.terms.first().map(|(c, _)| c.clone()).unwrap_or_else(Rational::zero)
    }

    /// All terms, leading term first, in descending order.
    pub fn terms(&self) -> impl Iterator<Item = (&Rational, &[Symbol])> {
        self.terms.iter().map(|(c, m)| (c, m.as_slice()))
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// `dst ← x + y`. Two-pointer merge over the sorted term streams.
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.terms.len() + other.terms.len());
        let (mut i, mut j) = (0, 0);
        while i < self.terms.len() && j < other.terms.len() {
            let (cx, mx) = &self.terms[i];
            let (cy, my) = &other.terms[j];
            match self.order.cmp(mx, my) {
                Ordering::Greater => {
                    out.push((cx.clone(), mx.clone()));
                    i += 1;
                }
                Ordering::Less => {
                    out.push((cy.clone(), my.clone()));
                    j += 1;
                }
                Ordering::Equal => {
                    let c = cx.add(cy);
                    if !c.is_zero() {
                        out.push((c, mx.clone()));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        out.extend(self.terms[i..].iter().cloned());
        out.extend(other.terms[j..].iter().cloned());
        Polynomial::from_sorted_unchecked(self.order.clone(), out)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    pub fn negate(&self) -> Self {
        let terms = self.terms.iter().map(|(c, m)| (c.neg(), m.clone())).collect();
        Polynomial::from_sorted_unchecked(self.order.clone(), terms)
    }

    /// `dst ← c · x`. Drops all terms when `c` is zero.
    pub fn mul_scalar(&self, c: &Rational) -> Self {
        if c.is_zero() {
            return Polynomial::zero(self.order.clone());
        }
        let terms = self.terms.iter().map(|(co, m)| (co.mul(c), m.clone())).collect();
        // Scaling by a nonzero constant changes no monomial, so order is preserved.
        Polynomial::from_sorted_unchecked(self.order.clone(), terms)
    }

    /// `dst ← x · y` (noncommutative concatenation on words).
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero(self.order.clone());
        }
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for (cx, mx) in &self.terms {
            for (cy, my) in &other.terms {
                let mut m = Vec::with_capacity(mx.len() + my.len());
                m.extend_from_slice(mx);
                m.extend_from_slice(my);
                terms.push((cx.mul(cy), m));
            }
        }
        Polynomial::new(self.order.clone(), terms)
    }

    /// `dst ← x^n`, `x^0 = 1`.
    pub fn pow(&self, mut n: u64) -> Self {
        let mut result = Polynomial::one(self.order.clone());
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            n >>= 1;
        }
        result
    }

    /// Scale so the leading coefficient becomes 1. No-op on the zero polynomial.
    pub fn make_monic(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let lc = self.leading_coefficient();
        self.mul_scalar(&lc.inv())
    }

    /// `c · left · self · right`, used by division/obstruction reduction to
    /// subtract a scaled, two-sided-conjugated basis element. Conjugation by
    /// a fixed prefix/suffix under an admissible order preserves the
    /// relative order of terms, so no re-sort is needed.
    pub fn scaled_conjugate(&self, coeff: &Rational, left: &[Symbol], right: &[Symbol]) -> Self {
        if self.is_zero() || coeff.is_zero() {
            return Polynomial::zero(self.order.clone());
        }
        let terms = self
            .terms
            .iter()
            .map(|(c, m)| {
                let mut w = Vec::with_capacity(left.len() + m.len() + right.len());
                w.extend_from_slice(left);
                w.extend_from_slice(m);
                w.extend_from_slice(right);
                (c.mul(coeff), w)
            })
            .collect();
        Polynomial::from_sorted_unchecked(self.order.clone(), terms)
    }

    /// Substitute real values for symbols and evaluate to an `f64`, for
    /// numeric-tolerance tests only (e.g. checking a minimal polynomial
    /// against an algebraic number). Real substitution is commutative, so
    /// word order does not matter here even though the underlying algebra
    /// is noncommutative. Panics if a monomial uses a symbol missing from
    /// `values`.
    pub fn evaluate_numeric(&self, values: &HashMap<Symbol, f64>) -> f64 {
        self.terms
            .iter()
            .map(|(c, m)| {
                let word_value: f64 = m.iter().map(|s| *values.get(s).expect("missing symbol value")).product();
                c.to_f64() * word_value
            })
            .sum()
    }

    /// Canonical comparison: term-wise by monomial then coefficient; a
    /// polynomial that agrees with another on a common prefix of terms but
    /// has fewer of them compares as smaller.
    pub fn cmp(&self, other: &Self) -> Ordering {
        for ((ca, ma), (cb, mb)) in self.terms.iter().zip(other.terms.iter()) {
            match self.order.cmp(ma, mb) {
                Ordering::Equal => {}
                ord => return ord,
            }
            match ca.cmp(cb) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.terms.len().cmp(&other.terms.len())
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (idx, (c, m)) in self.terms.iter().enumerate() {
            if idx > 0 {
                write!(f, " + ")?;
            }
            if m.is_empty() {
                write!(f, "{c}")?;
            } else {
                let word: String = m.iter().map(|s| format!("x{}", s.id())).collect();
                if c.is_one() {
                    write!(f, "{word}")?;
                } else {
                    write!(f, "{c}*{word}")?;
                }
            }
        }
        Ok(())
    }
}
