//! Multivariate (noncommutative) division: reduce a polynomial by an ordered
//! list of nonzero divisors, producing a remainder and a per-divisor record
//! of what was subtracted.
//!
//! `f = Σ_i Σ_j c_ij · w_ij · g_i · w'_ij + r`, where no monomial of `r` is
//! divisible (as a contiguous subword) by the leading monomial of any `g_i`.
//! Divisors are tried in the order given; among multiple subword positions
//! that could match a divisor's leading monomial, the leftmost is used. The
//! loop terminates because the leading monomial of `p` strictly decreases
//! under the admissible order on every iteration.

use crate::{Monomial, Order, Polynomial};
use ncarith::Rational;

/// The recorded share of one divisor in a quotient: `coefficient · left ·
/// g_i · right` was subtracted from the dividend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuotientTriple {
    pub coeff: Rational,
    pub left: Monomial,
    pub right: Monomial,
}

/// The full quotient: one list of triples per divisor, indexed the same way
/// as the divisor slice passed to `divide`.
pub type Quotient = Vec<Vec<QuotientTriple>>;

/// Divide `f` by the divisor list `g`. Panics if any divisor is the zero
/// polynomial (division by zero is a caller error, per the core's total
/// arithmetic contract).
pub fn divide(f: &Polynomial, g: &[Polynomial]) -> (Quotient, Polynomial) {
    for divisor in g {
        assert!(!divisor.is_zero(), "cannot divide by the zero polynomial");
    }

    let order = f.order();
    let mut quotient: Quotient = vec![Vec::new(); g.len()];
    let mut p = f.clone();
    let mut remainder_terms = Vec::new();

    while !p.is_zero() {
        let (c, w) = p.leading_term();
        let mut reduced_by = None;

        for (i, gi) in g.iter().enumerate() {
            let (lc, wi) = gi.leading_term();
            if let Some(pos) = ncmonomial::find_leftmost(&w, &wi) {
                let left: Monomial = w[..pos].to_vec();
                let right: Monomial = w[pos + wi.len()..].to_vec();
                let factor = c.div(&lc);
                let subtrahend = gi.scaled_conjugate(&factor, &left, &right);
                p = p.sub(&subtrahend);
                quotient[i].push(QuotientTriple { coeff: factor, left, right });
                reduced_by = Some(i);
                break;
            }
        }

        if reduced_by.is_none() {
            remainder_terms.push((c, w));
            p = drop_leading_term(&p);
        }
    }

    let r = Polynomial::from_sorted_terms(order, remainder_terms);
    (quotient, r)
}

/// Remove the leading term of `p`, leaving the rest untouched (already in
/// canonical order since it was a suffix of `p`'s term list).
fn drop_leading_term(p: &Polynomial) -> Polynomial {
    let rest: Vec<_> = p.terms().skip(1).map(|(c, m)| (c.clone(), m.to_vec())).collect();
    Polynomial::from_sorted_terms(p.order(), rest)
}

/// Reconstruct `f` from a `(Quotient, remainder)` pair and the same divisor
/// list used to produce it, verifying the reconstruction law
/// `Σ c_ij · w_ij · g_i · w'_ij + r = f`.
pub fn reconstruct(quotient: &Quotient, g: &[Polynomial], remainder: &Polynomial) -> Polynomial {
    let mut acc = remainder.clone();
    for (i, triples) in quotient.iter().enumerate() {
        for t in triples {
            acc = acc.add(&g[i].scaled_conjugate(&t.coeff, &t.left, &t.right));
        }
    }
    acc
}

// `Polynomial::new` re-sorts/re-dedups, which is a correct (if not maximally
// efficient) way to build from terms that are already in canonical order;
// kept as a private alias here for readability at the two call sites above.
impl Polynomial {
    fn from_sorted_terms(order: std::rc::Rc<dyn Order>, terms: Vec<(Rational, Monomial)>) -> Self {
        Polynomial::new(order, terms)
    }
}
