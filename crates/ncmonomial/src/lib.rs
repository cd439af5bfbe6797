//! ncmonomial: words over variable symbols, and admissible total orders on them.
//! - `Symbol`: a positive integer identifying a variable
//! - `Monomial = Vec<Symbol>`: a noncommutative word; the empty word is the identity
//! - `Order`: a stateless total order over monomials, admissible under
//!   two-sided multiplication (`u ≺ v ⇒ wuw' ≺ wvw'`)
//! - `Deglex`, `ElimOrder`: the two provided orders

#![deny(warnings)]

use std::cmp::Ordering;
use std::num::NonZeroU32;

/// A variable identifier. Symbols are totally ordered by their numeric value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(NonZeroU32);

impl Symbol {
    /// Construct a symbol from a 1-based index. Panics if `id` is zero.
    pub fn new(id: u32) -> Self {
        Symbol(NonZeroU32::new(id).expect("symbol id must be positive"))
    }

    pub fn id(&self) -> u32 {
        self.0.get()
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Symbol::new(id)
    }
}

/// A noncommutative word over `Symbol`s. The empty vector is the identity monomial.
pub type Monomial = Vec<Symbol>;

/// Degree (length) of a monomial.
pub fn degree(w: &[Symbol]) -> usize {
    w.len()
}

/// Whether `w` is the empty (identity) monomial.
pub fn is_identity(w: &[Symbol]) -> bool {
    w.is_empty()
}

/// Concatenate three words: `left · mid · right`.
pub fn concat3(left: &[Symbol], mid: &[Symbol], right: &[Symbol]) -> Monomial {
    let mut out = Vec::with_capacity(left.len() + mid.len() + right.len());
    out.extend_from_slice(left);
    out.extend_from_slice(mid);
    out.extend_from_slice(right);
    out
}

/// Length of the common prefix shared by `a` and `b`.
pub fn common_prefix_len(a: &[Symbol], b: &[Symbol]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Length of the common suffix shared by `a` and `b`.
pub fn common_suffix_len(a: &[Symbol], b: &[Symbol]) -> usize {
    a.iter().rev().zip(b.iter().rev()).take_while(|(x, y)| x == y).count()
}

/// Plain lexicographic comparison, element-wise; a word that is a strict
/// prefix of a longer one compares as smaller (per the Deglex tiebreak rule).
pub fn lex_cmp(a: &[Symbol], b: &[Symbol]) -> Ordering {
    a.cmp(b)
}

/// Leftmost start position at which `needle` occurs as a contiguous
/// subword of `haystack`, or `None` if it does not occur. The empty
/// needle always matches at position 0.
pub fn find_leftmost(haystack: &[Symbol], needle: &[Symbol]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&k| &haystack[k..k + needle.len()] == needle)
}

/// All start positions at which `needle` occurs as a contiguous subword of
/// `haystack`, in increasing order.
pub fn find_all_occurrences(haystack: &[Symbol], needle: &[Symbol]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return if needle.is_empty() { vec![0] } else { vec![] };
    }
    (0..=haystack.len() - needle.len())
        .filter(|&k| &haystack[k..k + needle.len()] == needle)
        .collect()
}

/// The KMP prefix-function of `w`: `pi[i]` is the length of the longest
/// proper border (both prefix and suffix) of `w[0..=i]`.
fn prefix_function(w: &[Symbol]) -> Vec<usize> {
    let n = w.len();
    let mut pi = vec![0usize; n];
    for i in 1..n {
        let mut k = pi[i - 1];
        while k > 0 && w[i] != w[k] {
            k = pi[k - 1];
        }
        if w[i] == w[k] {
            k += 1;
        }
        pi[i] = k;
    }
    pi
}

/// All proper border lengths `ℓ` with `0 < ℓ < |w|` such that the prefix of
/// length `ℓ` equals the suffix of length `ℓ`. Used to enumerate
/// self-overlaps (right-overlap self-obstructions).
pub fn borders(w: &[Symbol]) -> Vec<usize> {
    if w.is_empty() {
        return vec![];
    }
    let pi = prefix_function(w);
    let mut lens = vec![];
    let mut k = pi[w.len() - 1];
    while k > 0 {
        lens.push(k);
        k = pi[k - 1];
    }
    lens.sort_unstable();
    lens
}

/// A stateless total order over monomials.
pub trait Order {
    fn cmp(&self, a: &[Symbol], b: &[Symbol]) -> Ordering;
}

/// Degree, then lexicographic tiebreak: shorter words are smaller; among
/// equal-length words, compare element-wise by `Symbol`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Deglex;

impl Order for Deglex {
    fn cmp(&self, a: &[Symbol], b: &[Symbol]) -> Ordering {
        match a.len().cmp(&b.len()) {
            Ordering::Equal => lex_cmp(a, b),
            ord => ord,
        }
    }
}

/// An elimination order built from a variable permutation, lowest priority
/// first. Monomials are grouped by their occurrence-count vector over the
/// permutation (compared reverse-lexicographically on symbol rank, so more
/// occurrences of a higher-ranked symbol ranks a monomial higher); ties are
/// broken element-wise on the words themselves, ranked by the same
/// permutation.
#[derive(Clone, Debug)]
pub struct ElimOrder {
    /// `perm[r]` is the symbol with rank `r`; higher rank is eliminated later.
    perm: Vec<Symbol>,
}

impl ElimOrder {
    pub fn new(perm: Vec<Symbol>) -> Self {
        ElimOrder { perm }
    }

    fn rank(&self, s: Symbol) -> usize {
        self.perm.iter().position(|&p| p == s).unwrap_or(self.perm.len())
    }

    fn count_vector(&self, w: &[Symbol]) -> Vec<usize> {
        let mut v = vec![0usize; self.perm.len()];
        for &s in w {
            let r = self.rank(s);
            if r < v.len() {
                v[r] += 1;
            }
        }
        v
    }
}

impl Order for ElimOrder {
    fn cmp(&self, a: &[Symbol], b: &[Symbol]) -> Ordering {
        let ca = self.count_vector(a);
        let cb = self.count_vector(b);
        for i in (0..ca.len()).rev() {
            match ca[i].cmp(&cb[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        let ar: Vec<usize> = a.iter().map(|&s| self.rank(s)).collect();
        let br: Vec<usize> = b.iter().map(|&s| self.rank(s)).collect();
        match ar.cmp(&br) {
            Ordering::Equal => a.len().cmp(&b.len()),
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(n: u32) -> Symbol {
        Symbol::new(n)
    }

    #[test]
    fn deglex_orders_by_length_then_lex() {
        let d = Deglex;
        let a = vec![sym(1)];
        let ab = vec![sym(1), sym(2)];
        assert_eq!(d.cmp(&a, &ab), Ordering::Less);

        let ba = vec![sym(2), sym(1)];
        let ab2 = vec![sym(1), sym(2)];
        assert_eq!(d.cmp(&ab2, &ba), Ordering::Less);
    }

    #[test]
    fn deglex_shorter_prefix_is_smaller() {
        assert_eq!(lex_cmp(&[sym(1)], &[sym(1), sym(2)]), Ordering::Less);
    }

    #[test]
    fn find_leftmost_matches_first_position() {
        let hay = vec![sym(1), sym(2), sym(1), sym(2)];
        let needle = vec![sym(1), sym(2)];
        assert_eq!(find_leftmost(&hay, &needle), Some(0));
    }

    #[test]
    fn find_all_occurrences_overlapping() {
        // a a a, needle a a -> occurs at 0 and 1
        let hay = vec![sym(1), sym(1), sym(1)];
        let needle = vec![sym(1), sym(1)];
        assert_eq!(find_all_occurrences(&hay, &needle), vec![0, 1]);
    }

    #[test]
    fn borders_of_periodic_word() {
        // a b a b a: borders are 1 (a), 3 (aba)
        let w = vec![sym(1), sym(2), sym(1), sym(2), sym(1)];
        assert_eq!(borders(&w), vec![1, 3]);
    }

    #[test]
    fn borders_of_aperiodic_word() {
        let w = vec![sym(1), sym(2), sym(3)];
        assert!(borders(&w).is_empty());
    }

    #[test]
    fn elim_order_ranks_higher_symbol_last() {
        // perm: a < b (b eliminated later / ranked higher)
        let order = ElimOrder::new(vec![sym(1), sym(2)]);
        let a2 = vec![sym(1), sym(1)]; // no b
        let ab = vec![sym(1), sym(2)]; // one b
        assert_eq!(order.cmp(&a2, &ab), Ordering::Less);
    }

    #[test]
    fn elim_order_admissible_on_sample() {
        let order = ElimOrder::new(vec![sym(1), sym(2), sym(3)]);
        let u = vec![sym(1)];
        let v = vec![sym(1), sym(1)];
        let w = vec![sym(2)];
        let wp = vec![sym(3)];
        let lhs = concat3(&w, &u, &wp);
        let rhs = concat3(&w, &v, &wp);
        assert_eq!(order.cmp(&u, &v), order.cmp(&lhs, &rhs));
    }
}
