//! Obstruction (S-pair) generation between leading monomials of basis
//! elements, following the Kreuzer-Xiu enumeration: left/right overlaps and
//! center inclusions for `i < j`, and the two self-obstruction classes for
//! `i == j`.

use ncmonomial::{borders, common_prefix_len, common_suffix_len, concat3, find_all_occurrences, Monomial, Symbol};
use std::cell::Cell;

/// A syzygy between basis elements `i` and `j`: `iLeft · LM(g_i) · iRight =
/// jLeft · LM(g_j) · jRight`. `combined` caches that shared word since it is
/// invariant once `i`, `j`'s leading monomials are fixed, and is consulted
/// repeatedly by the Gebauer-Möller filters.
#[derive(Clone, Debug)]
pub struct Obstruction {
    pub i: usize,
    pub j: usize,
    pub i_left: Monomial,
    pub i_right: Monomial,
    pub j_left: Monomial,
    pub j_right: Monomial,
    pub combined: Monomial,
    pub removed: Cell<bool>,
}

impl Obstruction {
    fn new(i: usize, j: usize, i_left: Monomial, i_right: Monomial, j_left: Monomial, j_right: Monomial, combined: Monomial) -> Self {
        Obstruction { i, j, i_left, i_right, j_left, j_right, combined, removed: Cell::new(false) }
    }
}

/// Word-products agree, and the overlap is proper: `u` and `v` share a
/// nonempty stretch of the combined word rather than merely sitting side by
/// side with nothing in common.
fn has_overlap(i_left: &[Symbol], i_right: &[Symbol], j_left: &[Symbol], j_right: &[Symbol], u: &[Symbol], v: &[Symbol]) -> Option<Monomial> {
    let combined_i = concat3(i_left, u, i_right);
    let combined_j = concat3(j_left, v, j_right);
    if combined_i != combined_j {
        return None;
    }
    let shared = u.len() as i64 + v.len() as i64 - combined_i.len() as i64;
    if shared > 0 {
        Some(combined_i)
    } else {
        None
    }
}

/// Strip the common prefix of `(i_left, j_left)` and the common suffix of
/// `(i_right, j_right)`, then re-check `hasOverlap`. Discards the candidate
/// (returns `None`) if the shrunk form is no longer a proper overlap.
fn shrink_and_finish(i: usize, j: usize, mut i_left: Monomial, mut i_right: Monomial, mut j_left: Monomial, mut j_right: Monomial, u: &[Symbol], v: &[Symbol]) -> Option<Obstruction> {
    let p = common_prefix_len(&i_left, &j_left);
    i_left.drain(0..p);
    j_left.drain(0..p);
    let s = common_suffix_len(&i_right, &j_right);
    let ilen = i_right.len();
    let jlen = j_right.len();
    i_right.truncate(ilen - s);
    j_right.truncate(jlen - s);
    let combined = has_overlap(&i_left, &i_right, &j_left, &j_right, u, v)?;
    Some(Obstruction::new(i, j, i_left, i_right, j_left, j_right, combined))
}

fn left_overlaps(i: usize, j: usize, u: &[Symbol], v: &[Symbol]) -> Vec<Obstruction> {
    let mut out = Vec::new();
    let min_len = u.len().min(v.len());
    for overlap in 1..min_len {
        if u[u.len() - overlap..] == v[..overlap] {
            let i_left = Monomial::new();
            let i_right = v[overlap..].to_vec();
            let j_left = u[..u.len() - overlap].to_vec();
            let j_right = Monomial::new();
            if let Some(ob) = shrink_and_finish(i, j, i_left, i_right, j_left, j_right, u, v) {
                out.push(ob);
            }
        }
    }
    out
}

fn right_overlaps(i: usize, j: usize, u: &[Symbol], v: &[Symbol]) -> Vec<Obstruction> {
    let mut out = Vec::new();
    let min_len = u.len().min(v.len());
    for overlap in 1..min_len {
        if u[..overlap] == v[v.len() - overlap..] {
            let i_left = v[..v.len() - overlap].to_vec();
            let i_right = Monomial::new();
            let j_left = Monomial::new();
            let j_right = u[overlap..].to_vec();
            if let Some(ob) = shrink_and_finish(i, j, i_left, i_right, j_left, j_right, u, v) {
                out.push(ob);
            }
        }
    }
    out
}

fn center_inclusions(i: usize, j: usize, u: &[Symbol], v: &[Symbol]) -> Vec<Obstruction> {
    let mut out = Vec::new();
    for k in find_all_occurrences(v, u) {
        if k > 0 || k + u.len() < v.len() {
            let i_left = v[..k].to_vec();
            let i_right = v[k + u.len()..].to_vec();
            if let Some(ob) = shrink_and_finish(i, j, i_left, i_right, Monomial::new(), Monomial::new(), u, v) {
                out.push(ob);
            }
        }
    }
    for k in find_all_occurrences(u, v) {
        if k > 0 || k + v.len() < u.len() {
            let j_left = u[..k].to_vec();
            let j_right = u[k + v.len()..].to_vec();
            if let Some(ob) = shrink_and_finish(i, j, Monomial::new(), Monomial::new(), j_left, j_right, u, v) {
                out.push(ob);
            }
        }
    }
    out
}

fn self_right_overlaps(i: usize, u: &[Symbol]) -> Vec<Obstruction> {
    borders(u)
        .into_iter()
        .filter_map(|overlap| {
            let i_left = Monomial::new();
            let i_right = u[overlap..].to_vec();
            let j_left = u[..u.len() - overlap].to_vec();
            let j_right = Monomial::new();
            shrink_and_finish(i, i, i_left, i_right, j_left, j_right, u, u)
        })
        .collect()
}

fn self_center(i: usize, u: &[Symbol]) -> Vec<Obstruction> {
    // An occurrence of `u` inside itself at a nonzero position is only
    // possible when `u` is empty; for nonempty `u` no such position exists
    // (the containing and contained copies have equal length), so this is
    // faithfully enumerated but always empty in practice.
    find_all_occurrences(u, u)
        .into_iter()
        .filter(|&k| k > 0 || k + u.len() < u.len())
        .filter_map(|k| {
            let j_left = u[..k].to_vec();
            let j_right = u[k + u.len()..].to_vec();
            shrink_and_finish(i, i, Monomial::new(), Monomial::new(), j_left, j_right, u, u)
        })
        .collect()
}

/// Enumerate every obstruction between basis positions `i` and `j`, given
/// their leading monomials `u = LM(g_i)`, `v = LM(g_j)`. Requires `i <= j`.
pub fn generate(i: usize, j: usize, u: &[Symbol], v: &[Symbol]) -> Vec<Obstruction> {
    assert!(i <= j, "obstruction generation requires i <= j");
    if i < j {
        let mut out = left_overlaps(i, j, u, v);
        out.extend(right_overlaps(i, j, u, v));
        out.extend(center_inclusions(i, j, u, v));
        out
    } else {
        let mut out = self_right_overlaps(i, u);
        out.extend(self_center(i, u));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(n: u32) -> Symbol {
        Symbol::new(n)
    }

    #[test]
    fn left_overlap_basic() {
        // u = ab, v = ba: suffix "b" of u equals prefix "b" of v.
        let u = vec![sym(1), sym(2)];
        let v = vec![sym(2), sym(1)];
        let obs = generate(0, 1, &u, &v);
        assert!(obs.iter().any(|o| o.combined == vec![sym(1), sym(2), sym(1)]));
    }

    #[test]
    fn center_inclusion_when_u_inside_v() {
        let u = vec![sym(1)];
        let v = vec![sym(2), sym(1), sym(2)];
        let obs = generate(0, 1, &u, &v);
        assert!(obs.iter().any(|o| o.i_left == vec![sym(2)] && o.i_right == vec![sym(2)]));
    }

    #[test]
    fn self_overlap_of_periodic_word() {
        // u = abab: borders at 2 (ab).
        let u = vec![sym(1), sym(2), sym(1), sym(2)];
        let obs = generate(0, 0, &u, &u);
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].combined, vec![sym(1), sym(2), sym(1), sym(2), sym(1), sym(2)]);
    }

    #[test]
    fn no_self_overlap_for_aperiodic_word() {
        let u = vec![sym(1), sym(2), sym(3)];
        let obs = generate(0, 0, &u, &u);
        assert!(obs.is_empty());
    }

    #[test]
    fn no_overlap_when_words_disjoint() {
        let u = vec![sym(1)];
        let v = vec![sym(2)];
        assert!(generate(0, 1, &u, &v).is_empty());
    }
}
