//! The Buchberger completion loop: general and homogeneous (degree-truncated)
//! variants, plus the shared interreduction pass.

use crate::criteria::{filter_4b, filter_4c, filter_4d};
use crate::obstruction::{self, Obstruction};
use crate::s_polynomial::s_polynomial;
use ncpoly::division::divide;
use ncpoly::Polynomial;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// A precondition the caller violated going into `buchberger_homogeneous`.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("generator at index {index} is not homogeneous: its terms span more than one degree")]
    NotHomogeneous { index: usize },
}

/// `Buchberger(F, maxIter) -> (G, complete)`. Panics if `F` is empty or
/// contains a zero generator — both are caller errors per the core's
/// failure semantics.
#[instrument(skip_all, fields(num_generators = f.len(), max_iter))]
pub fn buchberger(f: &[Polynomial], max_iter: usize) -> (Vec<Polynomial>, bool) {
    run(f, max_iter, None)
}

/// `BuchbergerHomogeneous(F, maxDeg) -> (G, complete)`. Checks that every
/// generator is homogeneous before running; obstructions and reductions
/// whose combined-word degree exceeds `max_deg` are never generated.
#[instrument(skip_all, fields(num_generators = f.len(), max_deg))]
pub fn buchberger_homogeneous(f: &[Polynomial], max_deg: usize) -> Result<(Vec<Polynomial>, bool), PreconditionError> {
    for (index, g) in f.iter().enumerate() {
        if !is_homogeneous(g) {
            return Err(PreconditionError::NotHomogeneous { index });
        }
    }
    Ok(run(f, usize::MAX, Some(max_deg)))
}

fn is_homogeneous(g: &Polynomial) -> bool {
    let mut degrees = g.terms().map(|(_, m)| m.len());
    match degrees.next() {
        None => true,
        Some(first) => degrees.all(|d| d == first),
    }
}

fn within_degree(o: &Obstruction, max_deg: Option<usize>) -> bool {
    match max_deg {
        Some(d) => o.combined.len() <= d,
        None => true,
    }
}

fn compare_selection(a: &Obstruction, b: &Obstruction, homogeneous: bool) -> Ordering {
    match a.combined.len().cmp(&b.combined.len()) {
        Ordering::Equal if homogeneous => a.combined.cmp(&b.combined),
        Ordering::Equal => (a.i, a.j).cmp(&(b.i, b.j)),
        ord => ord,
    }
}

fn select_index(pool: &[Obstruction], homogeneous: bool) -> usize {
    let mut best = 0;
    for idx in 1..pool.len() {
        if compare_selection(&pool[idx], &pool[best], homogeneous) == Ordering::Less {
            best = idx;
        }
    }
    best
}

fn obstructions_against(basis: &[Polynomial], new_index: usize, max_deg: Option<usize>) -> Vec<Obstruction> {
    let mut out = Vec::new();
    let v = basis[new_index].leading_term().1;
    for k in 0..=new_index {
        let u = basis[k].leading_term().1;
        out.extend(obstruction::generate(k, new_index, &u, &v).into_iter().filter(|o| within_degree(o, max_deg)));
    }
    out
}

fn run(f: &[Polynomial], max_iter: usize, max_deg: Option<usize>) -> (Vec<Polynomial>, bool) {
    assert!(!f.is_empty(), "Buchberger requires at least one generator");
    for g in f {
        assert!(!g.is_zero(), "Buchberger requires nonzero generators");
    }
    let homogeneous = max_deg.is_some();

    let mut basis: Vec<Polynomial> = interreduce(f);
    let mut pool: Vec<Obstruction> = Vec::new();
    for j in 0..basis.len() {
        pool.extend(obstructions_against(&basis, j, max_deg));
    }
    filter_4b(&pool);
    pool.retain(|o| !o.removed.get());

    let mut complete = false;
    let mut iterations = 0usize;
    loop {
        if pool.is_empty() {
            complete = true;
            break;
        }
        if iterations >= max_iter {
            break;
        }
        iterations += 1;

        let idx = select_index(&pool, homogeneous);
        let o = pool.remove(idx);

        let s = s_polynomial(&basis, &o);
        let (_, r) = divide(&s, &basis);
        debug!(iteration = iterations, i = o.i, j = o.j, reduces_to_zero = r.is_zero(), "processed obstruction");
        if r.is_zero() {
            continue;
        }

        let g_new = r.make_monic();
        basis.push(g_new.clone());
        let new_index = basis.len() - 1;

        let mut new_obs = obstructions_against(&basis, new_index, max_deg);
        let new_lm = g_new.leading_term().1;

        filter_4d(&pool, &new_lm);
        filter_4c(&new_obs, &pool);
        filter_4b(&new_obs);

        pool.retain(|o| !o.removed.get());
        new_obs.retain(|o| !o.removed.get());
        pool.extend(new_obs);
    }

    let reduced = interreduce(&basis);
    info!(basis_size = reduced.len(), iterations, complete, "buchberger completion finished");
    (reduced, complete)
}

/// Repeatedly reduce each element modulo the rest, dropping any that reduce
/// to zero, until a fixed point is reached; then scale every remaining
/// element to monic and sort by the shared order.
pub fn interreduce(basis: &[Polynomial]) -> Vec<Polynomial> {
    let mut current: Vec<Polynomial> = basis.to_vec();
    loop {
        let mut changed = false;
        let mut next = Vec::with_capacity(current.len());
        for i in 0..current.len() {
            let others: Vec<Polynomial> =
                current.iter().enumerate().filter(|&(k, _)| k != i).map(|(_, p)| p.clone()).collect();
            if others.is_empty() {
                next.push(current[i].clone());
                continue;
            }
            let (_, r) = divide(&current[i], &others);
            if r.is_zero() {
                changed = true;
                continue;
            }
            if r.cmp(&current[i]) != Ordering::Equal {
                changed = true;
            }
            next.push(r);
        }
        current = next;
        if !changed {
            break;
        }
    }
    let mut monic: Vec<Polynomial> = current.into_iter().map(|p| p.make_monic()).collect();
    monic.sort_by(|a, b| {
        let order = a.order();
        order.cmp(&a.leading_term().1, &b.leading_term().1)
    });
    monic
}
