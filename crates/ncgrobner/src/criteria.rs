//! Gebauer-Möller filters 4b, 4c, 4d: prune redundant obstructions without
//! touching the basis they describe. Filters only ever set the `removed`
//! flag; callers compact the pool afterwards.

use crate::obstruction::Obstruction;
use ncmonomial::{find_leftmost, Symbol};

/// Criterion 4b: within each `(i, j)` pair, keep only the obstructions whose
/// combined word is minimal under contiguous-subword divisibility. When two
/// obstructions in the same pair share an identical combined word, the
/// lexically-later `(iLeft, iRight, jLeft, jRight)` partition is the one
/// discarded (matching the reference's documented, if unexplained, tie
/// resolution for this edge case).
pub fn filter_4b(pool: &[Obstruction]) {
    for a in pool {
        if a.removed.get() {
            continue;
        }
        for b in pool {
            if std::ptr::eq(a, b) || b.removed.get() {
                continue;
            }
            if a.i != b.i || a.j != b.j {
                continue;
            }
            if a.combined.len() == b.combined.len() {
                if a.combined == b.combined && partition_key(a) < partition_key(b) {
                    b.removed.set(true);
                }
                continue;
            }
            if a.combined.len() < b.combined.len() && find_leftmost(&b.combined, &a.combined).is_some() {
                b.removed.set(true);
            }
        }
    }
}

fn partition_key(o: &Obstruction) -> (&[Symbol], &[Symbol], &[Symbol], &[Symbol]) {
    (&o.i_left, &o.i_right, &o.j_left, &o.j_right)
}

/// Criterion 4c: discard a newly generated obstruction `S` if some
/// surviving obstruction already in the pre-existing pool `existing` has a
/// combined word that is a proper contiguous subword of `S`'s combined word
/// — the overlap `S` describes is already redundantly covered.
pub fn filter_4c(new_obstructions: &[Obstruction], existing: &[Obstruction]) {
    for s in new_obstructions {
        if s.removed.get() {
            continue;
        }
        for b in existing {
            if b.removed.get() || b.combined.len() >= s.combined.len() {
                continue;
            }
            if find_leftmost(&s.combined, &b.combined).is_some() {
                s.removed.set(true);
                break;
            }
        }
    }
}

/// Criterion 4d: mark a pre-existing obstruction `B_k` removed if the
/// leading monomial of the newly added basis element occurs as a contiguous
/// subword of `B_k`'s combined word.
pub fn filter_4d(existing: &[Obstruction], new_leading_monomial: &[Symbol]) {
    for b in existing {
        if b.removed.get() {
            continue;
        }
        if find_leftmost(&b.combined, new_leading_monomial).is_some() {
            b.removed.set(true);
        }
    }
}
