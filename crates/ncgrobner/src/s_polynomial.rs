//! S-polynomial formation: the polynomial that cancels the overlapping
//! leading terms of an obstruction's two basis elements.

use crate::obstruction::Obstruction;
use ncpoly::Polynomial;

/// `S(o) = (1/LC(g_i))·iLeft·g_i·iRight − (1/LC(g_j))·jLeft·g_j·jRight`.
pub fn s_polynomial(basis: &[Polynomial], o: &Obstruction) -> Polynomial {
    let gi = &basis[o.i];
    let gj = &basis[o.j];
    let inv_lci = gi.leading_coefficient().inv();
    let inv_lcj = gj.leading_coefficient().inv();
    let left = gi.scaled_conjugate(&inv_lci, &o.i_left, &o.i_right);
    let right = gj.scaled_conjugate(&inv_lcj, &o.j_left, &o.j_right);
    left.sub(&right)
}
