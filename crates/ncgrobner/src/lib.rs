//! ncgrobner: noncommutative Gröbner basis completion over the free
//! associative algebra — obstruction generation, the Gebauer-Möller pruning
//! criteria, and the Buchberger engine (general and homogeneous variants).

#![deny(warnings)]

pub mod buchberger;
pub mod criteria;
pub mod obstruction;
pub mod s_polynomial;

pub use buchberger::{buchberger, buchberger_homogeneous, interreduce, PreconditionError};
pub use obstruction::Obstruction;
pub use s_polynomial::s_polynomial;
