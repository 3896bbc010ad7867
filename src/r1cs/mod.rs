//! R1CS constraint systems consumed by compliance predicates
//!
//! Satisfaction check: (A·z) ◦ (B·z) = (C·z) where z = (1, primary, auxiliary)

mod sparse_matrix;
mod system;

pub use sparse_matrix::SparseMatrix;
pub use system::{ConstraintSystem, R1csSystem};
