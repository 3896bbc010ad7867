//! Compliance predicates: the per-node contract of a PCD computation
//!
//! A predicate binds an R1CS instance to a fixed message/local-data/witness
//! shape. `is_satisfied` flattens the caller's arguments into the exact
//! (primary, auxiliary) layout the constraint system was compiled against
//! and delegates the verdict.

mod compliance;
mod input;
mod message;

pub use compliance::CompliancePredicate;
pub use message::{LocalData, Message, PredicateWitness};
