//! # PCD compliance predicates over R1CS
//!
//! The compliance-predicate layer of a proof-carrying-data (PCD) scheme.
//! A compliance predicate is the algebraic contract enforced at every node
//! of a computation DAG: given zero or more incoming messages (outputs of
//! prior proof steps), some local data and a witness, the predicate's rank-1
//! constraint system must be satisfied, and the result is summarized as an
//! outgoing message for downstream nodes.
//!
//! ## Structure
//!
//! - `field`: Finite field abstraction (BLS12-381 scalar field shipped)
//! - `r1cs`: Constraint-system contract and a sparse-matrix R1CS
//! - `predicate`: Messages, compliance predicates, input adapters
//! - `errors`: Error types
//!
//! ## Layout contract
//!
//! A predicate's constraint system is compiled against a fixed vector
//! layout. The input adapters on [`CompliancePredicate`] reproduce that
//! layout exactly; provers, verifiers and key generators all depend on it
//! byte for byte, so any deviation breaks soundness downstream.

pub mod errors;
pub mod field;
pub mod predicate;
pub mod r1cs;

// Re-exports
pub use errors::{PcdError, Result};
pub use predicate::{CompliancePredicate, LocalData, Message, PredicateWitness};
pub use r1cs::{ConstraintSystem, R1csSystem, SparseMatrix};
