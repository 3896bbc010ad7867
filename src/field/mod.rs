//! Finite field abstraction for predicate payloads
//!
//! Messages, local data and witnesses are ordered payloads of field
//! elements. The predicate layer needs arithmetic, equality, canonical
//! serialization and a printable form from the element type; all of that
//! comes with `ark_ff::Field`, so the trait below only adds naming and
//! random sampling for diagnostics and tests.

pub mod bls12_381;

pub use ark_bls12_381::Fr as Bls12381Fr;
pub use ark_ff::{Field as ArkField, PrimeField};

/// Trait representing a finite field usable for predicate payloads
pub trait PcdField: ArkField + PrimeField {
    /// Field name for debugging
    fn field_name() -> &'static str;

    /// Generate a random field element
    fn random<R: rand::Rng>(rng: &mut R) -> Self;
}
