//! BLS12-381 scalar field instantiation
//!
//! Wrapper around the ark-bls12-381 scalar field (Fr), the field all
//! shipped tests and benches run over.

use super::PcdField;
pub use ark_bls12_381::Fr;
use ark_std::UniformRand;

impl PcdField for Fr {
    fn field_name() -> &'static str {
        "BLS12-381 Scalar Field (Fr)"
    }

    fn random<R: rand::Rng>(rng: &mut R) -> Self {
        Fr::rand(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{Field, One, Zero};
    use ark_std::test_rng;

    #[test]
    fn test_field_name() {
        assert!(Fr::field_name().contains("BLS12-381"));
    }

    #[test]
    fn test_random_generation() {
        let mut rng = test_rng();
        let a = Fr::random(&mut rng);
        let b = Fr::random(&mut rng);
        // Two draws colliding would indicate a broken rng wiring
        assert_ne!(a, b);
    }

    #[test]
    fn test_inverse() {
        let mut rng = test_rng();
        let a = Fr::random(&mut rng);
        if a != Fr::zero() {
            let a_inv = a.inverse().expect("non-zero element must have an inverse");
            assert_eq!(a * a_inv, Fr::one());
        }
        assert!(Fr::zero().inverse().is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

        let mut rng = test_rng();
        for _ in 0..32 {
            let original = Fr::random(&mut rng);
            let mut bytes = Vec::new();
            original.serialize_compressed(&mut bytes).unwrap();
            let decoded = Fr::deserialize_compressed(&bytes[..]).unwrap();
            assert_eq!(original, decoded);
        }
    }
}
