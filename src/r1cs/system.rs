//! Constraint-system contract and a concrete sparse-matrix R1CS
//!
//! A compliance predicate never looks inside its constraint system; it only
//! needs the variable counts and a satisfaction test over the (primary,
//! auxiliary) split. The trait below is that contract, and `R1csSystem` is
//! the shipped rank-1 implementation.

use super::SparseMatrix;
use ark_ff::Field;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use std::io::{Read, Write};

/// Contract a compliance predicate requires from its constraint system.
///
/// `num_public_inputs` counts the implicit constant-one wire together with
/// the primary input; `num_total_variables` counts every assigned variable
/// excluding the constant one. Equality, cloning and serialization are
/// bounded where used, not here, so test doubles only implement these
/// three operations.
pub trait ConstraintSystem<F: Field> {
    fn num_public_inputs(&self) -> usize;

    fn num_total_variables(&self) -> usize;

    /// Test satisfaction for the given (primary, auxiliary) assignment.
    ///
    /// Panics if the supplied lengths disagree with the declared counts;
    /// a mismatch means the caller assembled the assignment against the
    /// wrong shape.
    fn is_satisfied(&self, primary: &[F], auxiliary: &[F]) -> bool;
}

/// Rank-1 constraint system over z = (1, primary, auxiliary):
/// (A·z) ◦ (B·z) = (C·z)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct R1csSystem<F: Field> {
    pub a: SparseMatrix<F>,
    pub b: SparseMatrix<F>,
    pub c: SparseMatrix<F>,
    pub num_constraints: usize,
    /// Constant one plus the primary input
    pub num_inputs: usize,
    /// Primary plus auxiliary variables, excluding the constant one
    pub num_variables: usize,
}

impl<F: Field> R1csSystem<F> {
    /// Panics if the matrix dimensions disagree with the declared counts.
    pub fn new(
        a: SparseMatrix<F>,
        b: SparseMatrix<F>,
        c: SparseMatrix<F>,
        num_constraints: usize,
        num_inputs: usize,
        num_variables: usize,
    ) -> Self {
        for m in [&a, &b, &c] {
            assert_eq!(m.num_rows, num_constraints, "matrix row count mismatch");
            assert_eq!(m.num_cols, num_variables + 1, "matrix column count mismatch");
        }
        assert!(num_inputs >= 1, "constant one wire is always an input");
        Self {
            a,
            b,
            c,
            num_constraints,
            num_inputs,
            num_variables,
        }
    }

    /// z = (1, primary, auxiliary)
    fn build_z(&self, primary: &[F], auxiliary: &[F]) -> Vec<F> {
        let mut z = Vec::with_capacity(1 + primary.len() + auxiliary.len());
        z.push(F::one());
        z.extend_from_slice(primary);
        z.extend_from_slice(auxiliary);
        z
    }
}

impl<F: Field> ConstraintSystem<F> for R1csSystem<F> {
    fn num_public_inputs(&self) -> usize {
        self.num_inputs
    }

    fn num_total_variables(&self) -> usize {
        self.num_variables
    }

    fn is_satisfied(&self, primary: &[F], auxiliary: &[F]) -> bool {
        assert_eq!(
            primary.len() + 1,
            self.num_inputs,
            "primary input length mismatch"
        );
        assert_eq!(
            primary.len() + auxiliary.len(),
            self.num_variables,
            "variable count mismatch"
        );

        let z = self.build_z(primary, auxiliary);

        let az = self.a.mul_vector(&z);
        let bz = self.b.mul_vector(&z);
        let cz = self.c.mul_vector(&z);

        // Hadamard equality row by row
        for i in 0..self.num_constraints {
            if az[i] * bz[i] != cz[i] {
                return false;
            }
        }
        true
    }
}

impl<F: Field> CanonicalSerialize for R1csSystem<F> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        (self.num_constraints as u64).serialize_with_mode(&mut writer, compress)?;
        (self.num_inputs as u64).serialize_with_mode(&mut writer, compress)?;
        (self.num_variables as u64).serialize_with_mode(&mut writer, compress)?;
        self.a.serialize_with_mode(&mut writer, compress)?;
        self.b.serialize_with_mode(&mut writer, compress)?;
        self.c.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        3 * 0u64.serialized_size(compress)
            + self.a.serialized_size(compress)
            + self.b.serialized_size(compress)
            + self.c.serialized_size(compress)
    }
}

impl<F: Field> Valid for R1csSystem<F> {
    fn check(&self) -> Result<(), SerializationError> {
        for m in [&self.a, &self.b, &self.c] {
            if m.num_rows != self.num_constraints || m.num_cols != self.num_variables + 1 {
                return Err(SerializationError::InvalidData);
            }
            m.check()?;
        }
        Ok(())
    }
}

impl<F: Field> CanonicalDeserialize for R1csSystem<F> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let num_constraints = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let num_inputs = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let num_variables = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let a = SparseMatrix::deserialize_with_mode(&mut reader, compress, validate)?;
        let b = SparseMatrix::deserialize_with_mode(&mut reader, compress, validate)?;
        let c = SparseMatrix::deserialize_with_mode(&mut reader, compress, validate)?;
        let system = Self {
            a,
            b,
            c,
            num_constraints,
            num_inputs,
            num_variables,
        };
        if matches!(validate, Validate::Yes) {
            system.check()?;
        }
        Ok(system)
    }
}
