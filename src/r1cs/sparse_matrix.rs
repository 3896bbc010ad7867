//! Sparse matrix representation and basic operations
//!
//! Stored as a list of (row, col, value) triples in row-major form.

use ark_ff::Field;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use rayon::prelude::*;
use std::collections::HashMap;
use std::io::{Read, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<F: Field> {
    pub num_rows: usize,
    pub num_cols: usize,
    pub entries: Vec<(usize, usize, F)>,
}

impl<F: Field> SparseMatrix<F> {
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: Vec::new(),
        }
    }

    /// Add an entry (row, col, value). Panics if out of bounds.
    pub fn add_entry(&mut self, row: usize, col: usize, value: F) {
        assert!(row < self.num_rows, "row out of bounds");
        assert!(col < self.num_cols, "col out of bounds");
        self.entries.push((row, col, value));
    }

    /// Matrix-vector product: returns a vector of length num_rows
    /// Uses parallel evaluation for large matrices
    pub fn mul_vector(&self, vector: &[F]) -> Vec<F> {
        assert_eq!(vector.len(), self.num_cols, "vector length mismatch");

        const PARALLEL_THRESHOLD: usize = 1000; // Parallelize if ≥1000 entries

        if self.entries.len() >= PARALLEL_THRESHOLD {
            self.mul_vector_parallel(vector)
        } else {
            self.mul_vector_sequential(vector)
        }
    }

    fn mul_vector_sequential(&self, vector: &[F]) -> Vec<F> {
        let mut result = vec![F::zero(); self.num_rows];
        for &(r, c, ref v) in &self.entries {
            result[r] += *v * vector[c];
        }
        result
    }

    /// Groups entries by row and processes rows in parallel
    fn mul_vector_parallel(&self, vector: &[F]) -> Vec<F> {
        let mut rows_map: HashMap<usize, Vec<(usize, F)>> = HashMap::new();
        for &(r, c, ref v) in &self.entries {
            rows_map.entry(r).or_insert_with(Vec::new).push((c, *v));
        }

        let mut result = vec![F::zero(); self.num_rows];
        result
            .par_iter_mut()
            .enumerate()
            .for_each(|(row_idx, result_val)| {
                if let Some(row_entries) = rows_map.get(&row_idx) {
                    *result_val = row_entries
                        .iter()
                        .map(|(c, v)| *v * vector[*c])
                        .fold(F::zero(), |acc, x| acc + x);
                }
            });

        result
    }
}

// Serialization writes dimensions, then an entry count, then each triple
// with its coordinates as u64.

impl<F: Field> CanonicalSerialize for SparseMatrix<F> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        (self.num_rows as u64).serialize_with_mode(&mut writer, compress)?;
        (self.num_cols as u64).serialize_with_mode(&mut writer, compress)?;
        (self.entries.len() as u64).serialize_with_mode(&mut writer, compress)?;
        for (row, col, value) in &self.entries {
            (*row as u64).serialize_with_mode(&mut writer, compress)?;
            (*col as u64).serialize_with_mode(&mut writer, compress)?;
            value.serialize_with_mode(&mut writer, compress)?;
        }
        Ok(())
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        let scalar = 0u64.serialized_size(compress);
        3 * scalar
            + self
                .entries
                .iter()
                .map(|(_, _, v)| 2 * scalar + v.serialized_size(compress))
                .sum::<usize>()
    }
}

impl<F: Field> Valid for SparseMatrix<F> {
    fn check(&self) -> Result<(), SerializationError> {
        for &(row, col, _) in &self.entries {
            if row >= self.num_rows || col >= self.num_cols {
                return Err(SerializationError::InvalidData);
            }
        }
        Ok(())
    }
}

impl<F: Field> CanonicalDeserialize for SparseMatrix<F> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let num_rows = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let num_cols = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let num_entries = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let mut entries = Vec::with_capacity(num_entries);
        for _ in 0..num_entries {
            let row = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
            let col = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
            let value = F::deserialize_with_mode(&mut reader, compress, validate)?;
            entries.push((row, col, value));
        }
        let matrix = Self {
            num_rows,
            num_cols,
            entries,
        };
        if matches!(validate, Validate::Yes) {
            matrix.check()?;
        }
        Ok(matrix)
    }
}
