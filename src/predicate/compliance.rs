//! The compliance predicate entity
//!
//! Binds a constraint system to a fixed shape (arity, message lengths,
//! local-data and witness lengths) and exposes well-formedness queries and
//! the satisfaction check. Instances are read-only after construction and
//! may be shared across threads.

use core::marker::PhantomData;
use std::io::{Read, Write};

use ark_ff::Field;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};

use super::{LocalData, Message, PredicateWitness};
use crate::errors::PcdError;
use crate::r1cs::ConstraintSystem;

/// A compliance predicate within a family of mutually recursive predicates.
///
/// The constraint system is compiled against the declared shape:
///
/// - public inputs: the constant one wire plus the outgoing payload
///   (`outgoing_payload_length + 1` in total);
/// - total variables: outgoing payload, the `max_arity + 1` type vector
///   (own type first), the arity scalar, every incoming slot at its
///   declared length, local data, witness.
#[derive(Debug, Clone)]
pub struct CompliancePredicate<F: Field, CS: ConstraintSystem<F>> {
    /// Recursion index of this predicate within its family
    pub name: usize,
    /// Node type this predicate governs; must be non-zero
    pub predicate_type: usize,
    /// Constraint system compiled against the shape below
    pub constraint_system: CS,
    pub outgoing_payload_length: usize,
    /// Maximum number of incoming messages per invocation
    pub max_arity: usize,
    /// Declared payload length per incoming slot; one entry per slot
    pub incoming_payload_lengths: Vec<usize>,
    pub local_data_length: usize,
    pub witness_length: usize,
    /// Composition-topology hint: all incoming messages carry this
    /// predicate's own type. Consumed by the surrounding PCD machinery,
    /// not enforced here; excluded from equality and serialization.
    pub relies_on_same_type_inputs: bool,
    _field: PhantomData<F>,
}

impl<F: Field, CS: ConstraintSystem<F>> CompliancePredicate<F, CS> {
    /// Binds `constraint_system` to the given shape.
    ///
    /// Panics if `incoming_payload_lengths.len() != max_arity`; a
    /// mismatched slot count is a predicate-compiler bug, not runtime
    /// data.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: usize,
        predicate_type: usize,
        constraint_system: CS,
        outgoing_payload_length: usize,
        max_arity: usize,
        incoming_payload_lengths: Vec<usize>,
        local_data_length: usize,
        witness_length: usize,
        relies_on_same_type_inputs: bool,
    ) -> Self {
        assert_eq!(
            incoming_payload_lengths.len(),
            max_arity,
            "one incoming payload length required per slot"
        );
        Self {
            name,
            predicate_type,
            constraint_system,
            outgoing_payload_length,
            max_arity,
            incoming_payload_lengths,
            local_data_length,
            witness_length,
            relies_on_same_type_inputs,
            _field: PhantomData,
        }
    }

    /// Re-derives the structural invariants from scratch; pure.
    ///
    /// Callers validate predicates with this before handing them to key
    /// generation.
    pub fn is_well_formed(&self) -> bool {
        let type_not_zero = self.predicate_type != 0;
        let lengths_well_specified = self.incoming_payload_lengths.len() == self.max_arity;

        let correct_num_inputs =
            self.outgoing_payload_length + 1 == self.constraint_system.num_public_inputs();

        let all_message_payloads: usize = self.incoming_payload_lengths.iter().sum::<usize>()
            + self.outgoing_payload_length;
        let correct_num_variables = all_message_payloads
            + self.local_data_length
            + (self.max_arity + 1)
            + 1
            + self.witness_length
            == self.constraint_system.num_total_variables();

        type_not_zero && lengths_well_specified && correct_num_inputs && correct_num_variables
    }

    /// True iff every incoming slot length equals the outgoing length.
    /// Such predicates can be chained homogeneously: any node's output is
    /// shaped like any node's input.
    pub fn has_equal_input_and_output_lengths(&self) -> bool {
        self.incoming_payload_lengths
            .iter()
            .all(|&len| len == self.outgoing_payload_length)
    }

    /// True iff all incoming slot lengths are mutually equal; the outgoing
    /// length may differ.
    pub fn has_equal_input_lengths(&self) -> bool {
        self.incoming_payload_lengths.windows(2).all(|w| w[0] == w[1])
    }

    /// Evaluates the bound constraint system on the flattened arguments.
    ///
    /// Panics on any shape mismatch between the declared lengths and the
    /// supplied payloads; a violation indicates a bug upstream and never
    /// degrades into a returned boolean. Recomputed on every call.
    pub fn is_satisfied(
        &self,
        outgoing: &Message<F>,
        incoming: &[Message<F>],
        local_data: &LocalData<F>,
        witness: &PredicateWitness<F>,
    ) -> bool {
        let primary = self.primary_input(outgoing);
        let auxiliary = self.auxiliary_input(incoming, local_data, witness);
        self.constraint_system.is_satisfied(&primary, &auxiliary)
    }
}

/// `relies_on_same_type_inputs` is a composition hint, not identity, and
/// does not participate in comparison.
impl<F: Field, CS: ConstraintSystem<F> + PartialEq> PartialEq for CompliancePredicate<F, CS> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.predicate_type == other.predicate_type
            && self.constraint_system == other.constraint_system
            && self.max_arity == other.max_arity
            && self.incoming_payload_lengths == other.incoming_payload_lengths
            && self.outgoing_payload_length == other.outgoing_payload_length
            && self.local_data_length == other.local_data_length
            && self.witness_length == other.witness_length
    }
}

impl<F: Field, CS: ConstraintSystem<F> + Eq> Eq for CompliancePredicate<F, CS> {}

// Serialization is a fixed, order-dependent record sequence: name, type,
// max_arity, the max_arity incoming lengths (no length prefix), outgoing
// length, local-data length, witness length, then the constraint system's
// own form. Scalars travel as u64. Key generators and predicate compilers
// read and write this exact order.

impl<F: Field, CS: ConstraintSystem<F> + CanonicalSerialize> CanonicalSerialize
    for CompliancePredicate<F, CS>
{
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        (self.name as u64).serialize_with_mode(&mut writer, compress)?;
        (self.predicate_type as u64).serialize_with_mode(&mut writer, compress)?;
        (self.max_arity as u64).serialize_with_mode(&mut writer, compress)?;
        for &len in &self.incoming_payload_lengths {
            (len as u64).serialize_with_mode(&mut writer, compress)?;
        }
        (self.outgoing_payload_length as u64).serialize_with_mode(&mut writer, compress)?;
        (self.local_data_length as u64).serialize_with_mode(&mut writer, compress)?;
        (self.witness_length as u64).serialize_with_mode(&mut writer, compress)?;
        self.constraint_system.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        (6 + self.max_arity) * 0u64.serialized_size(compress)
            + self.constraint_system.serialized_size(compress)
    }
}

impl<F: Field, CS: ConstraintSystem<F> + Valid> Valid for CompliancePredicate<F, CS> {
    fn check(&self) -> Result<(), SerializationError> {
        if self.incoming_payload_lengths.len() != self.max_arity {
            return Err(SerializationError::InvalidData);
        }
        self.constraint_system.check()
    }
}

impl<F: Field, CS: ConstraintSystem<F> + CanonicalDeserialize> CanonicalDeserialize
    for CompliancePredicate<F, CS>
{
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let name = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let predicate_type = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let max_arity = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        // The stream's max_arity sizes the slot vector; no prior object
        // state is consulted.
        let mut incoming_payload_lengths = Vec::with_capacity(max_arity);
        for _ in 0..max_arity {
            incoming_payload_lengths
                .push(u64::deserialize_with_mode(&mut reader, compress, validate)? as usize);
        }
        let outgoing_payload_length =
            u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let local_data_length =
            u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let witness_length = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let constraint_system = CS::deserialize_with_mode(&mut reader, compress, validate)?;

        Ok(Self {
            name,
            predicate_type,
            constraint_system,
            outgoing_payload_length,
            max_arity,
            incoming_payload_lengths,
            local_data_length,
            witness_length,
            // Not part of the stream; downstream composition policy must
            // set it explicitly.
            relies_on_same_type_inputs: false,
            _field: PhantomData,
        })
    }
}

impl<F: Field, CS: ConstraintSystem<F> + CanonicalSerialize> CompliancePredicate<F, CS> {
    /// Serializes the predicate in its fixed record order.
    pub fn to_bytes(&self) -> crate::errors::Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.compressed_size());
        self.serialize_compressed(&mut bytes)
            .map_err(|e| PcdError::Serialization(e.to_string()))?;
        Ok(bytes)
    }
}

impl<F: Field, CS: ConstraintSystem<F> + CanonicalDeserialize> CompliancePredicate<F, CS> {
    /// Reads a predicate serialized by [`Self::to_bytes`]. A truncated or
    /// reordered stream fails here or is caught by a later
    /// [`Self::is_well_formed`] call.
    pub fn from_bytes(bytes: &[u8]) -> crate::errors::Result<Self> {
        Self::deserialize_compressed(bytes).map_err(|e| PcdError::Serialization(e.to_string()))
    }
}
