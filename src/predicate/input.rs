//! Primary/auxiliary input adapters
//!
//! Pure layout bookkeeping: flatten the caller's arguments into the vector
//! layout the constraint system was compiled against. The slot order is
//! part of the predicate contract; changing it breaks every compiled
//! circuit. No field values are validated here, only lengths and
//! positions.

use ark_ff::{Field, Zero};

use super::{CompliancePredicate, LocalData, Message, PredicateWitness};
use crate::r1cs::ConstraintSystem;

impl<F: Field, CS: ConstraintSystem<F>> CompliancePredicate<F, CS> {
    /// Public-input vector: the outgoing payload verbatim, in order. The
    /// constraint system's implicit constant-one wire accounts for the
    /// remaining public input.
    pub fn primary_input(&self, outgoing: &Message<F>) -> Vec<F> {
        assert_eq!(
            outgoing.payload_len(),
            self.outgoing_payload_length,
            "outgoing payload length mismatch"
        );
        outgoing.payload.clone()
    }

    /// Private-assignment vector, concatenated in the fixed order:
    ///
    /// 1. this predicate's own type (head of the type vector)
    /// 2. one type tag per incoming slot 0..max_arity, zero for absent slots
    /// 3. the supplied arity as a field element
    /// 4. per-slot payloads at their declared lengths, absent slots
    ///    zero-filled
    /// 5. the local data payload
    /// 6. the witness payload
    pub fn auxiliary_input(
        &self,
        incoming: &[Message<F>],
        local_data: &LocalData<F>,
        witness: &PredicateWitness<F>,
    ) -> Vec<F> {
        assert!(incoming.len() <= self.max_arity, "arity exceeds max_arity");
        assert_eq!(
            local_data.payload_len(),
            self.local_data_length,
            "local data length mismatch"
        );
        assert_eq!(
            witness.payload_len(),
            self.witness_length,
            "witness length mismatch"
        );

        let payload_total: usize = self.incoming_payload_lengths.iter().sum();
        let capacity =
            (self.max_arity + 1) + 1 + payload_total + self.local_data_length + self.witness_length;
        let mut auxiliary = Vec::with_capacity(capacity);

        auxiliary.push(F::from(self.predicate_type as u64));
        for slot in 0..self.max_arity {
            match incoming.get(slot) {
                Some(message) => auxiliary.push(F::from(message.msg_type as u64)),
                None => auxiliary.push(F::zero()),
            }
        }

        auxiliary.push(F::from(incoming.len() as u64));

        for slot in 0..self.max_arity {
            let declared = self.incoming_payload_lengths[slot];
            match incoming.get(slot) {
                Some(message) => {
                    assert_eq!(
                        message.payload_len(),
                        declared,
                        "incoming payload length mismatch at slot {}",
                        slot
                    );
                    auxiliary.extend_from_slice(&message.payload);
                }
                None => auxiliary.extend(std::iter::repeat(F::zero()).take(declared)),
            }
        }

        auxiliary.extend_from_slice(&local_data.payload);
        auxiliary.extend_from_slice(&witness.payload);

        debug_assert_eq!(auxiliary.len(), capacity);
        auxiliary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Bls12381Fr as Fr;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct ShapeOnly {
        num_inputs: usize,
        num_variables: usize,
    }

    impl ConstraintSystem<Fr> for ShapeOnly {
        fn num_public_inputs(&self) -> usize {
            self.num_inputs
        }
        fn num_total_variables(&self) -> usize {
            self.num_variables
        }
        fn is_satisfied(&self, _primary: &[Fr], _auxiliary: &[Fr]) -> bool {
            true
        }
    }

    fn two_slot_predicate() -> CompliancePredicate<Fr, ShapeOnly> {
        // Slots of width 1 and 2; inputs 1 + 1; variables 1+2+1+1+3+1+1 = 10
        CompliancePredicate::new(
            0,
            5,
            ShapeOnly {
                num_inputs: 2,
                num_variables: 10,
            },
            1,
            2,
            vec![1, 2],
            1,
            1,
            false,
        )
    }

    #[test]
    fn test_primary_is_outgoing_payload() {
        let cp = two_slot_predicate();
        let outgoing = Message::new(5, vec![Fr::from(9u64)]);
        assert_eq!(cp.primary_input(&outgoing), vec![Fr::from(9u64)]);
    }

    #[test]
    fn test_auxiliary_pads_absent_slots() {
        let cp = two_slot_predicate();
        let incoming = vec![Message::new(5, vec![Fr::from(6u64)])];
        let auxiliary = cp.auxiliary_input(
            &incoming,
            &LocalData::new(vec![Fr::from(2u64)]),
            &PredicateWitness::new(vec![Fr::from(8u64)]),
        );
        assert_eq!(
            auxiliary,
            vec![
                Fr::from(5u64), // own type
                Fr::from(5u64), // slot 0 type
                Fr::from(0u64), // slot 1 absent
                Fr::from(1u64), // arity
                Fr::from(6u64), // slot 0 payload
                Fr::from(0u64), // slot 1 zero-filled (width 2)
                Fr::from(0u64),
                Fr::from(2u64), // local data
                Fr::from(8u64), // witness
            ]
        );
    }

    #[test]
    fn test_auxiliary_length_matches_declared_shape() {
        let cp = two_slot_predicate();
        let auxiliary = cp.auxiliary_input(
            &[],
            &LocalData::new(vec![Fr::from(0u64)]),
            &PredicateWitness::new(vec![Fr::from(0u64)]),
        );
        // Together with the outgoing payload this covers num_total_variables
        assert_eq!(
            cp.outgoing_payload_length + auxiliary.len(),
            cp.constraint_system.num_total_variables()
        );
    }

    #[test]
    #[should_panic(expected = "incoming payload length mismatch at slot 1")]
    fn test_slot_payload_mismatch_panics() {
        let cp = two_slot_predicate();
        let incoming = vec![
            Message::new(5, vec![Fr::from(1u64)]),
            Message::new(5, vec![Fr::from(2u64)]), // declared width is 2
        ];
        cp.auxiliary_input(
            &incoming,
            &LocalData::new(vec![Fr::from(0u64)]),
            &PredicateWitness::new(vec![Fr::from(0u64)]),
        );
    }

    #[test]
    #[should_panic(expected = "local data length mismatch")]
    fn test_local_data_mismatch_panics() {
        let cp = two_slot_predicate();
        cp.auxiliary_input(
            &[],
            &LocalData::new(vec![]),
            &PredicateWitness::new(vec![Fr::from(0u64)]),
        );
    }
}
