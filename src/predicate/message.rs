//! Message, local-data and witness payload containers

use ark_ff::Field;
use std::fmt;

/// Typed payload exchanged between predicate instances along DAG edges.
///
/// `msg_type` identifies the predicate that produced (or accepts) the
/// message; 0 is reserved and never a valid predicate type. Messages are
/// treated as immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<F: Field> {
    pub msg_type: usize,
    pub payload: Vec<F>,
}

impl<F: Field> Message<F> {
    pub fn new(msg_type: usize, payload: Vec<F>) -> Self {
        Self { msg_type, payload }
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}

/// Diagnostic dump of a message's type and payload
impl<F: Field> fmt::Display for Message<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Message type: {}", self.msg_type)?;
        for elem in &self.payload {
            writeln!(f, "  {}", elem)?;
        }
        Ok(())
    }
}

/// Auxiliary input available only to the predicate holder, never forwarded
/// downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalData<F: Field> {
    pub payload: Vec<F>,
}

impl<F: Field> LocalData<F> {
    pub fn new(payload: Vec<F>) -> Self {
        Self { payload }
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}

/// Private assignment proving constraint satisfaction; never revealed to
/// verifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateWitness<F: Field> {
    pub payload: Vec<F>,
}

impl<F: Field> PredicateWitness<F> {
    pub fn new(payload: Vec<F>) -> Self {
        Self { payload }
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}
