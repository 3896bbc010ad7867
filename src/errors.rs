//! Error types for the compliance-predicate layer
//!
//! Shape mismatches between a predicate's declared lengths and the
//! arguments it is handed are caller bugs and panic instead of surfacing
//! here; this enum covers the recoverable cases only.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PcdError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, PcdError>;
