//! Error types for entity construction and input parsing

use thiserror::Error;

/// Errors raised while building entities from user or configuration input
///
/// None of these are fatal to a running simulation. Callers building a batch
/// of entities skip the failing one and keep the rest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Non-positive mass or a non-finite position/velocity component
    #[error("invalid entity: {reason}")]
    InvalidEntity { reason: String },

    /// Text that could not be parsed into the field's value
    #[error("could not parse {field} from {value:?}")]
    Parse { field: &'static str, value: String },

    /// Too many entities of a bounded kind
    #[error("capacity of {limit} {kind} reached")]
    CapacityExceeded { kind: &'static str, limit: usize },
}

impl SimError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SimError::InvalidEntity {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(field: &'static str, value: &str) -> Self {
        SimError::Parse {
            field,
            value: value.to_string(),
        }
    }
}
