use thiserror::Error;

use crate::path::FieldPath;

#[derive(Debug, Error)]
pub enum ODataError {
    /// `in` with an empty value list has no valid OData rendering
    #[error("Empty membership list for `{path}`")]
    EmptyMembership { path: FieldPath },

    /// NaN and infinities have no OData literal form
    #[error("Non-finite number compared against `{path}`")]
    NonFiniteNumber { path: FieldPath },
}

/// Result type for query rendering
pub type Result<T> = std::result::Result<T, ODataError>;
