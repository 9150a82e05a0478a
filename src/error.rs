//! Error types for fixture preparation.
//!
//! Population itself never fails: branches that cannot be built are recorded
//! in the [`PopulateReport`](crate::populator::PopulateReport). Errors only
//! surface when a caller asks for a complete fixture, hands in unusable
//! [`FillOptions`](crate::options::FillOptions), or (de)serializes them.

/// Main error type for fixture operations.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// A nested branch of the request object could not be constructed
    #[error("Cannot resolve field '{field}' of {type_name}: {reason}")]
    UnresolvedField {
        type_name: String,
        field: String,
        reason: String,
    },

    /// Fill options rejected by validation
    #[error("Invalid fill options: {message}")]
    InvalidOptions { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FixtureError {
    /// Create an unresolved field error.
    pub fn unresolved(
        type_name: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnresolvedField {
            type_name: type_name.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid options error.
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }
}

/// Result type for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
