//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HearthError`]
//! via `#[from]`. Storage adapters box their errors into
//! [`HearthError::Storage`].

/// Top-level error for every hearth operation.
#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    /// A value object or aggregate invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A looked-up aggregate does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A kind builder was called with fewer than the minimum positional arguments.
    #[error("At least {min} parameters are required.")]
    InvalidArgumentCount { min: usize },

    /// No registered builder accepts the requested type identifier and arguments.
    #[error("unsupported kind {type_id:?}")]
    UnsupportedKind { type_id: String },

    /// A builder was registered twice for the same identifier and arity.
    #[error("a builder for {type_id:?} with arity {arity} is already registered")]
    DuplicateBuilder { type_id: String, arity: usize },

    /// The target device cannot receive sensors or actuators.
    #[error("device {id} is deactivated")]
    DeviceInactive { id: String },

    /// An error raised by a persistence adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations raised while constructing value objects and aggregates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("{field} must be {expected:?}, got {actual:?}")]
    WrongCategory {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),

    #[error("start date must not be after end date")]
    InvertedDatePeriod,

    #[error("lower limit {lower} must not be greater than upper limit {upper}")]
    InvertedLimits { lower: String, upper: String },

    #[error("{field} value {value} is outside of {lower}..={upper}")]
    OutOfRange {
        field: &'static str,
        value: String,
        lower: String,
        upper: String,
    },

    #[error("malformed {field}: {value:?}")]
    Malformed { field: &'static str, value: String },
}

/// Lookup of an aggregate by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
