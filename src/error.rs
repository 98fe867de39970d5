//! Error types shared across the session, validation and persistence layers.

use crate::validation_policy::Field;

/// Raw form input that cannot become an activity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is not a finite number")]
    NotFinite { field: Field },

    #[error("{field} must be greater than zero")]
    NotPositive { field: Field },
}

/// Failures of the durable key-value store or of the stored encoding.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("stored activities could not be encoded or decoded: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Outcome of an event the controller could not act on.
///
/// None of these are fatal; the runner logs them and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("position unavailable; the map cannot be used this session")]
    PositionUnavailable,

    #[error("map is not ready yet")]
    MapNotReady,

    #[error("no logging form is open")]
    FormNotOpen,

    #[error("invalid activity input: {0}")]
    InvalidActivityInput(#[from] ValidationError),

    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
