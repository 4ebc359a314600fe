//! Error types for the fiction engine.

use thiserror::Error;
use wander_core::WanderError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors raised while building a game or by a broken game state.
///
/// Mistakes in player input are not errors; they are reported through
/// [`Outcome::Rejected`](crate::Outcome::Rejected).
#[derive(Debug, Error)]
pub enum FictionError {
    /// Vocabulary or room graph configuration error.
    #[error(transparent)]
    Core(#[from] WanderError),

    /// No object is known by this name.
    #[error("object not found: {0}")]
    UnknownObject(String),

    /// No action is known by this name.
    #[error("action not found: {0}")]
    UnknownAction(String),

    /// No direction is known by this name.
    #[error("direction not found: {0}")]
    UnknownDirection(String),

    /// A reaction was registered for an action the object does not support.
    #[error("object \"{object}\" does not support action \"{action}\"")]
    ActionNotSupported {
        /// The object name.
        object: String,
        /// The action name.
        action: String,
    },

    /// The configuration is structurally invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The world configuration could not be parsed.
    #[error("malformed world file: {0}")]
    Json(#[from] serde_json::Error),
}
