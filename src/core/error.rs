//! Sandbox error types
//!
//! Construction and configuration failures surface as `SandboxError`.
//! Numerical edge cases inside a running step (zero dt, coincident centers)
//! never reach this type: they are resolved in place and recorded as events.

use thiserror::Error;

use crate::rigid_body::BodyId;

/// Errors returned by body construction, world configuration and snapshot I/O.
#[derive(Error, Debug)]
pub enum SandboxError {
    /// Body parameters violate a physical invariant (mass, radius, coefficients).
    #[error("invalid body: {reason}")]
    InvalidBody {
        /// What was wrong with the parameters
        reason: String,
    },

    /// A body with this id already lives in the world.
    #[error("duplicate body id: {id}")]
    DuplicateBody {
        /// The id that was already taken
        id: BodyId,
    },

    /// Strict removal of an id the world does not hold.
    #[error("unknown body id: {id}")]
    UnknownBody {
        /// The id that was requested
        id: BodyId,
    },

    /// World or simulator configuration rejected.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration
        reason: String,
    },

    /// JSON config or snapshot could not be (de)serialized.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl SandboxError {
    pub(crate) fn invalid_body(reason: impl Into<String>) -> Self {
        Self::InvalidBody { reason: reason.into() }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, SandboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = SandboxError::invalid_body("mass must be > 0 (got -1)");
        assert_eq!(err.to_string(), "invalid body: mass must be > 0 (got -1)");

        let err = SandboxError::DuplicateBody { id: BodyId::from("ball") };
        assert_eq!(err.to_string(), "duplicate body id: ball");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: SandboxError = parse.unwrap_err().into();
        assert!(matches!(err, SandboxError::Json(_)));
    }
}
