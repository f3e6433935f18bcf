//! Simulation error types.
//!
//! All recoverable failures are rejected eagerly, before any game starts:
//! an unknown strategy name or an invalid `GameSpec` never gets as far as a
//! dice roll. A bust (no valid move for a roll) is a normal game outcome,
//! not an error. Internal-consistency violations, such as flipping a tile
//! that is not up, panic: they indicate a bug, not a recoverable state.

use thiserror::Error;

/// Errors surfaced by game construction and batch setup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// Strategy name not present in the registry.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Rejected game configuration (bad tile count, die faces, or roster).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::UnknownStrategy("foo".to_string());
        assert_eq!(format!("{}", err), "unknown strategy: foo");

        let err = SimError::InvalidConfig("tile count must be at least 1".to_string());
        assert!(format!("{}", err).starts_with("invalid configuration"));
    }
}
