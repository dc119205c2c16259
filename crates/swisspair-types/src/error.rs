//! Error types for the Swisspair tournament engine.
//!
//! All errors use the `SW_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Tournament errors
//! - 2xx: Player errors
//! - 3xx: Match errors
//! - 4xx: Pairing errors
//! - 5xx: Storage errors
//! - 9xx: General / internal errors
//!
//! None of these are retried automatically: they indicate caller misuse,
//! not transient failure. Storage connectivity problems are the one
//! exception and carry their own variant so callers can tell them apart.

use thiserror::Error;

use crate::{PlayerId, TournamentId};

/// Central error enum for all Swisspair operations.
#[derive(Debug, Error)]
pub enum SwisspairError {
    // =================================================================
    // Tournament Errors (1xx)
    // =================================================================
    /// The requested tournament does not exist.
    #[error("SW_ERR_100: Tournament not found: {0}")]
    TournamentNotFound(TournamentId),

    /// The store is at its tournament capacity.
    #[error("SW_ERR_101: Tournament limit exceeded: store holds {limit}")]
    TournamentLimitExceeded { limit: usize },

    // =================================================================
    // Player Errors (2xx)
    // =================================================================
    /// The requested player is not registered anywhere.
    #[error("SW_ERR_200: Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// The tournament is at its player capacity.
    #[error("SW_ERR_201: Player limit exceeded: tournament holds {limit}")]
    PlayerLimitExceeded { limit: usize },

    // =================================================================
    // Match Errors (3xx)
    // =================================================================
    /// The reported match failed validation (wrong tournament, etc.).
    #[error("SW_ERR_300: Invalid match: {reason}")]
    InvalidMatch { reason: String },

    /// Winner and loser are the same player.
    #[error("SW_ERR_301: Self-match rejected: winner and loser are both {0}")]
    SelfMatch(PlayerId),

    // =================================================================
    // Pairing Errors (4xx)
    // =================================================================
    /// Pairing was requested for an odd number of players (no bye support).
    #[error("SW_ERR_400: Odd player count: cannot pair {count} players")]
    OddPlayerCount { count: usize },

    // =================================================================
    // Storage Errors (5xx)
    // =================================================================
    /// The storage backend is unreachable or failed mid-operation.
    #[error("SW_ERR_500: Storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("SW_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SwisspairError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = SwisspairError::TournamentNotFound(TournamentId::new());
        let msg = format!("{err}");
        assert!(msg.starts_with("SW_ERR_100"), "Got: {msg}");
    }

    #[test]
    fn odd_player_count_display() {
        let err = SwisspairError::OddPlayerCount { count: 5 };
        let msg = format!("{err}");
        assert!(msg.contains("SW_ERR_400"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn all_errors_have_sw_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(SwisspairError::TournamentLimitExceeded { limit: 4 }),
            Box::new(SwisspairError::PlayerNotFound(PlayerId::new())),
            Box::new(SwisspairError::PlayerLimitExceeded { limit: 16 }),
            Box::new(SwisspairError::InvalidMatch {
                reason: "test".into(),
            }),
            Box::new(SwisspairError::SelfMatch(PlayerId::new())),
            Box::new(SwisspairError::StorageUnavailable {
                reason: "test".into(),
            }),
            Box::new(SwisspairError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("SW_ERR_"),
                "Error missing SW_ERR_ prefix: {msg}"
            );
        }
    }
}
