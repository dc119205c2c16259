//! Player records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{PlayerId, TournamentId};

/// A registered player. Owned by the tournament it belongs to; immutable
/// after registration except for bulk deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// The tournament this player is registered in.
    pub tournament: TournamentId,
    /// Full name as registered. Need not be unique.
    pub name: String,
    /// Store-assigned registration sequence, strictly increasing across the
    /// whole store. The deterministic tie-break key for standings.
    pub seq: u64,
    pub registered_at: DateTime<Utc>,
}

impl Player {
    #[must_use]
    pub fn new(tournament: TournamentId, name: impl Into<String>, seq: u64) -> Self {
        Self {
            id: PlayerId::new(),
            tournament,
            name: name.into(),
            seq,
            registered_at: Utc::now(),
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Player {
    pub fn dummy(name: &str, seq: u64) -> Self {
        Self::new(TournamentId::from_bytes([0u8; 16]), name, seq)
    }
}
