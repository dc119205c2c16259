//! Match records.
//!
//! A match is an ordered (winner, loser) pair for win counting and an
//! unordered pair for rematch detection. Records are append-only: there is
//! no per-record edit or delete, only table-scoped bulk wipes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{MatchId, PlayerId, TournamentId};

/// The recorded outcome of a single match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub tournament: TournamentId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub reported_at: DateTime<Utc>,
}

impl MatchRecord {
    #[must_use]
    pub fn new(tournament: TournamentId, winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            id: MatchId::new(),
            tournament,
            winner,
            loser,
            reported_at: Utc::now(),
        }
    }

    /// Whether the given player took part in this match, on either side.
    #[must_use]
    pub fn involves(&self, player: PlayerId) -> bool {
        self.winner == player || self.loser == player
    }

    /// Winner and loser collapsed to a normalized `(min, max)` pair.
    /// Two matches between the same players produce the same key
    /// regardless of who won.
    #[must_use]
    pub fn unordered_pair(&self) -> (PlayerId, PlayerId) {
        if self.winner <= self.loser {
            (self.winner, self.loser)
        } else {
            (self.loser, self.winner)
        }
    }
}
