//! Pairing output types.
//!
//! The pairing engine emits [`Pairing`]s in rank order; the round planner
//! wraps them in a [`RoundPlan`] stamped with a digest over the ordered
//! pairings so two plans for the same input can be compared cheaply.

use serde::{Deserialize, Serialize};

use crate::{PlayerId, TournamentId};

/// One proposed table for the next round. Carries both players' names so
/// callers at the boundary don't need a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub first_id: PlayerId,
    pub first_name: String,
    pub second_id: PlayerId,
    pub second_name: String,
}

impl Pairing {
    /// Both player ids, in pairing order.
    #[must_use]
    pub fn player_ids(&self) -> (PlayerId, PlayerId) {
        (self.first_id, self.second_id)
    }

    /// Whether the given player sits at this table.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.first_id == player || self.second_id == player
    }
}

impl std::fmt::Display for Pairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.first_name, self.second_name)
    }
}

/// The deterministic output of round planning for one tournament.
///
/// Given the same standings and match history, planning produces the exact
/// same plan — same pairings in the same order, same `pairings_root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlan {
    /// The tournament this plan was produced for.
    pub tournament: TournamentId,
    /// Proposed pairings, in rank order.
    pub pairings: Vec<Pairing>,
    /// SHA-256 digest over the ordered pairings (for reproducibility checks).
    pub pairings_root: [u8; 32],
}

impl RoundPlan {
    /// Number of tables in this plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether the plan contains no pairings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Pairing {
    pub fn dummy(first_name: &str, second_name: &str) -> Self {
        Self {
            first_id: PlayerId::new(),
            first_name: first_name.to_string(),
            second_id: PlayerId::new(),
            second_name: second_name.to_string(),
        }
    }
}
