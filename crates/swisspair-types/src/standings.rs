//! Derived standings rows.
//!
//! Standings are never stored: the state plane recomputes them from match
//! records on every request, so a read can never observe stale tallies.

use serde::{Deserialize, Serialize};

use crate::PlayerId;

/// One player's aggregated win/match record, derived from the match table.
///
/// Invariant: `wins <= matches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    /// Registration sequence of the player — the stable tie-break key.
    pub seq: u64,
    /// Matches this player won.
    pub wins: u32,
    /// Matches this player appeared in, as winner or loser.
    pub matches: u32,
}

impl StandingRow {
    /// Matches lost. `wins <= matches` holds for rows produced by the store.
    #[must_use]
    pub fn losses(&self) -> u32 {
        self.matches - self.wins
    }
}

/// Rank standings in place: wins descending, ties broken by registration
/// sequence ascending.
///
/// The sort is stable, so rows already in registration order stay in
/// registration order within each win group. The same input always produces
/// the same output, which is what makes adjacency-based pairing repeatable.
pub fn sort_ranked(rows: &mut [StandingRow]) {
    rows.sort_by_key(|r| (std::cmp::Reverse(r.wins), r.seq));
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl StandingRow {
    pub fn dummy(name: &str, seq: u64, wins: u32, matches: u32) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.to_string(),
            seq,
            wins,
            matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn losses_is_matches_minus_wins() {
        let row = StandingRow::dummy("Markov Chaney", 0, 2, 5);
        assert_eq!(row.losses(), 3);
    }

    #[test]
    fn ranking_sorts_wins_descending() {
        let mut rows = vec![
            StandingRow::dummy("a", 0, 0, 1),
            StandingRow::dummy("b", 1, 2, 2),
            StandingRow::dummy("c", 2, 1, 2),
        ];
        sort_ranked(&mut rows);
        let wins: Vec<u32> = rows.iter().map(|r| r.wins).collect();
        assert_eq!(wins, vec![2, 1, 0]);
    }

    #[test]
    fn ties_break_by_registration_sequence() {
        let mut rows = vec![
            StandingRow::dummy("late", 9, 1, 1),
            StandingRow::dummy("early", 3, 1, 1),
            StandingRow::dummy("first", 1, 1, 1),
        ];
        sort_ranked(&mut rows);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "early", "late"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let mut rows = vec![
            StandingRow::dummy("a", 0, 1, 2),
            StandingRow::dummy("b", 1, 2, 2),
            StandingRow::dummy("c", 2, 1, 2),
        ];
        sort_ranked(&mut rows);
        let once = rows.clone();
        sort_ranked(&mut rows);
        assert_eq!(rows, once);
    }
}
