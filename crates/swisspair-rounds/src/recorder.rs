//! Validated match recording.
//!
//! The recorder sits in front of the raw `insert_match` boundary: guard
//! checks first, then a single append. Checks run in a fixed order so
//! callers get stable error codes:
//!
//! 1. tournament exists — `TournamentNotFound`
//! 2. winner ≠ loser — `SelfMatch`
//! 3. both players exist — `PlayerNotFound`
//! 4. both registered in this tournament — `InvalidMatch`
//!
//! Reporting the same (winner, loser) twice appends two records. That is
//! intentional: rematches across non-adjacent rounds are legal; only the
//! pairing engine cares about avoiding immediate repeats.

use swisspair_store::{TournamentStore, fetch_player_in};
use swisspair_types::{MatchId, PlayerId, Result, SwisspairError, TournamentId};

/// Record the outcome of a single match between two players.
///
/// # Errors
/// See the module docs for the validation order and error taxonomy.
pub fn report_match<S: TournamentStore>(
    store: &mut S,
    tournament: TournamentId,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<MatchId> {
    store.fetch_tournament(tournament)?;

    if winner == loser {
        return Err(SwisspairError::SelfMatch(winner));
    }

    fetch_player_in(store, tournament, winner)?;
    fetch_player_in(store, tournament, loser)?;

    let id = store.insert_match(tournament, winner, loser)?;
    tracing::info!(
        match_id = %id,
        tournament = %tournament,
        winner = %winner,
        loser = %loser,
        "match recorded"
    );
    Ok(id)
}

#[cfg(test)]
mod tests {
    use swisspair_store::MemoryStore;

    use super::*;

    fn fixture() -> (MemoryStore, TournamentId, PlayerId, PlayerId) {
        let mut store = MemoryStore::new();
        let t = store.create_or_get_tournament("Knights").unwrap();
        let a = store.register_player(t, "Bruno Walton").unwrap();
        let b = store.register_player(t, "Boots O'Neal").unwrap();
        (store, t, a, b)
    }

    #[test]
    fn valid_report_appends_one_record() {
        let (mut store, t, a, b) = fixture();
        report_match(&mut store, t, a, b).unwrap();

        let matches = store.fetch_matches(t).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].winner, a);
        assert_eq!(matches[0].loser, b);
    }

    #[test]
    fn unknown_tournament_is_rejected() {
        let (mut store, _, a, b) = fixture();
        let err = report_match(&mut store, TournamentId::new(), a, b).unwrap_err();
        assert!(matches!(err, SwisspairError::TournamentNotFound(_)));
    }

    #[test]
    fn self_match_is_rejected() {
        let (mut store, t, a, _) = fixture();
        let err = report_match(&mut store, t, a, a).unwrap_err();
        assert!(matches!(err, SwisspairError::SelfMatch(id) if id == a));
        assert!(store.fetch_matches(t).unwrap().is_empty());
    }

    #[test]
    fn unknown_player_is_rejected() {
        let (mut store, t, a, _) = fixture();
        let ghost = PlayerId::new();
        let err = report_match(&mut store, t, a, ghost).unwrap_err();
        assert!(matches!(err, SwisspairError::PlayerNotFound(id) if id == ghost));
    }

    #[test]
    fn cross_tournament_report_is_rejected() {
        let (mut store, t, a, _) = fixture();
        let other = store.create_or_get_tournament("Other").unwrap();
        let outsider = store.register_player(other, "Markov Chaney").unwrap();

        let err = report_match(&mut store, t, a, outsider).unwrap_err();
        assert!(matches!(err, SwisspairError::InvalidMatch { .. }));
        assert!(store.fetch_matches(t).unwrap().is_empty());
    }

    #[test]
    fn duplicate_reports_are_not_deduplicated() {
        let (mut store, t, a, b) = fixture();
        report_match(&mut store, t, a, b).unwrap();
        report_match(&mut store, t, a, b).unwrap();
        assert_eq!(store.fetch_matches(t).unwrap().len(), 2);
    }
}
