//! Round planning: standings + history -> next round's pairings.

use swisspair_paircore::{MatchHistory, compute_pairings_root, root_hex, swiss_pairings};
use swisspair_store::TournamentStore;
use swisspair_types::{Result, RoundPlan, StandingRow, TournamentId};

/// Ranked standings for a tournament, as the pairing engine will see them.
///
/// Thin read through the store: wins descending, ties in registration
/// order, zero-match players included.
pub fn current_standings<S: TournamentStore>(
    store: &S,
    tournament: TournamentId,
) -> Result<Vec<StandingRow>> {
    store.fetch_standings(tournament)
}

/// The set of player pairs that have already faced each other.
pub fn match_history<S: TournamentStore>(
    store: &S,
    tournament: TournamentId,
) -> Result<MatchHistory> {
    Ok(MatchHistory::from_matches(&store.fetch_matches(tournament)?))
}

/// Plan the next round for a tournament.
///
/// Reads standings and history, runs the pairing engine, and stamps the
/// plan with its digest. Never mutates store state; calling it twice
/// without intervening writes returns the identical plan.
///
/// Precondition (caller's responsibility): every registered player has
/// played the same number of matches.
///
/// # Errors
/// - [`swisspair_types::SwisspairError::TournamentNotFound`] for an
///   unknown tournament
/// - [`swisspair_types::SwisspairError::OddPlayerCount`] for an odd field
pub fn next_round<S: TournamentStore>(store: &S, tournament: TournamentId) -> Result<RoundPlan> {
    let standings = current_standings(store, tournament)?;
    let history = match_history(store, tournament)?;

    let pairings = swiss_pairings(&standings, &history)?;
    let pairings_root = compute_pairings_root(&pairings);
    tracing::debug!(
        tournament = %tournament,
        tables = pairings.len(),
        root = %root_hex(&pairings_root),
        "round planned"
    );

    Ok(RoundPlan {
        tournament,
        pairings,
        pairings_root,
    })
}
