//! The storage boundary trait.
//!
//! Everything the tournament engine needs from persistence, and nothing
//! more: a tournament directory, a player registry, an append-only match
//! ledger, derived standings, and table-scoped bulk wipes. Backends that
//! can fail mid-operation (a database connection, a network hop) surface
//! those failures as [`SwisspairError::StorageUnavailable`]; every other
//! error in this trait means caller misuse.
//!
//! Mutations take `&mut self`. Serializing writes per tournament — so a
//! standings read reflects a consistent "every player has played N
//! matches" snapshot — is the embedding application's responsibility.

use swisspair_types::{
    MatchId, MatchRecord, Player, PlayerId, Result, StandingRow, SwisspairError, Tournament,
    TournamentId,
};

/// Narrow storage interface for tournaments, players, and matches.
pub trait TournamentStore {
    /// Look up a tournament by exact name, creating it if absent.
    fn create_or_get_tournament(&mut self, name: &str) -> Result<TournamentId>;

    /// Create a fresh tournament unconditionally. Names need not be unique.
    fn create_tournament(&mut self, name: &str) -> Result<TournamentId>;

    /// Register a new player into a tournament. The store assigns the id
    /// and the registration sequence.
    ///
    /// # Errors
    /// - [`SwisspairError::TournamentNotFound`] for an unknown tournament
    /// - [`SwisspairError::PlayerLimitExceeded`] when the tournament is full
    fn register_player(&mut self, tournament: TournamentId, name: &str) -> Result<PlayerId>;

    /// Fetch a tournament by id.
    fn fetch_tournament(&self, id: TournamentId) -> Result<Tournament>;

    /// Fetch a player by id.
    fn fetch_player(&self, id: PlayerId) -> Result<Player>;

    /// Number of players registered across all tournaments.
    fn count_players(&self) -> Result<usize>;

    /// Number of players registered in one tournament.
    fn count_players_in(&self, tournament: TournamentId) -> Result<usize>;

    /// Derived standings for a tournament: one row per registered player
    /// (zero-match players included), wins descending, ties broken by
    /// registration sequence. Recomputed from the match ledger on every
    /// call — never cached.
    fn fetch_standings(&self, tournament: TournamentId) -> Result<Vec<StandingRow>>;

    /// All match records for a tournament, in report order.
    fn fetch_matches(&self, tournament: TournamentId) -> Result<Vec<MatchRecord>>;

    /// Append one match record. No validation beyond tournament existence —
    /// precondition checks (distinct players, same tournament) belong to
    /// the match recorder in front of this boundary.
    fn insert_match(
        &mut self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchId>;

    /// Wipe the tournament table. Does not cascade into players or matches.
    fn delete_all_tournaments(&mut self) -> Result<()>;

    /// Wipe the match ledger.
    fn delete_all_matches(&mut self) -> Result<()>;

    /// Wipe the player registry. Does not cascade into matches.
    fn delete_all_players(&mut self) -> Result<()>;
}

/// Blanket convenience: fetch a player and verify tournament membership.
///
/// Splits the two failure modes apart: an id the store has never seen is
/// [`SwisspairError::PlayerNotFound`]; a player registered in a different
/// tournament is [`SwisspairError::InvalidMatch`].
pub fn fetch_player_in<S: TournamentStore + ?Sized>(
    store: &S,
    tournament: TournamentId,
    player: PlayerId,
) -> Result<Player> {
    let p = store.fetch_player(player)?;
    if p.tournament != tournament {
        return Err(SwisspairError::InvalidMatch {
            reason: format!("{player} is not registered in {tournament}"),
        });
    }
    Ok(p)
}
