//! In-memory reference store.
//!
//! Registration-order `Vec`s back the three tables; a `PlayerId -> index`
//! map gives O(1) player lookup. Vec order is the registration order, which
//! is what makes the standings tie-break deterministic: a stable sort by
//! wins descending leaves equal-win players in registration order without
//! any extra key.

use std::collections::HashMap;

use swisspair_types::{
    MatchId, MatchRecord, Player, PlayerId, Result, StandingRow, StoreLimits, SwisspairError,
    Tournament, TournamentId, sort_ranked,
};

use crate::store::TournamentStore;

/// In-memory [`TournamentStore`] with fail-closed registration limits.
///
/// The reference backend for tests and single-process embeddings. Never
/// raises `StorageUnavailable` — there is no connection to lose.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Tournament directory, in creation order.
    tournaments: Vec<Tournament>,
    /// Player registry, in registration order across all tournaments.
    players: Vec<Player>,
    /// Fast lookup: `PlayerId -> players index`.
    player_index: HashMap<PlayerId, usize>,
    /// Append-only match ledger, in report order.
    matches: Vec<MatchRecord>,
    /// Next registration sequence. Strictly increasing, never reused.
    next_seq: u64,
    limits: StoreLimits,
}

impl MemoryStore {
    /// Create an empty store with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with custom limits.
    #[must_use]
    pub fn with_limits(limits: StoreLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    fn tournament(&self, id: TournamentId) -> Result<&Tournament> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or(SwisspairError::TournamentNotFound(id))
    }
}

impl TournamentStore for MemoryStore {
    fn create_or_get_tournament(&mut self, name: &str) -> Result<TournamentId> {
        if let Some(existing) = self.tournaments.iter().find(|t| t.name == name) {
            return Ok(existing.id);
        }
        self.create_tournament(name)
    }

    fn create_tournament(&mut self, name: &str) -> Result<TournamentId> {
        if self.tournaments.len() >= self.limits.max_tournaments {
            return Err(SwisspairError::TournamentLimitExceeded {
                limit: self.limits.max_tournaments,
            });
        }
        let tournament = Tournament::new(name);
        let id = tournament.id;
        tracing::info!(tournament = %id, name, "tournament created");
        self.tournaments.push(tournament);
        Ok(id)
    }

    fn register_player(&mut self, tournament: TournamentId, name: &str) -> Result<PlayerId> {
        self.tournament(tournament)?;
        let enrolled = self
            .players
            .iter()
            .filter(|p| p.tournament == tournament)
            .count();
        if enrolled >= self.limits.max_players_per_tournament {
            return Err(SwisspairError::PlayerLimitExceeded {
                limit: self.limits.max_players_per_tournament,
            });
        }

        let player = Player::new(tournament, name, self.next_seq);
        self.next_seq += 1;
        let id = player.id;
        tracing::info!(player = %id, tournament = %tournament, name, seq = player.seq, "player registered");
        self.player_index.insert(id, self.players.len());
        self.players.push(player);
        Ok(id)
    }

    fn fetch_tournament(&self, id: TournamentId) -> Result<Tournament> {
        self.tournament(id).cloned()
    }

    fn fetch_player(&self, id: PlayerId) -> Result<Player> {
        self.player_index
            .get(&id)
            .map(|&i| self.players[i].clone())
            .ok_or(SwisspairError::PlayerNotFound(id))
    }

    fn count_players(&self) -> Result<usize> {
        Ok(self.players.len())
    }

    fn count_players_in(&self, tournament: TournamentId) -> Result<usize> {
        self.tournament(tournament)?;
        Ok(self
            .players
            .iter()
            .filter(|p| p.tournament == tournament)
            .count())
    }

    fn fetch_standings(&self, tournament: TournamentId) -> Result<Vec<StandingRow>> {
        self.tournament(tournament)?;

        // One pass over the ledger, then one row per registered player —
        // zero-match players keep (0, 0) tallies.
        let mut tallies: HashMap<PlayerId, (u32, u32)> = HashMap::new();
        for m in self.matches.iter().filter(|m| m.tournament == tournament) {
            let winner = tallies.entry(m.winner).or_insert((0, 0));
            winner.0 += 1;
            winner.1 += 1;
            tallies.entry(m.loser).or_insert((0, 0)).1 += 1;
        }

        let mut rows: Vec<StandingRow> = self
            .players
            .iter()
            .filter(|p| p.tournament == tournament)
            .map(|p| {
                let (wins, matches) = tallies.get(&p.id).copied().unwrap_or((0, 0));
                StandingRow {
                    id: p.id,
                    name: p.name.clone(),
                    seq: p.seq,
                    wins,
                    matches,
                }
            })
            .collect();

        sort_ranked(&mut rows);
        Ok(rows)
    }

    fn fetch_matches(&self, tournament: TournamentId) -> Result<Vec<MatchRecord>> {
        self.tournament(tournament)?;
        Ok(self
            .matches
            .iter()
            .filter(|m| m.tournament == tournament)
            .cloned()
            .collect())
    }

    fn insert_match(
        &mut self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchId> {
        self.tournament(tournament)?;
        let record = MatchRecord::new(tournament, winner, loser);
        let id = record.id;
        self.matches.push(record);
        Ok(id)
    }

    fn delete_all_tournaments(&mut self) -> Result<()> {
        tracing::info!(count = self.tournaments.len(), "wiping tournament table");
        self.tournaments.clear();
        Ok(())
    }

    fn delete_all_matches(&mut self) -> Result<()> {
        tracing::info!(count = self.matches.len(), "wiping match ledger");
        self.matches.clear();
        Ok(())
    }

    fn delete_all_players(&mut self) -> Result<()> {
        tracing::info!(count = self.players.len(), "wiping player registry");
        self.players.clear();
        self.player_index.clear();
        Ok(())
    }
}
