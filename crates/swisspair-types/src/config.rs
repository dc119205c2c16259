//! Configuration for Swisspair stores.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Registration limits enforced by a store. Checks fail closed: hitting a
/// limit rejects the registration, it never truncates or evicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreLimits {
    /// Maximum players a single tournament will accept.
    pub max_players_per_tournament: usize,
    /// Maximum tournaments the store will hold.
    pub max_tournaments: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_players_per_tournament: constants::DEFAULT_MAX_PLAYERS_PER_TOURNAMENT,
            max_tournaments: constants::DEFAULT_MAX_TOURNAMENTS,
        }
    }
}
