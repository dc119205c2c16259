//! Tournament records.
//!
//! A tournament is a namespace: every player and match belongs to exactly
//! one tournament, and no standings or history lookup crosses that boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::TournamentId;

/// A tournament namespace. Names need not be unique — lazy creation reuses
/// an existing tournament on exact name match, explicit creation always
/// starts a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TournamentId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
