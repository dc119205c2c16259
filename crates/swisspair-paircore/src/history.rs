//! Match history as a set of unordered player pairs.
//!
//! Winner and loser collapse to one `(min, max)` key, so membership tests
//! are direction-blind and O(1). Duplicate matches between the same two
//! players collapse to a single entry — the history answers "have these two
//! ever faced each other", not "how many times".

use std::collections::HashSet;

use swisspair_types::{MatchRecord, PlayerId};

/// The set of player pairs that have already faced each other.
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    pairs: HashSet<(PlayerId, PlayerId)>,
}

impl MatchHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pairs: HashSet::new(),
        }
    }

    /// Build a history from a tournament's match records.
    #[must_use]
    pub fn from_matches(matches: &[MatchRecord]) -> Self {
        let mut history = Self::new();
        for m in matches {
            let (a, b) = m.unordered_pair();
            history.pairs.insert((a, b));
        }
        history
    }

    /// Record that `a` and `b` have faced each other.
    pub fn record(&mut self, a: PlayerId, b: PlayerId) {
        self.pairs.insert(Self::key(a, b));
    }

    /// Whether `a` and `b` have faced each other, in either direction.
    #[must_use]
    pub fn have_matched(&self, a: PlayerId, b: PlayerId) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    /// Number of distinct pairs in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pair has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}
