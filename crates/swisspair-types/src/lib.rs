//! # swisspair-types
//!
//! Shared types, errors, and configuration for the **Swisspair** tournament
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`TournamentId`], [`PlayerId`], [`MatchId`]
//! - **Domain records**: [`Tournament`], [`Player`], [`MatchRecord`]
//! - **Derived standings**: [`StandingRow`]
//! - **Pairing output**: [`Pairing`], [`RoundPlan`]
//! - **Configuration**: [`StoreLimits`]
//! - **Errors**: [`SwisspairError`] with `SW_ERR_` prefix codes
//! - **Constants**: registration limits and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod match_record;
pub mod pairing;
pub mod player;
pub mod standings;
pub mod tournament;

// Re-export all primary types at crate root for ergonomic imports:
//   use swisspair_types::{Player, StandingRow, Pairing, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use match_record::*;
pub use pairing::*;
pub use player::*;
pub use standings::*;
pub use tournament::*;

// Constants are accessed via `swisspair_types::constants::FOO`
// (not re-exported to avoid name collisions).
