//! # swisspair-store
//!
//! **State plane**: the narrow storage boundary the tournament engine
//! reads from and writes to, plus an in-memory reference implementation.
//!
//! ## Architecture
//!
//! - [`TournamentStore`]: the trait boundary — tournament directory,
//!   player registry, append-only match ledger, derived standings
//! - [`MemoryStore`]: registration-order in-memory store with fail-closed
//!   registration limits
//!
//! Standings are derived state: every `fetch_standings` call recomputes
//! tallies from the match ledger, so reads never observe stale counts.
//! The pairing engine itself never touches this crate — it is a pure
//! function of what these reads return.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{TournamentStore, fetch_player_in};
