//! # swisspair-paircore
//!
//! **Pure deterministic Swiss pairing engine.**
//!
//! Paircore is the compute plane — it takes ranked standings and a match
//! history and produces the next round's pairings. It has:
//!
//! - **Zero side effects**: no storage access, no clocks, no randomness
//! - **Deterministic output**: same input -> same pairings on every call
//! - **Best-effort rematch avoidance**: adjacent rematches are swapped away
//!   when a forward candidate exists; structurally forced rematches are
//!   emitted rather than failed
//! - **O(1) history membership**: unordered-pair hash set

pub mod determinism;
pub mod history;
pub mod pairing;

pub use determinism::{
    compute_pairings_root, compute_standings_root, root_hex, verify_pairings_root,
    verify_standings_root,
};
pub use history::MatchHistory;
pub use pairing::swiss_pairings;
