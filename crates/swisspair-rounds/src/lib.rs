//! # swisspair-rounds
//!
//! **Orchestration plane**: validated match recording and round planning.
//!
//! ## Control Flow
//!
//! ```text
//! report_match(store, ...)  — validate, then append to the ledger
//! current_standings(store)  — ranked rows, recomputed per call
//! match_history(store)      — unordered-pair set from the ledger
//! next_round(store)         — standings + history -> swiss_pairings -> RoundPlan
//! ```
//!
//! Writes go through [`report_match`]; everything else is read-only. The
//! pairing engine never mutates store state — `next_round` is a pure
//! function of what the two reads return, stamped with a digest so two
//! plans for the same input can be compared cheaply.
//!
//! Round boundaries are the caller's concern: pair only when every player
//! has played the same number of matches.

pub mod recorder;
pub mod rounds;

pub use recorder::report_match;
pub use rounds::{current_standings, match_history, next_round};
