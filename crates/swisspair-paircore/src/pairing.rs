//! Pure deterministic Swiss pairing.
//!
//! The core pairing function: takes ranked standings and a match history
//! and produces the next round's pairings. This is the **only** computation
//! paircore exposes — no storage access, no clocks, no randomness.
//!
//! ```text
//! swiss_pairings(&standings, &history) -> Vec<Pairing>
//! ```
//!
//! ## Rematch Avoidance
//!
//! Avoidance is best-effort, not a guarantee. When the adjacent candidate
//! is a rematch, the first forward candidate who has not faced the anchor
//! is swapped in. When the scan exhausts the remaining pool — every
//! unpaired player has already faced the anchor — the adjacent rematch is
//! emitted. There is no backtracking across already-emitted pairs, so two
//! disjoint earlier pairs can still force a rematch in pathological
//! histories.

use swisspair_types::{Pairing, Result, StandingRow, SwisspairError};

use crate::MatchHistory;

/// Pair ranked standings into the next round's tables.
///
/// ## Algorithm
///
/// 1. Walk the standings in position pairs `(i, i+1)` for `i = 0, 2, 4, …`;
///    the input order is the ranking, so adjacent players have equal or
///    nearly-equal win records.
/// 2. If `standings[i+1]` has already faced `standings[i]`, scan forward
///    from `i+2` for the first candidate who has not, and swap that
///    candidate into seat `i+1`. The displaced candidate takes the scanned
///    slot; everyone else keeps their position.
/// 3. If the scan finds nobody, pair the adjacent rematch anyway.
/// 4. Emit the pair and advance past both players.
///
/// Worst case O(n²) — a forward scan per pair. Swiss fields are tens to
/// low hundreds of players.
///
/// # Errors
/// Returns [`SwisspairError::OddPlayerCount`] if `standings.len()` is odd.
/// Empty standings yield an empty pairing list.
pub fn swiss_pairings(standings: &[StandingRow], history: &MatchHistory) -> Result<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(SwisspairError::OddPlayerCount {
            count: standings.len(),
        });
    }

    // Seating order as indices into the caller's slice. Swaps reorder the
    // seating, never the caller's data.
    let mut seats: Vec<usize> = (0..standings.len()).collect();
    let mut pairings = Vec::with_capacity(standings.len() / 2);

    let mut i = 0;
    while i + 1 < seats.len() {
        let anchor = &standings[seats[i]];

        if history.have_matched(anchor.id, standings[seats[i + 1]].id) {
            let fresh = (i + 2..seats.len())
                .find(|&j| !history.have_matched(anchor.id, standings[seats[j]].id));
            match fresh {
                Some(j) => {
                    tracing::debug!(
                        anchor = %anchor.id,
                        swapped_in = %standings[seats[j]].id,
                        seat = i + 1,
                        "adjacent seat is a rematch, swapping in forward candidate"
                    );
                    seats.swap(i + 1, j);
                }
                None => {
                    tracing::debug!(
                        anchor = %anchor.id,
                        seat = i + 1,
                        "no rematch-free candidate remains, pairing adjacent anyway"
                    );
                }
            }
        }

        let partner = &standings[seats[i + 1]];
        pairings.push(Pairing {
            first_id: anchor.id,
            first_name: anchor.name.clone(),
            second_id: partner.id,
            second_name: partner.name.clone(),
        });
        i += 2;
    }

    Ok(pairings)
}
