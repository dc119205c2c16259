//! Determinism digests for standings and pairings.
//!
//! Standings are recomputed on every read and pairings are recomputed on
//! every planning call, so reproducibility is an invariant worth pinning:
//! the same input in the same order must always hash to the same root.
//! Tests compare roots instead of full payloads, and a `RoundPlan` carries
//! its `pairings_root` for audit.

use sha2::{Digest, Sha256};
use swisspair_types::{Pairing, StandingRow};

/// Compute the root hash over an ordered standings sequence.
///
/// Depends on each row's id, registration sequence, tallies, and name, in
/// order. Two reads of unchanged state produce the same root.
#[must_use]
pub fn compute_standings_root(rows: &[StandingRow]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"swisspair:standings_root:v1:");
    hasher.update((rows.len() as u64).to_le_bytes());

    for row in rows {
        hasher.update(row.id.0.as_bytes());
        hasher.update(row.seq.to_le_bytes());
        hasher.update(u64::from(row.wins).to_le_bytes());
        hasher.update(u64::from(row.matches).to_le_bytes());
        hasher.update((row.name.len() as u64).to_le_bytes());
        hasher.update(row.name.as_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Verify that an ordered standings sequence matches the expected root.
#[must_use]
pub fn verify_standings_root(rows: &[StandingRow], expected_root: &[u8; 32]) -> bool {
    compute_standings_root(rows) == *expected_root
}

/// Compute the root hash over an ordered pairing sequence.
///
/// Depends on both seats' ids and names per pairing, in order. The same
/// standings and history always plan to the same root.
#[must_use]
pub fn compute_pairings_root(pairings: &[Pairing]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"swisspair:pairings_root:v1:");
    hasher.update((pairings.len() as u64).to_le_bytes());

    for pairing in pairings {
        hasher.update(pairing.first_id.0.as_bytes());
        hasher.update(pairing.second_id.0.as_bytes());
        hasher.update((pairing.first_name.len() as u64).to_le_bytes());
        hasher.update(pairing.first_name.as_bytes());
        hasher.update((pairing.second_name.len() as u64).to_le_bytes());
        hasher.update(pairing.second_name.as_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Verify that an ordered pairing sequence matches the expected root.
#[must_use]
pub fn verify_pairings_root(pairings: &[Pairing], expected_root: &[u8; 32]) -> bool {
    compute_pairings_root(pairings) == *expected_root
}

/// Short hex rendering of a root, for log lines.
#[must_use]
pub fn root_hex(root: &[u8; 32]) -> String {
    hex::encode(&root[..8])
}
