//! Multi-round Swiss simulation with seeded random outcomes.
//!
//! Plays an eight-player event for three rounds, choosing winners from a
//! seeded RNG, and checks the structural invariants after every round:
//! totality, win/match consistency, standings completeness, and rematch
//! freshness where avoidance is structurally possible.

use rand::{Rng, SeedableRng, rngs::StdRng};
use swisspair_paircore::MatchHistory;
use swisspair_rounds::{current_standings, match_history, next_round, report_match};
use swisspair_store::{MemoryStore, TournamentStore};
use swisspair_types::{PlayerId, RoundPlan};

const FIELD: [&str; 8] = [
    "Twilight Sparkle",
    "Fluttershy",
    "Applejack",
    "Pinkie Pie",
    "Rarity",
    "Rainbow Dash",
    "Spike",
    "Starlight Glimmer",
];

fn assert_totality(plan: &RoundPlan, field: &[PlayerId]) {
    assert_eq!(plan.len(), field.len() / 2);
    let mut seen = std::collections::HashSet::new();
    for pairing in &plan.pairings {
        assert!(seen.insert(pairing.first_id), "player seated twice");
        assert!(seen.insert(pairing.second_id), "player seated twice");
    }
    for id in field {
        assert!(seen.contains(id), "player left unseated");
    }
}

#[test]
fn three_rounds_hold_structural_invariants() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut store = MemoryStore::new();
    let tournament = store.create_or_get_tournament("Ponyville Invitational").unwrap();
    let field: Vec<PlayerId> = FIELD
        .iter()
        .map(|name| store.register_player(tournament, name).unwrap())
        .collect();

    for round in 1..=3u32 {
        let plan = next_round(&store, tournament).unwrap();
        assert_totality(&plan, &field);

        for pairing in &plan.pairings {
            let (a, b) = pairing.player_ids();
            let (winner, loser) = if rng.gen_bool(0.5) { (a, b) } else { (b, a) };
            report_match(&mut store, tournament, winner, loser).unwrap();
        }

        let standings = current_standings(&store, tournament).unwrap();
        assert_eq!(standings.len(), field.len(), "standings must stay complete");
        for row in &standings {
            assert_eq!(row.matches, round, "every player plays once per round");
            assert!(row.wins <= row.matches);
        }
        let total_wins: u32 = standings.iter().map(|r| r.wins).sum();
        assert_eq!(total_wins, u32::try_from(field.len() / 2).unwrap() * round);
    }
}

#[test]
fn second_round_never_repeats_a_first_round_pairing() {
    // With eight players, every round-one pair splits into one winner and
    // one loser, so a fresh opponent always exists in round two; the
    // forward scan must find it.
    for seed in 0..16u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut store = MemoryStore::new();
        let tournament = store.create_or_get_tournament("Rematch Sweep").unwrap();
        for name in FIELD {
            store.register_player(tournament, name).unwrap();
        }

        let round_one = next_round(&store, tournament).unwrap();
        let mut played = MatchHistory::new();
        for pairing in &round_one.pairings {
            let (a, b) = pairing.player_ids();
            played.record(a, b);
            let (winner, loser) = if rng.gen_bool(0.5) { (a, b) } else { (b, a) };
            report_match(&mut store, tournament, winner, loser).unwrap();
        }

        let round_two = next_round(&store, tournament).unwrap();
        for pairing in &round_two.pairings {
            let (a, b) = pairing.player_ids();
            assert!(
                !played.have_matched(a, b),
                "seed {seed}: round two repeated {pairing}"
            );
        }
    }
}

#[test]
fn store_history_matches_reported_results() {
    let mut store = MemoryStore::new();
    let tournament = store.create_or_get_tournament("History Check").unwrap();
    let field: Vec<PlayerId> = FIELD
        .iter()
        .map(|name| store.register_player(tournament, name).unwrap())
        .collect();

    let plan = next_round(&store, tournament).unwrap();
    for pairing in &plan.pairings {
        let (a, b) = pairing.player_ids();
        report_match(&mut store, tournament, a, b).unwrap();
    }

    let history = match_history(&store, tournament).unwrap();
    assert_eq!(history.len(), field.len() / 2);
    for pairing in &plan.pairings {
        let (a, b) = pairing.player_ids();
        assert!(history.have_matched(a, b));
        assert!(history.have_matched(b, a));
    }
}
