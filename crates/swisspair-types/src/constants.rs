//! System-wide constants for the Swisspair tournament engine.

/// Maximum players per tournament (default). Swiss events run tens to low
/// hundreds of players; the pairing scan is O(n²) per round.
pub const DEFAULT_MAX_PLAYERS_PER_TOURNAMENT: usize = 256;

/// Maximum tournaments a single store will hold (default).
pub const DEFAULT_MAX_TOURNAMENTS: usize = 1024;
