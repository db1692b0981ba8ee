//! The bit-count puzzle predicate.
//!
//! A digest solves the puzzle when its population count (set bits across the
//! whole 256-bit digest) reaches `128 + difficulty`. A random digest lands
//! around 128 set bits, so difficulty counts the extra bits demanded beyond
//! that midpoint.

use popchain_types::BlockHash;

/// Set bits a zero-difficulty digest must reach (the random midpoint).
pub const BASE_BIT_COUNT: u32 = 128;

/// Highest difficulty a 256-bit digest can express. Anything above this
/// makes the puzzle unsatisfiable and is rejected by config validation.
pub const MAX_DIFFICULTY: u32 = 128;

/// Set bits required at a given difficulty.
pub fn bit_threshold(difficulty: u32) -> u32 {
    BASE_BIT_COUNT.saturating_add(difficulty)
}

/// Whether a digest solves the puzzle at the given difficulty.
pub fn meets_difficulty(hash: &BlockHash, difficulty: u32) -> bool {
    hash.count_ones() >= bit_threshold(difficulty)
}
