//! Nullable infrastructure for deterministic testing.
//!
//! The solver's external dependencies (clock, randomness) sit behind the
//! capability traits in `popchain-types`. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the system clock or RNG
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod nonce;

pub use clock::NullClock;
pub use nonce::NullNonces;
