//! Proof-of-work mining.
//!
//! Searches for block nonces whose SHA-256 digest carries enough set bits:
//! a digest solves the puzzle at difficulty `d` when its population count
//! reaches `128 + d`. Mining is a bounded race of concurrent attempts that
//! ends with the first solution or a deadline.

pub mod cancel;
pub mod config;
pub mod digest;
pub mod error;
pub mod nonce;
pub mod puzzle;
pub mod solver;

pub use cancel::CancelToken;
pub use config::MiningConfig;
pub use digest::{digest_block, digest_fields};
pub use error::PowError;
pub use nonce::RandomNonces;
pub use puzzle::{bit_threshold, meets_difficulty, BASE_BIT_COUNT, MAX_DIFFICULTY};
pub use solver::Miner;
