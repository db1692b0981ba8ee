//! Fundamental types for the popchain proof-of-work kernel.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: blocks, digests, timestamps, and the injectable clock and
//! nonce-source capabilities.

pub mod block;
pub mod clock;
pub mod hash;
pub mod nonce;
pub mod time;

pub use block::Block;
pub use clock::{Clock, SystemClock};
pub use hash::{BlockHash, ParseHashError};
pub use nonce::NonceSource;
pub use time::Timestamp;
