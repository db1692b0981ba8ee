//! Chain construction and verification.
//!
//! Builds chains lazily on top of the `popchain-pow` solver and re-derives
//! every invariant when handed a finished chain back.

pub mod builder;
pub mod verifier;

pub use builder::{mine_chain, mine_chain_with, ChainIter};
pub use verifier::{verify_block, verify_chain};
