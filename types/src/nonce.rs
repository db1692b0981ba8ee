//! Nonce-source capability.
//!
//! The production source draws uniformly at random; tests inject scripted
//! sequences so a search visits known candidates in a known order.

/// A source of candidate nonces, shareable across solver threads.
pub trait NonceSource: Send + Sync {
    fn next_nonce(&self) -> u32;
}
