//! System nonce source.

use rand::Rng;

use popchain_types::NonceSource;

/// Draws candidate nonces uniformly at random from the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomNonces;

impl NonceSource for RandomNonces {
    fn next_nonce(&self) -> u32 {
        rand::thread_rng().gen()
    }
}
