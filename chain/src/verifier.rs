//! Block and chain verification.
//!
//! Verification inverts the mining contract: recompute the digest from the
//! block's own fields and test the puzzle, plus the link rules when a parent
//! is in play. Structural invalidity is a plain `false`; only cancellation
//! surfaces as an error.

use popchain_pow::{digest_block, meets_difficulty, CancelToken, PowError};
use popchain_types::Block;

/// Verify a single block, optionally against its parent.
///
/// Checks in order, short-circuiting on the first failure: parent linkage,
/// timestamp monotonicity and difficulty monotonicity (only when a parent is
/// supplied), digest recomputation equality, puzzle satisfaction. Never
/// fails for malformed input.
pub fn verify_block(block: &Block, parent: Option<&Block>) -> bool {
    if let Some(parent) = parent {
        if block.parent != Some(parent.hash) {
            return false;
        }
        if block.timestamp < parent.timestamp {
            return false;
        }
        if block.difficulty < parent.difficulty {
            return false;
        }
    }
    if digest_block(block) != block.hash {
        return false;
    }
    meets_difficulty(&block.hash, block.difficulty)
}

/// Verify a whole chain in order.
///
/// The first block is checked with no parent, every later block against its
/// predecessor. Returns `Ok(false)` on the first invalid block and
/// `Err(PowError::Cancelled)` if the token fires mid-walk. An empty slice is
/// trivially valid.
pub fn verify_chain(blocks: &[Block], cancel: &CancelToken) -> Result<bool, PowError> {
    let mut parent: Option<&Block> = None;
    for (index, block) in blocks.iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(PowError::Cancelled);
        }
        if !verify_block(block, parent) {
            tracing::debug!(index, "block failed verification");
            return Ok(false);
        }
        parent = Some(block);
    }
    Ok(true)
}
