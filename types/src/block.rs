//! The block record produced by mining.

use serde::{Deserialize, Serialize};

use crate::hash::BlockHash;
use crate::time::Timestamp;

/// A mined block.
///
/// Field order is the canonical wire order. The digest covers every field
/// except `hash` itself, serialized in exactly this order, so reordering a
/// field is a breaking change to the chain format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Digest of the preceding block, or `None` for the first block.
    pub parent: Option<BlockHash>,
    /// When the winning candidate was assembled (Unix ms).
    pub timestamp: Timestamp,
    /// Extra set bits the digest must carry beyond the 128-bit baseline.
    pub difficulty: u32,
    /// The solution found by the miner.
    pub nonce: u32,
    /// SHA-256 digest of all other fields.
    pub hash: BlockHash,
    /// Opaque caller payload, carried verbatim.
    pub data: serde_json::Value,
}

impl Block {
    /// Whether this block claims to start a chain.
    pub fn is_first(&self) -> bool {
        self.parent.is_none()
    }
}
