//! Canonical block digest.
//!
//! The digest input is the compact JSON encoding of every block field except
//! `hash`, in fixed order: parent, timestamp, difficulty, nonce, data. Equal
//! field values always produce the same bytes, so verification can recompute
//! the digest and compare it against the stored hash exactly.

use serde::Serialize;
use sha2::{Digest, Sha256};

use popchain_types::{Block, BlockHash, Timestamp};

/// Borrowing view of the digest input, serialized in declaration order.
#[derive(Serialize)]
struct DigestFields<'a> {
    parent: Option<&'a BlockHash>,
    timestamp: Timestamp,
    difficulty: u32,
    nonce: u32,
    data: &'a serde_json::Value,
}

/// Compute the digest of a candidate block from its constituent fields.
pub fn digest_fields(
    parent: Option<&BlockHash>,
    timestamp: Timestamp,
    difficulty: u32,
    nonce: u32,
    data: &serde_json::Value,
) -> BlockHash {
    let fields = DigestFields {
        parent,
        timestamp,
        difficulty,
        nonce,
        data,
    };
    let encoded =
        serde_json::to_vec(&fields).expect("digest fields are plain JSON and always serialize");
    let mut hasher = Sha256::new();
    hasher.update(&encoded);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    BlockHash::new(output)
}

/// Recompute the digest of a finished block, ignoring its stored `hash`.
pub fn digest_block(block: &Block) -> BlockHash {
    digest_fields(
        block.parent.as_ref(),
        block.timestamp,
        block.difficulty,
        block.nonce,
        &block.data,
    )
}
