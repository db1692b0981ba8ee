use proptest::prelude::*;

use popchain_types::{BlockHash, Timestamp};

proptest! {
    /// BlockHash roundtrip: new -> as_bytes -> new produces identical hash.
    #[test]
    fn block_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// BlockHash::is_zero is true only for all-zero bytes.
    #[test]
    fn block_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// Hex rendering parses back to the identical hash.
    #[test]
    fn block_hash_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        let parsed: BlockHash = hash.to_hex().parse().unwrap();
        prop_assert_eq!(parsed, hash);
    }

    /// count_ones agrees with a bit-by-bit recount.
    #[test]
    fn block_hash_count_ones_correct(bytes in prop::array::uniform32(0u8..)) {
        let manual: u32 = bytes
            .iter()
            .map(|b| (0..8).filter(|i| b & (1 << i) != 0).count() as u32)
            .sum();
        prop_assert_eq!(BlockHash::new(bytes).count_ones(), manual);
    }

    /// JSON serialization round-trips through the hex string form.
    #[test]
    fn block_hash_serde_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        let json = serde_json::to_string(&hash).unwrap();
        prop_assert_eq!(json.len(), 66); // 64 hex chars plus quotes
        let back: BlockHash = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, hash);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Timestamp round-trips through its millisecond value.
    #[test]
    fn timestamp_millis_roundtrip(millis in 0u64..u64::MAX) {
        prop_assert_eq!(Timestamp::new(millis).as_millis(), millis);
    }
}
