//! Nullable nonce source — deterministic nonces for testing.

use popchain_types::NonceSource;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

/// A deterministic nonce source for testing.
///
/// Either replays a preset sequence or counts upward from a start value.
/// Counting walks the whole nonce space, so a satisfiable search always
/// terminates.
pub struct NullNonces {
    mode: Mode,
}

enum Mode {
    Sequence {
        values: Vec<u32>,
        index: AtomicUsize,
    },
    Counting(AtomicU32),
}

impl NullNonces {
    /// Return the given values in order, cycling once exhausted.
    pub fn sequence(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "sequence needs at least one nonce");
        Self {
            mode: Mode::Sequence {
                values,
                index: AtomicUsize::new(0),
            },
        }
    }

    /// Return the same nonce for every call.
    pub fn constant(value: u32) -> Self {
        Self::sequence(vec![value])
    }

    /// Count upward from `start`, wrapping at `u32::MAX`.
    pub fn counting(start: u32) -> Self {
        Self {
            mode: Mode::Counting(AtomicU32::new(start)),
        }
    }
}

impl NonceSource for NullNonces {
    fn next_nonce(&self) -> u32 {
        match &self.mode {
            Mode::Sequence { values, index } => {
                let i = index.fetch_add(1, Ordering::Relaxed);
                values[i % values.len()]
            }
            Mode::Counting(next) => next.fetch_add(1, Ordering::Relaxed),
        }
    }
}
