//! The mining race.
//!
//! Each call spawns a fixed number of attempts that race toward the first
//! digest satisfying the puzzle. Attempts share a solved flag and a winner
//! slot created fresh per call; the first claim wins and every sibling
//! abandons cooperatively at its next loop boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use popchain_types::{Block, BlockHash, Clock, NonceSource, SystemClock};

use crate::cancel::CancelToken;
use crate::config::MiningConfig;
use crate::digest::digest_fields;
use crate::error::PowError;
use crate::nonce::RandomNonces;
use crate::puzzle::meets_difficulty;

/// Shared state of one mining race: the solved flag plus the winner slot.
///
/// Scoped to a single mining call, never reused across calls.
struct SolveRace {
    solved: AtomicBool,
    winner: Mutex<Option<Block>>,
}

impl SolveRace {
    fn new() -> Self {
        Self {
            solved: AtomicBool::new(false),
            winner: Mutex::new(None),
        }
    }

    /// Whether some attempt has already won.
    fn is_solved(&self) -> bool {
        self.solved.load(Ordering::Relaxed)
    }

    /// Try to claim the win. Exactly one caller ever succeeds.
    fn claim(&self) -> bool {
        self.solved
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::Relaxed)
            .is_ok()
    }

    fn publish(&self, block: Block) {
        *self.winner.lock().expect("winner slot poisoned") = Some(block);
    }

    fn into_winner(self) -> Option<Block> {
        self.winner.into_inner().expect("winner slot poisoned")
    }
}

/// The mining engine.
///
/// Owns a validated configuration plus the clock and nonce-source
/// capabilities shared by every attempt.
pub struct Miner {
    config: MiningConfig,
    clock: Arc<dyn Clock>,
    nonces: Arc<dyn NonceSource>,
}

impl Miner {
    /// Create a miner backed by the system clock and random nonces.
    pub fn new(config: MiningConfig) -> Result<Self, PowError> {
        Self::with_capabilities(config, Arc::new(SystemClock), Arc::new(RandomNonces))
    }

    /// Create a miner with injected capabilities, for deterministic tests.
    pub fn with_capabilities(
        config: MiningConfig,
        clock: Arc<dyn Clock>,
        nonces: Arc<dyn NonceSource>,
    ) -> Result<Self, PowError> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            nonces,
        })
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Mine one block within the configured deadline.
    pub fn mine_block(
        &self,
        data: serde_json::Value,
        parent: Option<&Block>,
    ) -> Result<Block, PowError> {
        let cancel = CancelToken::with_deadline(self.config.deadline());
        self.mine_block_with(data, parent, &cancel)
    }

    /// Mine one block, polling the caller's cancellation token.
    pub fn mine_block_with(
        &self,
        data: serde_json::Value,
        parent: Option<&Block>,
        cancel: &CancelToken,
    ) -> Result<Block, PowError> {
        let difficulty = self.config.difficulty;
        let parent_hash = parent.map(|p| p.hash);

        tracing::debug!(
            difficulty,
            workers = self.config.worker_count,
            "mining race started"
        );

        let race = SolveRace::new();
        thread::scope(|scope| {
            for _ in 0..self.config.worker_count {
                scope.spawn(|| self.attempt(parent_hash, difficulty, &data, cancel, &race));
            }
        });

        match race.into_winner() {
            Some(block) => {
                tracing::debug!(nonce = block.nonce, hash = %block.hash, "mining race settled");
                Ok(block)
            }
            None => {
                tracing::debug!(difficulty, "mining race cancelled");
                Err(PowError::Cancelled)
            }
        }
    }

    /// One attempt: draw candidates until a sibling wins or the token fires.
    /// Checks happen only between digests, never mid-hash.
    fn attempt(
        &self,
        parent: Option<BlockHash>,
        difficulty: u32,
        data: &serde_json::Value,
        cancel: &CancelToken,
        race: &SolveRace,
    ) {
        loop {
            let timestamp = self.clock.now();
            let nonce = self.nonces.next_nonce();
            let hash = digest_fields(parent.as_ref(), timestamp, difficulty, nonce, data);

            if race.is_solved() {
                return;
            }
            if cancel.is_cancelled() {
                return;
            }
            if meets_difficulty(&hash, difficulty) {
                if race.claim() {
                    race.publish(Block {
                        parent,
                        timestamp,
                        difficulty,
                        nonce,
                        hash,
                        data: data.clone(),
                    });
                }
                return;
            }
        }
    }
}
