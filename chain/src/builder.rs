//! Sequential chain construction.
//!
//! Mining a chain is a lazy walk: each step mines one block on top of the
//! previous one and hands it out before the next datum is touched. The
//! cursor is explicit: the running parent plus the remaining input. No block
//! is mined until the caller asks for it.

use popchain_pow::{CancelToken, Miner, PowError};
use popchain_types::Block;

/// Lazy block sequence produced by [`mine_chain`].
///
/// Yields one `Ok(Block)` per input datum, in order, each linked to the
/// block before it. The first failure (always a cancellation) is yielded
/// once; after that the iterator is exhausted. A fresh call to
/// [`mine_chain`] starts over from no parent.
pub struct ChainIter<'m, I> {
    miner: &'m Miner,
    inputs: I,
    parent: Option<Block>,
    cancel: CancelToken,
    failed: bool,
}

/// Mine one block per datum, each linked to the previous.
///
/// The miner's configured deadline covers the whole sequence, not each
/// block separately.
pub fn mine_chain<I>(miner: &Miner, data: I) -> ChainIter<'_, I::IntoIter>
where
    I: IntoIterator<Item = serde_json::Value>,
{
    let cancel = CancelToken::with_deadline(miner.config().deadline());
    mine_chain_with(miner, data, &cancel)
}

/// Mine one block per datum, polling the caller's cancellation token.
pub fn mine_chain_with<'m, I>(
    miner: &'m Miner,
    data: I,
    cancel: &CancelToken,
) -> ChainIter<'m, I::IntoIter>
where
    I: IntoIterator<Item = serde_json::Value>,
{
    ChainIter {
        miner,
        inputs: data.into_iter(),
        parent: None,
        cancel: cancel.clone(),
        failed: false,
    }
}

impl<I> Iterator for ChainIter<'_, I>
where
    I: Iterator<Item = serde_json::Value>,
{
    type Item = Result<Block, PowError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let data = self.inputs.next()?;
        match self
            .miner
            .mine_block_with(data, self.parent.as_ref(), &self.cancel)
        {
            Ok(block) => {
                self.parent = Some(block.clone());
                Some(Ok(block))
            }
            Err(e) => {
                tracing::debug!(error = %e, "chain construction aborted");
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use popchain_pow::MiningConfig;
    use serde_json::json;

    fn quick_miner(difficulty: u32) -> Miner {
        let config = MiningConfig {
            difficulty,
            deadline_ms: 30_000,
            worker_count: 4,
        };
        Miner::new(config).expect("valid config")
    }

    #[test]
    fn links_blocks_in_input_order() {
        let miner = quick_miner(2);
        let blocks: Vec<Block> = mine_chain(&miner, vec![json!("a"), json!("b"), json!("c")])
            .collect::<Result<_, _>>()
            .expect("chain mines");

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].parent, None);
        assert_eq!(blocks[1].parent, Some(blocks[0].hash));
        assert_eq!(blocks[2].parent, Some(blocks[1].hash));
        assert_eq!(blocks[0].data, json!("a"));
        assert_eq!(blocks[1].data, json!("b"));
        assert_eq!(blocks[2].data, json!("c"));
    }

    #[test]
    fn empty_input_yields_nothing() {
        let miner = quick_miner(0);
        let mut iter = mine_chain(&miner, Vec::new());
        assert!(iter.next().is_none());
    }

    #[test]
    fn construction_is_lazy() {
        // An infinite input would hang an eager builder; taking two blocks
        // from it proves each element is mined on demand.
        let miner = quick_miner(0);
        let blocks: Vec<Block> = mine_chain(&miner, std::iter::repeat_with(|| json!("x")))
            .take(2)
            .collect::<Result<_, _>>()
            .expect("chain mines");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].parent, Some(blocks[0].hash));
    }

    #[test]
    fn cancellation_fuses_the_iterator() {
        let miner = quick_miner(0);
        let cancel = CancelToken::never();
        cancel.cancel();

        let mut iter = mine_chain_with(&miner, vec![json!("a"), json!("b")], &cancel);
        assert!(matches!(iter.next(), Some(Err(PowError::Cancelled))));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn mid_sequence_cancellation_stops_production() {
        let miner = quick_miner(0);
        let cancel = CancelToken::never();

        let mut iter = mine_chain_with(&miner, vec![json!("a"), json!("b"), json!("c")], &cancel);
        let first = iter.next().expect("one element").expect("mines");
        assert_eq!(first.data, json!("a"));

        cancel.cancel();
        assert!(matches!(iter.next(), Some(Err(PowError::Cancelled))));
        assert!(iter.next().is_none());
    }
}
