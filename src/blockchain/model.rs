use log::{debug, info};
use serde_json::Number;

use super::hash::hash;
use super::pow::valid_proof;
use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF, PreviousHash};
use crate::transaction::{Mempool, Transaction};

/// In-memory ledger: the sealed chain plus the pool feeding the next block.
#[derive(Debug)]
pub struct Blockchain {
    chain: Vec<Block>,
    current_transactions: Mempool,
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Blockchain {
    /// Initialize a new ledger and seal its genesis block.
    pub fn new() -> Self {
        let mut bc = Self {
            chain: Vec::new(),
            current_transactions: Mempool::new(),
        };
        bc.new_block(
            GENESIS_PROOF,
            Some(PreviousHash::Sentinel(GENESIS_PREVIOUS_HASH)),
        );
        bc
    }

    /// Seal the pending transactions into a new block and append it.
    ///
    /// Without an explicit `previous_hash` the block links to the digest of
    /// the current last block. The proof is stored as given.
    pub fn new_block(&mut self, proof: u64, previous_hash: Option<PreviousHash>) -> &Block {
        let previous_hash = match previous_hash {
            Some(link) => link,
            None => PreviousHash::from(hash(self.last_block())),
        };
        let index = self.chain.len() as u64 + 1;
        let transactions = self.current_transactions.drain();

        let block = Block::new(index, transactions, proof, previous_hash);
        info!(
            "LEDGER - sealed block #{} (proof={}, txs={})",
            block.index,
            block.proof,
            block.transactions.len()
        );
        self.chain.push(block);
        self.last_block()
    }

    /// Queue a transaction for the next block; returns that block's index.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: impl Into<Number>,
    ) -> u64 {
        self.current_transactions
            .push(Transaction::new(sender, recipient, amount));
        let next = self.last_block().index + 1;
        debug!(
            "LEDGER - queued tx for block #{} (pending={})",
            next,
            self.current_transactions.len()
        );
        next
    }

    /// Seal `proof` on top of block `tip_index`, paying `reward` first.
    ///
    /// Returns `None` and leaves the pool untouched when the tip has moved
    /// since the proof search started; the caller must search again.
    pub fn seal_on_tip(
        &mut self,
        tip_index: u64,
        proof: u64,
        reward: Transaction,
    ) -> Option<&Block> {
        if self.last_block().index != tip_index {
            return None;
        }
        self.current_transactions.push(reward);
        Some(self.new_block(proof, None))
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending(&self) -> &Mempool {
        &self.current_transactions
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_valid_chain(&self) -> bool {
        valid_chain(&self.chain)
    }
}

/// Validate a chain: consecutive indices from 1, digest linkage and PoW
/// between every pair of neighbouring blocks. Genesis must carry the sentinel
/// link; its own contents are taken as given.
pub fn valid_chain(chain: &[Block]) -> bool {
    let Some(genesis) = chain.first() else {
        return false;
    };
    if genesis.index != 1 || !genesis.previous_hash.is_sentinel() {
        return false;
    }

    for pair in chain.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);

        if current.index != prev.index + 1 {
            return false;
        }

        // Check linkage
        if current.previous_hash != PreviousHash::Digest(hash(prev)) {
            return false;
        }

        if !valid_proof(prev.proof, current.proof) {
            return false;
        }
    }

    true
}
