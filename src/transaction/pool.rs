use super::model::Transaction;

/// Ordered buffer of transactions waiting for the next sealed block.
#[derive(Debug, Default)]
pub struct Mempool {
    pending: Vec<Transaction>,
}

impl Mempool {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Append a transaction; insertion order is the order it will be sealed in.
    pub fn push(&mut self, tx: Transaction) {
        self.pending.push(tx);
    }

    /// Take every pending transaction, leaving the pool empty.
    pub fn drain(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Mempool;
    use crate::transaction::Transaction;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut pool = Mempool::new();
        pool.push(Transaction::new("A", "B", 5u64));
        pool.push(Transaction::new("B", "C", 3u64));
        assert_eq!(pool.len(), 2);

        let drained = pool.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].sender, "A");
        assert_eq!(drained[1].sender, "B");
        assert!(pool.is_empty());
        assert!(pool.drain().is_empty());
    }
}
