//! Transaction store
//!
//! Holds the ordered transaction collection in memory and mirrors the whole
//! collection into a single key-value slot after every mutation.

use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::models::{Transaction, TransactionId};

use super::KeyValueStore;

/// Key of the persisted slot
pub const STORAGE_KEY: &str = "ledger_transactions_v1";

/// Ordered transaction collection, newest first
pub struct TransactionStore<B: KeyValueStore> {
    backend: B,
    transactions: Vec<Transaction>,
}

impl<B: KeyValueStore> TransactionStore<B> {
    /// Load the collection from the backend
    ///
    /// A missing, unreadable or malformed slot yields an empty collection.
    pub fn load(backend: B) -> Self {
        let transactions = read_slot(&backend);
        Self {
            backend,
            transactions,
        }
    }

    /// Re-read the persisted slot, discarding the in-memory collection
    pub fn reload(&mut self) -> &[Transaction] {
        self.transactions = read_slot(&self.backend);
        &self.transactions
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// First transaction with the given ID
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Prepend a transaction and persist
    ///
    /// On a failed write the in-memory collection is left unchanged.
    pub fn add(&mut self, txn: Transaction) -> LedgerResult<()> {
        let mut next = Vec::with_capacity(self.transactions.len() + 1);
        next.push(txn);
        next.extend(self.transactions.iter().cloned());
        self.commit(next)
    }

    /// Remove every entry with the given ID and persist
    ///
    /// Returns the removed entries (normally exactly one). The slot is
    /// rewritten even when nothing matched.
    pub fn remove(&mut self, id: &TransactionId) -> LedgerResult<Vec<Transaction>> {
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .transactions
            .iter()
            .cloned()
            .partition(|t| &t.id == id);
        self.commit(kept)?;
        Ok(removed)
    }

    /// Prepend a batch in the order received and persist
    ///
    /// IDs are not deduplicated. An empty batch changes nothing and does
    /// not touch the backend.
    pub fn import_batch(&mut self, records: Vec<Transaction>) -> LedgerResult<usize> {
        let count = records.len();
        if count == 0 {
            return Ok(0);
        }

        let mut next = records;
        next.extend(self.transactions.iter().cloned());
        self.commit(next)?;
        Ok(count)
    }

    /// Erase the persisted slot, then empty the collection
    ///
    /// Returns the number of entries dropped. If the slot cannot be erased
    /// the collection is kept.
    pub fn reset(&mut self) -> LedgerResult<usize> {
        self.backend.delete(STORAGE_KEY)?;
        let count = self.transactions.len();
        self.transactions.clear();
        debug!(count, "ledger slot erased");
        Ok(count)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // Write `next` to the slot and only then make it the live collection.
    fn commit(&mut self, next: Vec<Transaction>) -> LedgerResult<()> {
        let json = serde_json::to_string(&next)?;
        self.backend.set(STORAGE_KEY, &json)?;
        debug!(count = next.len(), "ledger slot written");
        self.transactions = next;
        Ok(())
    }
}

fn read_slot<B: KeyValueStore>(backend: &B) -> Vec<Transaction> {
    let raw = match backend.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "could not read ledger slot, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(transactions) => transactions,
        Err(e) => {
            warn!(error = %e, "ledger slot is malformed, starting empty");
            Vec::new()
        }
    }
}
