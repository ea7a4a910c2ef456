//! Storage layer for the household ledger
//!
//! Persistence goes through the [`KeyValueStore`] capability so the ledger
//! can run against files, memory, or any other slot-based backend.

pub mod file_io;
pub mod file_store;
pub mod memory;
pub mod transactions;

pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use transactions::{TransactionStore, STORAGE_KEY};

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;
use crate::models::Transaction;

/// Generic key-value persistence capability
pub trait KeyValueStore {
    /// Read a slot; `None` when it was never written or has been deleted
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Overwrite a slot
    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()>;

    /// Erase a slot; erasing a missing slot succeeds
    fn delete(&mut self, key: &str) -> LedgerResult<()>;
}

/// Storage coordinator: the transaction store plus the optional audit log
pub struct Storage<B: KeyValueStore> {
    pub transactions: TransactionStore<B>,
    audit: Option<AuditLogger>,
}

impl Storage<FileStore> {
    /// Open file-backed storage under the configured data directory
    pub fn open(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        let storage = Self::new(FileStore::new(paths.data_dir()));
        Ok(if settings.audit_enabled {
            storage.with_audit(AuditLogger::new(paths.audit_log()))
        } else {
            storage
        })
    }
}

impl<B: KeyValueStore> Storage<B> {
    /// Load the store from `backend` with auditing disabled
    pub fn new(backend: B) -> Self {
        Self {
            transactions: TransactionStore::load(backend),
            audit: None,
        }
    }

    /// Record mutations in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Audit a transaction added from the form
    pub fn log_create(&self, txn: &Transaction) {
        self.log(AuditEntry::create(
            EntityType::Transaction,
            txn.id.as_str(),
            Some(format!("{} {}", txn.date, txn.category)),
            txn,
        ));
    }

    /// Audit a removed transaction
    pub fn log_delete(&self, txn: &Transaction) {
        self.log(AuditEntry::delete(
            EntityType::Transaction,
            txn.id.as_str(),
            Some(format!("{} {}", txn.date, txn.category)),
            txn,
        ));
    }

    /// Audit a CSV import
    pub fn log_import(&self, count: usize, defaulted_fields: usize) {
        self.log(AuditEntry::import(count, defaulted_fields));
    }

    /// Audit a full reset
    pub fn log_reset(&self, count: usize) {
        self.log(AuditEntry::reset(count));
    }

    // The mutation is already persisted, so a failed audit write is only reported.
    fn log(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.append(&entry) {
                warn!(error = %e, operation = %entry.operation, "audit log write failed");
            }
        }
    }
}
