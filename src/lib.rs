//! Household ledger - personal income/expense bookkeeping
//!
//! This library provides the core of a small household ledger: recording
//! income and expense entries, persisting them through a key-value backend,
//! exchanging them as CSV, and summarizing them by month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, amounts, dates)
//! - `storage`: Key-value persistence and the transaction store
//! - `export` / `import`: CSV serialization and lenient parsing
//! - `reports`: Monthly summaries
//! - `services`: Operations used by the presentation layer
//! - `audit`: Audit logging system
//! - `display`, `cli`: Terminal presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use household_ledger::services::{LedgerService, TransactionForm};
//! use household_ledger::storage::{MemoryStore, Storage};
//!
//! let mut service = LedgerService::new(Storage::new(MemoryStore::new()), Default::default());
//! service.add_transaction(TransactionForm::expense("12500").category("식비"))?;
//! println!("{:?}", service.summary());
//! ```

use std::sync::Once;

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

static TRACING_INIT: Once = Once::new();

/// Install the stderr diagnostics subscriber (`RUST_LOG` overrides the default level)
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("household_ledger=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
