//! Core data models for the household ledger
//!
//! The ledger has a single entity, [`Transaction`], plus the small value
//! types it is built from.

pub mod amount;
pub mod date;
pub mod transaction;

pub use amount::Amount;
pub use date::{EntryDate, MonthKey};
pub use transaction::{Transaction, TransactionId, TransactionKind, DEFAULT_CATEGORY};
