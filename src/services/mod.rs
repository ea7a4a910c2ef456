//! Service layer for the household ledger
//!
//! The service layer sits between the presentation layer and storage,
//! handling form validation, auditing and the month being viewed.

pub mod ledger;

pub use ledger::{ImportReport, LedgerService, TransactionForm};
