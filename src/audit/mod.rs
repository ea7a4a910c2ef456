//! Audit logging for the household ledger
//!
//! Records every add, delete, import and reset in an append-only audit log.
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, entity
//!   information, and optional before/after values.
//! - `AuditLogger`: appends entries to the audit log file as line-delimited
//!   JSON (JSONL) and reads them back as an `AuditHistory`.
//!
//! # Example
//!
//! ```rust,ignore
//! use household_ledger::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.append(&AuditEntry::create(EntityType::Transaction, txn.id.as_str(), None, &txn))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::{AuditHistory, AuditLogger};
