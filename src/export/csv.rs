//! CSV Export functionality
//!
//! Format: a fixed `id,type,amount,category,memo,date` header, one row per
//! transaction, rows joined by `\n` with no trailing newline. Only the memo is
//! quoted (always, with `"` doubled); other fields are written as-is, so a
//! comma inside them will shift columns on re-import.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryDate, Transaction};

/// Header row, in column order
pub const CSV_HEADER: &str = "id,type,amount,category,memo,date";

/// MIME type of the exported file
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Serialize transactions to CSV text
pub fn to_csv(transactions: &[Transaction]) -> String {
    let mut lines = Vec::with_capacity(transactions.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for txn in transactions {
        lines.push(format!(
            "{},{},{},{},{},{}",
            txn.id,
            txn.kind,
            txn.amount,
            txn.category,
            quote_memo(&txn.memo),
            txn.date
        ));
    }

    lines.join("\n")
}

/// Write transactions as CSV to any writer
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> LedgerResult<()> {
    writer
        .write_all(to_csv(transactions).as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}

/// Download name for an export made on `date`
pub fn export_file_name(date: &EntryDate) -> String {
    format!("ledger_{}.csv", date)
}

/// A ready-to-save CSV export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested file name (`ledger_<date>.csv`)
    pub file_name: String,
    /// MIME type of the body
    pub mime_type: &'static str,
    /// CSV text
    pub body: String,
}

impl CsvExport {
    /// Build an export of `transactions` dated `date`
    pub fn new(transactions: &[Transaction], date: &EntryDate) -> Self {
        Self {
            file_name: export_file_name(date),
            mime_type: CSV_MIME_TYPE,
            body: to_csv(transactions),
        }
    }

    /// Write the body to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        writer
            .write_all(self.body.as_bytes())
            .map_err(|e| LedgerError::Export(e.to_string()))
    }
}

fn quote_memo(memo: &str) -> String {
    format!("\"{}\"", memo.replace('"', "\"\""))
}
