//! CSV import parsing
//!
//! Parsing is deliberately lenient. The only condition that rejects a whole
//! file is having fewer than two non-empty lines (header plus one row). Each
//! data row is split on literal commas and mapped by position
//! (`id,type,amount,category,memo,date`); the header text is not checked.
//! Bad or missing columns fall back to defaults and are reported on the row.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Amount, EntryDate, Transaction, TransactionId, TransactionKind, DEFAULT_CATEGORY,
};

/// Minimum number of non-empty lines in an importable file
const MIN_LINES: usize = 2;

/// A column that can fall back to a default value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CsvField {
    Id,
    Kind,
    Amount,
    Category,
    Memo,
    Date,
}

/// One data row after parsing
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// 1-based line number in the source text
    pub line_number: usize,
    /// The resulting record
    pub transaction: Transaction,
    /// Columns that were missing or unparsable and took a default
    pub defaulted: Vec<CsvField>,
}

impl ParsedRow {
    /// Check whether every column was used as written
    pub fn is_clean(&self) -> bool {
        self.defaulted.is_empty()
    }
}

/// Result of parsing an importable file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvImport {
    /// Data rows in file order
    pub rows: Vec<ParsedRow>,
}

impl CsvImport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of defaulted columns across all rows
    pub fn defaulted_count(&self) -> usize {
        self.rows.iter().map(|r| r.defaulted.len()).sum()
    }

    /// Number of rows with at least one defaulted column
    pub fn rows_with_defaults(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_clean()).count()
    }

    /// The parsed records, in file order
    pub fn into_transactions(self) -> Vec<Transaction> {
        self.rows.into_iter().map(|r| r.transaction).collect()
    }
}

/// Parse CSV text, using today's date for rows without one
pub fn from_csv(text: &str) -> LedgerResult<CsvImport> {
    from_csv_on(text, &EntryDate::today())
}

/// Parse CSV text, using `today` for rows without a date
pub fn from_csv_on(text: &str, today: &EntryDate) -> LedgerResult<CsvImport> {
    let lines: Vec<(usize, &str)> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| (idx + 1, line))
        .collect();

    if lines.len() < MIN_LINES {
        return Err(LedgerError::InvalidCsv(format!(
            "expected a header and at least one row, found {} non-empty line(s)",
            lines.len()
        )));
    }

    let rows = lines
        .into_iter()
        .skip(1)
        .map(|(line_number, line)| parse_row(line_number, line, today))
        .collect();

    Ok(CsvImport { rows })
}

/// Parse one data row; never fails
pub fn parse_row(line_number: usize, line: &str, today: &EntryDate) -> ParsedRow {
    let columns: Vec<&str> = line.split(',').collect();
    let column = |idx: usize| columns.get(idx).copied();
    let mut defaulted = Vec::new();

    let id = match column(0) {
        Some(raw) => TransactionId::from(raw),
        None => {
            defaulted.push(CsvField::Id);
            TransactionId::from("")
        }
    };

    let kind = match column(1) {
        Some(raw) => TransactionKind::from(raw),
        None => {
            defaulted.push(CsvField::Kind);
            TransactionKind::Other(String::new())
        }
    };

    let amount = match column(2) {
        Some(raw) => {
            let (amount, failed) = Amount::from_column(raw);
            if failed {
                defaulted.push(CsvField::Amount);
            }
            amount
        }
        None => {
            defaulted.push(CsvField::Amount);
            Amount::zero()
        }
    };

    let category = match column(3) {
        Some(raw) => raw.to_string(),
        None => {
            defaulted.push(CsvField::Category);
            DEFAULT_CATEGORY.to_string()
        }
    };

    let memo = match column(4) {
        Some(raw) => unquote_memo(raw),
        None => {
            defaulted.push(CsvField::Memo);
            String::new()
        }
    };

    let date = match column(5) {
        Some(raw) if !raw.is_empty() => EntryDate::verbatim(raw),
        _ => {
            defaulted.push(CsvField::Date);
            today.clone()
        }
    };

    ParsedRow {
        line_number,
        transaction: Transaction {
            id,
            kind,
            amount,
            category,
            memo,
            date,
        },
        defaulted,
    }
}

/// Strip one leading and one trailing quote, then collapse doubled quotes
fn unquote_memo(raw: &str) -> String {
    let inner = raw.strip_prefix('"').unwrap_or(raw);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.replace("\"\"", "\"")
}
