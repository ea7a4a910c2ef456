//! Import module for the household ledger
//!
//! Parses hand-edited or exported CSV text back into transactions.

pub mod csv;

pub use csv::{from_csv, from_csv_on, parse_row, CsvField, CsvImport, ParsedRow};
