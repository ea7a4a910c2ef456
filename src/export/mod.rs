//! Export module for the household ledger
//!
//! Serializes the ledger to the CSV text format that `import` reads back.

pub mod csv;

pub use csv::{
    export_file_name, export_transactions_csv, to_csv, CsvExport, CSV_HEADER, CSV_MIME_TYPE,
};
