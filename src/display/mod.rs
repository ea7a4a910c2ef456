//! Display formatting for terminal output
//!
//! Amount grouping, transaction tables and summary views.

pub mod amount;
pub mod report;
pub mod transaction;

pub use amount::{format_amount, format_category_net, format_number};
pub use report::{format_category_table, format_summary};
pub use transaction::{format_transaction_details, format_transaction_table, kind_label};
