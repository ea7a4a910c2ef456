//! Reports module for the household ledger
//!
//! Pure aggregation over transaction slices: month filtering, totals and
//! per-category net amounts.

pub mod summary;

pub use summary::{
    category_net, filter_by_month, total_expense, total_income, CategoryNet, CategoryTotal,
    MonthlySummary,
};
