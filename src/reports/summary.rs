//! Monthly summary
//!
//! Month membership is a textual prefix test on the stored date, so records
//! with malformed dates simply never match any month.

use std::collections::HashMap;

use crate::models::{Amount, MonthKey, Transaction};

/// Transactions whose date falls in `month`, in stored order
pub fn filter_by_month<'a>(transactions: &'a [Transaction], month: &MonthKey) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|txn| month.contains(&txn.date))
        .collect()
}

/// Sum of income amounts
pub fn total_income<'a, I>(transactions: I) -> Amount
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|txn| txn.kind.is_income())
        .map(|txn| txn.amount)
        .sum()
}

/// Sum of expense amounts
pub fn total_expense<'a, I>(transactions: I) -> Amount
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|txn| txn.kind.is_expense())
        .map(|txn| txn.amount)
        .sum()
}

/// Net amount for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    /// Expenses minus everything else; positive means net spending
    pub net: f64,
}

impl CategoryTotal {
    pub fn is_net_spending(&self) -> bool {
        self.net > 0.0
    }
}

/// Per-category net amounts, in order of first appearance
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryNet {
    entries: Vec<CategoryTotal>,
}

impl CategoryNet {
    /// Net for `category`, if any transaction used it
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.net)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategoryNet {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Group by category: expenses add, income (and unknown kinds) subtract
///
/// Only categories that occur in the input appear in the result.
pub fn category_net<'a, I>(transactions: I) -> CategoryNet
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<CategoryTotal> = Vec::new();

    for txn in transactions {
        let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
            entries.push(CategoryTotal {
                category: txn.category.clone(),
                net: 0.0,
            });
            entries.len() - 1
        });
        entries[slot].net += txn.category_effect();
    }

    CategoryNet { entries }
}

/// Everything shown for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub income: Amount,
    pub expense: Amount,
    /// Income minus expense; may be negative
    pub balance: f64,
    pub category_net: CategoryNet,
    pub transaction_count: usize,
}

impl MonthlySummary {
    /// Summarize the transactions dated in `month`
    pub fn generate(transactions: &[Transaction], month: &MonthKey) -> Self {
        let monthly = filter_by_month(transactions, month);
        let income = total_income(monthly.iter().copied());
        let expense = total_expense(monthly.iter().copied());

        Self {
            month: month.clone(),
            income,
            expense,
            balance: income.value() - expense.value(),
            category_net: category_net(monthly.iter().copied()),
            transaction_count: monthly.len(),
        }
    }
}
