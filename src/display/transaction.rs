//! Transaction display formatting
//!
//! Provides the transaction table shown by `list` and the detail block
//! printed before a removal.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Transaction, TransactionKind};

use super::amount::format_amount;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Memo")]
    memo: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Label shown for a transaction kind
pub fn kind_label(kind: &TransactionKind) -> &str {
    match kind {
        TransactionKind::Income => "수입",
        TransactionKind::Expense => "지출",
        TransactionKind::Other(raw) => raw,
    }
}

/// Format transactions as a table
pub fn format_transaction_table<'a, I>(transactions: I, unit: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<TransactionRow> = transactions
        .into_iter()
        .map(|txn| TransactionRow {
            date: txn.date.to_string(),
            kind: kind_label(&txn.kind).to_string(),
            category: txn.category.clone(),
            memo: if txn.memo.is_empty() {
                "-".to_string()
            } else {
                truncate(&txn.memo, 30)
            },
            amount: signed_amount(txn, unit),
            id: txn.id.to_string(),
        })
        .collect();

    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format full details of a single transaction
pub fn format_transaction_details(txn: &Transaction, unit: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:       {}\n", txn.id));
    output.push_str(&format!("Date:     {}\n", txn.date));
    output.push_str(&format!("Type:     {}\n", kind_label(&txn.kind)));
    output.push_str(&format!("Category: {}\n", txn.category));
    output.push_str(&format!("Amount:   {}\n", signed_amount(txn, unit)));
    if !txn.memo.is_empty() {
        output.push_str(&format!("Memo:     {}\n", txn.memo));
    }
    output
}

fn signed_amount(txn: &Transaction, unit: &str) -> String {
    let sign = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
        TransactionKind::Other(_) => "",
    };
    format!("{}{}", sign, format_amount(txn.amount.value(), unit))
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
