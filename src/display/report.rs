//! Summary formatting

use tabled::{settings::Style, Table, Tabled};

use crate::reports::{CategoryNet, MonthlySummary};

use super::amount::{format_amount, format_category_net};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Format per-category net amounts as a table
pub fn format_category_table(category_net: &CategoryNet, unit: &str) -> String {
    if category_net.is_empty() {
        return "No data.\n".to_string();
    }

    let rows: Vec<CategoryRow> = category_net
        .iter()
        .map(|entry| CategoryRow {
            category: entry.category.clone(),
            net: format_category_net(entry.net, unit),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a monthly summary with its category breakdown
pub fn format_summary(summary: &MonthlySummary, unit: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary for {}\n", summary.month));
    output.push_str(&"─".repeat(30));
    output.push('\n');
    output.push_str(&format!(
        "Income:   {}\n",
        format_amount(summary.income.value(), unit)
    ));
    output.push_str(&format!(
        "Expense:  {}\n",
        format_amount(summary.expense.value(), unit)
    ));
    output.push_str(&format!("Balance:  {}\n", format_amount(summary.balance, unit)));
    output.push('\n');
    output.push_str("By category:\n");
    output.push_str(&format_category_table(&summary.category_net, unit));
    output
}
