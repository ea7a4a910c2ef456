//! Transaction CLI commands
//!
//! Implements adding, listing and removing ledger entries.

use clap::Subcommand;

use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::LedgerResult;
use crate::models::{MonthKey, TransactionId, TransactionKind};
use crate::services::{LedgerService, TransactionForm};
use crate::storage::KeyValueStore;

/// Transaction commands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an expense (or income with --income)
    Add {
        /// Amount, e.g. "12500" or "12.5"
        amount: String,
        /// Record as income instead of expense
        #[arg(long)]
        income: bool,
        /// Category name (defaults to 기타)
        #[arg(short, long)]
        category: Option<String>,
        /// Memo
        #[arg(short, long)]
        memo: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions for a month
    List {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<MonthKey>,
    },
    /// Delete a transaction
    Remove {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete every transaction
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<B: KeyValueStore>(
    service: &mut LedgerService<B>,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let unit = service.settings().currency_unit.clone();

    match cmd {
        TransactionCommands::Add {
            amount,
            income,
            category,
            memo,
            date,
        } => {
            let form = TransactionForm {
                kind: if income {
                    TransactionKind::Income
                } else {
                    TransactionKind::Expense
                },
                amount,
                category,
                memo,
                date,
            };

            let txn = service.add_transaction(form)?;
            println!("Added transaction:");
            print!("{}", format_transaction_details(&txn, &unit));
        }

        TransactionCommands::List { month } => {
            if let Some(month) = month {
                service.set_query_month(month);
            }

            let monthly = service.monthly_transactions();
            if monthly.is_empty() {
                println!("No transactions for {}.", service.query_month());
            } else {
                print!("{}", format_transaction_table(monthly.iter().copied(), &unit));
                println!("{} transaction(s)", monthly.len());
            }
        }

        TransactionCommands::Remove { id, force } => {
            let id = TransactionId::from(id);

            if !force {
                match service.find(&id) {
                    Some(txn) => {
                        println!("About to delete:");
                        print!("{}", format_transaction_details(txn, &unit));
                        println!();
                        println!("To proceed, run again with --force flag:");
                        println!("  ledger remove {} --force", id);
                    }
                    None => println!("Transaction not found: {}", id),
                }
                return Ok(());
            }

            let removed = service.remove_transaction(&id)?;
            println!("Deleted {} transaction(s) with ID {}", removed, id);
        }

        TransactionCommands::Reset { force } => {
            let count = service.transactions().len();

            if !force {
                println!("WARNING: This will delete ALL {} transaction(s)!", count);
                println!("To proceed, run again with --force flag:");
                println!("  ledger reset --force");
                return Ok(());
            }

            let cleared = service.reset_all()?;
            println!("Cleared {} transaction(s).", cleared);
        }
    }

    Ok(())
}
