//! Report CLI commands
//!
//! Monthly summary, category presets and the audit history.

use clap::Subcommand;

use crate::display::format_summary;
use crate::error::LedgerResult;
use crate::models::MonthKey;
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

/// Report commands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show income, expense, balance and category totals for a month
    Summary {
        /// Month to summarize (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<MonthKey>,
    },
    /// List the category presets
    Categories,
    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a report command
pub fn handle_report_command<B: KeyValueStore>(
    service: &mut LedgerService<B>,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    match cmd {
        ReportCommands::Summary { month } => {
            if let Some(month) = month {
                service.set_query_month(month);
            }
            let summary = service.summary();
            print!("{}", format_summary(&summary, &service.settings().currency_unit));
        }

        ReportCommands::Categories => {
            let settings = service.settings();
            println!("Categories:");
            for category in &settings.categories {
                if *category == settings.default_category {
                    println!("  {} (default)", category);
                } else {
                    println!("  {}", category);
                }
            }
        }

        ReportCommands::History { limit } => {
            let Some(logger) = service.storage().audit() else {
                println!("Audit logging is disabled.");
                return Ok(());
            };

            let history = logger.history()?;
            if history.entries.is_empty() {
                println!("No history yet.");
            }
            for entry in history.recent(limit) {
                println!("{}", entry.format_human_readable());
            }
            if history.skipped > 0 {
                println!("({} unreadable line(s) skipped)", history.skipped);
            }
        }
    }

    Ok(())
}
