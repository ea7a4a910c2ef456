use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use household_ledger::cli::{
    handle_csv_command, handle_report_command, handle_transaction_command, CsvCommands,
    ReportCommands, TransactionCommands,
};
use household_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use household_ledger::services::LedgerService;
use household_ledger::storage::{FileStore, Storage};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Household ledger: record income and expenses, summarize by month",
    long_about = "A small household ledger. Record income and expense entries, \
                  review monthly totals and per-category spending, and move \
                  data in and out as CSV."
)]
struct Cli {
    /// Directory holding settings, data and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Csv(CsvCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    household_ledger::init_tracing();

    let cli = Cli::parse();

    let paths = LedgerPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing ledger at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Category presets: {}", settings.categories.join(", "));
            println!();
            println!("Run 'ledger add <amount>' to record your first expense.");
        }
        Some(Commands::Config) => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency unit:    {}", settings.currency_unit);
            println!("  Default category: {}", settings.default_category);
            println!("  Audit enabled:    {}", settings.audit_enabled);
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut open_service(&paths, settings)?, cmd)?;
        }
        Some(Commands::Csv(cmd)) => {
            handle_csv_command(&mut open_service(&paths, settings)?, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&mut open_service(&paths, settings)?, cmd)?;
        }
        None => {
            println!("Household ledger");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}

fn open_service(paths: &LedgerPaths, settings: Settings) -> Result<LedgerService<FileStore>> {
    let storage = Storage::open(paths, &settings)?;
    Ok(LedgerService::new(storage, settings))
}
