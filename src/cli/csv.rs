//! CSV CLI commands
//!
//! Export the ledger to a CSV file and import one back.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{LedgerError, LedgerResult};
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

/// CSV commands
#[derive(Subcommand)]
pub enum CsvCommands {
    /// Export all transactions to CSV
    Export {
        /// Output path (defaults to ledger_<today>.csv in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the CSV to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Import transactions from a CSV file
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
}

/// Handle a CSV command
pub fn handle_csv_command<B: KeyValueStore>(
    service: &mut LedgerService<B>,
    cmd: CsvCommands,
) -> LedgerResult<()> {
    match cmd {
        CsvCommands::Export { output, stdout } => {
            let export = service.export_csv();

            if stdout {
                let mut handle = io::stdout().lock();
                export.write_to(&mut handle)?;
                writeln!(handle)?;
                return Ok(());
            }

            let path = output.unwrap_or_else(|| PathBuf::from(&export.file_name));
            let mut file = File::create(&path).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            export.write_to(&mut file)?;

            println!(
                "Exported {} transaction(s) to {}",
                service.transactions().len(),
                path.display()
            );
        }

        CsvCommands::Import { file } => {
            let bytes = fs::read(&file).map_err(|e| {
                LedgerError::Io(format!("Failed to read {}: {}", file.display(), e))
            })?;
            // Invalid UTF-8 becomes U+FFFD inside the affected field only.
            let contents = String::from_utf8_lossy(&bytes);

            let report = service.import_csv(&contents)?;
            println!("Imported {} transaction(s).", report.imported);
            if report.defaulted_fields > 0 {
                println!(
                    "{} field(s) in {} row(s) could not be read and were set to defaults.",
                    report.defaulted_fields, report.rows_with_defaults
                );
            }
        }
    }

    Ok(())
}
