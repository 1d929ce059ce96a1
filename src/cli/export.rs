//! Export CLI commands
//!
//! Compact account export/import and full ledger dumps.

use crate::config::Settings;
use crate::error::WalletResult;
use crate::export::{export_to_file, import_from_file, write_dump};
use crate::storage::Ledger;

use super::Commands;

/// Handle an export command
pub fn handle_export_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: Commands,
) -> WalletResult<()> {
    match cmd {
        Commands::Export { file } => {
            export_to_file(ledger, &file, settings.record_style)?;
            println!(
                "Exported {} accounts to {}",
                ledger.accounts.count(),
                file.display()
            );
        }

        Commands::Import { file } => {
            let imported = import_from_file(ledger, &file)?;
            println!("Imported {} accounts from {}", imported, file.display());
        }

        Commands::Dump { dir } => {
            write_dump(&dir, ledger)?;
            println!("Dumped ledger to {}", dir.display());
        }

        _ => {}
    }

    Ok(())
}
