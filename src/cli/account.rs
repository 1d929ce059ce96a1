//! Account CLI commands
//!
//! Registration and read-only account views.

use crate::error::WalletResult;
use crate::services::{AccountService, PaymentService};
use crate::storage::Ledger;

use super::Commands;

/// Handle an account command
pub fn handle_account_command(ledger: &mut Ledger, cmd: Commands) -> WalletResult<()> {
    match cmd {
        Commands::Register { phone } => {
            let account = AccountService::new(ledger).register(phone)?;
            println!("Registered account: {}", account.id);
            println!("  Phone: {}", account.phone);
            println!("  Balance: {}", account.balance);
        }

        Commands::Show { account } => {
            let found = AccountService::new(ledger).find(account)?;
            let payments = PaymentService::new(ledger).list_for_account(account)?;

            println!("Account: {}", found.id);
            println!("  Phone: {}", found.phone);
            println!("  Balance: {}", found.balance);
            if payments.is_empty() {
                println!("  No payments");
            } else {
                println!("  Payments:");
                for payment in payments {
                    println!("    {}", payment);
                }
            }
        }

        Commands::List => {
            let accounts = AccountService::new(ledger).list();
            if accounts.is_empty() {
                println!("No accounts registered.");
            }
            for account in accounts {
                println!("{}", account);
            }
        }

        _ => {}
    }

    Ok(())
}
