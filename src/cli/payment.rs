//! Payment CLI commands

use crate::error::WalletResult;
use crate::models::{Money, Payment};
use crate::services::{AccountService, PaymentService};
use crate::storage::Ledger;

use super::Commands;

/// Handle a payment command
pub fn handle_payment_command(ledger: &mut Ledger, cmd: Commands) -> WalletResult<()> {
    match cmd {
        Commands::Deposit { account, amount } => {
            PaymentService::new(ledger).deposit(account, Money::from_cents(amount))?;
            let updated = AccountService::new(ledger).find(account)?;
            println!("Deposited {} to account {}", amount, account);
            println!("  Balance: {}", updated.balance);
        }

        Commands::Pay {
            account,
            amount,
            category,
        } => {
            let payment =
                PaymentService::new(ledger).pay(account, Money::from_cents(amount), category)?;
            print_payment("Created payment", &payment);
        }

        Commands::Reject { payment } => {
            let mut service = PaymentService::new(ledger);
            service.reject(payment)?;
            let rejected = service.find(payment)?;
            print_payment("Rejected payment", &rejected);
        }

        Commands::Repeat { payment } => {
            let repeated = PaymentService::new(ledger).repeat(payment)?;
            print_payment("Created payment", &repeated);
        }

        _ => {}
    }

    Ok(())
}

pub(crate) fn print_payment(title: &str, payment: &Payment) {
    println!("{}: {}", title, payment.id);
    println!("  Account: {}", payment.account_id);
    println!("  Amount: {}", payment.amount);
    println!("  Category: {}", payment.category);
    println!("  Status: {}", payment.status);
}
