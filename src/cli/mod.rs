//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod export;
pub mod favorite;
pub mod payment;

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::WalletResult;
use crate::models::{AccountId, FavoriteId, PaymentId};
use crate::storage::Ledger;

pub use account::handle_account_command;
pub use export::handle_export_command;
pub use favorite::handle_favorite_command;
pub use payment::handle_payment_command;

/// Wallet subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new account for a phone number
    Register {
        /// Phone number
        phone: String,
    },
    /// Credit an account
    Deposit {
        /// Account ID
        account: AccountId,
        /// Amount in minor units
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Pay from an account
    Pay {
        /// Account ID
        account: AccountId,
        /// Amount in minor units
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Payment category
        category: String,
    },
    /// Reject a payment and refund its amount
    Reject {
        /// Payment ID
        payment: PaymentId,
    },
    /// Pay again with the same account, amount and category
    Repeat {
        /// Payment ID
        payment: PaymentId,
    },
    /// Save a payment as a named favorite
    Favorite {
        /// Payment ID
        payment: PaymentId,
        /// Favorite name
        name: String,
    },
    /// Pay using a saved favorite
    PayFavorite {
        /// Favorite ID
        favorite: FavoriteId,
    },
    /// Show an account and its payments
    Show {
        /// Account ID
        account: AccountId,
    },
    /// List all accounts
    List,
    /// Export accounts to a compact file
    Export {
        /// Output file
        file: PathBuf,
    },
    /// Import accounts from a compact file
    Import {
        /// Input file
        file: PathBuf,
    },
    /// Write a full dump of the ledger into a directory
    Dump {
        /// Output directory
        dir: PathBuf,
    },
    /// Show current configuration and paths
    Config,
}

impl Commands {
    /// Whether the command changes the ledger and needs saving afterwards
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Commands::Register { .. }
                | Commands::Deposit { .. }
                | Commands::Pay { .. }
                | Commands::Reject { .. }
                | Commands::Repeat { .. }
                | Commands::Favorite { .. }
                | Commands::PayFavorite { .. }
                | Commands::Import { .. }
        )
    }
}

/// Route a ledger command to its handler
///
/// `Config` has no ledger work and is handled by the binary.
pub fn handle_command(ledger: &mut Ledger, settings: &Settings, cmd: Commands) -> WalletResult<()> {
    match cmd {
        cmd @ (Commands::Register { .. }
        | Commands::Show { .. }
        | Commands::List) => handle_account_command(ledger, cmd),
        cmd @ (Commands::Deposit { .. }
        | Commands::Pay { .. }
        | Commands::Reject { .. }
        | Commands::Repeat { .. }) => handle_payment_command(ledger, cmd),
        cmd @ (Commands::Favorite { .. } | Commands::PayFavorite { .. }) => {
            handle_favorite_command(ledger, cmd)
        }
        cmd @ (Commands::Export { .. } | Commands::Import { .. } | Commands::Dump { .. }) => {
            handle_export_command(ledger, settings, cmd)
        }
        Commands::Config => Ok(()),
    }
}
