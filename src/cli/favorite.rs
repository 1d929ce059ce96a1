//! Favorite CLI commands

use crate::error::WalletResult;
use crate::services::FavoriteService;
use crate::storage::Ledger;

use super::payment::print_payment;
use super::Commands;

/// Handle a favorite command
pub fn handle_favorite_command(ledger: &mut Ledger, cmd: Commands) -> WalletResult<()> {
    let mut service = FavoriteService::new(ledger);

    match cmd {
        Commands::Favorite { payment, name } => {
            let favorite = service.favorite_payment(payment, name)?;
            println!("Saved favorite: {}", favorite.id);
            println!("  Name: {}", favorite.name);
            println!("  Account: {}", favorite.account_id);
            println!("  Amount: {}", favorite.amount);
            println!("  Category: {}", favorite.category);
        }

        Commands::PayFavorite { favorite } => {
            let payment = service.pay_from_favorite(favorite)?;
            print_payment("Created payment", &payment);
        }

        _ => {}
    }

    Ok(())
}
