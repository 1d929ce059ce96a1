//! Favorite service
//!
//! Turns a payment into a named template and pays from it on demand.

use tracing::info;

use crate::error::{WalletError, WalletResult};
use crate::models::{Favorite, FavoriteId, Payment, PaymentId};
use crate::storage::Ledger;

use super::ensure_text;
use super::payment::PaymentService;

/// Service for favorite templates
pub struct FavoriteService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> FavoriteService<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Save a payment's account, amount and category under a name
    pub fn favorite_payment(
        &mut self,
        payment_id: PaymentId,
        name: impl Into<String>,
    ) -> WalletResult<Favorite> {
        let name = name.into();
        ensure_text("name", &name, false)?;

        let payment = self
            .ledger
            .payments
            .get(payment_id)
            .ok_or_else(|| WalletError::PaymentNotFound {
                id: payment_id.to_string(),
            })?;

        let favorite = Favorite::from_payment(payment, name);
        self.ledger.favorites.insert(favorite.clone());

        info!(favorite_id = %favorite.id, %payment_id, name = %favorite.name, "favorite saved");
        Ok(favorite)
    }

    /// Get a favorite by ID
    pub fn find(&self, favorite_id: FavoriteId) -> WalletResult<Favorite> {
        self.ledger
            .favorites
            .get(favorite_id)
            .cloned()
            .ok_or_else(|| WalletError::FavoriteNotFound {
                id: favorite_id.to_string(),
            })
    }

    /// Make a new payment from a favorite; the favorite stays reusable
    pub fn pay_from_favorite(&mut self, favorite_id: FavoriteId) -> WalletResult<Payment> {
        let favorite = self.find(favorite_id)?;

        let payment = PaymentService::new(&mut *self.ledger).pay(
            favorite.account_id,
            favorite.amount,
            favorite.category,
        )?;

        info!(%favorite_id, payment_id = %payment.id, "paid from favorite");
        Ok(payment)
    }

    /// All favorites in creation order
    pub fn list(&self) -> Vec<Favorite> {
        self.ledger.favorites.get_all().to_vec()
    }
}
