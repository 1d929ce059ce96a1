//! Favorite model
//!
//! A named snapshot of a payment's account, amount and category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, FavoriteId};
use super::money::Money;
use super::payment::Payment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub account_id: AccountId,
    pub name: String,
    pub amount: Money,
    pub category: String,
}

impl Favorite {
    /// Snapshot a payment; later changes to the payment are not reflected
    pub fn from_payment(payment: &Payment, name: impl Into<String>) -> Self {
        Self {
            id: FavoriteId::new(),
            account_id: payment.account_id,
            name: name.into(),
            amount: payment.amount,
            category: payment.category.clone(),
        }
    }
}

impl fmt::Display for Favorite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" account #{} {} [{}]",
            self.id, self.name, self.account_id, self.amount, self.category
        )
    }
}
