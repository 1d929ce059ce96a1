//! Service layer for the wallet ledger
//!
//! The service layer provides the ledger's business rules on top of the
//! storage layer: validation, balance changes and cross-entity operations.

pub mod account;
pub mod favorite;
pub mod payment;

pub use account::AccountService;
pub use favorite::FavoriteService;
pub use payment::PaymentService;

use crate::error::{WalletError, WalletResult};
use crate::models::text_problem;

/// Refuse text the ledger could not write back out
pub(crate) fn ensure_text(field: &str, value: &str, required: bool) -> WalletResult<()> {
    match text_problem(value, required) {
        Some(reason) => Err(WalletError::invalid_field(field, reason)),
        None => Ok(()),
    }
}
