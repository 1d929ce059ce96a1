//! Storage layer for the wallet ledger
//!
//! The [`Ledger`] owns every in-memory collection plus the account id
//! counter. Services borrow it mutably for the length of one operation.
//! [`SharedLedger`] puts the whole ledger behind one mutex for callers on
//! several threads.

pub mod accounts;
pub mod favorites;
pub mod file_io;
pub mod payments;
pub mod shared;

pub use accounts::AccountRepository;
pub use favorites::FavoriteRepository;
pub use file_io::{read_text, read_text_or_empty, write_atomic, write_text_atomic};
pub use payments::PaymentRepository;
pub use shared::SharedLedger;

use std::collections::HashSet;

use crate::error::{WalletError, WalletResult};
use crate::models::{text_problem, Account, AccountId, Favorite, Payment};

/// Main state container that provides access to all repositories
#[derive(Debug, Clone)]
pub struct Ledger {
    pub accounts: AccountRepository,
    pub payments: PaymentRepository,
    pub favorites: FavoriteRepository,
    next_account_id: AccountId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger; the first registered account gets id 1
    pub fn new() -> Self {
        Self {
            accounts: AccountRepository::new(),
            payments: PaymentRepository::new(),
            favorites: FavoriteRepository::new(),
            next_account_id: AccountId::new(1),
        }
    }

    /// The id the next registration will receive
    pub fn next_account_id(&self) -> AccountId {
        self.next_account_id
    }

    /// Hand out the next account id
    ///
    /// The counter never wraps; once the successor would overflow, allocation
    /// fails and the counter stays put.
    pub(crate) fn allocate_account_id(&mut self) -> WalletResult<AccountId> {
        let id = self.next_account_id;
        self.next_account_id = id.next().ok_or(WalletError::AccountIdsExhausted)?;
        Ok(id)
    }

    /// Make sure future registrations never hand out `id` or anything below it
    ///
    /// Callers reject ids without a successor before reserving them.
    pub(crate) fn reserve_account_ids_through(&mut self, id: AccountId) {
        if id >= self.next_account_id {
            if let Some(next) = id.next() {
                self.next_account_id = next;
            }
        }
    }

    /// Rebuild a ledger from previously dumped collections
    ///
    /// Fails without building anything if ids repeat, phones repeat, a record
    /// could not be written back out, or a payment/favorite points at an
    /// account that is not in `accounts`.
    pub fn restore(
        accounts: Vec<Account>,
        payments: Vec<Payment>,
        favorites: Vec<Favorite>,
    ) -> WalletResult<Self> {
        let mut ledger = Self::new();

        let mut ids = HashSet::new();
        {
            let mut phones = HashSet::new();
            for (idx, account) in accounts.iter().enumerate() {
                check_account_record(idx + 1, account)?;
                if !ids.insert(account.id) {
                    return Err(WalletError::DuplicateAccountId {
                        id: account.id.get(),
                    });
                }
                if !phones.insert(&account.phone) {
                    return Err(WalletError::PhoneAlreadyRegistered {
                        phone: account.phone.to_string(),
                    });
                }
            }
        }

        let mut payment_ids = HashSet::new();
        for (idx, payment) in payments.iter().enumerate() {
            if !ids.contains(&payment.account_id) {
                return Err(WalletError::malformed(
                    idx + 1,
                    format!("payment references unknown account {}", payment.account_id),
                ));
            }
            if let Some(reason) = text_problem(&payment.category, false) {
                return Err(WalletError::malformed(idx + 1, format!("category {}", reason)));
            }
            if !payment_ids.insert(payment.id) {
                return Err(WalletError::malformed(
                    idx + 1,
                    format!("duplicate payment id {}", payment.id),
                ));
            }
        }

        let mut favorite_ids = HashSet::new();
        for (idx, favorite) in favorites.iter().enumerate() {
            if !ids.contains(&favorite.account_id) {
                return Err(WalletError::malformed(
                    idx + 1,
                    format!("favorite references unknown account {}", favorite.account_id),
                ));
            }
            for (label, value) in [("name", &favorite.name), ("category", &favorite.category)] {
                if let Some(reason) = text_problem(value, false) {
                    return Err(WalletError::malformed(idx + 1, format!("{} {}", label, reason)));
                }
            }
            if !favorite_ids.insert(favorite.id) {
                return Err(WalletError::malformed(
                    idx + 1,
                    format!("duplicate favorite id {}", favorite.id),
                ));
            }
        }

        for account in accounts {
            ledger.reserve_account_ids_through(account.id);
            ledger.accounts.insert(account);
        }
        for payment in payments {
            ledger.payments.insert(payment);
        }
        for favorite in favorites {
            ledger.favorites.insert(favorite);
        }

        Ok(ledger)
    }
}

/// Reject an account that could not be stored and later encoded again
///
/// The id must be positive with a successor so the counter can move past
/// it, and the phone must survive a round-trip through the flat files.
pub(crate) fn check_account_record(record: usize, account: &Account) -> WalletResult<()> {
    if account.id.get() <= 0 || account.id.next().is_none() {
        return Err(WalletError::malformed(
            record,
            format!("account id {} is out of range", account.id),
        ));
    }
    if let Some(reason) = text_problem(account.phone.as_str(), true) {
        return Err(WalletError::malformed(record, format!("phone {}", reason)));
    }
    if account.balance.is_negative() {
        return Err(WalletError::malformed(
            record,
            format!("balance must not be negative, got {}", account.balance),
        ));
    }
    Ok(())
}
