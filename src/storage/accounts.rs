//! Account repository
//!
//! Keeps accounts in registration order with an id index and a phone index.

use std::collections::HashMap;

use crate::models::{Account, AccountId, Phone};

/// In-memory account storage
#[derive(Debug, Clone, Default)]
pub struct AccountRepository {
    accounts: Vec<Account>,
    by_id: HashMap<AccountId, usize>,
    by_phone: HashMap<Phone, AccountId>,
}

impl AccountRepository {
    /// Create an empty account repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.by_id.get(&id).map(|&idx| &self.accounts[idx])
    }

    pub(crate) fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        let idx = *self.by_id.get(&id)?;
        self.accounts.get_mut(idx)
    }

    /// Get the account registered with a phone
    pub fn get_by_phone(&self, phone: &Phone) -> Option<&Account> {
        self.by_phone.get(phone).and_then(|&id| self.get(id))
    }

    /// All accounts in registration order
    pub fn get_all(&self) -> &[Account] {
        &self.accounts
    }

    /// Check if an account exists
    pub fn exists(&self, id: AccountId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Check if a phone is already taken
    pub fn phone_exists(&self, phone: &Phone) -> bool {
        self.by_phone.contains_key(phone)
    }

    /// Append an account. Callers check id and phone uniqueness first.
    pub(crate) fn insert(&mut self, account: Account) {
        debug_assert!(!self.exists(account.id));
        debug_assert!(!self.phone_exists(&account.phone));

        self.by_id.insert(account.id, self.accounts.len());
        self.by_phone.insert(account.phone.clone(), account.id);
        self.accounts.push(account);
    }

    /// Count accounts
    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    /// Largest id currently stored
    pub fn max_id(&self) -> Option<AccountId> {
        self.accounts.iter().map(|a| a.id).max()
    }
}
