//! Account service
//!
//! Registration with phone uniqueness, lookups, and adoption of accounts
//! decoded from an export file.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::{WalletError, WalletResult};
use crate::models::{Account, AccountId, Phone};
use crate::storage::{check_account_record, Ledger};

use super::ensure_text;

/// Service for account management
pub struct AccountService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Register a new account with a zero balance
    pub fn register(&mut self, phone: impl Into<Phone>) -> WalletResult<Account> {
        let phone = phone.into();
        ensure_text("phone", phone.as_str(), true)?;

        if self.ledger.accounts.phone_exists(&phone) {
            debug!(%phone, "phone already registered");
            return Err(WalletError::PhoneAlreadyRegistered {
                phone: phone.to_string(),
            });
        }

        let account = Account::new(self.ledger.allocate_account_id()?, phone);
        self.ledger.accounts.insert(account.clone());

        info!(account_id = %account.id, phone = %account.phone, "account registered");
        Ok(account)
    }

    /// Get an account by ID
    pub fn find(&self, id: AccountId) -> WalletResult<Account> {
        self.ledger
            .accounts
            .get(id)
            .cloned()
            .ok_or(WalletError::AccountNotFound { id: id.get() })
    }

    /// All accounts in registration order
    pub fn list(&self) -> Vec<Account> {
        self.ledger.accounts.get_all().to_vec()
    }

    pub fn count(&self) -> usize {
        self.ledger.accounts.count()
    }

    /// Append accounts decoded from an export file
    ///
    /// All records are checked against the registry and each other before
    /// any is added. Ids must leave room for a successor and phones must be
    /// writable. Afterwards new registrations continue above the largest
    /// imported id.
    pub fn import(&mut self, accounts: Vec<Account>) -> WalletResult<usize> {
        {
            let mut ids = HashSet::new();
            let mut phones = HashSet::new();

            for (idx, account) in accounts.iter().enumerate() {
                check_account_record(idx + 1, account)?;
                if self.ledger.accounts.exists(account.id) || !ids.insert(account.id) {
                    warn!(account_id = %account.id, "import rejected: duplicate account id");
                    return Err(WalletError::DuplicateAccountId {
                        id: account.id.get(),
                    });
                }
                if self.ledger.accounts.phone_exists(&account.phone)
                    || !phones.insert(&account.phone)
                {
                    warn!(phone = %account.phone, "import rejected: duplicate phone");
                    return Err(WalletError::PhoneAlreadyRegistered {
                        phone: account.phone.to_string(),
                    });
                }
            }
        }

        let imported = accounts.len();
        for account in accounts {
            self.ledger.reserve_account_ids_through(account.id);
            self.ledger.accounts.insert(account);
        }

        info!(imported, "accounts imported");
        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);

        let first = service.register("+992000000001").unwrap();
        let second = service.register("+992000000002").unwrap();

        assert_eq!(first.id, AccountId::new(1));
        assert_eq!(second.id, AccountId::new(2));
        assert!(first.balance.is_zero());
    }

    #[test]
    fn test_register_duplicate_phone() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);

        service.register("+992000000001").unwrap();
        let result = service.register("+992000000001");

        assert!(matches!(
            result,
            Err(WalletError::PhoneAlreadyRegistered { .. })
        ));
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_failed_registration_does_not_consume_id() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);

        service.register("+1").unwrap();
        assert!(service.register("+1").is_err());
        assert_eq!(service.register("+2").unwrap().id, AccountId::new(2));
    }

    #[test]
    fn test_find() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);
        let account = service.register("+992000000001").unwrap();

        assert_eq!(service.find(account.id).unwrap(), account);
        assert!(matches!(
            service.find(AccountId::new(99)),
            Err(WalletError::AccountNotFound { id: 99 })
        ));
    }

    #[test]
    fn test_import_appends_and_advances_ids() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);
        service.register("+1").unwrap();

        let imported = service
            .import(vec![
                Account::with_balance(AccountId::new(7), "+7", Money::from_cents(70)),
                Account::with_balance(AccountId::new(3), "+3", Money::from_cents(30)),
            ])
            .unwrap();

        assert_eq!(imported, 2);
        let ids: Vec<i64> = service.list().iter().map(|a| a.id.get()).collect();
        assert_eq!(ids, vec![1, 7, 3]);
        assert_eq!(service.register("+8").unwrap().id, AccountId::new(8));
    }

    #[test]
    fn test_import_is_all_or_nothing() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);
        service.register("+1").unwrap();

        let result = service.import(vec![
            Account::new(AccountId::new(5), "+5"),
            Account::new(AccountId::new(1), "+other"),
        ]);

        assert!(matches!(result, Err(WalletError::DuplicateAccountId { id: 1 })));
        assert_eq!(service.count(), 1);
        assert_eq!(service.register("+2").unwrap().id, AccountId::new(2));
    }

    #[test]
    fn test_import_rejects_taken_phone() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);
        service.register("+1").unwrap();

        let result = service.import(vec![Account::new(AccountId::new(5), "+1")]);
        assert!(matches!(
            result,
            Err(WalletError::PhoneAlreadyRegistered { .. })
        ));
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_register_rejects_unwritable_phone() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);

        for bad in ["", "+1;2", "+1|2", "+1\n"] {
            assert!(matches!(
                service.register(bad),
                Err(WalletError::InvalidField { .. })
            ));
        }
        assert_eq!(service.count(), 0);
        assert_eq!(service.register("+1").unwrap().id, AccountId::new(1));
    }

    #[test]
    fn test_import_rejects_id_without_successor() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);

        let result = service.import(vec![
            Account::new(AccountId::new(2), "+2"),
            Account::new(AccountId::new(i64::MAX), "+max"),
        ]);

        assert!(matches!(result, Err(WalletError::MalformedRecord { record: 2, .. })));
        assert_eq!(service.count(), 0);
        assert_eq!(service.register("+1").unwrap().id, AccountId::new(1));
    }

    #[test]
    fn test_import_takes_largest_id_with_successor() {
        let mut ledger = Ledger::new();
        let mut service = AccountService::new(&mut ledger);

        service
            .import(vec![Account::new(AccountId::new(i64::MAX - 1), "+big")])
            .unwrap();

        assert!(matches!(
            service.register("+next"),
            Err(WalletError::AccountIdsExhausted)
        ));
        assert_eq!(service.count(), 1);
    }
}
