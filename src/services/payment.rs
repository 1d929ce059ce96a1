//! Payment service
//!
//! Balance mutations: deposits, payments, rejections and repeats. Every
//! operation checks all of its preconditions before it touches any state.

use tracing::{debug, info};

use crate::error::{WalletError, WalletResult};
use crate::models::{AccountId, Money, Payment, PaymentId};
use crate::storage::Ledger;

use super::ensure_text;

/// Service for balance-changing operations
pub struct PaymentService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> PaymentService<'a> {
    /// Create a new payment service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Credit an account. Deposits are not recorded as payments.
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> WalletResult<()> {
        ensure_positive(amount)?;

        let account = self
            .ledger
            .accounts
            .get_mut(account_id)
            .ok_or(WalletError::AccountNotFound {
                id: account_id.get(),
            })?;

        account.balance = credit(account.balance, amount)?;

        info!(%account_id, %amount, balance = %account.balance, "deposit");
        Ok(())
    }

    /// Debit an account and record an in-progress payment
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: impl Into<String>,
    ) -> WalletResult<Payment> {
        ensure_positive(amount)?;
        let category = category.into();
        ensure_text("category", &category, false)?;

        let account = self
            .ledger
            .accounts
            .get_mut(account_id)
            .ok_or(WalletError::AccountNotFound {
                id: account_id.get(),
            })?;

        if !account.can_cover(amount) {
            return Err(WalletError::NotEnoughBalance {
                needed: amount.cents(),
                available: account.balance.cents(),
            });
        }

        account.balance -= amount;
        let payment = Payment::new(account_id, amount, category);
        self.ledger.payments.insert(payment.clone());

        info!(
            payment_id = %payment.id,
            %account_id,
            %amount,
            category = %payment.category,
            "payment created"
        );
        Ok(payment)
    }

    /// Get a payment by ID
    pub fn find(&self, payment_id: PaymentId) -> WalletResult<Payment> {
        debug!(%payment_id, "payment lookup");
        self.ledger
            .payments
            .get(payment_id)
            .cloned()
            .ok_or_else(|| WalletError::PaymentNotFound {
                id: payment_id.to_string(),
            })
    }

    /// Mark a payment as failed and return its amount to the account
    ///
    /// A payment can be rejected once; a second attempt fails with
    /// [`WalletError::PaymentAlreadyRejected`] and leaves the balance alone.
    pub fn reject(&mut self, payment_id: PaymentId) -> WalletResult<()> {
        let payment = self.find(payment_id)?;

        if payment.status.is_failed() {
            return Err(WalletError::PaymentAlreadyRejected {
                id: payment_id.to_string(),
            });
        }

        let account = self
            .ledger
            .accounts
            .get_mut(payment.account_id)
            .ok_or(WalletError::AccountNotFound {
                id: payment.account_id.get(),
            })?;
        account.balance = credit(account.balance, payment.amount)?;

        if let Some(stored) = self.ledger.payments.get_mut(payment_id) {
            stored.fail();
        }

        info!(%payment_id, account_id = %payment.account_id, amount = %payment.amount, "payment rejected");
        Ok(())
    }

    /// Pay again with the same account, amount and category
    pub fn repeat(&mut self, payment_id: PaymentId) -> WalletResult<Payment> {
        let original = self.find(payment_id)?;
        let payment = self.pay(original.account_id, original.amount, original.category)?;

        debug!(original = %payment_id, repeated = %payment.id, "payment repeated");
        Ok(payment)
    }

    /// Payments made from one account, oldest first
    pub fn list_for_account(&self, account_id: AccountId) -> WalletResult<Vec<Payment>> {
        if !self.ledger.accounts.exists(account_id) {
            return Err(WalletError::AccountNotFound {
                id: account_id.get(),
            });
        }
        Ok(self.ledger.payments.get_by_account(account_id))
    }
}

/// New balance after crediting `amount`, refusing to overflow
fn credit(balance: Money, amount: Money) -> WalletResult<Money> {
    balance
        .checked_add(amount)
        .ok_or(WalletError::BalanceOverflow {
            balance: balance.cents(),
            amount: amount.cents(),
        })
}

fn ensure_positive(amount: Money) -> WalletResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(WalletError::AmountMustBePositive {
            amount: amount.cents(),
        })
    }
}
