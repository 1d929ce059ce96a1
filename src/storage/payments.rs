//! Payment repository
//!
//! Payments are kept in creation order and never removed.

use std::collections::HashMap;

use crate::models::{AccountId, Payment, PaymentId};

/// In-memory payment storage
#[derive(Debug, Clone, Default)]
pub struct PaymentRepository {
    payments: Vec<Payment>,
    by_id: HashMap<PaymentId, usize>,
}

impl PaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a payment by ID
    pub fn get(&self, id: PaymentId) -> Option<&Payment> {
        self.by_id.get(&id).map(|&idx| &self.payments[idx])
    }

    pub(crate) fn get_mut(&mut self, id: PaymentId) -> Option<&mut Payment> {
        let idx = *self.by_id.get(&id)?;
        self.payments.get_mut(idx)
    }

    /// All payments in creation order
    pub fn get_all(&self) -> &[Payment] {
        &self.payments
    }

    /// Payments made from one account, in creation order
    pub fn get_by_account(&self, account_id: AccountId) -> Vec<Payment> {
        self.payments
            .iter()
            .filter(|p| p.account_id == account_id)
            .cloned()
            .collect()
    }

    pub fn exists(&self, id: PaymentId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub(crate) fn insert(&mut self, payment: Payment) {
        debug_assert!(!self.exists(payment.id));

        self.by_id.insert(payment.id, self.payments.len());
        self.payments.push(payment);
    }

    pub fn count(&self) -> usize {
        self.payments.len()
    }
}
