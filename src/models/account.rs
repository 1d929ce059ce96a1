//! Account model
//!
//! An account is identified by a ledger-assigned id and a unique phone number.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Phone number, compared as an exact case-sensitive string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phone {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Phone {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A wallet account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Sequential identifier
    pub id: AccountId,

    /// Unique phone number
    pub phone: Phone,

    /// Current balance in minor units, never negative
    pub balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(id: AccountId, phone: impl Into<Phone>) -> Self {
        Self {
            id,
            phone: phone.into(),
            balance: Money::zero(),
        }
    }

    /// Create an account with a known balance (import/restore)
    pub fn with_balance(id: AccountId, phone: impl Into<Phone>, balance: Money) -> Self {
        Self {
            id,
            phone: phone.into(),
            balance,
        }
    }

    /// Whether the balance covers a debit of `amount`
    pub fn can_cover(&self, amount: Money) -> bool {
        self.balance >= amount
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} (balance {})", self.id, self.phone, self.balance)
    }
}
