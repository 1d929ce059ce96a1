//! Payment model
//!
//! A payment records a debit against an account under a free-form category.
//! Its status moves one way, from in-progress to failed, when it is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{AccountId, PaymentId};
use super::money::Money;

/// Status of a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    /// Payment has been debited and stands
    #[default]
    #[serde(rename = "INPROGRESS")]
    InProgress,
    /// Payment was rejected and its amount returned
    #[serde(rename = "FAIL")]
    Failed,
}

impl PaymentStatus {
    /// Wire name used by the dump files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "INPROGRESS",
            Self::Failed => "FAIL",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INPROGRESS" => Ok(Self::InProgress),
            "FAIL" => Ok(Self::Failed),
            other => Err(format!("unknown payment status '{}'", other)),
        }
    }
}

/// A recorded payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub account_id: AccountId,
    pub amount: Money,
    pub category: String,
    #[serde(default)]
    pub status: PaymentStatus,
}

impl Payment {
    /// Create a new in-progress payment with a fresh id
    pub fn new(account_id: AccountId, amount: Money, category: impl Into<String>) -> Self {
        Self {
            id: PaymentId::new(),
            account_id,
            amount,
            category: category.into(),
            status: PaymentStatus::InProgress,
        }
    }

    /// Mark this payment as failed
    pub fn fail(&mut self) {
        self.status = PaymentStatus::Failed;
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} account #{} {} [{}] {}",
            self.id, self.account_id, self.amount, self.category, self.status
        )
    }
}
