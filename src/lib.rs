//! wallet-cli - phone-registered accounts, payments and favorites
//!
//! This library provides the core of the `wallet` binary: an in-memory
//! ledger of accounts keyed by phone number, balance-changing payments,
//! reusable favorite payments, and a plain-text persistence codec.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, payments, favorites, money)
//! - `storage`: In-memory ledger, repositories and shared handle
//! - `services`: Business logic layer
//! - `export`: Compact account export and full ledger dumps
//! - `logging`: Tracing subscriber setup
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use wallet_cli::models::Money;
//! use wallet_cli::services::{AccountService, PaymentService};
//! use wallet_cli::storage::Ledger;
//!
//! let mut ledger = Ledger::new();
//! let account = AccountService::new(&mut ledger).register("+992000000001")?;
//!
//! let mut payments = PaymentService::new(&mut ledger);
//! payments.deposit(account.id, Money::from_cents(1000))?;
//! let payment = payments.pay(account.id, Money::from_cents(300), "auto")?;
//! payments.reject(payment.id)?;
//!
//! assert_eq!(ledger.accounts.get(account.id).unwrap().balance.cents(), 1000);
//! # Ok::<(), wallet_cli::WalletError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{WalletError, WalletResult};
