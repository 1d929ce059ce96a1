//! Core data models for the wallet ledger
//!
//! Accounts, payments and favorites, plus the id and money newtypes they use.

pub mod account;
pub mod favorite;
pub mod ids;
pub mod money;
pub mod payment;
pub mod text;

pub use account::{Account, Phone};
pub use favorite::Favorite;
pub use ids::{AccountId, FavoriteId, PaymentId};
pub use money::Money;
pub use payment::{Payment, PaymentStatus};
pub use text::text_problem;
