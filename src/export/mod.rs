//! Flat-file formats for the wallet ledger
//!
//! - compact: every account in one `;`/`|` text blob (export and import)
//! - dump: three newline-delimited files for accounts, payments and favorites
//!
//! Neither format escapes anything. Text fields that contain a delimiter are
//! refused at encode time instead of producing a file that cannot be read back.

pub mod compact;
pub mod dump;

pub use compact::{
    decode_accounts, encode_accounts, export_shared_to_file, export_to_file, import_from_file,
    import_shared_from_file, read_accounts, write_accounts, RecordStyle,
};
pub use dump::{
    read_dump, write_dump, write_shared_dump, ACCOUNTS_DUMP, FAVORITES_DUMP, PAYMENTS_DUMP,
};

use crate::error::{WalletError, WalletResult};
use crate::models::{text_problem, Account, AccountId, Money};
use crate::storage::check_account_record;

pub use crate::models::text::{FIELD_SEPARATOR, RECORD_SEPARATOR};

/// Refuse a text field that would break the record structure
pub(crate) fn check_field(record: usize, label: &str, value: &str) -> WalletResult<()> {
    refuse(record, label, text_problem(value, false))
}

/// Refuse a phone the decoder would not accept back
pub(crate) fn check_phone(record: usize, value: &str) -> WalletResult<()> {
    refuse(record, "phone", text_problem(value, true))
}

fn refuse(record: usize, label: &str, problem: Option<String>) -> WalletResult<()> {
    match problem {
        Some(reason) => Err(WalletError::malformed(record, format!("{} {}", label, reason))),
        None => Ok(()),
    }
}

/// Parse `id;phone;balance` fields into an account
///
/// Accepts exactly what the encoders write: a positive id with a successor,
/// a non-empty phone and a non-negative balance.
pub(crate) fn parse_account(record: usize, fields: &[&str]) -> WalletResult<Account> {
    expect_fields(record, fields, 3)?;

    let id = parse_int(record, "account id", fields[0])?;
    let balance = parse_int(record, "balance", fields[2])?;

    let account = Account::with_balance(AccountId::new(id), fields[1], Money::from_cents(balance));
    check_account_record(record, &account)?;
    Ok(account)
}

pub(crate) fn expect_fields(record: usize, fields: &[&str], expected: usize) -> WalletResult<()> {
    if fields.len() != expected {
        return Err(WalletError::malformed(
            record,
            format!("expected {} fields, found {}", expected, fields.len()),
        ));
    }
    Ok(())
}

pub(crate) fn parse_int(record: usize, label: &str, value: &str) -> WalletResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| WalletError::malformed(record, format!("invalid {} {:?}", label, value)))
}

/// Parse a strictly positive amount
pub(crate) fn parse_amount(record: usize, value: &str) -> WalletResult<Money> {
    let amount = parse_int(record, "amount", value)?;
    if amount <= 0 {
        return Err(WalletError::malformed(
            record,
            format!("amount must be positive, got {}", amount),
        ));
    }
    Ok(Money::from_cents(amount))
}
