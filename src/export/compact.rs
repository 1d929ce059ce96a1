//! Compact account export
//!
//! Each account becomes `id;phone;balance`. With [`RecordStyle::Terminated`]
//! every record is followed by `|` (`1;+992000000001;700|2;+992000000002;0|`);
//! with [`RecordStyle::Delimited`] the `|` only sits between records. The
//! decoder reads both.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{WalletError, WalletResult};
use crate::models::Account;
use crate::services::AccountService;
use crate::storage::{read_text, write_text_atomic, Ledger, SharedLedger};

use super::{check_phone, parse_account, FIELD_SEPARATOR, RECORD_SEPARATOR};

/// How `|` is placed between compact records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordStyle {
    /// `|` after every record, including the last
    #[default]
    Terminated,
    /// `|` between records only
    Delimited,
}

/// Encode accounts in order
pub fn encode_accounts(accounts: &[Account], style: RecordStyle) -> WalletResult<String> {
    let mut out = String::new();

    for (idx, account) in accounts.iter().enumerate() {
        check_phone(idx + 1, account.phone.as_str())?;

        if style == RecordStyle::Delimited && idx > 0 {
            out.push(RECORD_SEPARATOR);
        }
        out.push_str(&account.id.to_string());
        out.push(FIELD_SEPARATOR);
        out.push_str(account.phone.as_str());
        out.push(FIELD_SEPARATOR);
        out.push_str(&account.balance.to_string());
        if style == RecordStyle::Terminated {
            out.push(RECORD_SEPARATOR);
        }
    }

    Ok(out)
}

/// Decode a compact export
///
/// The text is split on `|` and one trailing empty segment is dropped. Every
/// remaining segment must hold exactly `id;phone;balance`; the first bad
/// record fails the whole decode.
pub fn decode_accounts(text: &str) -> WalletResult<Vec<Account>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut segments: Vec<&str> = text.split(RECORD_SEPARATOR).collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }

    segments
        .into_iter()
        .enumerate()
        .map(|(idx, segment)| {
            if segment.is_empty() {
                return Err(WalletError::malformed(idx + 1, "empty record"));
            }
            let fields: Vec<&str> = segment.split(FIELD_SEPARATOR).collect();
            parse_account(idx + 1, &fields)
        })
        .collect()
}

/// Write accounts to a compact export file
pub fn write_accounts<P: AsRef<Path>>(
    path: P,
    accounts: &[Account],
    style: RecordStyle,
) -> WalletResult<()> {
    let path = path.as_ref();
    let text = encode_accounts(accounts, style)?;
    write_text_atomic(path, &text)?;

    info!(path = %path.display(), accounts = accounts.len(), "compact export written");
    Ok(())
}

/// Read and decode a compact export file
pub fn read_accounts<P: AsRef<Path>>(path: P) -> WalletResult<Vec<Account>> {
    let path = path.as_ref();
    let accounts = decode_accounts(&read_text(path)?)?;

    debug!(path = %path.display(), accounts = accounts.len(), "compact export decoded");
    Ok(accounts)
}

/// Export every account of a ledger
pub fn export_to_file<P: AsRef<Path>>(
    ledger: &Ledger,
    path: P,
    style: RecordStyle,
) -> WalletResult<()> {
    write_accounts(path, ledger.accounts.get_all(), style)
}

/// Append the accounts of a compact export to a ledger
///
/// Nothing is added unless the whole file decodes and every record fits.
pub fn import_from_file<P: AsRef<Path>>(ledger: &mut Ledger, path: P) -> WalletResult<usize> {
    let accounts = read_accounts(path)?;
    AccountService::new(ledger).import(accounts)
}

/// Export the accounts of a shared ledger
///
/// Accounts are copied under the lock; the file is written after it is
/// released.
pub fn export_shared_to_file<P: AsRef<Path>>(
    shared: &SharedLedger,
    path: P,
    style: RecordStyle,
) -> WalletResult<()> {
    let accounts = shared.with(|ledger| Ok(ledger.accounts.get_all().to_vec()))?;
    write_accounts(path, &accounts, style)
}

/// Decode a compact export, then append it to a shared ledger under the lock
pub fn import_shared_from_file<P: AsRef<Path>>(
    shared: &SharedLedger,
    path: P,
) -> WalletResult<usize> {
    let accounts = read_accounts(path)?;
    shared.with(|ledger| AccountService::new(ledger).import(accounts))
}
