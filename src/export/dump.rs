//! Full ledger dump
//!
//! Writes three `;`-separated, newline-terminated files into a directory:
//!
//! - `accounts.dump`: `id;phone;balance`
//! - `payments.dump`: `id;accountId;amount;category;status`
//! - `favorites.dump`: `id;accountId;name;amount;category`
//!
//! Reading a dump back rebuilds a whole ledger; missing files count as empty.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use crate::error::{WalletError, WalletResult};
use crate::models::{AccountId, Favorite, FavoriteId, Payment, PaymentId, PaymentStatus};
use crate::storage::{read_text_or_empty, write_atomic, Ledger, SharedLedger};

use super::{check_field, check_phone, expect_fields, parse_account, parse_amount, parse_int};

pub const ACCOUNTS_DUMP: &str = "accounts.dump";
pub const PAYMENTS_DUMP: &str = "payments.dump";
pub const FAVORITES_DUMP: &str = "favorites.dump";

/// Write the ledger into `dir`, creating it if needed
///
/// Every text field is checked before the first file is touched.
pub fn write_dump<P: AsRef<Path>>(dir: P, ledger: &Ledger) -> WalletResult<()> {
    let dir = dir.as_ref();

    let accounts: Vec<[String; 3]> = ledger
        .accounts
        .get_all()
        .iter()
        .enumerate()
        .map(|(idx, a)| -> WalletResult<[String; 3]> {
            check_phone(idx + 1, a.phone.as_str())?;
            Ok([a.id.to_string(), a.phone.to_string(), a.balance.to_string()])
        })
        .collect::<WalletResult<_>>()?;

    let payments: Vec<[String; 5]> = ledger
        .payments
        .get_all()
        .iter()
        .enumerate()
        .map(|(idx, p)| -> WalletResult<[String; 5]> {
            check_field(idx + 1, "category", &p.category)?;
            Ok([
                p.id.to_string(),
                p.account_id.to_string(),
                p.amount.to_string(),
                p.category.clone(),
                p.status.to_string(),
            ])
        })
        .collect::<WalletResult<_>>()?;

    let favorites: Vec<[String; 5]> = ledger
        .favorites
        .get_all()
        .iter()
        .enumerate()
        .map(|(idx, f)| -> WalletResult<[String; 5]> {
            check_field(idx + 1, "name", &f.name)?;
            check_field(idx + 1, "category", &f.category)?;
            Ok([
                f.id.to_string(),
                f.account_id.to_string(),
                f.name.clone(),
                f.amount.to_string(),
                f.category.clone(),
            ])
        })
        .collect::<WalletResult<_>>()?;

    std::fs::create_dir_all(dir).map_err(|e| {
        WalletError::Io(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    write_records(dir.join(ACCOUNTS_DUMP), &accounts)?;
    write_records(dir.join(PAYMENTS_DUMP), &payments)?;
    write_records(dir.join(FAVORITES_DUMP), &favorites)?;

    info!(
        dir = %dir.display(),
        accounts = accounts.len(),
        payments = payments.len(),
        favorites = favorites.len(),
        "dump written"
    );
    Ok(())
}

/// Write a dump of a shared ledger from a snapshot taken under the lock
pub fn write_shared_dump<P: AsRef<Path>>(dir: P, shared: &SharedLedger) -> WalletResult<()> {
    let snapshot = shared.snapshot()?;
    write_dump(dir, &snapshot)
}

fn write_records<P, R>(path: P, records: &[R]) -> WalletResult<()>
where
    P: AsRef<Path>,
    R: AsRef<[String]>,
{
    write_atomic(path, |out: &mut BufWriter<File>| {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Never)
            .has_headers(false)
            .from_writer(out);

        for record in records {
            writer.write_record(record.as_ref())?;
        }
        writer.flush()?;
        Ok(())
    })
}

/// Rebuild a ledger from the dump files in `dir`
pub fn read_dump<P: AsRef<Path>>(dir: P) -> WalletResult<Ledger> {
    let dir = dir.as_ref();

    let accounts = read_records(dir.join(ACCOUNTS_DUMP), parse_account)?;
    let payments = read_records(dir.join(PAYMENTS_DUMP), parse_payment)?;
    let favorites = read_records(dir.join(FAVORITES_DUMP), parse_favorite)?;

    let ledger = Ledger::restore(accounts, payments, favorites)?;

    info!(
        dir = %dir.display(),
        accounts = ledger.accounts.count(),
        payments = ledger.payments.count(),
        favorites = ledger.favorites.count(),
        "dump loaded"
    );
    Ok(ledger)
}

fn read_records<P, T, F>(path: P, parse: F) -> WalletResult<Vec<T>>
where
    P: AsRef<Path>,
    F: Fn(usize, &[&str]) -> WalletResult<T>,
{
    let text = read_text_or_empty(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut parsed = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let fields: Vec<&str> = record.iter().collect();
        parsed.push(parse(idx + 1, &fields)?);
    }
    Ok(parsed)
}

fn parse_payment(record: usize, fields: &[&str]) -> WalletResult<Payment> {
    expect_fields(record, fields, 5)?;

    let id = PaymentId::parse(fields[0]).map_err(|_| {
        WalletError::malformed(record, format!("invalid payment id {:?}", fields[0]))
    })?;
    let account_id = AccountId::new(parse_int(record, "account id", fields[1])?);
    let amount = parse_amount(record, fields[2])?;
    let status: PaymentStatus = fields[4]
        .parse()
        .map_err(|reason: String| WalletError::malformed(record, reason))?;

    Ok(Payment {
        id,
        account_id,
        amount,
        category: fields[3].to_string(),
        status,
    })
}

fn parse_favorite(record: usize, fields: &[&str]) -> WalletResult<Favorite> {
    expect_fields(record, fields, 5)?;

    let id = FavoriteId::parse(fields[0]).map_err(|_| {
        WalletError::malformed(record, format!("invalid favorite id {:?}", fields[0]))
    })?;
    let account_id = AccountId::new(parse_int(record, "account id", fields[1])?);
    let amount = parse_amount(record, fields[3])?;

    Ok(Favorite {
        id,
        account_id,
        name: fields[2].to_string(),
        amount,
        category: fields[4].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::{AccountService, FavoriteService, PaymentService};
    use std::fs;
    use tempfile::TempDir;

    fn sample_ledger() -> (Ledger, Payment, Favorite) {
        let mut ledger = Ledger::new();
        let account = AccountService::new(&mut ledger)
            .register("+992000000001")
            .unwrap();
        AccountService::new(&mut ledger)
            .register("+992000000002")
            .unwrap();

        let mut payments = PaymentService::new(&mut ledger);
        payments.deposit(account.id, Money::from_cents(1000)).unwrap();
        let payment = payments.pay(account.id, Money::from_cents(300), "auto").unwrap();
        payments.reject(payment.id).unwrap();
        let payment = payments.find(payment.id).unwrap();

        let favorite = FavoriteService::new(&mut ledger)
            .favorite_payment(payment.id, "car")
            .unwrap();

        (ledger, payment, favorite)
    }

    #[test]
    fn test_write_dump_files() {
        let temp_dir = TempDir::new().unwrap();
        let (ledger, payment, favorite) = sample_ledger();

        write_dump(temp_dir.path(), &ledger).unwrap();

        let accounts = fs::read_to_string(temp_dir.path().join(ACCOUNTS_DUMP)).unwrap();
        assert_eq!(accounts, "1;+992000000001;1000\n2;+992000000002;0\n");

        let payments = fs::read_to_string(temp_dir.path().join(PAYMENTS_DUMP)).unwrap();
        assert_eq!(payments, format!("{};1;300;auto;FAIL\n", payment.id));

        let favorites = fs::read_to_string(temp_dir.path().join(FAVORITES_DUMP)).unwrap();
        assert_eq!(favorites, format!("{};1;car;300;auto\n", favorite.id));
    }

    #[test]
    fn test_empty_ledger_writes_empty_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("state");

        write_dump(&dir, &Ledger::new()).unwrap();

        for name in [ACCOUNTS_DUMP, PAYMENTS_DUMP, FAVORITES_DUMP] {
            assert_eq!(fs::read_to_string(dir.join(name)).unwrap(), "");
        }
    }

    #[test]
    fn test_dump_and_restore() {
        let temp_dir = TempDir::new().unwrap();
        let (ledger, payment, favorite) = sample_ledger();

        write_dump(temp_dir.path(), &ledger).unwrap();
        let mut restored = read_dump(temp_dir.path()).unwrap();

        assert_eq!(restored.accounts.get_all(), ledger.accounts.get_all());
        assert_eq!(restored.payments.get(payment.id), Some(&payment));
        assert_eq!(restored.favorites.get(favorite.id), Some(&favorite));

        let next = AccountService::new(&mut restored).register("+3").unwrap();
        assert_eq!(next.id, AccountId::new(3));
    }

    #[test]
    fn test_read_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = read_dump(temp_dir.path().join("nothing")).unwrap();
        assert_eq!(ledger.accounts.count(), 0);
        assert_eq!(ledger.next_account_id(), AccountId::new(1));
    }

    #[test]
    fn test_write_refuses_reserved_characters() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new();
        let account = AccountService::new(&mut ledger).register("+1").unwrap();
        let mut payments = PaymentService::new(&mut ledger);
        payments.deposit(account.id, Money::from_cents(10)).unwrap();
        payments.pay(account.id, Money::from_cents(5), "food;drinks").unwrap();

        let result = write_dump(temp_dir.path(), &ledger);

        assert!(matches!(
            result,
            Err(WalletError::MalformedRecord { record: 1, .. })
        ));
        assert!(!temp_dir.path().join(ACCOUNTS_DUMP).exists());
    }

    #[test]
    fn test_read_rejects_bad_payment() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(ACCOUNTS_DUMP), "1;+1;0\n").unwrap();
        fs::write(
            temp_dir.path().join(PAYMENTS_DUMP),
            "550e8400-e29b-41d4-a716-446655440000;1;300;auto;DONE\n",
        )
        .unwrap();

        let result = read_dump(temp_dir.path());
        assert!(matches!(
            result,
            Err(WalletError::MalformedRecord { record: 1, .. })
        ));
    }

    #[test]
    fn test_read_rejects_dangling_favorite() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(ACCOUNTS_DUMP), "1;+1;0\n").unwrap();
        fs::write(
            temp_dir.path().join(FAVORITES_DUMP),
            "550e8400-e29b-41d4-a716-446655440000;2;car;300;auto\n",
        )
        .unwrap();

        assert!(read_dump(temp_dir.path()).unwrap_err().is_malformed());
    }

    #[test]
    fn test_write_shared_dump() {
        let temp_dir = TempDir::new().unwrap();
        let (ledger, _, _) = sample_ledger();
        let shared = SharedLedger::new(ledger);

        write_shared_dump(temp_dir.path(), &shared).unwrap();

        let restored = read_dump(temp_dir.path()).unwrap();
        assert_eq!(restored.accounts.count(), 2);
        assert_eq!(restored.payments.count(), 1);
        assert_eq!(restored.favorites.count(), 1);
    }
}
