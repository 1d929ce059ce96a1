use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn wallet(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wallet").unwrap();
    cmd.env("WALLET_DATA_DIR", base).env_remove("RUST_LOG");
    cmd
}

/// Id printed on the first line of a "Created payment: <id>" block
fn created_id(stdout: &[u8]) -> String {
    let text = String::from_utf8(stdout.to_vec()).unwrap();
    let first = text.lines().next().unwrap();
    first.rsplit(": ").next().unwrap().to_string()
}

#[test]
fn pay_reject_repeat_scenario() {
    let base = TempDir::new().unwrap();

    wallet(base.path())
        .args(["register", "+992000000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered account: 1"));

    wallet(base.path())
        .args(["deposit", "1", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 1000"));

    let pay = wallet(base.path())
        .args(["pay", "1", "300", "auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: INPROGRESS"));
    let payment_id = created_id(&pay.get_output().stdout);

    wallet(base.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 700"));

    wallet(base.path())
        .args(["reject", &payment_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: FAIL"));

    wallet(base.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 1000"));

    wallet(base.path())
        .args(["repeat", &payment_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount: 300"));

    wallet(base.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 700"));

    let payments = fs::read_to_string(base.path().join("data").join("payments.dump")).unwrap();
    assert_eq!(payments.lines().count(), 2);
    assert!(payments.starts_with(&format!("{};1;300;auto;FAIL", payment_id)));
}

#[test]
fn errors_exit_with_failure() {
    let base = TempDir::new().unwrap();

    wallet(base.path())
        .args(["pay", "7", "10", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: 7"));

    wallet(base.path())
        .args(["register", "+992000000001"])
        .assert()
        .success();

    wallet(base.path())
        .args(["deposit", "1", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than zero"));

    wallet(base.path())
        .args(["pay", "1", "10", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not enough balance"));

    wallet(base.path())
        .args(["register", "+992000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone already registered"));
}

#[test]
fn favorite_then_pay_from_it() {
    let base = TempDir::new().unwrap();

    wallet(base.path()).args(["register", "+1"]).assert().success();
    wallet(base.path()).args(["deposit", "1", "500"]).assert().success();
    let pay = wallet(base.path())
        .args(["pay", "1", "200", "phone"])
        .assert()
        .success();
    let payment_id = created_id(&pay.get_output().stdout);

    let fav = wallet(base.path())
        .args(["favorite", &payment_id, "mobile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: mobile"));
    let favorite_id = created_id(&fav.get_output().stdout);

    wallet(base.path())
        .args(["pay-favorite", &favorite_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: phone"));

    wallet(base.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 100"));
}

#[test]
fn export_and_import_accounts() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let export_file = source.path().join("accounts.txt");

    wallet(source.path()).args(["register", "+992000000001"]).assert().success();
    wallet(source.path()).args(["register", "+992000000002"]).assert().success();
    wallet(source.path()).args(["deposit", "1", "700"]).assert().success();

    wallet(source.path())
        .arg("export")
        .arg(&export_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 accounts"));

    assert_eq!(
        fs::read_to_string(&export_file).unwrap(),
        "1;+992000000001;700|2;+992000000002;0|"
    );

    wallet(target.path())
        .arg("import")
        .arg(&export_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 accounts"));

    wallet(target.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("+992000000002"));

    wallet(target.path())
        .args(["register", "+992000000003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered account: 3"));

    // Same ids again collide and leave the ledger untouched
    wallet(target.path())
        .arg("import")
        .arg(&export_file)
        .assert()
        .failure();
}

#[test]
fn dump_writes_three_files() {
    let base = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    wallet(base.path()).args(["register", "+1"]).assert().success();

    wallet(base.path())
        .arg("dump")
        .arg(out.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out.path().join("accounts.dump")).unwrap(),
        "1;+1;0\n"
    );
    assert_eq!(
        fs::read_to_string(out.path().join("payments.dump")).unwrap(),
        ""
    );
    assert!(out.path().join("favorites.dump").exists());
}

#[test]
fn config_shows_paths() {
    let base = TempDir::new().unwrap();

    wallet(base.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record style: Terminated"));

    let written = fs::read_to_string(base.path().join("config.json")).unwrap();
    assert!(written.contains("\"record_style\": \"terminated\""));
}

#[test]
fn config_keeps_existing_settings() {
    let base = TempDir::new().unwrap();
    fs::write(
        base.path().join("config.json"),
        r#"{"record_style": "delimited"}"#,
    )
    .unwrap();

    wallet(base.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record style: Delimited"));

    assert_eq!(
        fs::read_to_string(base.path().join("config.json")).unwrap(),
        r#"{"record_style": "delimited"}"#
    );
}

#[test]
fn unwritable_text_is_refused_before_saving() {
    let base = TempDir::new().unwrap();

    wallet(base.path())
        .args(["register", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phone"));

    wallet(base.path()).args(["register", "+1"]).assert().success();
    wallet(base.path()).args(["deposit", "1", "100"]).assert().success();

    wallet(base.path())
        .args(["pay", "1", "5", "a;b"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created payment").not())
        .stderr(predicate::str::contains("Invalid category"));

    // State still loads and nothing was debited
    wallet(base.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 100"))
        .stdout(predicate::str::contains("No payments"));
}

#[test]
fn deposit_overflow_is_refused() {
    let base = TempDir::new().unwrap();

    wallet(base.path()).args(["register", "+1"]).assert().success();
    wallet(base.path())
        .args(["deposit", "1", "9223372036854775807"])
        .assert()
        .success();

    wallet(base.path())
        .args(["deposit", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Balance overflow"));

    wallet(base.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 9223372036854775807"));
}
