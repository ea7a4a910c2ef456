use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env_remove("LEDGER_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

const SAMPLE_CSV: &str = "id,type,amount,category,memo,date\n\
                          inc-1,income,1000,기타,\"월급\",2024-03-01\n\
                          exp-1,expense,300,식비,\"점심 \"\"국밥\"\"\",2024-03-02";

fn import_sample(dir: &Path) {
    let file = dir.join("sample.csv");
    fs::write(&file, SAMPLE_CSV).unwrap();
    ledger(dir).arg("import").arg(&file).assert().success();
}

#[test]
fn test_init_and_config() {
    let temp = TempDir::new().unwrap();

    ledger(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(temp.path().join("config.json").exists());

    ledger(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency unit:    원"));
}

#[test]
fn test_add_and_list() {
    let temp = TempDir::new().unwrap();

    ledger(temp.path())
        .args(["add", "12500", "-c", "식비", "-m", "점심", "-d", "2024-03-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-12,500원"));

    ledger(temp.path())
        .args(["list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("점심").and(predicate::str::contains("1 transaction(s)")));

    ledger(temp.path())
        .args(["list", "--month", "2024-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions for 2024-04."));
}

#[test]
fn test_add_rejects_invalid_amount() {
    let temp = TempDir::new().unwrap();

    ledger(temp.path())
        .args(["add", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_list_rejects_invalid_month() {
    let temp = TempDir::new().unwrap();

    ledger(temp.path())
        .args(["list", "--month", "2024-13"])
        .assert()
        .failure();
}

#[test]
fn test_import_and_summary() {
    let temp = TempDir::new().unwrap();
    import_sample(temp.path());

    ledger(temp.path())
        .args(["summary", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Income:   1,000원")
                .and(predicate::str::contains("Expense:  300원"))
                .and(predicate::str::contains("Balance:  700원"))
                .and(predicate::str::contains("300원 지출"))
                .and(predicate::str::contains("1,000원 (순수입)")),
        );
}

#[test]
fn test_import_header_only_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("empty.csv");
    fs::write(&file, "id,type,amount,category,memo,date\n").unwrap();

    ledger(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid CSV"));
}

#[test]
fn test_import_reports_defaults() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bad.csv");
    fs::write(&file, "h\nx,expense,abc,식비,\"\",2024-03-02").unwrap();

    ledger(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 transaction(s).").and(
            predicate::str::contains("1 field(s) in 1 row(s)"),
        ));
}

#[test]
fn test_export_round_trips_import() {
    let temp = TempDir::new().unwrap();
    import_sample(temp.path());

    ledger(temp.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains(SAMPLE_CSV));

    let out = temp.path().join("out.csv");
    ledger(temp.path())
        .arg("export")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 transaction(s)"));
    assert_eq!(fs::read_to_string(&out).unwrap(), SAMPLE_CSV);
}

#[test]
fn test_remove_requires_force() {
    let temp = TempDir::new().unwrap();
    import_sample(temp.path());

    ledger(temp.path())
        .args(["remove", "exp-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    ledger(temp.path())
        .args(["remove", "exp-1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 transaction(s)"));

    ledger(temp.path())
        .args(["remove", "exp-1", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found: exp-1"));
}

#[test]
fn test_reset_requires_force() {
    let temp = TempDir::new().unwrap();
    import_sample(temp.path());

    ledger(temp.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("ALL 2 transaction(s)"));

    ledger(temp.path())
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 transaction(s)."));

    ledger(temp.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout("id,type,amount,category,memo,date\n");
}

#[test]
fn test_history_and_categories() {
    let temp = TempDir::new().unwrap();

    ledger(temp.path()).args(["add", "5"]).assert().success();

    ledger(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Transaction"));

    ledger(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("기타 (default)"));
}

#[test]
fn test_import_tolerates_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("in.csv");

    let mut bytes = b"id,type,amount,category,memo,date\nr1,expense,300,".to_vec();
    bytes.extend_from_slice(&[0xB1, 0xFF]);
    bytes.extend_from_slice(b",\"\",2024-03-02\nr2,income,1000,\xEA\xB8\xB0\xED\x83\x80,\"\",2024-03-01");
    fs::write(&file, bytes).unwrap();

    ledger(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 transaction(s)."));

    ledger(temp.path())
        .args(["summary", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Income:   1,000원")
                .and(predicate::str::contains("Expense:  300원"))
                .and(predicate::str::contains("\u{FFFD}")),
        );
}
