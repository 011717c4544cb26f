use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", home.path())
        .env_remove("FINTRACK_LOG");
    cmd
}

#[test]
fn add_then_list() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["transaction", "add", "50.00", "Groceries", "-c", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));

    fintrack(&home)
        .args(["txn", "list", "--search", "grocer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("$50.00"));

    assert!(home.path().join("data").join("transactions.json").exists());
}

#[test]
fn invalid_amount_is_rejected() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["transaction", "add", "0", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than 0"));

    fintrack(&home)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn short_description_is_rejected() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["transaction", "add", "5", "ab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description is too short"));
}

#[test]
fn budget_against_spending() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["budget", "set", "food", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food budget: $200.00"));

    fintrack(&home)
        .args(["transaction", "add", "50", "Groceries", "--category", "food"])
        .assert()
        .success();

    fintrack(&home)
        .args(["report", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$150.00"));

    fintrack(&home)
        .args(["report", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0%"));
}

#[test]
fn delete_needs_confirmation() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["transaction", "add", "12.00", "Cinema tickets", "-c", "entertainment"])
        .assert()
        .success();

    let stored = std::fs::read_to_string(home.path().join("data").join("transactions.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&stored).unwrap();
    let id = records[0]["id"].as_str().unwrap().to_string();

    fintrack(&home)
        .args(["transaction", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --yes to confirm"));

    fintrack(&home)
        .args(["transaction", "delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    fintrack(&home)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn edit_unknown_id_fails() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["transaction", "edit", "txn-deadbeef", "--amount", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn corrupt_data_starts_empty_with_warning() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("transactions.json"), "{ not json").unwrap();

    fintrack(&home)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"))
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn history_records_changes() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["budget", "set", "housing", "1200"])
        .assert()
        .success();

    fintrack(&home)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Budget housing"));
}

#[test]
fn categories_lists_every_key() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("transportation"))
        .stdout(predicate::str::contains("healthcare"));
}

#[test]
fn config_writes_defaults_once_and_edits_apply() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));

    let config = home.path().join("config.json");
    let text = std::fs::read_to_string(&config).unwrap();
    std::fs::write(&config, text.replace("\"$\"", "\"EUR \"")).unwrap();

    fintrack(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings").not())
        .stdout(predicate::str::contains("Currency symbol: EUR"));

    fintrack(&home)
        .args(["transaction", "add", "9.99", "Cinema ticket", "-c", "entertainment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR 9.99"));

    fintrack(&home)
        .args(["budget", "set", "entertainment", "50"])
        .assert()
        .success();

    for report in ["month", "trend", "categories"] {
        fintrack(&home)
            .args(["report", report])
            .assert()
            .success()
            .stdout(predicate::str::contains("EUR 9.99"))
            .stdout(predicate::str::contains("$").not());
    }
}

#[test]
fn oversized_amount_is_rejected() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["transaction", "add", "90000000000000000", "Yacht", "-c", "shopping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}
