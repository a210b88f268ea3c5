//! End-to-end tests driving the `budgeit` binary against a temporary
//! data directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "budgeit";

fn budgeit(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
    cmd.env("BUDGEIT_DATA_DIR", data_dir.path());
    cmd
}

fn run(data_dir: &TempDir, args: &[&str]) {
    budgeit(data_dir).args(args).assert().success();
}

#[test]
fn init_creates_settings_and_account() {
    let data_dir = TempDir::new().unwrap();

    budgeit(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("data").join("account.json").exists());
}

#[test]
fn sources_produce_surplus() {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["source", "add", "Job", "3000"]);
    run(&data_dir, &["source", "add", "Rent", "-1200"]);
    run(&data_dir, &["source", "add", "Food", "-400"]);

    budgeit(&data_dir)
        .args(["period", "surplus"])
        .assert()
        .success()
        .stdout(contains("Surplus: $1400.00"));

    budgeit(&data_dir)
        .args(["source", "list"])
        .assert()
        .success()
        .stdout(contains("Rent").and(contains("-$1200.00")));
}

#[test]
fn closing_a_period_accrues_debt_interest() {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["debt", "add", "Card", "1000", "2"]);

    budgeit(&data_dir)
        .args(["period", "end"])
        .assert()
        .success()
        .stdout(
            contains("Receipt for period 1")
                .and(contains("Card: $1020.00"))
                .and(contains("Now in period 2")),
        );

    budgeit(&data_dir)
        .args(["debt", "list"])
        .assert()
        .success()
        .stdout(contains("$1020.00"));

    budgeit(&data_dir)
        .args(["balance", "show"])
        .assert()
        .success()
        .stdout(contains("Period:   2").and(contains("Balance:  $0.00")));
}

#[test]
fn receipts_can_be_listed_and_cleared() {
    let data_dir = TempDir::new().unwrap();

    budgeit(&data_dir)
        .args(["period", "receipt"])
        .assert()
        .success()
        .stdout(contains("There are no receipts recorded for this account."));

    run(&data_dir, &["period", "end"]);
    run(&data_dir, &["period", "end"]);

    budgeit(&data_dir)
        .args(["period", "receipt", "--all"])
        .assert()
        .success()
        .stdout(contains("Receipt for period 1").and(contains("Receipt for period 2")));

    run(&data_dir, &["period", "clear"]);

    budgeit(&data_dir)
        .args(["balance", "show"])
        .assert()
        .success()
        .stdout(contains("Period:   1"));
}

#[test]
fn unknown_names_fail() {
    let data_dir = TempDir::new().unwrap();

    budgeit(&data_dir)
        .args(["source", "remove", "Ghost"])
        .assert()
        .failure()
        .stderr(contains("Source not found: Ghost"));

    budgeit(&data_dir)
        .args(["debt", "pay", "Ghost", "10"])
        .assert()
        .failure()
        .stderr(contains("Debt not found: Ghost"));
}

#[test]
fn rejected_operations_fail_without_changes() {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["source", "add", "Job", "3000"]);

    budgeit(&data_dir)
        .args(["source", "add", "Job", "10"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    budgeit(&data_dir)
        .args(["savings", "interest", "150"])
        .assert()
        .failure()
        .stderr(contains("between 0% and 100%"));

    budgeit(&data_dir)
        .args(["savings", "deposit", "5"])
        .assert()
        .failure()
        .stderr(contains("exceeds available balance"));

    budgeit(&data_dir)
        .args(["balance", "deposit", "ten"])
        .assert()
        .failure()
        .stderr(contains("Invalid number"));

    budgeit(&data_dir)
        .args(["source", "list"])
        .assert()
        .success()
        .stdout(contains("$3000.00"));
}

#[test]
fn savings_transfers_move_money() {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["balance", "deposit", "500"]);
    run(&data_dir, &["savings", "deposit", "200"]);
    run(&data_dir, &["savings", "goal", "25"]);

    budgeit(&data_dir)
        .args(["savings", "show"])
        .assert()
        .success()
        .stdout(contains("Balance:      $200.00").and(contains("Goal:         $50.00 (25%)")));

    budgeit(&data_dir)
        .args(["balance", "show"])
        .assert()
        .success()
        .stdout(contains("Balance:  $300.00"));
}

#[test]
fn negative_balance_can_be_disallowed() {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["balance", "withdraw", "5"]);

    fs::write(
        data_dir.path().join("config.json"),
        r#"{"allow_negative_balance": false}"#,
    )
    .unwrap();

    budgeit(&data_dir)
        .args(["balance", "withdraw", "1"])
        .assert()
        .failure()
        .stderr(contains("exceeds available balance"));

    budgeit(&data_dir)
        .args(["balance", "show"])
        .assert()
        .success()
        .stdout(contains("Balance:  -$5.00"));
}

#[test]
fn malformed_account_file_is_reported() {
    let data_dir = TempDir::new().unwrap();
    let data = data_dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("account.json"), "{\"balance\": \"oops\"}").unwrap();

    budgeit(&data_dir)
        .args(["balance", "show"])
        .assert()
        .failure()
        .stderr(contains("Malformed account file"));

    // The broken file is left for the user to inspect
    assert_eq!(
        fs::read_to_string(data.join("account.json")).unwrap(),
        "{\"balance\": \"oops\"}"
    );
}

#[test]
fn reset_replaces_the_account() {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["source", "add", "Job", "3000"]);
    run(&data_dir, &["reset"]);

    budgeit(&data_dir)
        .args(["source", "list"])
        .assert()
        .success()
        .stdout(contains("No sources found."));
}

#[test]
fn event_log_records_applied_commands() {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["source", "add", "Job", "3000"]);
    run(&data_dir, &["period", "end"]);
    budgeit(&data_dir)
        .args(["source", "remove", "Ghost"])
        .assert()
        .failure();

    budgeit(&data_dir)
        .args(["log"])
        .assert()
        .success()
        .stdout(
            contains("CREATE Source (Job)")
                .and(contains("ADVANCE Period: closed period 1"))
                .and(contains("Ghost").not()),
        );

    run(&data_dir, &["log", "--clear"]);
    budgeit(&data_dir)
        .args(["log"])
        .assert()
        .success()
        .stdout(contains("No events recorded."));
}

#[test]
fn forecast_projects_debt_interest() {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["debt", "add", "Card", "1000", "2"]);

    budgeit(&data_dir)
        .args(["forecast", "--periods", "2"])
        .assert()
        .success()
        .stdout(
            contains("Forecast for the close of period 1")
                .and(contains("$1020.00"))
                .and(contains("$1040.40")),
        );
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();
    budgeit(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol:        $").and(contains("events.log")));
}

#[test]
fn period_counter_at_its_limit_fails_without_changes() {
    let data_dir = TempDir::new().unwrap();
    let data = data_dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    let json = r#"{
        "balance": "0",
        "sources": [],
        "savings": {"balance": "0", "interest": "0", "savingsGoal": "0"},
        "debts": [],
        "monthTracker": 4294967295,
        "receipts": []
    }"#;
    fs::write(data.join("account.json"), json).unwrap();

    budgeit(&data_dir)
        .args(["period", "end"])
        .assert()
        .failure()
        .stderr(contains("Amount out of range"));

    assert_eq!(fs::read_to_string(data.join("account.json")).unwrap(), json);
}

#[test]
fn long_forecast_ends_before_overflow() {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["debt", "add", "Loan", "10000", "50"]);

    budgeit(&data_dir)
        .args(["forecast", "--periods", "1000000"])
        .assert()
        .success()
        .stdout(contains("Schedule ends at period"));
}
