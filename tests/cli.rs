use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn assistant(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("assistant").unwrap();
    cmd.env("ASSISTANT_DATA_DIR", data_dir);
    cmd
}

#[test]
fn note_add_list_and_edit() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["note", "add", "Groceries", "--content", "milk, bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created note #1: Groceries"));

    assistant(temp_dir.path())
        .args(["note", "edit", "1", "--title", "Shopping"])
        .assert()
        .success();

    assistant(temp_dir.path())
        .args(["note", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping"))
        .stdout(predicate::str::contains("milk, bread"));

    let raw = fs::read_to_string(temp_dir.path().join("data").join("notes.json")).unwrap();
    assert!(raw.contains("\"title\": \"Shopping\""));
}

#[test]
fn missing_id_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["task", "delete", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task not found: 42"));
}

#[test]
fn task_done_and_status_filter() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["task", "add", "Pay rent", "--priority", "High"])
        .assert()
        .success();
    assistant(temp_dir.path())
        .args(["task", "add", "Call bank"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority: Medium"));

    assistant(temp_dir.path())
        .args(["task", "done", "1"])
        .assert()
        .success();

    assistant(temp_dir.path())
        .args(["task", "list", "--status", "pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Call bank"))
        .stdout(predicate::str::contains("Pay rent").not());
}

#[test]
fn task_due_date_is_validated() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["task", "add", "Renew passport", "--due", "2024-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DD-MM-YYYY"));
}

#[test]
fn contact_find() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["contact", "add", "Anna Smith", "--phone", "+1 555-0100"])
        .assert()
        .success();
    assistant(temp_dir.path())
        .args(["contact", "add", "Bob Stone", "--phone", "+44 20 7946"])
        .assert()
        .success();

    assistant(temp_dir.path())
        .args(["contact", "find", "anna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna Smith"))
        .stdout(predicate::str::contains("Bob Stone").not());
}

#[test]
fn finance_report_writes_file() {
    let temp_dir = TempDir::new().unwrap();

    for (amount, date) in [("100", "05-01-2024"), ("-40", "10-01-2024"), ("-10", "31-01-2024")] {
        assistant(temp_dir.path())
            .args(["finance", "add", amount, "misc", "--date", date])
            .assert()
            .success();
    }

    assistant(temp_dir.path())
        .args(["finance", "report", "01-01-2024", "31-01-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00"))
        .stdout(predicate::str::contains("50.00"));

    let report = temp_dir
        .path()
        .join("exports")
        .join("report_01-01-2024_31-01-2024.csv");
    let contents = fs::read_to_string(report).unwrap();
    assert_eq!(contents.lines().count(), 4);
}

#[test]
fn finance_report_rejects_invalid_date() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["finance", "report", "31-02-2024", "01-01-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format error"));

    assert!(!temp_dir
        .path()
        .join("exports")
        .join("report_31-02-2024_01-01-2024.csv")
        .exists());
}

#[test]
fn finance_add_rejects_bad_amount() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["finance", "add", "ten", "misc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn export_then_import_appends() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("contacts.csv");
    let csv_arg = csv_path.to_str().unwrap();

    assistant(temp_dir.path())
        .args(["contact", "add", "Anna", "--email", "anna@example.com"])
        .assert()
        .success();

    assistant(temp_dir.path())
        .args(["contact", "export", "--output", csv_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 record(s)"));

    assistant(temp_dir.path())
        .args(["contact", "import", csv_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 record(s)"));

    assistant(temp_dir.path())
        .args(["contact", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anna@example.com"));
}

#[test]
fn import_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["note", "import", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import file not found"));
}

#[test]
fn corrupt_snapshot_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("notes.json"), "{ not json").unwrap();

    assistant(temp_dir.path())
        .args(["note", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn history_lists_changes() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["note", "add", "Groceries"])
        .assert()
        .success();
    assistant(temp_dir.path())
        .args(["note", "delete", "1"])
        .assert()
        .success();

    assistant(temp_dir.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Note #1"))
        .stdout(predicate::str::contains("DELETE Note #1"));
}

#[test]
fn unwritable_audit_log_warns_but_keeps_change() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("audit.log")).unwrap();

    assistant(temp_dir.path())
        .args(["note", "add", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created note #1"))
        .stderr(predicate::str::contains("Warning: change saved but not recorded"));

    assistant(temp_dir.path())
        .args(["note", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn finance_add_rejects_sub_cent_amount() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .args(["finance", "add", "10.999", "misc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    assistant(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default priority: Medium"));
}
