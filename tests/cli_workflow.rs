use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn idcard(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("idcard").unwrap();
    cmd.env("IDCARD_HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_seeds_builtin_records() {
    let temp_dir = tempfile::tempdir().unwrap();

    idcard(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("EC-1001"))
        .stdout(predicate::str::contains("Salma Akter"));

    assert!(temp_dir.path().join("employees.json").exists());
}

#[test]
fn test_add_then_show_card() {
    let temp_dir = tempfile::tempdir().unwrap();

    idcard(temp_dir.path())
        .args(["add", "--ec-no", "E-77", "--name", "Nadia Islam"])
        .args(["--ec-date", "2025-01-05", "--country", "Oman"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Add Employee"))
        .stdout(predicate::str::contains("Employee added (2): Nadia Islam"));

    idcard(temp_dir.path())
        .args(["card", "E-77"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EC No: E-77"))
        .stdout(predicate::str::contains("EC Date: 05/Jan/2025"))
        .stdout(predicate::str::contains("NADIA ISLAM"))
        .stdout(predicate::str::contains("Oman"))
        .stdout(predicate::str::contains("No Image"));
}

#[test]
fn test_missing_card_shows_marker() {
    let temp_dir = tempfile::tempdir().unwrap();

    idcard(temp_dir.path())
        .args(["card", "NOPE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee not found"))
        .stdout(predicate::str::contains("EC No:").not());
}

#[test]
fn test_edit_by_index_keeps_other_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    idcard(temp_dir.path())
        .args(["form", "--index", "0", "--name", "Rahim U."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit Employee"))
        .stdout(predicate::str::contains("Employee updated (0): Rahim U."));

    idcard(temp_dir.path())
        .args(["card", "EC-1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rahim U."))
        .stdout(predicate::str::contains("Saudi Arabia"))
        .stdout(predicate::str::contains("EC Date: 30/Sep/2025"));
}

#[test]
fn test_unresolved_index_creates_new_record() {
    let temp_dir = tempfile::tempdir().unwrap();

    idcard(temp_dir.path())
        .args(["form", "--index", "9", "--ec-no", "E-9", "--name", "New Hire"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employee at index 9"))
        .stdout(predicate::str::contains("Employee added (2): New Hire"));
}

#[test]
fn test_duplicate_ec_no_warns_but_saves() {
    let temp_dir = tempfile::tempdir().unwrap();

    idcard(temp_dir.path())
        .args(["add", "--ec-no", "EC-1001", "--name", "Twin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already used by record 0"))
        .stdout(predicate::str::contains("Employee added (2): Twin"));

    // Lookup by EC No resolves to the first match.
    idcard(temp_dir.path())
        .args(["card", "EC-1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rahim Uddin"));
}

#[test]
fn test_photo_is_embedded_in_card() {
    let temp_dir = tempfile::tempdir().unwrap();
    let photo = temp_dir.path().join("pic.png");
    std::fs::write(
        &photo,
        [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D],
    )
    .unwrap();

    idcard(temp_dir.path())
        .args(["add", "--ec-no", "P-1", "--name", "Pic"])
        .arg("--photo")
        .arg(&photo)
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo selected: pic.png"));

    idcard(temp_dir.path())
        .args(["card", "P-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("embedded image/svg+xml"));
}

#[test]
fn test_non_image_photo_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let photo = temp_dir.path().join("notes.txt");
    std::fs::write(&photo, "plain text").unwrap();

    idcard(temp_dir.path())
        .args(["add", "--ec-no", "P-2", "--name", "Text"])
        .arg("--photo")
        .arg(&photo)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_card_json_output() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = idcard(temp_dir.path())
        .args(["card", "EC-1002", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let model: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(model["status"], "found");
    assert_eq!(model["name"], "Salma Akter");
    assert_eq!(model["sections"].as_array().unwrap().len(), 3);
}

#[test]
fn test_corrupt_store_lists_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("employees.json"), "not json").unwrap();

    idcard(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found."));
}

#[test]
fn test_null_fields_keep_existing_records() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("employees.json"),
        r#"[{"ecNo":"E1","name":"Alice"},{"ecNo":"E2","name":null}]"#,
    )
    .unwrap();

    idcard(temp_dir.path())
        .args(["add", "--ec-no", "E3", "--name", "Carol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee added (2): Carol"))
        .stdout(predicate::str::contains("Alice"));

    let raw = std::fs::read_to_string(temp_dir.path().join("employees.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 3);
}

#[test]
fn test_config_slot_switches_storage() {
    let temp_dir = tempfile::tempdir().unwrap();

    idcard(temp_dir.path())
        .args(["config", "slot", "staff"])
        .assert()
        .success();

    idcard(temp_dir.path())
        .args(["config", "slot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slot = staff"));

    idcard(temp_dir.path()).arg("list").assert().success();
    assert!(temp_dir.path().join("staff.json").exists());
    assert!(!temp_dir.path().join("employees.json").exists());
}

#[test]
fn test_unknown_config_key_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    idcard(temp_dir.path())
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_init_is_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();

    idcard(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized slot 'employees' with 2 records"));

    idcard(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already holds data"));
}
