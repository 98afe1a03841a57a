use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rollcall(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.env("ROLLCALL_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn add_carl(home: &TempDir) {
    rollcall(home)
        .args([
            "add",
            "--name",
            "Carl Kurz",
            "--id",
            "C03C",
            "--phone",
            "95352563",
            "--email",
            "heinz@example.com",
            "--address",
            "wall street",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("New student added: Carl Kurz (C03C)"));
}

#[test]
fn test_add_then_list() {
    let home = TempDir::new().unwrap();
    add_carl(&home);

    assert!(home.path().join("roster.json").exists());

    rollcall(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("C03C"))
        .stdout(predicate::str::contains("Carl Kurz"))
        .stdout(predicate::str::contains("Listed all students"));
}

#[test]
fn test_default_command_lists() {
    let home = TempDir::new().unwrap();
    rollcall(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn test_mark_records_attendance() {
    let home = TempDir::new().unwrap();
    add_carl(&home);

    rollcall(&home)
        .args(["mark", "C03C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked student as present: C03C"));

    let on_disk = fs::read_to_string(home.path().join("roster.json")).unwrap();
    let today = chrono::Local::now().date_naive().to_string();
    assert!(on_disk.contains(&today));
}

#[test]
fn test_unknown_student_fails() {
    let home = TempDir::new().unwrap();
    add_carl(&home);

    rollcall(&home)
        .args(["mark", "B02B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Requested student was not found in the student list.",
        ));
}

#[test]
fn test_invalid_id_reports_constraint() {
    let home = TempDir::new().unwrap();
    rollcall(&home)
        .args(["delete", "c03c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_find_and_edit() {
    let home = TempDir::new().unwrap();
    add_carl(&home);

    rollcall(&home)
        .args(["edit", "C03C", "--name", "Carl Meier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited student: Carl Meier (C03C)"));

    rollcall(&home)
        .args(["find", "meier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 students listed!"));

    rollcall(&home)
        .args(["find", "kurz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 students listed!"));
}

#[test]
fn test_malformed_roster_aborts_by_default() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("roster.json"),
        r#"{"students": [{"name": "Carl Kurz"}]}"#,
    )
    .unwrap();

    rollcall(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("position 0"));
}

#[test]
fn test_malformed_roster_can_start_empty() {
    let home = TempDir::new().unwrap();
    let bad = r#"{"students": [{"name": "Carl Kurz"}]}"#;
    fs::write(home.path().join("roster.json"), bad).unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{"start_empty_on_load_error": true}"#,
    )
    .unwrap();

    rollcall(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."))
        .stderr(predicate::str::contains("starting with an empty one"));

    // Untouched until the next successful save
    let on_disk = fs::read_to_string(home.path().join("roster.json")).unwrap();
    assert_eq!(on_disk, bad);
}

#[test]
fn test_clear_empties_roster() {
    let home = TempDir::new().unwrap();
    add_carl(&home);

    rollcall(&home)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student list has been cleared!"));

    rollcall(&home)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}
