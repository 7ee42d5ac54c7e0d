//! CLI integration tests using assert_cmd with scripted stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--no-color").arg("--no-clear");
    cmd
}

/// Join operator answers into one stdin payload.
fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn exit_from_menu() {
    roster()
        .write_stdin(script(&["5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Student Mark Management System"))
        .stdout(predicate::str::contains("[1] Add student"))
        .stdout(predicate::str::contains("[6] Add sample data"))
        .stdout(predicate::str::contains("Exiting...").not());
}

#[test]
fn single_student_course_and_mark() {
    roster()
        .write_stdin(script(&[
            "1", "", "Ada", "23BI12345", "2000-01-01", //
            "2", "", "Maths", "23C123", //
            "3", "", "", "", "15", //
            "4", "", //
            "5",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("| Data          | Ada           "))
        .stdout(predicate::str::contains("================================\n"))
        .stdout(predicate::str::contains("| ID            | 23BI12345     "))
        .stdout(predicate::str::contains("| DOB           | 2000-01-01    "))
        .stdout(predicate::str::contains("| Course: Maths | 15.0          "));
}

#[test]
fn invalid_student_entries_are_reprompted() {
    roster()
        .write_stdin(script(&[
            "1", "2", //
            "Ada", "23BI1234", "23BI12345", "01-01-2000", "2000-01-01", //
            "Bob", "23BI12345", "23BI12346", "2001-02-03", //
            "5",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid ID, try again (format: 23BI12325): ",
        ))
        .stdout(predicate::str::contains("Invalid date of birth, try again: "))
        .stdout(predicate::str::contains("ID already exists, try again: "));
}

#[test]
fn duplicate_course_name_and_id_are_reprompted() {
    roster()
        .write_stdin(script(&[
            "2", "2", //
            "Maths", "23C123", //
            "Maths", "Physics", "23C123", "23C124", //
            "4", "", "5",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Course already exists, try again: "))
        .stdout(predicate::str::contains("ID already exists, try again: "))
        // no students yet, so the report is empty
        .stdout(predicate::str::contains("No data to display."));
}

#[test]
fn out_of_range_mark_is_reprompted() {
    roster()
        .write_stdin(script(&[
            "1", "", "Ada", "23BI12345", "2000-01-01", //
            "2", "", "Maths", "23C123", //
            "3", "", "x", "7", "1", "", "21", "-1", "twelve", "12.5", //
            "4", "", "5",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice, try again: ").count(2))
        .stdout(predicate::str::contains("Invalid mark, try again: ").count(3))
        .stdout(predicate::str::contains("| Course: Maths | 12.5          "));
}

#[test]
fn marks_need_students_and_courses() {
    roster()
        .write_stdin(script(&["3", "", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No students or courses available to add marks.",
        ))
        .stdout(predicate::str::contains("Enter mark").not());
}

#[test]
fn empty_report_shows_warning() {
    roster()
        .write_stdin(script(&["4", "", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to display."))
        .stdout(predicate::str::contains("Press enter to continue..."))
        .stdout(predicate::str::contains("| Data").not());
}

#[test]
fn sample_data_fills_the_report() {
    roster()
        .arg("--seed")
        .arg("3")
        .write_stdin(script(&["6", "4", "", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample data added").count(1))
        .stdout(predicate::str::contains("| Data ").count(1))
        .stdout(predicate::str::contains("| Course: ").count(5))
        .stdout(predicate::str::is_match(r"\| ID +(\| \d{2}BI\d{3} +){5}\n").unwrap())
        .stdout(
            predicate::str::is_match(r"\| Course: \S+ +(\| \d{1,2} +){5}\n")
                .unwrap()
                .count(5),
        )
        .stdout(predicate::str::contains(".0 ").not());
}

#[test]
fn invalid_menu_number_is_reported() {
    roster()
        .write_stdin(script(&["8", "-1", "abc", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice.").count(4))
        .stdout(predicate::str::contains("Invalid choice, try again: ").count(1));
}

#[test]
fn closed_input_exits_cleanly() {
    roster()
        .write_stdin("1\nAda\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    roster()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .write_stdin(script(&["5"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn config_file_sets_sample_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.toml");
    std::fs::write(&path, "[sample]\nstudents = 2\ncourses = 3\n").unwrap();

    roster()
        .arg("--config")
        .arg(&path)
        .write_stdin(script(&["6", "4", "", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("| Course: ").count(3))
        .stdout(predicate::str::is_match(r"\| ID +(\| \d{2}BI\d{3} +){2}\n").unwrap());
}

#[cfg(unix)]
#[test]
fn interrupt_prints_farewell_and_exits_zero() {
    use std::io::Read;
    use std::process::{Command as StdCommand, Stdio};
    use std::time::Duration;

    let mut child = StdCommand::new(env!("CARGO_BIN_EXE_roster"))
        .args(["--no-color", "--no-clear"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    // held open so the session blocks on input instead of seeing EOF
    let stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    let mut seen = Vec::new();
    let mut buf = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains("Choose one of the above options") {
        let n = stdout.read(&mut buf).unwrap();
        assert!(n > 0, "menu never appeared");
        seen.extend_from_slice(&buf[..n]);
    }
    std::thread::sleep(Duration::from_millis(300));

    let killed = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();
    drop(stdin);

    assert_eq!(status.code(), Some(0));
    assert!(String::from_utf8_lossy(&seen).contains("Exiting..."));
}
