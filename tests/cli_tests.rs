use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rservicelog::db::pool::DbPool;
use rservicelog::db::queries::load_service_logs;

mod common;
use common::{count_logs, rsl, setup_test_db, temp_dir};

#[test]
fn test_batch_log_then_status() {
    let db_path = setup_test_db("cli_batch_status");
    let out = temp_dir("cli_batch_status_out");

    rsl("cli_batch_status")
        .args([
            "--db",
            &db_path,
            "--report-dir",
            out.to_str().unwrap(),
            "--status",
            "--log",
            "1|4|Sorted cans|2025-06-01",
            "--log",
            "2|6|Shelved books",
        ])
        .assert()
        .success()
        .stdout(contains("Initializing System... Creating User Profile."))
        .stdout(contains("Hours logged successfully!"))
        .stdout(contains("Completed: 10.0 hrs"))
        .stdout(contains("30.0 hrs"))
        .stdout(contains("SERVICE LOG v").not());

    let pool = DbPool::new(&db_path).unwrap();
    assert_eq!(count_logs(&pool), 2);
}

#[test]
fn test_batch_bad_entry_aborts_everything() {
    let db_path = setup_test_db("cli_batch_bad");
    let out = temp_dir("cli_batch_bad_out");

    rsl("cli_batch_bad")
        .args([
            "--db",
            &db_path,
            "--report-dir",
            out.to_str().unwrap(),
            "--log",
            "1|4|Sorted cans",
            "--log",
            "2|3.5",
            "--status",
            "--report",
        ])
        .assert()
        .failure()
        .stderr(contains("agency_id|hours|description|date"))
        .stdout(contains("STATUS REPORT").not());

    let pool = DbPool::new(&db_path).unwrap();
    assert_eq!(count_logs(&pool), 0);
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_batch_report_writes_timesheet() {
    let db_path = setup_test_db("cli_batch_report");
    let out = temp_dir("cli_batch_report_out");

    rsl("cli_batch_report")
        .args([
            "--db",
            &db_path,
            "--report-dir",
            out.to_str().unwrap(),
            "--report",
            "--log",
            "1|2.0|Sorted cans|2025-06-02",
            "--log",
            "3|3.5|Planted oaks|2025-06-01",
        ])
        .assert()
        .success()
        .stdout(contains("TOTAL HOURS COMPLETED: 5.5"))
        .stdout(contains("Saved to"));

    let files: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("Timesheet_") && files[0].ends_with(".txt"));

    let text = std::fs::read_to_string(out.join(&files[0])).unwrap();
    assert!(text.find("Planted oaks").unwrap() < text.find("Sorted cans").unwrap());
    assert!(text.contains("HOURS REMAINING:       34.5"));
}

#[test]
fn test_interactive_menu_status_and_exit() {
    let db_path = setup_test_db("cli_menu_status");

    rsl("cli_menu_status")
        .args(["--db", &db_path])
        .write_stdin("1\n4\n")
        .assert()
        .success()
        .stdout(contains("1. Show Status (Burn Rate)"))
        .stdout(contains("Goal:      40.0 hrs"))
        .stdout(contains("Stay focused. You got this."));
}

#[test]
fn test_interactive_invalid_choice_repeats_menu() {
    let db_path = setup_test_db("cli_menu_invalid");

    rsl("cli_menu_invalid")
        .args(["--db", &db_path])
        .write_stdin("9\n4\n")
        .assert()
        .success()
        .stdout(contains("Invalid selection."))
        .stdout(contains("Stay focused. You got this."));
}

#[test]
fn test_interactive_log_hours() {
    let db_path = setup_test_db("cli_menu_log");

    rsl("cli_menu_log")
        .args(["--db", &db_path])
        .write_stdin("2\n2\n1.5\nRead to kids\n2025-05-05\n4\n")
        .assert()
        .success()
        .stdout(contains("[2] DeKalb County Library"))
        .stdout(contains("Hours logged successfully!"));

    let pool = DbPool::new(&db_path).unwrap();
    let rows = load_service_logs(&pool, 1).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].agency_id, 2);
    assert_eq!(rows[0].hours_worked, 1.5);
    assert_eq!(rows[0].task_description, "Read to kids");
    assert_eq!(rows[0].service_date, "2025-05-05");
}

#[test]
fn test_interactive_bad_hours_returns_to_menu() {
    let db_path = setup_test_db("cli_menu_bad_hours");

    rsl("cli_menu_bad_hours")
        .args(["--db", &db_path])
        .write_stdin("2\n1\nlots\nStuff\n\n4\n")
        .assert()
        .success()
        .stderr(contains("Invalid input: hours must be a number"))
        .stdout(contains("Stay focused. You got this."));

    let pool = DbPool::new(&db_path).unwrap();
    assert_eq!(count_logs(&pool), 0);
}

#[test]
fn test_interactive_end_of_input_exits_cleanly() {
    let db_path = setup_test_db("cli_menu_eof");

    rsl("cli_menu_eof")
        .args(["--db", &db_path])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn test_second_run_does_not_reseed() {
    let db_path = setup_test_db("cli_reseed");

    rsl("cli_reseed")
        .args(["--db", &db_path, "--status"])
        .assert()
        .success()
        .stdout(contains("Adding Agencies."));

    rsl("cli_reseed")
        .args(["--db", &db_path, "--status"])
        .assert()
        .success()
        .stdout(contains("Initializing System").not());
}

#[test]
fn test_agencies_and_audit_subcommands() {
    let db_path = setup_test_db("cli_agencies_audit");

    rsl("cli_agencies_audit")
        .args(["--db", &db_path, "agencies"])
        .assert()
        .success()
        .stdout(contains("Trees Atlanta"))
        .stdout(contains("Environment"));

    rsl("cli_agencies_audit")
        .args(["--db", &db_path, "--log", "1|2|Sorted cans|2025-06-01"])
        .assert()
        .success();

    rsl("cli_agencies_audit")
        .args(["--db", &db_path, "audit"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("2.0 hrs on 2025-06-01"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");

    rsl("cli_db_info")
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Agencies:"))
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_config_print_uses_override() {
    let db_path = setup_test_db("cli_config_print");

    rsl("cli_config_print")
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("seed_required_hours: 40.0"))
        .stdout(contains(db_path.as_str()));
}

#[test]
fn test_interactive_bad_date_names_the_date() {
    let db_path = setup_test_db("cli_menu_bad_date");

    rsl("cli_menu_bad_date")
        .args(["--db", &db_path])
        .write_stdin("2\n1\n2\nStuff\n06/01/2025\n4\n")
        .assert()
        .success()
        .stderr(contains("Invalid input: date must be YYYY-MM-DD"))
        .stderr(contains("Please enter numbers").not());

    let pool = DbPool::new(&db_path).unwrap();
    assert_eq!(count_logs(&pool), 0);
}
