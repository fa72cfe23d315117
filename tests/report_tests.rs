use rservicelog::core::record::RecordLogic;
use rservicelog::core::report::{GLYPH_UNVERIFIED, GLYPH_VERIFIED, ReportLogic};
use rservicelog::errors::AppError;
use std::fs;
use unicode_width::UnicodeWidthStr;

mod common;
use common::{date, ready_pool, temp_dir};

fn log(pool: &rservicelog::db::pool::DbPool, entry: &str) {
    let e = RecordLogic::parse_entry(entry).expect("valid entry");
    RecordLogic::record(pool, 1, &e).expect("record");
}

#[test]
fn test_report_totals() {
    let pool = ready_pool("report_totals", date("2099-01-01"));
    let out = temp_dir("report_totals_out");
    log(&pool, "1|2.0|Sorted cans|2025-06-01");
    log(&pool, "2|3.5|Shelved books|2025-06-02");

    let now = date("2025-06-03").and_hms_opt(9, 30, 0).expect("time");
    let sheet = ReportLogic::generate_at(&pool, 1, &out, &now).expect("report");

    assert_eq!(sheet.total_hours_completed, 5.5);
    assert_eq!(sheet.hours_remaining, 40.0 - 5.5);
    assert!(sheet.text.contains("TOTAL HOURS COMPLETED: 5.5"));
    assert!(sheet.text.contains("HOURS REMAINING:       34.5"));
    assert!(sheet.text.contains("COMMUNITY SERVICE TIMESHEET: Test Volunteer"));
    assert!(sheet.text.contains("DEADLINE: 2099-01-01"));
    assert!(sheet.text.contains("GENERATED: 2025-06-03 09:30"));
    assert!(sheet.text.contains("Supervisor Signature"));
}

#[test]
fn test_report_written_to_dated_file() {
    let pool = ready_pool("report_file", date("2099-01-01"));
    let out = temp_dir("report_file_out");
    log(&pool, "1|1|Sorted cans|2025-06-01");

    let now = date("2025-06-03").and_hms_opt(18, 0, 0).expect("time");
    let sheet = ReportLogic::generate_at(&pool, 1, &out, &now).expect("report");

    assert_eq!(sheet.path, out.join("Timesheet_20250603.txt"));
    let saved = fs::read_to_string(&sheet.path).expect("saved file");
    assert_eq!(saved, sheet.text);
}

#[test]
fn test_rows_sorted_by_service_date() {
    let pool = ready_pool("report_order", date("2099-01-01"));
    let out = temp_dir("report_order_out");
    log(&pool, "1|1|third|2025-06-03");
    log(&pool, "1|1|first|2025-06-01");
    log(&pool, "1|1|second-a|2025-06-02");
    log(&pool, "2|1|second-b|2025-06-02");

    let sheet = ReportLogic::generate(&pool, 1, &out).expect("report");

    let order: Vec<&str> = sheet
        .rows
        .iter()
        .map(|r| r.task_description.as_str())
        .collect();
    assert_eq!(order, ["first", "second-a", "second-b", "third"]);

    let pos = |needle: &str| sheet.text.find(needle).expect(needle);
    assert!(pos("first") < pos("second-a"));
    assert!(pos("second-a") < pos("second-b"));
    assert!(pos("second-b") < pos("third"));
}

#[test]
fn test_columns_line_up_and_glyphs_differ() {
    let pool = ready_pool("report_columns", date("2099-01-01"));
    let out = temp_dir("report_columns_out");
    log(&pool, "1|2|Long agency name gets cut|2025-06-01");
    log(&pool, "3|10.25|Short agency|2025-06-02");
    pool.conn
        .execute("UPDATE Service_Logs SET is_verified = 1 WHERE task_description = 'Short agency'", [])
        .expect("verify one log");

    let sheet = ReportLogic::generate(&pool, 1, &out).expect("report");

    let rows: Vec<&str> = sheet
        .text
        .lines()
        .filter(|l| l.starts_with("2025-06-0"))
        .collect();
    assert_eq!(rows.len(), 2);

    // fixed columns have the same display width on every row
    let widths = |l: &str| -> Vec<usize> { l.split(" | ").take(3).map(|c| c.width()).collect() };
    assert_eq!(widths(rows[0]), vec![12, 20, 7]);
    assert_eq!(widths(rows[0]), widths(rows[1]));

    assert!(rows[0].contains("Atlanta Community F…"));
    assert!(rows[0].ends_with(GLYPH_UNVERIFIED));
    assert!(rows[1].contains("Trees Atlanta"));
    assert!(rows[1].ends_with(GLYPH_VERIFIED));
}

#[test]
fn test_unknown_agency_still_counted() {
    let pool = ready_pool("report_dangling", date("2099-01-01"));
    let out = temp_dir("report_dangling_out");
    log(&pool, "1|2|Known|2025-06-01");
    log(&pool, "77|3|Unknown|2025-06-02");

    let sheet = ReportLogic::generate(&pool, 1, &out).expect("report");

    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.total_hours_completed, 5.0);
    assert!(sheet.text.contains("<unknown #77>"));
}

#[test]
fn test_empty_report_and_over_logging() {
    let pool = ready_pool("report_over", date("2099-01-01"));
    let out = temp_dir("report_over_out");

    let sheet = ReportLogic::generate(&pool, 1, &out).expect("empty report");
    assert!(sheet.text.contains("TOTAL HOURS COMPLETED: 0.0"));
    assert!(sheet.text.contains("HOURS REMAINING:       40.0"));

    log(&pool, "1|45|Big weekend|2025-06-01");
    let sheet = ReportLogic::generate(&pool, 1, &out).expect("report");
    assert_eq!(sheet.hours_remaining, -5.0);
    assert!(sheet.text.contains("HOURS REMAINING:       -5.0"));
}

#[test]
fn test_report_for_unknown_user_fails() {
    let pool = ready_pool("report_unknown_user", date("2099-01-01"));
    let out = temp_dir("report_unknown_user_out");

    let err = ReportLogic::generate(&pool, 5, &out).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_hour_values_are_never_cut_or_rounded() {
    let pool = ready_pool("report_exact_hours", date("2099-01-01"));
    let out = temp_dir("report_exact_hours_out");
    log(&pool, "1|100.25|Big|2025-06-01");
    log(&pool, "1|0.125|Tiny|2025-06-02");
    log(&pool, "1|-12.75|Fix|2025-06-03");

    let sheet = ReportLogic::generate(&pool, 1, &out).expect("report");

    let rows: Vec<&str> = sheet
        .text
        .lines()
        .filter(|l| l.starts_with("2025-06-0"))
        .collect();
    assert_eq!(rows.len(), 3);

    let hours: Vec<&str> = rows
        .iter()
        .map(|l| l.split(" | ").nth(2).expect("hours column").trim_end())
        .collect();
    assert_eq!(hours, ["100.25", "0.125", "-12.75"]);

    let widths = |l: &str| -> Vec<usize> { l.split(" | ").take(3).map(|c| c.width()).collect() };
    assert!(rows.iter().all(|r| widths(r) == widths(rows[0])));

    assert_eq!(sheet.total_hours_completed, 87.625);
    assert!(sheet.text.contains("TOTAL HOURS COMPLETED: 87.625"));
    assert!(sheet.text.contains("HOURS REMAINING:       -47.625"));
}

#[test]
fn test_footer_hides_float_noise() {
    let pool = ready_pool("report_float_noise", date("2099-01-01"));
    let out = temp_dir("report_float_noise_out");
    log(&pool, "1|0.1|a|2025-06-01");
    log(&pool, "1|0.2|b|2025-06-02");

    let sheet = ReportLogic::generate(&pool, 1, &out).expect("report");

    assert!(sheet.text.contains("TOTAL HOURS COMPLETED: 0.3\n"));
    assert!(sheet.text.contains("HOURS REMAINING:       39.7\n"));
}
