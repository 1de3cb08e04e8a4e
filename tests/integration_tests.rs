use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add, generation, init_db_with_data, init_with_session, rfl, setup_test_db, temp_out};

#[test]
fn test_init_creates_header_row() {
    let db_path = setup_test_db("init_header");

    rfl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    rfl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No fuel entries found"));
}

#[test]
fn test_add_computes_derived_columns() {
    let db_path = setup_test_db("add_derived");
    init_with_session(&db_path, "1000");

    rfl()
        .args([
            "--db", &db_path, "add", "--end", "1050", "--paid", "500", "--price", "100", "--user",
            "A",
        ])
        .assert()
        .success()
        .stdout(contains("Entry added at row 2"))
        .stdout(contains("50.0 km, 5.00 l, 10.00 km/l, 10.00 ₹/km"));
}

#[test]
fn test_add_without_session_fails() {
    let db_path = setup_test_db("add_no_session");

    rfl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rfl()
        .args(["--db", &db_path, "add", "--end", "50", "--paid", "10", "--user", "B"])
        .assert()
        .failure()
        .stderr(contains("No session for user 'B'"));
}

#[test]
fn test_session_cursor_follows_last_add() {
    let db_path = setup_test_db("cursor_follows");
    init_with_session(&db_path, "1000");
    add(&db_path, "1050", "500");

    // the next fill-up starts at 1050.0, so 1050.0 itself is refused
    rfl()
        .args(["--db", &db_path, "add", "--end", "1050", "--paid", "100", "--user", "A"])
        .assert()
        .failure()
        .stderr(contains("must be at least 1050.1"));

    rfl()
        .args(["--db", &db_path, "add", "--end", "1050.1", "--paid", "1", "--user", "A"])
        .assert()
        .success()
        .stdout(contains("Entry added at row 3"));

    rfl()
        .args(["--db", &db_path, "session", "--user", "A"])
        .assert()
        .success()
        .stdout(contains("next fill-up starts at 1050.1 km"));
}

#[test]
fn test_form_rules_on_add() {
    let db_path = setup_test_db("form_rules");
    init_with_session(&db_path, "1000");

    rfl()
        .args(["--db", &db_path, "add", "--end", "1100", "--paid=-5", "--user", "A"])
        .assert()
        .failure()
        .stderr(contains("amount paid must not be negative"));

    rfl()
        .args([
            "--db", &db_path, "add", "--end", "1100", "--paid", "5", "--price", "0.5", "--user",
            "A",
        ])
        .assert()
        .failure()
        .stderr(contains("fuel price must be at least"));

    rfl()
        .args(["--db", &db_path, "add", "--end", "1100", "--paid", "5", "--user", "   "])
        .assert()
        .failure()
        .stderr(contains("no user given"));
}

#[test]
fn test_list_shows_rows_and_users() {
    let db_path = setup_test_db("list_rows");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("generation"))
        .stdout(contains("1050.0"))
        .stdout(contains("1200.0"));

    rfl()
        .args(["--db", &db_path, "list", "--users"])
        .assert()
        .success()
        .stdout(contains("- A"));

    rfl()
        .args(["--db", &db_path, "list", "--user", "Z"])
        .assert()
        .success()
        .stdout(contains("No fuel entries found"));
}

#[test]
fn test_edit_keeps_unspecified_fields() {
    let db_path = setup_test_db("edit_merge");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "edit", "--row", "2", "--paid", "600"])
        .assert()
        .success()
        .stdout(contains("Row 2 updated: 50.0 km, 6.00 l, 8.33 km/l, 12.00 ₹/km"));
}

#[test]
fn test_edit_with_stale_generation_is_refused() {
    let db_path = setup_test_db("edit_stale");
    init_db_with_data(&db_path);

    let seen = generation(&db_path);
    add(&db_path, "1300", "500");

    rfl()
        .args([
            "--db",
            &db_path,
            "edit",
            "--row",
            "2",
            "--gen",
            &seen.to_string(),
            "--paid",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("Reload and retry"));

    let now = generation(&db_path);
    rfl()
        .args([
            "--db",
            &db_path,
            "edit",
            "--row",
            "2",
            "--gen",
            &now.to_string(),
            "--paid",
            "1",
        ])
        .assert()
        .success();
}

#[test]
fn test_delete_shifts_following_rows_up() {
    let db_path = setup_test_db("delete_shift");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "del", "--row", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("Row 3 deleted"));

    // the former row 4 (1100 → 1200) is now row 3
    rfl()
        .args(["--db", &db_path, "edit", "--row", "3", "--price", "100"])
        .assert()
        .success()
        .stdout(contains("Row 3 updated: 100.0 km, 10.00 l"));

    rfl()
        .args(["--db", &db_path, "del", "--row", "4", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid row number: 4"));
}

#[test]
fn test_delete_with_stale_generation_is_refused() {
    let db_path = setup_test_db("delete_stale");
    init_db_with_data(&db_path);

    let seen = generation(&db_path);
    rfl()
        .args(["--db", &db_path, "del", "--row", "2", "--yes"])
        .assert()
        .success();

    rfl()
        .args([
            "--db",
            &db_path,
            "del",
            "--row",
            "2",
            "--gen",
            &seen.to_string(),
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("Reload and retry"));
}

#[test]
fn test_header_row_cannot_be_edited() {
    let db_path = setup_test_db("edit_header");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "edit", "--row", "1", "--paid", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid row number: 1"));
}

#[test]
fn test_summary_and_trend() {
    let db_path = setup_test_db("summary_trend");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Fill-ups:"))
        .stdout(contains("200.0 km"))
        .stdout(contains("17.50 l"))
        .stdout(contains("1750.00 ₹"))
        .stdout(contains("8.75 ₹/km"));

    rfl()
        .args(["--db", &db_path, "trend", "--metric", "cost"])
        .assert()
        .success()
        .stdout(contains("Cost per KM Over Time"))
        .stdout(contains("10.00").and(contains("5.00")));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("export_cli");
    init_db_with_data(&db_path);

    let csv = temp_out("export_cli", "csv");
    rfl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &csv, "--force"])
        .assert()
        .success()
        .stdout(contains("3 row(s) written as csv"));

    let content = fs::read_to_string(&csv).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(content.starts_with("Timestamp,User,Odometer Start,Odometer End"));

    let json = temp_out("export_cli", "json");
    rfl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &json, "--force"])
        .assert()
        .success();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 3);
    assert_eq!(v[2]["Odometer End"], 1200.0);
}

#[test]
fn test_backup_and_log() {
    let db_path = setup_test_db("backup_log");
    init_db_with_data(&db_path);

    let dest = temp_out("backup_log", "sqlite");
    rfl()
        .args(["--db", &db_path, "backup", "--file", &dest, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&dest).is_ok());

    rfl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("session"))
        .stdout(contains("add"))
        .stdout(contains("backup"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Fuel entries:"));
}
