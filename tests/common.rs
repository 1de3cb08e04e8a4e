#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so a real
/// configuration file never leaks into the run.
pub fn rfl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rfuellogger_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rfuellogger");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfuellogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `init` + `session --start` for user A.
pub fn init_with_session(db_path: &str, start: &str) {
    rfl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rfl()
        .args(["--db", db_path, "session", "--start", start, "--user", "A"])
        .assert()
        .success();
}

pub fn add(db_path: &str, end: &str, paid: &str) {
    rfl()
        .args(["--db", db_path, "add", "--end", end, "--paid", paid, "--user", "A"])
        .assert()
        .success();
}

/// Three fill-ups for A: 1000 → 1050 → 1100 → 1200.
pub fn init_db_with_data(db_path: &str) {
    init_with_session(db_path, "1000");
    add(db_path, "1050", "500");
    add(db_path, "1100", "250");
    add(db_path, "1200", "1000");
}

/// Current sheet generation, read through the library.
pub fn generation(db_path: &str) -> u64 {
    use rfuellogger::sheet::RowStore;
    rfuellogger::db::sheet::SqliteSheet::open(db_path)
        .expect("open sheet")
        .generation()
        .expect("generation")
}
