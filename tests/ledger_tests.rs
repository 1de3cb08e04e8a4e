use rfuellogger::core::ledger::Ledger;
use rfuellogger::db::sheet::SqliteSheet;
use rfuellogger::errors::AppError;
use rfuellogger::models::cursor::SessionCursor;
use rfuellogger::models::policy::ChainPolicy;
use rfuellogger::sheet::{HEADERS, RowStore};
use rusqlite::Connection;

mod common;
use common::setup_test_db;

fn open(db_path: &str) -> Ledger<SqliteSheet> {
    Ledger::open(SqliteSheet::open(db_path).unwrap(), ChainPolicy::Ignore).unwrap()
}

#[test]
fn test_rows_survive_reopen_and_shift_on_delete() {
    let db_path = setup_test_db("ledger_reopen");

    {
        let mut l = open(&db_path);
        let (_, c) = l
            .add(SessionCursor::start(1000.0), "A", 1050.0, 500.0, 100.0)
            .unwrap();
        let (_, c) = l.add(c, "A", 1100.0, 250.0, 100.0).unwrap();
        l.add(c, "A", 1200.0, 1000.0, 100.0).unwrap();
    }

    let mut l = open(&db_path);
    assert!(!l.schema_repaired());

    let snap = l.load().unwrap();
    assert_eq!(snap.entries().len(), 3);
    l.delete(&snap.handle(3).unwrap()).unwrap();

    let snap = l.load().unwrap();
    let moved = snap.get(3).unwrap();
    assert_eq!(moved.odometer_start, 1100.0);
    assert_eq!(moved.odometer_end, 1200.0);

    // header + two data rows left in storage
    let conn = Connection::open(&db_path).unwrap();
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM sheet_rows", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 3);

    let header: String = conn
        .query_row("SELECT cells FROM sheet_rows ORDER BY id LIMIT 1", [], |r| {
            r.get(0)
        })
        .unwrap();
    let header: Vec<String> = serde_json::from_str(&header).unwrap();
    assert_eq!(header, HEADERS.to_vec());
}

#[test]
fn test_handle_from_before_a_mutation_is_stale() {
    let db_path = setup_test_db("ledger_stale");
    let mut l = open(&db_path);

    let (_, c) = l
        .add(SessionCursor::start(0.0), "A", 100.0, 500.0, 100.0)
        .unwrap();
    let old = l.load().unwrap().handle(2).unwrap();
    l.add(c, "B", 200.0, 500.0, 100.0).unwrap();

    assert!(matches!(l.delete(&old), Err(AppError::StaleRow { .. })));
    assert!(l.store().generation().unwrap() > old.generation());
}

#[test]
fn test_foreign_header_is_repaired_on_open() {
    let db_path = setup_test_db("ledger_repair");
    {
        let mut sheet = SqliteSheet::open(&db_path).unwrap();
        sheet
            .append(&[rfuellogger::sheet::Cell::text("not a header")])
            .unwrap();
    }

    let l = open(&db_path);
    assert!(l.schema_repaired());
    assert!(l.load().unwrap().is_empty());
}
