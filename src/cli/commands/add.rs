use crate::cli::commands::{open_ledger, resolve_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::validate_add;
use crate::db::log::audit;
use crate::db::session::{load_cursor, save_cursor};
use crate::errors::{AppError, AppResult};
use crate::models::cursor::SessionCursor;
use crate::ui::messages::success;
use crate::utils::formatting::{km, money};
use rusqlite::Connection;

/// Add a fill-up for the session of the given user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        end,
        paid,
        price,
        user,
    } = cmd
    {
        //
        // 1. Resolve user and session cursor
        //
        let user = resolve_user(user, cfg)?;
        let mut ledger = open_ledger(cfg)?;

        let cursor = load_cursor(ledger.store().conn(), &user)?
            .ok_or_else(|| AppError::NoSession(user.clone()))?;

        //
        // 2. Form rules
        //
        validate_add(cfg, cursor, *end, *paid, *price)?;

        //
        // 3. Append; the cursor only moves when the append succeeded
        //
        let (entry, next) = ledger.add(cursor, &user, *end, *paid, *price)?;
        advance_cursor(ledger.store().conn(), &user, entry.row_number, next)?;

        audit(
            ledger.store().conn(),
            "add",
            &format!("row {}", entry.row_number),
            &format!(
                "{} → {} km, {} paid",
                km(entry.odometer_start),
                km(entry.odometer_end),
                money(entry.amount_paid)
            ),
        );

        success(format!(
            "Entry added at row {}: {} km, {} l, {} km/l, {} ₹/km.",
            entry.row_number,
            km(entry.distance),
            money(entry.liters),
            money(entry.efficiency),
            money(entry.cost_per_distance)
        ));
    }

    Ok(())
}

/// Persist the cursor after a successful append. The row is already in the
/// sheet at this point, so a failure names the row and the fix.
fn advance_cursor(
    conn: &Connection,
    user: &str,
    row: usize,
    next: SessionCursor,
) -> AppResult<()> {
    save_cursor(conn, user, next).map_err(|e| AppError::CursorNotSaved {
        row,
        user: user.to_string(),
        odometer_end: next.last_odometer,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;
    use crate::db::session::load_cursor;

    #[test]
    fn cursor_moves_to_the_new_end() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        advance_cursor(&conn, "A", 2, SessionCursor::start(1050.0)).unwrap();
        assert_eq!(
            load_cursor(&conn, "A").unwrap(),
            Some(SessionCursor::start(1050.0))
        );
    }

    #[test]
    fn failed_cursor_write_names_row_and_recovery() {
        // no session table
        let conn = Connection::open_in_memory().unwrap();

        let err = advance_cursor(&conn, "A", 7, SessionCursor::start(1050.0)).unwrap_err();
        assert!(matches!(
            err,
            AppError::CursorNotSaved { row: 7, .. }
        ));
        let msg = err.to_string();
        assert!(msg.contains("Entry saved at row 7"));
        assert!(msg.contains("session --start 1050.0 --user A"));
    }
}
