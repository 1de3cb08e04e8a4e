use crate::cli::commands::{open_ledger, resolve_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::validate_start;
use crate::db::log::audit;
use crate::db::session::{list_sessions, load_cursor, save_cursor};
use crate::errors::AppResult;
use crate::models::cursor::SessionCursor;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::km;

/// Start a session (`--start`) or show the stored cursors.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { start, user } = cmd {
        let ledger = open_ledger(cfg)?;
        let conn = ledger.store().conn();

        match start {
            Some(odometer) => {
                validate_start(*odometer)?;
                let user = resolve_user(user, cfg)?;

                let snapshot = ledger.load()?;
                if let Some(last) = snapshot.last_odometer(&user)
                    && *odometer < last
                {
                    warning(format!(
                        "Starting odometer {} is below the last recorded end {} for {}.",
                        km(*odometer),
                        km(last),
                        user
                    ));
                }

                save_cursor(conn, &user, SessionCursor::start(*odometer))?;
                audit(
                    conn,
                    "session",
                    &user,
                    &format!("Session started at {} km", km(*odometer)),
                );
                success(format!(
                    "Session started for {} at {} km.",
                    user,
                    km(*odometer)
                ));
            }
            None => {
                if user.is_some() || !cfg.default_user.trim().is_empty() {
                    let user = resolve_user(user, cfg)?;
                    match load_cursor(conn, &user)? {
                        Some(c) => info(format!(
                            "{}: next fill-up starts at {} km.",
                            user,
                            km(c.last_odometer)
                        )),
                        None => info(format!("No session for {}.", user)),
                    }
                    return Ok(());
                }

                let sessions = list_sessions(conn)?;
                if sessions.is_empty() {
                    info("No sessions yet. Start one with: rfuellogger session --start <km> --user <name>");
                }
                for (u, last, updated) in sessions {
                    println!("- {} | last odometer {} km | updated {}", u, km(last), updated);
                }
            }
        }
    }

    Ok(())
}
