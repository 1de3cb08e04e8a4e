//! One handler per subcommand, plus the helpers they share.

pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod session;
pub mod summary;
pub mod trend;

use crate::config::Config;
use crate::core::form::normalize_user;
use crate::core::ledger::Ledger;
use crate::db::log::audit;
use crate::db::sheet::SqliteSheet;
use crate::errors::{AppError, AppResult};
use crate::sheet::HEADERS;
use crate::ui::messages::warning;

/// Open the configured sheet and bring its header in line.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<Ledger<SqliteSheet>> {
    let sheet = SqliteSheet::open(&cfg.database)?;
    let ledger = Ledger::open(sheet, cfg.edit_chain_policy)?;

    if ledger.schema_repaired() {
        warning("Sheet header missing or different: sheet cleared and header written.");
        audit(
            ledger.store().conn(),
            "schema_repair",
            "row 1",
            &format!("Header (re)written with {} columns", HEADERS.len()),
        );
    }

    Ok(ledger)
}

/// `--user`, else `default_user` from the configuration.
pub(crate) fn resolve_user(user: &Option<String>, cfg: &Config) -> AppResult<String> {
    let raw = user.clone().unwrap_or_else(|| cfg.default_user.clone());
    normalize_user(&raw).map_err(|_| {
        AppError::InvalidInput(
            "no user given: pass --user or set default_user in the configuration".into(),
        )
    })
}
