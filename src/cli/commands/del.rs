use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::RowHandle;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

/// Delete one row. Rows below it move up by one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        row,
        generation,
        yes,
    } = cmd
    {
        let mut ledger = open_ledger(cfg)?;
        let snapshot = ledger.load()?;

        let handle = match generation {
            Some(g) => RowHandle::pinned(*row, *g),
            None => snapshot.handle(*row)?,
        };

        // a pinned handle from another generation is refused by the ledger
        let label = if handle.generation() == snapshot.generation() {
            snapshot
                .get(*row)
                .ok_or(AppError::InvalidRow(*row))?
                .label()
        } else {
            format!("row {}", row)
        };

        if !*yes && !confirm(&format!("Delete {}?", label)) {
            info("Delete cancelled.");
            return Ok(());
        }

        ledger.delete(&handle)?;

        audit(
            ledger.store().conn(),
            "del",
            &format!("row {}", row),
            &format!("Deleted {}", label),
        );

        success(format!("Row {} deleted.", row));
    }

    Ok(())
}
