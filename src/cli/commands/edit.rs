use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::{normalize_user, validate_edit};
use crate::core::ledger::RowHandle;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EntryInput;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::{km, money};

/// Rewrite one row. Fields not given on the command line keep the value
/// the row has now; derived columns are recomputed and the timestamp is kept.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        row,
        generation,
        user,
        start,
        end,
        paid,
        price,
    } = cmd
    {
        let mut ledger = open_ledger(cfg)?;
        let snapshot = ledger.load()?;

        //
        // 1. Handle: pinned to what the operator saw, or taken now
        //
        let handle = match generation {
            Some(g) if *g != snapshot.generation() => {
                return Err(AppError::StaleRow {
                    row: *row,
                    expected: *g,
                    actual: snapshot.generation(),
                });
            }
            Some(g) => RowHandle::pinned(*row, *g),
            None => snapshot.handle(*row)?,
        };

        let current = snapshot.get(*row).ok_or(AppError::InvalidRow(*row))?;

        //
        // 2. Merge with the current row
        //
        let base = current.input();
        let input = EntryInput {
            user: match user {
                Some(u) => normalize_user(u)?,
                None => base.user,
            },
            odometer_start: start.unwrap_or(base.odometer_start),
            odometer_end: end.unwrap_or(base.odometer_end),
            amount_paid: paid.unwrap_or(base.amount_paid),
            fuel_price: price.unwrap_or(base.fuel_price),
        };
        validate_edit(&input)?;

        //
        // 3. Write
        //
        let timestamp = current.timestamp.clone();
        let edited = ledger.edit(&handle, &timestamp, &input)?;

        if let Some(gap) = edited.chain_gap {
            warning(format!(
                "Row {} now ends at {} km but row {} starts at {} km.",
                gap.row,
                km(gap.odometer_end),
                gap.next_row,
                km(gap.next_start)
            ));
        }

        audit(
            ledger.store().conn(),
            "edit",
            &format!("row {}", edited.entry.row_number),
            &format!(
                "{} → {} km, {} paid at {}",
                km(edited.entry.odometer_start),
                km(edited.entry.odometer_end),
                money(edited.entry.amount_paid),
                money(edited.entry.fuel_price)
            ),
        );

        success(format!(
            "Row {} updated: {} km, {} l, {} km/l, {} ₹/km.",
            edited.entry.row_number,
            km(edited.entry.distance),
            money(edited.entry.liters),
            money(edited.entry.efficiency),
            money(edited.entry.cost_per_distance)
        ));
    }

    Ok(())
}
