use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::summarize;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_against, colorize_derived};
use crate::utils::formatting::{bold, km, money};
use crate::utils::table::{Column, Table};

/// Print the sheet in row order with the row numbers `edit`/`del` expect.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { user, users } = cmd {
        let ledger = open_ledger(cfg)?;
        let snapshot = ledger.load()?;

        if *users {
            let all = snapshot.users();
            if all.is_empty() {
                info("No users yet.");
            }
            for u in all {
                println!("- {}", u);
            }
            return Ok(());
        }

        let entries = snapshot.filtered(user.as_deref());
        if entries.is_empty() {
            info("No fuel entries found.");
            return Ok(());
        }

        // reference for green/red: the average over what is listed
        let avg = summarize(&entries);

        let mut table = Table::new(vec![
            Column::right("Row"),
            Column::left("Timestamp"),
            Column::left("User"),
            Column::right("Start"),
            Column::right("End"),
            Column::right("Km"),
            Column::right("Liters"),
            Column::right("Paid ₹"),
            Column::right("km/l"),
            Column::right("₹/km"),
            Column::right("₹/l"),
        ]);

        for e in &entries {
            let eff = format!(
                "{}{}{}",
                color_against(e.efficiency, avg.avg_efficiency, true),
                money(e.efficiency),
                RESET
            );
            let cost = format!(
                "{}{}{}",
                color_against(e.cost_per_distance, avg.avg_cost_per_km, false),
                money(e.cost_per_distance),
                RESET
            );

            table.add_row(vec![
                e.row_number.to_string(),
                e.timestamp.clone(),
                e.user.clone(),
                km(e.odometer_start),
                km(e.odometer_end),
                colorize_derived(e.distance, &km(e.distance)),
                colorize_derived(e.liters, &money(e.liters)),
                money(e.amount_paid),
                colorize_derived(e.efficiency, &eff),
                colorize_derived(e.cost_per_distance, &cost),
                money(e.fuel_price),
            ]);
        }

        println!(
            "\n⛽ Fuel entries  {}\n",
            bold(&format!("(generation {})", snapshot.generation()))
        );
        print!("{}", table.render());
        println!();
    }

    Ok(())
}
