use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::summarize;
use crate::errors::AppResult;
use crate::ui::messages::{info, section};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::formatting::{km, money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { user } = cmd {
        let ledger = open_ledger(cfg)?;
        let snapshot = ledger.load()?;
        let entries = snapshot.filtered(user.as_deref());

        if entries.is_empty() {
            info("No fuel entries found.");
            return Ok(());
        }

        let s = summarize(&entries);
        let opt = |v: Option<f64>| v.map(money).unwrap_or_else(|| format!("{GREY}--{RESET}"));

        match user {
            Some(u) => section("📊", format!("Summary for {}", u)),
            None => section("📊", "Summary"),
        }

        println!("{}• Fill-ups:{}        {}", CYAN, RESET, s.entries);
        println!("{}• Distance:{}        {} km", CYAN, RESET, km(s.total_distance));
        println!("{}• Fuel:{}            {} l", CYAN, RESET, money(s.total_liters));
        println!("{}• Spent:{}           {} ₹", CYAN, RESET, money(s.total_spent));
        println!("{}• Avg efficiency:{}  {} km/l", CYAN, RESET, money(s.avg_efficiency));
        println!("{}• Avg cost:{}        {} ₹/km", CYAN, RESET, money(s.avg_cost_per_km));
        println!("{}• Best / worst:{}    {} / {} km/l", CYAN, RESET, opt(s.best_efficiency), opt(s.worst_efficiency));
        println!();
    }

    Ok(())
}
