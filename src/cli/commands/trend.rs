use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::series;
use crate::errors::AppResult;
use crate::ui::messages::{info, section};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::{bar, money, pad_left, pad_right};
use crate::utils::table::visible_width;

/// Text chart of one metric against the timestamp column, in row order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend { metric, user } = cmd {
        let ledger = open_ledger(cfg)?;
        let snapshot = ledger.load()?;
        let entries = snapshot.filtered(user.as_deref());

        if entries.is_empty() {
            info("No fuel entries to plot.");
            return Ok(());
        }

        let points = series(&entries, *metric);
        let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let label_w = points
            .iter()
            .map(|(ts, _)| visible_width(ts))
            .max()
            .unwrap_or(0);
        let value_w = points
            .iter()
            .map(|(_, v)| money(*v).len())
            .max()
            .unwrap_or(0);

        section("📈", metric.title());

        for (ts, v) in &points {
            let b = bar(*v, max, cfg.chart_width);
            let b = if b.is_empty() {
                format!("{GREY}·{RESET}")
            } else {
                b
            };
            println!(
                "{} │ {} {}",
                pad_right(ts, label_w),
                pad_left(&money(*v), value_w),
                b
            );
        }
        println!();
    }

    Ok(())
}
