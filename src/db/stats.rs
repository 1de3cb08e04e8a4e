use crate::core::ledger::row_number_for;
use crate::db::sheet::SqliteSheet;
use crate::errors::AppResult;
use crate::models::entry::FuelEntry;
use crate::sheet::{HEADER_ROWS, RowStore};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(sheet: &SqliteSheet, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROWS AND GENERATION
    //
    let rows = sheet.row_count()?;
    let data_rows = rows.saturating_sub(HEADER_ROWS);
    println!(
        "{}• Fuel entries:{} {}{}{}",
        CYAN, RESET, GREEN, data_rows, RESET
    );
    println!(
        "{}• Sheet generation:{} {}",
        CYAN,
        RESET,
        sheet.generation()?
    );

    //
    // 3) TIMESTAMP RANGE (row order, as stored)
    //
    let records = sheet.load_all()?;
    let stamps: Vec<String> = records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| FuelEntry::from_record(r, row_number_for(i)).ok())
        .map(|e| e.timestamp)
        .collect();

    let fmt_first = stamps
        .first()
        .cloned()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = stamps
        .last()
        .cloned()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Entries range:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);

    println!();
    Ok(())
}
