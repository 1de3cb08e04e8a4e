use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 40;

/// One row of the internal `log` table.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// ANSI colour by operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "session" => Colour::Cyan,
        "schema_repair" | "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(conn: &Connection) -> AppResult<Vec<LogLine>> {
        let mut stmt = conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok(LogLine {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let lines = Self::load(conn)?;
        if lines.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = lines.iter().map(|l| l.id.to_string().len()).max().unwrap_or(1);
        let date_w = lines.iter().map(|l| l.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for l in &lines {
            let op = color_for_operation(&l.operation).paint(l.operation.as_str());
            let mut op_target = if l.target.is_empty() {
                op.to_string()
            } else {
                format!("{} ({})", op, truncate(&l.target, MAX_OP_WIDTH))
            };

            let padding = MAX_OP_WIDTH.saturating_sub(visible_width(&op_target));
            op_target.push_str(&" ".repeat(padding));

            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                l.id,
                l.date,
                op_target,
                l.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
    t.push_str("...");
    t
}
