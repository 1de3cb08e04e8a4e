//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

/// Display width of `s`, ignoring ANSI colour codes.
pub fn visible_width(s: &str) -> usize {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    UnicodeWidthStr::width(re.replace_all(s, "").as_ref())
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let mut line = Vec::new();
        for (col, w) in self.columns.iter().zip(&widths) {
            line.push(align_cell(&col.header, *w, col.align));
        }
        out.push_str(line.join("  ").trim_end());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let mut line = Vec::new();
            for (i, (col, w)) in self.columns.iter().zip(&widths).enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push(align_cell(cell, *w, col.align));
            }
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}

fn align_cell(s: &str, width: usize, align: Align) -> String {
    // pad by display width, not by char count
    let extra = s.chars().count().saturating_sub(visible_width(s));
    match align {
        Align::Left => pad_right(s, width + extra),
        Align::Right => pad_left(s, width + extra),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_the_widest_cell() {
        let mut t = Table::new(vec![Column::left("User"), Column::right("Km")]);
        t.add_row(vec!["Prof. S. Rao".into(), "50.0".into()]);
        t.add_row(vec!["A".into(), "1250.5".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "User              Km");
        assert_eq!(lines[2], "Prof. S. Rao    50.0");
        assert_eq!(lines[3], "A             1250.5");
    }

    #[test]
    fn colour_codes_do_not_count() {
        assert_eq!(visible_width("\x1b[32m12.5\x1b[0m"), 4);
        assert_eq!(visible_width("₹/km"), 4);
    }
}
