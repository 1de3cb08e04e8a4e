use crate::errors::{AppError, AppResult};
use crate::sheet::{Cell, RowStore};

/// In-memory sheet for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySheet {
    rows: Vec<Vec<Cell>>,
    generation: u64,
    offline: bool,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from raw rows (header included).
    pub fn with_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Simulate a backend outage: every call fails until switched back.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn check_online(&self) -> AppResult<()> {
        if self.offline {
            return Err(AppError::Store("sheet backend unreachable".into()));
        }
        Ok(())
    }

    fn index_of(&self, row_number: usize) -> AppResult<usize> {
        if row_number == 0 || row_number > self.rows.len() {
            return Err(AppError::InvalidRow(row_number));
        }
        Ok(row_number - 1)
    }
}

impl RowStore for MemorySheet {
    fn get_all_values(&self) -> AppResult<Vec<Vec<Cell>>> {
        self.check_online()?;
        Ok(self.rows.clone())
    }

    fn append(&mut self, row: &[Cell]) -> AppResult<usize> {
        self.check_online()?;
        self.rows.push(row.to_vec());
        self.generation += 1;
        Ok(self.rows.len())
    }

    fn update_range(&mut self, row_number: usize, row: &[Cell]) -> AppResult<()> {
        self.check_online()?;
        let idx = self.index_of(row_number)?;
        self.rows[idx] = row.to_vec();
        self.generation += 1;
        Ok(())
    }

    fn delete_row(&mut self, row_number: usize) -> AppResult<()> {
        self.check_online()?;
        let idx = self.index_of(row_number)?;
        self.rows.remove(idx);
        self.generation += 1;
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.check_online()?;
        self.rows.clear();
        self.generation += 1;
        Ok(())
    }

    fn generation(&self) -> AppResult<u64> {
        self.check_online()?;
        Ok(self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{HEADERS, header_cells};

    fn row(tag: &str) -> Vec<Cell> {
        vec![Cell::text(tag), Cell::Number(1.0)]
    }

    #[test]
    fn append_returns_row_number_and_bumps_generation() {
        let mut sheet = MemorySheet::new();
        assert_eq!(sheet.append(&header_cells()).unwrap(), 1);
        assert_eq!(sheet.append(&row("a")).unwrap(), 2);
        assert_eq!(sheet.generation().unwrap(), 2);
    }

    #[test]
    fn delete_shifts_following_rows_up() {
        let mut sheet = MemorySheet::new();
        sheet.append(&header_cells()).unwrap();
        for tag in ["a", "b", "c"] {
            sheet.append(&row(tag)).unwrap();
        }

        sheet.delete_row(3).unwrap();

        let values = sheet.get_all_values().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[2][0], Cell::text("c"));
    }

    #[test]
    fn out_of_range_rows_are_rejected() {
        let mut sheet = MemorySheet::new();
        sheet.append(&header_cells()).unwrap();
        assert!(matches!(sheet.delete_row(5), Err(AppError::InvalidRow(5))));
        assert!(matches!(
            sheet.update_range(0, &row("x")),
            Err(AppError::InvalidRow(0))
        ));
    }

    #[test]
    fn load_all_keys_cells_by_header() {
        let mut sheet = MemorySheet::new();
        sheet.append(&header_cells()).unwrap();
        sheet.append(&[Cell::text("2025-01-01 10:00:00")]).unwrap();

        let records = sheet.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Timestamp"], Cell::text("2025-01-01 10:00:00"));
        // short rows are padded with blanks
        assert_eq!(records[0][HEADERS[9]], Cell::text(""));
    }

    #[test]
    fn offline_sheet_fails_every_call() {
        let mut sheet = MemorySheet::new();
        sheet.set_offline(true);
        assert!(matches!(sheet.append(&row("a")), Err(AppError::Store(_))));
        assert!(sheet.get_all_values().is_err());
    }
}
