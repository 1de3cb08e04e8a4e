//! Entry ledger: add / edit / delete fill-ups on top of a `RowStore`.

use crate::core::derive::build_entry;
use crate::errors::{AppError, AppResult};
use crate::models::cursor::SessionCursor;
use crate::models::entry::{EntryInput, FuelEntry, TIMESTAMP_FORMAT};
use crate::models::policy::ChainPolicy;
use crate::sheet::{HEADER_ROWS, RowStore, header_cells, is_canonical_header};
use chrono::{Local, NaiveDateTime};

/// Sheet position of the data row loaded at `load_index` (0-based).
pub fn row_number_for(load_index: usize) -> usize {
    HEADER_ROWS + load_index + 1
}

/// Position of a row inside one specific generation of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHandle {
    row_number: usize,
    generation: u64,
}

impl RowHandle {
    /// Handle for a row number the caller saw at `generation` (e.g. from a
    /// previous `list`).
    pub fn pinned(row_number: usize, generation: u64) -> Self {
        Self {
            row_number,
            generation,
        }
    }

    pub fn row_number(&self) -> usize {
        self.row_number
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// All entries as loaded at one generation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    generation: u64,
    entries: Vec<FuelEntry>,
}

impl Snapshot {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn entries(&self) -> &[FuelEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, row_number: usize) -> Option<&FuelEntry> {
        self.entries.iter().find(|e| e.row_number == row_number)
    }

    /// Handle for `row_number`, valid until the next mutation.
    pub fn handle(&self, row_number: usize) -> AppResult<RowHandle> {
        self.get(row_number)
            .map(|e| RowHandle::pinned(e.row_number, self.generation))
            .ok_or(AppError::InvalidRow(row_number))
    }

    /// Entries of one user, or all of them when `user` is `None`.
    pub fn filtered(&self, user: Option<&str>) -> Vec<&FuelEntry> {
        self.entries
            .iter()
            .filter(|e| user.is_none_or(|u| e.user == u))
            .collect()
    }

    /// Distinct users in order of first appearance.
    pub fn users(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for e in &self.entries {
            if !out.contains(&e.user) {
                out.push(e.user.clone());
            }
        }
        out
    }

    /// Highest odometer end recorded for `user`.
    pub fn last_odometer(&self, user: &str) -> Option<f64> {
        self.entries
            .iter()
            .filter(|e| e.user == user)
            .map(|e| e.odometer_end)
            .reduce(f64::max)
    }
}

/// A break between an edited row and the row that follows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainGap {
    pub row: usize,
    pub odometer_end: f64,
    pub next_row: usize,
    pub next_start: f64,
}

/// Result of a successful `edit`.
#[derive(Debug, Clone)]
pub struct Edited {
    pub entry: FuelEntry,
    /// Set only under `ChainPolicy::Warn`.
    pub chain_gap: Option<ChainGap>,
}

pub struct Ledger<S: RowStore> {
    store: S,
    chain_policy: ChainPolicy,
    schema_repaired: bool,
}

impl<S: RowStore> Ledger<S> {
    /// Wrap `store` and make sure row 1 holds the header.
    pub fn open(store: S, chain_policy: ChainPolicy) -> AppResult<Self> {
        let mut ledger = Self {
            store,
            chain_policy,
            schema_repaired: false,
        };
        ledger.schema_repaired = ledger.ensure_schema()?;
        Ok(ledger)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether `open` had to rewrite the header.
    pub fn schema_repaired(&self) -> bool {
        self.schema_repaired
    }

    /// If row 1 is missing or differs from the header, wipe the sheet and
    /// write the header. Returns `true` when a repair happened.
    pub fn ensure_schema(&mut self) -> AppResult<bool> {
        match self.store.header()? {
            Some(h) if is_canonical_header(&h) => Ok(false),
            _ => {
                self.store.clear()?;
                self.store.append(&header_cells())?;
                Ok(true)
            }
        }
    }

    /// Load every entry, tagged with its current row number.
    pub fn load(&self) -> AppResult<Snapshot> {
        let generation = self.store.generation()?;
        let entries = self
            .store
            .load_all()?
            .iter()
            .enumerate()
            .map(|(i, rec)| FuelEntry::from_record(rec, row_number_for(i)))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Snapshot {
            generation,
            entries,
        })
    }

    /// Record a fill-up starting at the cursor's odometer, stamped now.
    pub fn add(
        &mut self,
        cursor: SessionCursor,
        user: &str,
        odometer_end: f64,
        amount_paid: f64,
        fuel_price: f64,
    ) -> AppResult<(FuelEntry, SessionCursor)> {
        let now = Local::now().naive_local();
        self.add_at(now, cursor, user, odometer_end, amount_paid, fuel_price)
    }

    /// `add` with an explicit timestamp.
    pub fn add_at(
        &mut self,
        at: NaiveDateTime,
        cursor: SessionCursor,
        user: &str,
        odometer_end: f64,
        amount_paid: f64,
        fuel_price: f64,
    ) -> AppResult<(FuelEntry, SessionCursor)> {
        let input = EntryInput {
            user: user.to_string(),
            odometer_start: cursor.last_odometer,
            odometer_end,
            amount_paid,
            fuel_price,
        };
        let timestamp = at.format(TIMESTAMP_FORMAT).to_string();

        let mut entry = build_entry(&timestamp, &input, 0);
        entry.row_number = self.store.append(&entry.to_cells())?;

        Ok((entry, cursor.advance(odometer_end)))
    }

    /// Rewrite the row behind `handle` from fresh raw inputs, keeping
    /// `timestamp` as it was.
    pub fn edit(
        &mut self,
        handle: &RowHandle,
        timestamp: &str,
        input: &EntryInput,
    ) -> AppResult<Edited> {
        self.check_handle(handle)?;

        let entry = build_entry(timestamp, input, handle.row_number);

        let chain_gap = match self.chain_policy {
            ChainPolicy::Ignore => None,
            ChainPolicy::Warn | ChainPolicy::Reject => self.chain_gap_after(&entry)?,
        };

        if let (ChainPolicy::Reject, Some(gap)) = (self.chain_policy, chain_gap) {
            return Err(AppError::ChainMismatch {
                row: gap.row,
                odometer_end: gap.odometer_end,
                next_row: gap.next_row,
                next_start: gap.next_start,
            });
        }

        self.store
            .update_range(handle.row_number, &entry.to_cells())?;

        Ok(Edited { entry, chain_gap })
    }

    /// Remove the row behind `handle`. Every handle taken before this call
    /// is stale afterwards.
    pub fn delete(&mut self, handle: &RowHandle) -> AppResult<()> {
        self.check_handle(handle)?;
        self.store.delete_row(handle.row_number)
    }

    fn check_handle(&self, handle: &RowHandle) -> AppResult<()> {
        if handle.row_number <= HEADER_ROWS {
            return Err(AppError::InvalidRow(handle.row_number));
        }

        let actual = self.store.generation()?;
        if actual != handle.generation {
            return Err(AppError::StaleRow {
                row: handle.row_number,
                expected: handle.generation,
                actual,
            });
        }
        Ok(())
    }

    fn chain_gap_after(&self, edited: &FuelEntry) -> AppResult<Option<ChainGap>> {
        let snapshot = self.load()?;
        // cursors are per user, so the successor is the same user's next row
        let next = match snapshot
            .entries()
            .iter()
            .find(|e| e.row_number > edited.row_number && e.user == edited.user)
        {
            Some(n) => n,
            None => return Ok(None),
        };

        if next.odometer_start == edited.odometer_end {
            return Ok(None);
        }

        Ok(Some(ChainGap {
            row: edited.row_number,
            odometer_end: edited.odometer_end,
            next_row: next.row_number,
            next_start: next.odometer_start,
        }))
    }
}
