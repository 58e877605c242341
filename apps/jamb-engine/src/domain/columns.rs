//! Per-column cell availability.
//!
//! Each column exposes its writable rows as a function of which rows are
//! already assigned. Turn-level restrictions (announcement, checkout) are
//! layered on top by [`WriteGate`] and the sheet.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::domain::sheet_types::{Category, CellRef, Column};

/// Fill policy of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOrder {
    /// Every unassigned row is writable.
    Any,
    /// Lowest unassigned row first (0 → 12).
    Ascending,
    /// Highest unassigned row first (12 → 0).
    Descending,
    /// Rows 0..=6 ascending and rows 7..=12 descending, both heads open.
    Split,
    /// Locked unless a checkout designates a row.
    Designated,
}

const UPPER_HALF: RangeInclusive<usize> = 0..=6;
const LOWER_HALF: RangeInclusive<usize> = 7..=12;
const ALL_ROWS: RangeInclusive<usize> = 0..=12;

impl Column {
    pub const fn fill_order(self) -> FillOrder {
        match self {
            Column::Free | Column::Announcement => FillOrder::Any,
            Column::Up => FillOrder::Ascending,
            Column::Down => FillOrder::Descending,
            Column::MaxMin => FillOrder::Split,
            Column::Checkout => FillOrder::Designated,
        }
    }
}

/// Cell availability state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Locked,
    Writable,
}

/// Turn-level restriction on which cells the active player may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteGate {
    /// Column rules apply; the Announcement column only while the window is open.
    Open { announcement_open: bool },
    /// The player announced this cell; nothing else is writable.
    Announced(CellRef),
}

impl WriteGate {
    /// Every column open, including Announcement.
    pub const OPEN: WriteGate = WriteGate::Open {
        announcement_open: true,
    };
}

/// Rows of `column` that are writable by column rules alone.
///
/// `assigned[row]` is true when that row already holds a value.
pub fn writable_rows(column: Column, assigned: &[bool; Category::COUNT]) -> Vec<Category> {
    let rows: Vec<usize> = match column.fill_order() {
        FillOrder::Any => ALL_ROWS.filter(|&r| !assigned[r]).collect(),
        FillOrder::Ascending => lowest_open(assigned, ALL_ROWS).into_iter().collect(),
        FillOrder::Descending => highest_open(assigned, ALL_ROWS).into_iter().collect(),
        FillOrder::Split => lowest_open(assigned, UPPER_HALF)
            .into_iter()
            .chain(highest_open(assigned, LOWER_HALF))
            .collect(),
        FillOrder::Designated => Vec::new(),
    };
    rows.into_iter().map(|r| Category::ALL[r]).collect()
}

pub fn row_state(column: Column, row: Category, assigned: &[bool; Category::COUNT]) -> CellState {
    if writable_rows(column, assigned).contains(&row) {
        CellState::Writable
    } else {
        CellState::Locked
    }
}

fn lowest_open(assigned: &[bool; Category::COUNT], range: RangeInclusive<usize>) -> Option<usize> {
    range.into_iter().find(|&r| !assigned[r])
}

fn highest_open(assigned: &[bool; Category::COUNT], range: RangeInclusive<usize>) -> Option<usize> {
    range.into_iter().rev().find(|&r| !assigned[r])
}
