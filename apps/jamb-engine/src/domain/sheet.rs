//! A player's scoresheet: 6 columns × 13 rows of write-once cells.

use serde::{Deserialize, Serialize};

use crate::domain::columns::{self, CellState, WriteGate};
use crate::domain::rules::{UPPER_BONUS, UPPER_BONUS_THRESHOLD};
use crate::domain::sheet_types::{Category, CellRef, Column};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: Option<u16>,
}

impl Cell {
    pub fn value(&self) -> Option<u16> {
        self.value
    }

    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    /// Value used in totals; unassigned cells count as 0.
    fn points(&self) -> i32 {
        self.value.map_or(0, i32::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSheet {
    pub name: String,
    cells: [[Cell; Category::COUNT]; Column::COUNT],
    /// Checkout row designated by the previous player's announcement.
    checkout: Option<Category>,
}

impl PlayerSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: [[Cell::default(); Category::COUNT]; Column::COUNT],
            checkout: None,
        }
    }

    pub fn cell(&self, cell: CellRef) -> &Cell {
        &self.cells[cell.column.index()][cell.category.index()]
    }

    pub fn value(&self, cell: CellRef) -> Option<u16> {
        self.cell(cell).value()
    }

    pub fn assigned_rows(&self, column: Column) -> [bool; Category::COUNT] {
        self.cells[column.index()].map(|c| c.is_assigned())
    }

    pub fn assigned_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_assigned()).count()
    }

    pub fn is_full(&self) -> bool {
        self.assigned_count() == Column::COUNT * Category::COUNT
    }

    pub fn checkout(&self) -> Option<Category> {
        self.checkout
    }

    pub(crate) fn set_checkout(&mut self, row: Category) {
        self.checkout = Some(row);
    }

    pub(crate) fn clear_checkout(&mut self) -> Option<Category> {
        self.checkout.take()
    }

    /// Whether the pending checkout can still be honoured.
    pub fn checkout_cell_open(&self) -> bool {
        self.checkout
            .is_some_and(|row| !self.cell(CellRef::new(Column::Checkout, row)).is_assigned())
    }

    /// Cells the player may write under `gate`, in column-major order.
    ///
    /// A pending checkout overrides everything: only the designated Checkout
    /// cell is writable. If a closed Announcement window would leave no cell
    /// at all, the Announcement column stays open.
    pub fn writable_cells(&self, gate: WriteGate) -> Vec<CellRef> {
        if let Some(row) = self.checkout {
            let target = CellRef::new(Column::Checkout, row);
            return if self.cell(target).is_assigned() {
                Vec::new()
            } else {
                vec![target]
            };
        }

        match gate {
            WriteGate::Announced(target) => {
                if self.cell(target).is_assigned() {
                    Vec::new()
                } else {
                    vec![target]
                }
            }
            WriteGate::Open { announcement_open } => {
                let cells = self.rule_cells(announcement_open);
                if cells.is_empty() && !announcement_open {
                    self.rule_cells(true)
                } else {
                    cells
                }
            }
        }
    }

    fn rule_cells(&self, announcement_open: bool) -> Vec<CellRef> {
        Column::ALL
            .into_iter()
            .filter(|&c| announcement_open || c != Column::Announcement)
            .flat_map(|column| {
                columns::writable_rows(column, &self.assigned_rows(column))
                    .into_iter()
                    .map(move |category| CellRef::new(column, category))
            })
            .collect()
    }

    pub fn cell_state(&self, cell: CellRef, gate: WriteGate) -> CellState {
        if self.writable_cells(gate).contains(&cell) {
            CellState::Writable
        } else {
            CellState::Locked
        }
    }

    pub fn is_writable(&self, cell: CellRef, gate: WriteGate) -> bool {
        self.cell_state(cell, gate) == CellState::Writable
    }

    /// Write `value` into `cell`. Fails without touching the sheet if the cell
    /// is already filled or not writable under `gate`.
    pub fn assign(
        &mut self,
        cell: CellRef,
        value: u16,
        gate: WriteGate,
    ) -> Result<(), DomainError> {
        if self.cell(cell).is_assigned() {
            return Err(DomainError::illegal_assignment(format!(
                "{cell} already holds a value"
            )));
        }
        if !self.is_writable(cell, gate) {
            return Err(DomainError::illegal_assignment(format!("{cell} is locked")));
        }
        self.cells[cell.column.index()][cell.category.index()].value = Some(value);
        Ok(())
    }

    /// Column total: upper rows (+30 at 60 or more), the Max/Min difference
    /// scaled by the Ones row once Min holds a value, then the lower rows.
    pub fn column_total(&self, column: Column) -> i32 {
        let col = &self.cells[column.index()];
        let at = |c: Category| col[c.index()].points();

        let mut total: i32 = col[..6].iter().map(Cell::points).sum();
        if total >= UPPER_BONUS_THRESHOLD {
            total += UPPER_BONUS;
        }

        if at(Category::Min) > 0 {
            total += (at(Category::Max) - at(Category::Min)) * at(Category::Ones);
        }

        total + col[Category::Trilling.index()..].iter().map(Cell::points).sum::<i32>()
    }

    pub fn column_totals(&self) -> [i32; Column::COUNT] {
        Column::ALL.map(|c| self.column_total(c))
    }

    pub fn grand_total(&self) -> i32 {
        self.column_totals().iter().sum()
    }
}
