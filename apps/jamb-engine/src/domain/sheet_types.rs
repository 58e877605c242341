//! Core scoresheet types: Category (row), Column, CellRef

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Scoresheet row. Ids are stable: 0..=5 are Ones..Sixes, then Max, Min,
/// Trilling, FullHouse, Straight, Poker, Jamb.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Max,
    Min,
    Trilling,
    FullHouse,
    Straight,
    Poker,
    Jamb,
}

impl Category {
    pub const COUNT: usize = 13;

    pub const ALL: [Category; Self::COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Max,
        Category::Min,
        Category::Trilling,
        Category::FullHouse,
        Category::Straight,
        Category::Poker,
        Category::Jamb,
    ];

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_id(id: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| DomainError::out_of_range(format!("row {id} not in 0..13")))
    }

    /// Upper-section category for a die face (1 → Ones .. 6 → Sixes).
    pub fn for_face(face: u8) -> Option<Self> {
        match face {
            1..=6 => Some(Self::ALL[(face - 1) as usize]),
            _ => None,
        }
    }

    /// Die face counted by an upper-section row.
    pub const fn face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Ones => "1",
            Category::Twos => "2",
            Category::Threes => "3",
            Category::Fours => "4",
            Category::Fives => "5",
            Category::Sixes => "6",
            Category::Max => "Max",
            Category::Min => "Min",
            Category::Trilling => "Trilling",
            Category::FullHouse => "Full House",
            Category::Straight => "Straight",
            Category::Poker => "Poker",
            Category::Jamb => "Jamb",
        }
    }
}

/// Scoresheet column; each one enforces its own fill order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Column {
    Free,
    Up,
    Down,
    MaxMin,
    Announcement,
    Checkout,
}

impl Column {
    pub const COUNT: usize = 6;

    pub const ALL: [Column; Self::COUNT] = [
        Column::Free,
        Column::Up,
        Column::Down,
        Column::MaxMin,
        Column::Announcement,
        Column::Checkout,
    ];

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_id(id: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| DomainError::out_of_range(format!("column {id} not in 0..6")))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Column::Free => "Free",
            Column::Up => "Up",
            Column::Down => "Down",
            Column::MaxMin => "Max/Min",
            Column::Announcement => "Announcement",
            Column::Checkout => "Checkout",
        }
    }
}

/// Address of one scoresheet cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub column: Column,
    pub category: Category,
}

impl CellRef {
    pub const fn new(column: Column, category: Category) -> Self {
        Self { column, category }
    }

    /// Build from raw indices as a host UI reports them.
    pub fn from_ids(column: u8, row: u8) -> Result<Self, DomainError> {
        Ok(Self {
            column: Column::from_id(column)?,
            category: Category::from_id(row)?,
        })
    }

    /// Every cell of a sheet, column-major.
    pub fn all() -> impl Iterator<Item = CellRef> {
        Column::ALL.into_iter().flat_map(|column| {
            Category::ALL
                .into_iter()
                .map(move |category| CellRef { column, category })
        })
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.column.label(), self.category.label())
    }
}
