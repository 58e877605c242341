// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::rules::NUMBER_OF_DICE;
use crate::domain::sheet_types::{Category, CellRef, Column};

/// A rolled die face.
pub fn face() -> impl Strategy<Value = u8> {
    1u8..=6
}

/// Six rolled dice.
pub fn dice() -> impl Strategy<Value = [u8; NUMBER_OF_DICE]> {
    prop::array::uniform6(face())
}

/// Which dice are held before a reroll.
pub fn hold_mask() -> impl Strategy<Value = [bool; NUMBER_OF_DICE]> {
    prop::array::uniform6(any::<bool>())
}

pub fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

pub fn column() -> impl Strategy<Value = Column> {
    prop::sample::select(Column::ALL.to_vec())
}

pub fn cell_ref() -> impl Strategy<Value = CellRef> {
    (column(), category()).prop_map(|(column, category)| CellRef::new(column, category))
}

pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: engine_test_support::fixtures::proptest_cases(256),
        ..ProptestConfig::default()
    }
}
