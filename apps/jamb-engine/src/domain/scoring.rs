//! Dice → candidate score for every category.

use serde::{Deserialize, Serialize};

use crate::domain::rules::NUMBER_OF_DICE;
use crate::domain::sheet_types::Category;

const TRILLING_BONUS: u16 = 30;
const FULL_HOUSE_BONUS: u16 = 40;
const POKER_BONUS: u16 = 50;
const JAMB_BONUS: u16 = 60;
const JAMB_FLAT: u16 = 100;
const JAMB_ONES_SIX: u16 = 150;

const LOW_STRAIGHT: u16 = 45;
const HIGH_STRAIGHT: u16 = 50;
const FULL_STRAIGHT: u16 = 100;

/// Scores the current roll would earn in each category.
///
/// Recomputed on every roll; never persisted past the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub dice: [u8; NUMBER_OF_DICE],
    scores: [u16; Category::COUNT],
}

impl ScoreSnapshot {
    pub fn score(&self, category: Category) -> u16 {
        self.scores[category.index()]
    }

    /// Categories with a non-zero score, in row order.
    pub fn achieved(&self) -> impl Iterator<Item = (Category, u16)> + '_ {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.score(c)))
            .filter(|&(_, s)| s > 0)
    }

    pub fn as_array(&self) -> [u16; Category::COUNT] {
        self.scores
    }
}

/// Compute the candidate score for every category.
///
/// Faces must be in `1..=6`; a 0 (unrolled die) is ignored for every
/// category except that it still contributes nothing to Max and Min.
pub fn compute_scores(dice: [u8; NUMBER_OF_DICE]) -> ScoreSnapshot {
    debug_assert!(dice.iter().all(|d| *d <= 6), "die face out of range: {dice:?}");

    let mut counts = [0u16; 7];
    for &face in &dice {
        if (1..=6).contains(&face) {
            counts[face as usize] += 1;
        }
    }

    let mut scores = [0u16; Category::COUNT];

    // Ascending face order: a later qualifying face overwrites an earlier one.
    for face in 1..=6u16 {
        let count = counts[face as usize];
        if count == 0 {
            continue;
        }
        let base = face * count;
        scores[(face - 1) as usize] = base;

        if count < 3 {
            continue;
        }
        scores[Category::Trilling.index()] = base + TRILLING_BONUS;

        for other in 1..=6u16 {
            if other != face && counts[other as usize] == 2 {
                scores[Category::FullHouse.index()] = base + other * 2 + FULL_HOUSE_BONUS;
            }
        }

        if count >= 4 {
            scores[Category::Poker.index()] = base + POKER_BONUS;
        }

        if count >= 5 {
            scores[Category::Jamb.index()] = jamb_score(face, count, base);
        }
    }

    let mut sorted = dice;
    sorted.sort_unstable();
    let total: u16 = sorted.iter().map(|&d| d as u16).sum();
    scores[Category::Max.index()] = total;
    scores[Category::Min.index()] = total - sorted[NUMBER_OF_DICE - 1] as u16;

    scores[Category::Straight.index()] = straight_score(&counts);

    ScoreSnapshot { dice, scores }
}

/// Five of a kind scores base + 60, six of a kind a flat 100. Ones are
/// special: five ones give 100 and six ones give 150.
fn jamb_score(face: u16, count: u16, base: u16) -> u16 {
    match (face, count) {
        (1, 6) => JAMB_ONES_SIX,
        (_, 6) => JAMB_FLAT,
        (1, _) => JAMB_FLAT,
        _ => base + JAMB_BONUS,
    }
}

fn straight_score(counts: &[u16; 7]) -> u16 {
    let present = |faces: std::ops::RangeInclusive<usize>| faces.into_iter().all(|f| counts[f] > 0);
    let distinct = (1..=6).filter(|&f| counts[f] > 0).count();
    if distinct < NUMBER_OF_DICE - 1 {
        return 0;
    }

    if distinct == NUMBER_OF_DICE {
        FULL_STRAIGHT
    } else if present(2..=6) {
        HIGH_STRAIGHT
    } else if present(1..=5) {
        LOW_STRAIGHT
    } else {
        0
    }
}
