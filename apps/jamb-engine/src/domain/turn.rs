//! Turn controller: every state-changing operation of a game.
//!
//! Each operation validates first and mutates second, so a rejected call
//! leaves the state untouched.

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::domain::dice::{DiceRoller, DiceSet};
use crate::domain::rules::{valid_player_count, MAX_PLAYERS, NUMBER_OF_DICE};
use crate::domain::scoring::{compute_scores, ScoreSnapshot};
use crate::domain::sheet::PlayerSheet;
use crate::domain::sheet_types::{Category, CellRef, Column};
use crate::domain::state::{GameState, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of a roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    pub dice: [u8; NUMBER_OF_DICE],
    /// 1-based number of this roll within the turn.
    pub roll_no: u8,
    pub remaining_rolls: u8,
    pub snapshot: ScoreSnapshot,
    /// The previous selection stopped being writable and was cleared.
    pub selection_cleared: bool,
}

/// Result of an announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceResult {
    pub cell: CellRef,
    /// Player who now owes a checkout write, if any.
    pub checkout_for: Option<PlayerId>,
}

/// Result of writing a value, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Player whose sheet received the value.
    pub player: PlayerId,
    pub cell: CellRef,
    pub value: u16,
    /// Player who owes a checkout write because of this turn's announcement.
    pub checkout_for: Option<PlayerId>,
    /// Seat that acts next (also set when the game just ended).
    pub next_player: PlayerId,
    /// Every player has now finished the hand.
    pub hand_completed: bool,
    pub game_over: bool,
}

/// One row of the final or running standings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub total: i32,
}

/// Create a fresh game state with one empty sheet per name.
pub fn start_game<S: AsRef<str>>(
    names: &[S],
    config: GameConfig,
) -> Result<GameState, DomainError> {
    if !valid_player_count(names.len()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("{} players; expected 1..={MAX_PLAYERS}", names.len()),
        ));
    }
    config.validate()?;

    let state = GameState {
        sheets: names.iter().map(|n| PlayerSheet::new(n.as_ref())).collect(),
        active: 0,
        dice: DiceSet::new(),
        rolls: 0,
        hands_remaining: config.hands,
        announced: None,
        selection: None,
        snapshot: None,
        config,
    };

    info!(
        players = state.player_count(),
        hands = state.config.hands,
        "Game started"
    );
    Ok(state)
}

fn ensure_in_progress(state: &GameState) -> Result<(), DomainError> {
    if state.is_complete() {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            "Game is complete",
        ));
    }
    Ok(())
}

/// Roll every unheld die and score the result.
pub fn roll_dice(
    state: &mut GameState,
    roller: &mut dyn DiceRoller,
) -> Result<RollResult, DomainError> {
    ensure_in_progress(state)?;

    let budget = state.roll_budget();
    if state.rolls >= budget {
        return Err(DomainError::validation(
            ValidationKind::RollBudgetExceeded,
            format!("All {budget} rolls used"),
        ));
    }

    let dice = state.dice.roll_all(roller);
    state.rolls += 1;
    let snapshot = compute_scores(dice);
    state.snapshot = Some(snapshot);

    // Rolling past the announcement window can lock the selected cell
    let mut selection_cleared = false;
    if let Some(cell) = state.selection {
        if !state.active_sheet().is_writable(cell, state.write_gate()) {
            state.selection = None;
            selection_cleared = true;
        }
    }

    debug!(
        player = state.active,
        roll = state.rolls,
        ?dice,
        "Dice rolled"
    );

    Ok(RollResult {
        dice,
        roll_no: state.rolls,
        remaining_rolls: state.remaining_rolls(),
        snapshot,
        selection_cleared,
    })
}

/// Flip the held flag of one die. Returns the new flag.
pub fn toggle_hold(state: &mut GameState, die_index: usize) -> Result<bool, DomainError> {
    ensure_in_progress(state)?;
    if die_index >= NUMBER_OF_DICE {
        return Err(DomainError::out_of_range(format!(
            "die index {die_index} not in 0..{NUMBER_OF_DICE}"
        )));
    }
    if state.rolls == 0 {
        return Err(DomainError::validation(
            ValidationKind::DiceNotRolled,
            "Roll before holding dice",
        ));
    }
    let held = state.dice.toggle_hold(die_index)?;
    debug!(player = state.active, die_index, held, "Hold toggled");
    Ok(held)
}

/// Select `cell` for the next write. Returns `false` and keeps the previous
/// selection when the cell is not writable right now.
pub fn choose_cell(state: &mut GameState, cell: CellRef) -> Result<bool, DomainError> {
    ensure_in_progress(state)?;
    if !state.active_sheet().is_writable(cell, state.write_gate()) {
        debug!(player = state.active, %cell, "Selection rejected");
        return Ok(false);
    }
    state.selection = Some(cell);
    debug!(player = state.active, %cell, "Cell selected");
    Ok(true)
}

/// Announce `cell`: the active sheet is locked to it and the next player owes
/// a write into the same row of their Checkout column.
pub fn announce(state: &mut GameState, cell: CellRef) -> Result<AnnounceResult, DomainError> {
    ensure_in_progress(state)?;

    if let Some(row) = state.active_sheet().checkout() {
        return Err(DomainError::validation(
            ValidationKind::CheckoutPending,
            format!("Checkout {} must be written first", row.label()),
        ));
    }
    if state.announced.is_some() {
        return Err(DomainError::validation(
            ValidationKind::AnnouncementClosed,
            "Already announced this turn",
        ));
    }
    if state.rolls != 1 {
        return Err(DomainError::validation(
            ValidationKind::AnnouncementClosed,
            format!("Announce right after the first roll (rolls taken: {})", state.rolls),
        ));
    }
    if !state.active_sheet().is_writable(cell, state.write_gate()) {
        return Err(DomainError::illegal_assignment(format!(
            "{cell} cannot be announced"
        )));
    }

    state.announced = Some(cell);
    state.selection = Some(cell);
    let checkout_for = designate_checkout(state, cell.category);

    info!(player = state.active, %cell, ?checkout_for, "Announced");
    Ok(AnnounceResult { cell, checkout_for })
}

/// Hand the checkout obligation for `row` to the next player. A lone player
/// would owe it to themselves, so nothing is recorded.
fn designate_checkout(state: &mut GameState, row: Category) -> Option<PlayerId> {
    let next = state.next_player(state.active);
    if next == state.active {
        return None;
    }
    state.sheets[next].set_checkout(row);
    Some(next)
}

/// Write `value` into the selected cell and pass the turn.
///
/// `value` must equal the score of the selected row for the current dice,
/// or 0 before the first roll.
pub fn write_value(state: &mut GameState, value: u16) -> Result<WriteResult, DomainError> {
    ensure_in_progress(state)?;

    let Some(cell) = state.selection else {
        return Err(DomainError::validation(
            ValidationKind::NoSelection,
            "Select a cell before writing",
        ));
    };

    let expected = state
        .snapshot
        .map_or(0, |snapshot| snapshot.score(cell.category));
    if value != expected {
        return Err(DomainError::validation(
            ValidationKind::ScoreMismatch,
            format!("{cell} scores {expected}, not {value}"),
        ));
    }

    let player = state.active;
    let gate = state.write_gate();
    state.sheets[player].assign(cell, value, gate)?;

    // Nothing below can fail.
    state.sheets[player].clear_checkout();
    let announced = state.announced;
    let checkout_for = match announced {
        Some(announced) => Some(state.next_player(player)).filter(|&next| {
            next != player && state.sheets[next].checkout() == Some(announced.category)
        }),
        // Writing into the Announcement column counts as announcing that row
        None if cell.column == Column::Announcement => designate_checkout(state, cell.category),
        None => None,
    };

    info!(player, %cell, value, "Value written");

    let next_player = state.next_player(player);
    let hand_completed = next_player == 0;
    if hand_completed {
        state.hands_remaining -= 1;
        info!(hands_remaining = state.hands_remaining, "Hand completed");
    }
    state.active = next_player;
    state.dice.reset();
    state.rolls = 0;
    state.announced = None;
    state.selection = None;
    state.snapshot = None;

    let game_over = state.is_complete();
    if game_over {
        info!(totals = ?totals(state), "Game complete");
    } else {
        begin_turn(state);
    }

    Ok(WriteResult {
        player,
        cell,
        value,
        checkout_for,
        next_player,
        hand_completed,
        game_over,
    })
}

/// Settle the new active player's checkout obligation.
fn begin_turn(state: &mut GameState) {
    let active = state.active;
    let Some(row) = state.sheets[active].checkout() else {
        return;
    };
    if state.sheets[active].checkout_cell_open() {
        state.selection = Some(CellRef::new(Column::Checkout, row));
        return;
    }
    state.sheets[active].clear_checkout();
    warn!(
        player = active,
        row = row.label(),
        "Checkout cell already filled; obligation dropped"
    );
}

fn totals(state: &GameState) -> Vec<i32> {
    state.sheets.iter().map(PlayerSheet::grand_total).collect()
}

/// Players ordered by grand total, highest first; ties keep seat order.
pub fn standings(state: &GameState) -> Vec<Standing> {
    let mut rows: Vec<Standing> = state
        .sheets
        .iter()
        .enumerate()
        .map(|(player, sheet)| Standing {
            player,
            name: sheet.name.clone(),
            total: sheet.grand_total(),
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}
