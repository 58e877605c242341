use engine_test_support::fixtures::player_names;

use crate::config::GameConfig;
use crate::domain::dice::ScriptedRoller;
use crate::domain::sheet_types::{Category, CellRef, Column};
use crate::domain::state::{GameState, TurnPhase};
use crate::domain::turn::{
    announce, choose_cell, roll_dice, standings, start_game, toggle_hold, write_value,
};
use crate::errors::domain::ValidationKind;

fn new_game(players: usize, hands: u8) -> GameState {
    start_game(&player_names(players), GameConfig::default().with_hands(hands)).unwrap()
}

fn straight_roller() -> ScriptedRoller {
    ScriptedRoller::new([1, 2, 3, 4, 5, 6])
}

fn cell(column: Column, category: Category) -> CellRef {
    CellRef::new(column, category)
}

/// Write whatever the current dice score in the selected row.
fn write_selected(state: &mut GameState) -> crate::domain::turn::WriteResult {
    let cell = state.selection.unwrap();
    let value = state.snapshot.map_or(0, |s| s.score(cell.category));
    write_value(state, value).unwrap()
}

fn fingerprint(state: &GameState) -> serde_json::Value {
    serde_json::to_value(state).unwrap()
}

#[test]
fn start_rejects_bad_player_counts() {
    for n in [0, 5] {
        let err = start_game(&player_names(n), GameConfig::default()).unwrap_err();
        assert!(err.is(ValidationKind::InvalidPlayerCount), "{n} players");
    }
}

#[test]
fn start_rejects_invalid_config() {
    let err = start_game(&player_names(2), GameConfig::default().with_hands(0)).unwrap_err();
    assert!(err.is(ValidationKind::InvalidConfig));
}

#[test]
fn fresh_game_waits_for_first_roll() {
    let state = new_game(3, 5);
    assert_eq!(state.active, 0);
    assert_eq!(state.hands_remaining, 5);
    assert_eq!(state.remaining_rolls(), 3);
    assert_eq!(state.phase(), TurnPhase::AwaitingRoll { rolls: 0 });
    assert_eq!(state.sheets.len(), 3);
    assert_eq!(state.sheets[2].name, "Player 3");
}

#[test]
fn phases_follow_rolls() {
    let mut state = new_game(2, 5);
    let mut roller = straight_roller();

    roll_dice(&mut state, &mut roller).unwrap();
    assert_eq!(state.phase(), TurnPhase::AwaitingAnnouncementChoice);
    roll_dice(&mut state, &mut roller).unwrap();
    assert_eq!(state.phase(), TurnPhase::AwaitingRoll { rolls: 2 });
    let last = roll_dice(&mut state, &mut roller).unwrap();
    assert_eq!(last.remaining_rolls, 0);
    assert_eq!(state.phase(), TurnPhase::RolledAwaitingWrite);
}

#[test]
fn roll_budget_exhausted_leaves_state_unchanged() {
    let mut state = new_game(2, 5);
    let mut roller = straight_roller();
    for _ in 0..3 {
        roll_dice(&mut state, &mut roller).unwrap();
    }
    let before = fingerprint(&state);

    let err = roll_dice(&mut state, &mut roller).unwrap_err();
    assert!(err.is(ValidationKind::RollBudgetExceeded));
    assert_eq!(fingerprint(&state), before);
}

#[test]
fn final_hand_grants_five_rolls_to_every_player() {
    let mut state = new_game(2, 1);
    let mut roller = straight_roller();
    for player in 0..2 {
        assert_eq!(state.active, player);
        assert_eq!(state.remaining_rolls(), 5);
        for _ in 0..5 {
            roll_dice(&mut state, &mut roller).unwrap();
        }
        assert!(roll_dice(&mut state, &mut roller)
            .unwrap_err()
            .is(ValidationKind::RollBudgetExceeded));
        assert!(choose_cell(&mut state, cell(Column::Free, Category::Max)).unwrap());
        write_selected(&mut state);
    }
    assert!(state.is_complete());
}

#[test]
fn regular_hand_budget_is_three() {
    let state = new_game(1, 2);
    assert_eq!(state.roll_budget(), 3);
}

#[test]
fn write_without_selection_fails() {
    let mut state = new_game(2, 5);
    let err = write_value(&mut state, 0).unwrap_err();
    assert!(err.is(ValidationKind::NoSelection));
}

#[test]
fn second_write_without_new_selection_fails() {
    let mut state = new_game(2, 5);
    let mut roller = straight_roller();
    roll_dice(&mut state, &mut roller).unwrap();
    assert!(choose_cell(&mut state, cell(Column::Free, Category::Straight)).unwrap());
    let result = write_value(&mut state, 100).unwrap();
    assert_eq!(result.next_player, 1);

    let err = write_value(&mut state, 100).unwrap_err();
    assert!(err.is(ValidationKind::NoSelection));
}

#[test]
fn written_value_must_match_score() {
    let mut state = new_game(2, 5);
    let mut roller = ScriptedRoller::new([2, 2, 2, 3, 3, 6]);
    roll_dice(&mut state, &mut roller).unwrap();
    let target = cell(Column::Free, Category::FullHouse);
    assert!(choose_cell(&mut state, target).unwrap());
    let before = fingerprint(&state);

    let err = write_value(&mut state, 50).unwrap_err();
    assert!(err.is(ValidationKind::ScoreMismatch));
    assert_eq!(fingerprint(&state), before);

    write_value(&mut state, 52).unwrap();
    assert_eq!(state.sheets[0].value(target), Some(52));
}

#[test]
fn scratch_write_before_rolling_is_zero() {
    let mut state = new_game(1, 5);
    let target = cell(Column::Down, Category::Jamb);
    assert!(choose_cell(&mut state, target).unwrap());
    assert!(write_value(&mut state, 5)
        .unwrap_err()
        .is(ValidationKind::ScoreMismatch));
    let result = write_value(&mut state, 0).unwrap();
    assert_eq!(result.cell, target);
    assert_eq!(state.sheets[0].value(target), Some(0));
}

#[test]
fn choose_cell_rejects_locked_cells_and_keeps_selection() {
    let mut state = new_game(1, 5);
    let good = cell(Column::Up, Category::Ones);
    assert!(choose_cell(&mut state, good).unwrap());
    assert!(!choose_cell(&mut state, cell(Column::Up, Category::Twos)).unwrap());
    assert!(!choose_cell(&mut state, cell(Column::Checkout, Category::Ones)).unwrap());
    assert_eq!(state.selection, Some(good));
}

#[test]
fn hold_requires_a_roll() {
    let mut state = new_game(1, 5);
    let err = toggle_hold(&mut state, 0).unwrap_err();
    assert!(err.is(ValidationKind::DiceNotRolled));
}

#[test]
fn hold_index_checked_before_roll() {
    let mut state = new_game(1, 5);
    let err = toggle_hold(&mut state, 9).unwrap_err();
    assert!(err.is(ValidationKind::IndexOutOfRange));
    assert_eq!(state.rolls, 0);
}

#[test]
fn held_dice_survive_reroll() {
    let mut state = new_game(1, 5);
    let mut roller = ScriptedRoller::new([6, 6, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2]);
    roll_dice(&mut state, &mut roller).unwrap();
    assert!(toggle_hold(&mut state, 0).unwrap());
    assert!(toggle_hold(&mut state, 1).unwrap());
    let second = roll_dice(&mut state, &mut roller).unwrap();
    assert_eq!(&second.dice[..2], &[6, 6]);
    assert!(toggle_hold(&mut state, 6)
        .unwrap_err()
        .is(ValidationKind::IndexOutOfRange));
}

#[test]
fn announcement_window_is_after_first_roll_only() {
    let mut state = new_game(2, 5);
    let mut roller = straight_roller();
    let target = cell(Column::Free, Category::Poker);

    assert!(announce(&mut state, target)
        .unwrap_err()
        .is(ValidationKind::AnnouncementClosed));

    roll_dice(&mut state, &mut roller).unwrap();
    roll_dice(&mut state, &mut roller).unwrap();
    assert!(announce(&mut state, target)
        .unwrap_err()
        .is(ValidationKind::AnnouncementClosed));
}

#[test]
fn announce_only_once_and_only_writable_cells() {
    let mut state = new_game(2, 5);
    let mut roller = straight_roller();
    roll_dice(&mut state, &mut roller).unwrap();

    assert!(announce(&mut state, cell(Column::Up, Category::Jamb))
        .unwrap_err()
        .is(ValidationKind::IllegalAssignment));

    announce(&mut state, cell(Column::Free, Category::Straight)).unwrap();
    assert!(announce(&mut state, cell(Column::Free, Category::Jamb))
        .unwrap_err()
        .is(ValidationKind::AnnouncementClosed));
}

#[test]
fn announcement_hands_checkout_to_next_player() {
    let mut state = new_game(2, 5);
    let mut roller = straight_roller();
    let announced = cell(Column::Free, Category::Poker);

    roll_dice(&mut state, &mut roller).unwrap();
    let result = announce(&mut state, announced).unwrap();
    assert_eq!(result.checkout_for, Some(1));
    assert_eq!(state.selection, Some(announced));
    assert_eq!(state.writable_cells(), vec![announced]);
    assert!(!choose_cell(&mut state, cell(Column::Free, Category::Ones)).unwrap());

    // Remaining rolls are still allowed after announcing
    roll_dice(&mut state, &mut roller).unwrap();
    assert_eq!(state.selection, Some(announced));
    let written = write_selected(&mut state);
    assert_eq!(written.checkout_for, Some(1));

    // Player 1 may write nothing but the checkout cell
    let checkout = cell(Column::Checkout, Category::Poker);
    assert_eq!(state.active, 1);
    assert_eq!(state.selection, Some(checkout));
    assert_eq!(state.writable_cells(), vec![checkout]);

    roll_dice(&mut state, &mut roller).unwrap();
    assert!(announce(&mut state, cell(Column::Free, Category::Ones))
        .unwrap_err()
        .is(ValidationKind::CheckoutPending));
    assert_eq!(state.phase(), TurnPhase::AwaitingRoll { rolls: 1 });

    write_selected(&mut state);
    assert_eq!(state.sheets[1].checkout(), None);
    assert!(state.sheets[1].value(checkout).is_some());
}

#[test]
fn writing_into_announcement_column_designates_checkout() {
    let mut state = new_game(3, 5);
    let mut roller = straight_roller();
    roll_dice(&mut state, &mut roller).unwrap();
    assert!(choose_cell(&mut state, cell(Column::Announcement, Category::Sixes)).unwrap());
    let result = write_selected(&mut state);

    assert_eq!(result.checkout_for, Some(1));
    assert_eq!(state.sheets[1].checkout(), Some(Category::Sixes));
    assert_eq!(state.sheets[2].checkout(), None);
}

#[test]
fn announcement_column_locks_after_second_roll() {
    let mut state = new_game(2, 5);
    let mut roller = straight_roller();
    let target = cell(Column::Announcement, Category::Ones);

    roll_dice(&mut state, &mut roller).unwrap();
    assert!(choose_cell(&mut state, target).unwrap());

    let second = roll_dice(&mut state, &mut roller).unwrap();
    assert!(second.selection_cleared);
    assert_eq!(state.selection, None);
    assert!(!choose_cell(&mut state, target).unwrap());
}

#[test]
fn single_player_announcement_records_no_checkout() {
    let mut state = new_game(1, 5);
    let mut roller = straight_roller();
    roll_dice(&mut state, &mut roller).unwrap();
    let result = announce(&mut state, cell(Column::Announcement, Category::Straight)).unwrap();
    assert_eq!(result.checkout_for, None);

    let written = write_selected(&mut state);
    assert_eq!(written.checkout_for, None);
    assert_eq!(written.next_player, 0);
    assert!(written.hand_completed);
    assert_eq!(state.sheets[0].checkout(), None);
}

#[test]
fn checkout_on_filled_cell_is_dropped() {
    let mut state = new_game(2, 5);
    let mut roller = straight_roller();

    // Player 0 announces Poker; player 1 fills Checkout/Poker.
    roll_dice(&mut state, &mut roller).unwrap();
    announce(&mut state, cell(Column::Free, Category::Poker)).unwrap();
    write_selected(&mut state);
    write_selected(&mut state);
    assert!(state.sheets[1]
        .value(cell(Column::Checkout, Category::Poker))
        .is_some());

    // Player 0 announces Poker again in another column.
    roll_dice(&mut state, &mut roller).unwrap();
    announce(&mut state, cell(Column::Announcement, Category::Poker)).unwrap();
    assert_eq!(state.sheets[1].checkout(), Some(Category::Poker));
    write_selected(&mut state);

    assert_eq!(state.active, 1);
    assert_eq!(state.sheets[1].checkout(), None);
    assert_eq!(state.selection, None);
    assert!(state.writable_cells().len() > 1);
}

#[test]
fn hands_count_down_on_wrap_and_game_ends() {
    let mut state = new_game(2, 2);
    let scratch = |state: &mut GameState, category| {
        assert!(choose_cell(state, cell(Column::Free, category)).unwrap());
        write_value(state, 0).unwrap()
    };

    let r = scratch(&mut state, Category::Ones);
    assert!(!r.hand_completed);
    assert_eq!(state.hands_remaining, 2);
    let r = scratch(&mut state, Category::Ones);
    assert!(r.hand_completed);
    assert_eq!(state.hands_remaining, 1);
    assert_eq!(state.hand_no(), 2);
    scratch(&mut state, Category::Twos);
    let r = scratch(&mut state, Category::Twos);
    assert!(r.game_over);

    assert!(state.is_complete());
    assert_eq!(state.phase(), TurnPhase::TurnComplete);
    assert_eq!(state.remaining_rolls(), 0);
    assert!(state.writable_cells().is_empty());

    let mut roller = straight_roller();
    assert!(roll_dice(&mut state, &mut roller)
        .unwrap_err()
        .is(ValidationKind::GameOver));
    assert!(choose_cell(&mut state, cell(Column::Free, Category::Sixes))
        .unwrap_err()
        .is(ValidationKind::GameOver));
}

#[test]
fn standings_order_by_total() {
    let mut state = new_game(3, 1);
    let mut roller = straight_roller();
    // Seat 0 scratches, seat 1 writes a straight, seat 2 writes Sixes.
    assert!(choose_cell(&mut state, cell(Column::Free, Category::Ones)).unwrap());
    write_value(&mut state, 0).unwrap();
    roll_dice(&mut state, &mut roller).unwrap();
    assert!(choose_cell(&mut state, cell(Column::Free, Category::Straight)).unwrap());
    write_selected(&mut state);
    roll_dice(&mut state, &mut roller).unwrap();
    assert!(choose_cell(&mut state, cell(Column::Free, Category::Sixes)).unwrap());
    write_selected(&mut state);

    let table = standings(&state);
    let order: Vec<usize> = table.iter().map(|s| s.player).collect();
    assert_eq!(order, vec![1, 2, 0]);
    assert_eq!(table[0].total, 100);
    assert_eq!(table[1].total, 6);
    assert_eq!(table[2].name, "Player 1");
}
