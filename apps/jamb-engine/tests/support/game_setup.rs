//! Game construction and turn helpers shared by integration tests.

use engine_test_support::fixtures::player_names;
use jamb_engine::domain::ScriptedRoller;
use jamb_engine::{CellRef, DomainError, Game, GameConfig, PlayerId};

/// A game whose dice replay `faces` in a loop.
pub fn scripted_game(players: usize, hands: u8, faces: &[u8]) -> Game {
    Game::with_roller(
        &player_names(players),
        GameConfig::default().with_hands(hands),
        ScriptedRoller::new(faces.iter().copied()),
    )
    .unwrap()
}

pub fn seeded_game(players: usize, hands: u8, seed: u64) -> Game {
    Game::start(
        &player_names(players),
        GameConfig::default().with_hands(hands).with_seed(seed),
    )
    .unwrap()
}

/// Score the current dice would earn in `cell`, 0 before the first roll.
pub fn score_for(game: &Game, cell: CellRef) -> u16 {
    game.snapshot().map_or(0, |s| s.score(cell.category))
}

/// Select `cell` and write its current score.
pub fn write_cell(game: &mut Game, cell: CellRef) -> Result<PlayerId, DomainError> {
    assert!(game.choose_cell(cell)?, "{cell} should be writable");
    let value = score_for(game, cell);
    game.write_value(value)
}

/// Roll once and write the first writable cell.
pub fn quick_turn(game: &mut Game) -> PlayerId {
    game.roll_dice().unwrap();
    let cell = game.writable_cells()[0];
    write_cell(game, cell).unwrap()
}
