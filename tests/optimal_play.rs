//! Exhaustive checks of the public API against every line of play an opponent can choose.

use tictactoe::{
    apply, best_move, initial_grid, is_terminal, legal_actions, player_to_move, score, winner,
    Action, BoardError, Grid, Player,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Plays every possible game in which `engine` answers with `best_move` and the other
/// side tries every legal action, calling `check` on each finished grid.
fn for_each_game_against(engine: Player, grid: Grid, check: &mut dyn FnMut(&Grid)) {
    if is_terminal(&grid) {
        check(&grid);
        return;
    }

    if player_to_move(&grid) == engine {
        let action = best_move(&grid).expect("non-terminal grid must have a best move");
        for_each_game_against(engine, apply(&grid, action).unwrap(), check);
    } else {
        for action in legal_actions(&grid) {
            for_each_game_against(engine, apply(&grid, action).unwrap(), check);
        }
    }
}

#[test]
fn test_x_never_loses() {
    init_logger();
    let mut games = 0;
    for_each_game_against(Player::X, initial_grid(), &mut |grid: &Grid| {
        games += 1;
        assert_ne!(winner(grid), Some(Player::O), "X lost:\n{}", grid);
    });
    assert!(games > 0);
}

#[test]
fn test_o_never_loses() {
    init_logger();
    let mut games = 0;
    for_each_game_against(Player::O, initial_grid(), &mut |grid: &Grid| {
        games += 1;
        assert_ne!(winner(grid), Some(Player::X), "O lost:\n{}", grid);
    });
    assert!(games > 0);
}

#[test]
fn test_perfect_play_draws() {
    init_logger();
    let mut grid = initial_grid();
    let mut expected = Player::X;
    while let Some(action) = best_move(&grid) {
        assert_eq!(player_to_move(&grid), expected);
        grid = apply(&grid, action).unwrap();
        expected = expected.opposite();
    }
    assert!(legal_actions(&grid).is_empty());
    assert_eq!(score(&grid), 0);
}

#[test]
fn test_errors_surface_to_caller() {
    let grid = apply(&initial_grid(), Action::new(0, 0)).unwrap();
    assert_eq!(
        apply(&grid, Action::new(0, 0)),
        Err(BoardError::CellOccupied { row: 0, col: 0 })
    );
    assert_eq!(
        apply(&grid, Action::new(0, 7)),
        Err(BoardError::OutOfBounds { row: 0, col: 7 })
    );
    assert_eq!(
        BoardError::OutOfBounds { row: 3, col: 0 }.to_string(),
        "Cannot apply action (3, 0), it lies outside the 3x3 grid"
    );
}

#[test]
fn test_terminal_matches_winner_or_full_grid() {
    for text in ["XXX/OO./...", "XOX/XOO/OXX", "X../.O./...", "XO./XO./X.."] {
        let grid: Grid = text.parse().unwrap();
        assert_eq!(
            is_terminal(&grid),
            winner(&grid).is_some() || legal_actions(&grid).is_empty(),
            "terminal check disagrees on\n{}",
            grid
        );
    }
}
