use focus_engine::board::{Board, Coord};
use focus_engine::engine::{FocusGame, MoveOutcome};
use focus_engine::errors::GameError;
use focus_engine::player::{Color, PlayerRecord};

const R: Color = Color('R');
const G: Color = Color('G');

fn new_game() -> FocusGame {
    FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).expect("valid players")
}

fn snapshot(game: &FocusGame) -> (Board, [PlayerRecord; 2], String) {
    (
        game.board().clone(),
        game.players().clone(),
        game.active_player().name().to_string(),
    )
}

/// Asserts the slide is rejected with `expected` and leaves the game as it was.
fn assert_rejected(
    game: &mut FocusGame,
    name: &str,
    from: (usize, usize),
    to: (usize, usize),
    count: usize,
    expected: GameError,
) {
    let before = snapshot(game);
    let err = game.move_piece(name, from, to, count).unwrap_err();
    assert_eq!(err, expected);
    assert_eq!(snapshot(game), before, "rejected move changed the game");
}

#[test]
fn single_piece_slide_stacks_on_neighbour_and_passes_turn() {
    let mut game = new_game();
    let outcome = game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(outcome.to_string(), "successfully moved");
    assert!(game.show_pieces((0, 0)).unwrap().is_empty());
    assert_eq!(game.show_pieces((0, 1)).unwrap(), &[R, R]);
    assert_eq!(game.active_player().name(), "PlayerB");
    assert_eq!(game.show_reserve("PlayerA"), 0);
    assert_eq!(game.show_captured("PlayerA"), 0);
}

#[test]
fn multi_piece_slides_keep_order_and_land_on_top() {
    let mut game = new_game();
    game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    game.move_piece("PlayerB", (1, 0), (0, 0), 1).unwrap();

    // Split a stack: only the top piece leaves
    game.move_piece("PlayerA", (0, 1), (1, 1), 1).unwrap();
    assert_eq!(game.show_pieces((0, 1)).unwrap(), &[R]);
    assert_eq!(game.show_pieces((1, 1)).unwrap(), &[G, R]);

    game.move_piece("PlayerB", (0, 0), (0, 1), 1).unwrap();
    assert_eq!(game.show_pieces((0, 1)).unwrap(), &[R, G]);

    // Whole two-piece stack moves one cell, order preserved
    game.move_piece("PlayerA", (1, 1), (0, 1), 2).unwrap();
    assert!(game.show_pieces((1, 1)).unwrap().is_empty());
    assert_eq!(game.show_pieces((0, 1)).unwrap(), &[R, G, G, R]);
    assert_eq!(game.active_player().name(), "PlayerB");
}

#[test]
fn two_pieces_may_travel_two_cells() {
    let mut game = new_game();
    game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    game.move_piece("PlayerB", (0, 2), (0, 3), 1).unwrap();
    let outcome = game.move_piece("PlayerA", (0, 1), (0, 3), 2).unwrap();
    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(game.show_pieces((0, 3)).unwrap(), &[G, G, R, R]);
}

#[test]
fn vertical_moves_work_in_both_directions() {
    let mut game = new_game();
    game.move_piece("PlayerA", (2, 0), (1, 0), 1).unwrap();
    game.move_piece("PlayerB", (3, 0), (4, 0), 1).unwrap();
    assert_eq!(game.show_pieces((1, 0)).unwrap(), &[G, R]);
    assert_eq!(game.show_pieces((4, 0)).unwrap(), &[R, G]);
}

#[test]
fn out_of_turn_moves_are_rejected() {
    let mut game = new_game();
    assert_rejected(
        &mut game,
        "PlayerB",
        (0, 2),
        (0, 1),
        1,
        GameError::NotPlayersTurn {
            expected: "PlayerA".to_string(),
            actual: "PlayerB".to_string(),
        },
    );
    assert_rejected(
        &mut game,
        "Stranger",
        (0, 0),
        (0, 1),
        1,
        GameError::NotPlayersTurn {
            expected: "PlayerA".to_string(),
            actual: "Stranger".to_string(),
        },
    );
}

#[test]
fn off_board_locations_are_rejected() {
    let mut game = new_game();
    assert_rejected(
        &mut game,
        "PlayerA",
        (0, 5),
        (0, 6),
        1,
        GameError::OutOfBounds { row: 0, col: 6 },
    );
    assert_rejected(
        &mut game,
        "PlayerA",
        (6, 0),
        (5, 0),
        1,
        GameError::OutOfBounds { row: 6, col: 0 },
    );
}

#[test]
fn diagonal_moves_are_rejected() {
    let mut game = new_game();
    assert_rejected(
        &mut game,
        "PlayerA",
        (0, 0),
        (1, 1),
        1,
        GameError::NotOrthogonal {
            from: Coord::new(0, 0),
            to: Coord::new(1, 1),
        },
    );
}

#[test]
fn staying_in_place_is_rejected() {
    let mut game = new_game();
    assert_rejected(
        &mut game,
        "PlayerA",
        (0, 0),
        (0, 0),
        1,
        GameError::ZeroDistance { at: Coord::new(0, 0) },
    );
}

#[test]
fn piece_count_must_fit_the_source_stack() {
    let mut game = new_game();
    assert_rejected(
        &mut game,
        "PlayerA",
        (0, 0),
        (0, 1),
        0,
        GameError::InvalidPieceCount { count: 0, height: 1 },
    );
    assert_rejected(
        &mut game,
        "PlayerA",
        (0, 0),
        (0, 1),
        2,
        GameError::InvalidPieceCount { count: 2, height: 1 },
    );

    game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    game.move_piece("PlayerB", (0, 2), (0, 3), 1).unwrap();
    // The emptied cell has nothing to move
    assert_rejected(
        &mut game,
        "PlayerA",
        (0, 0),
        (1, 0),
        1,
        GameError::InvalidPieceCount { count: 1, height: 0 },
    );
}

#[test]
fn stacks_topped_by_the_opponent_cannot_be_moved() {
    let mut game = new_game();
    assert_rejected(
        &mut game,
        "PlayerA",
        (0, 2),
        (0, 3),
        1,
        GameError::NotStackOwner { at: Coord::new(0, 2), color: R },
    );

    // Covering a stack hands control to whoever is on top
    game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    game.move_piece("PlayerB", (0, 2), (0, 1), 1).unwrap();
    assert_rejected(
        &mut game,
        "PlayerA",
        (0, 1),
        (0, 0),
        3,
        GameError::NotStackOwner { at: Coord::new(0, 1), color: R },
    );
}

#[test]
fn distance_may_not_exceed_piece_count() {
    let mut game = new_game();
    assert_rejected(
        &mut game,
        "PlayerA",
        (0, 0),
        (2, 0),
        1,
        GameError::DistanceExceedsCount { distance: 2, count: 1 },
    );
}

#[test]
fn rejected_moves_keep_the_turn_and_the_game_usable() {
    let mut game = new_game();
    for _ in 0..3 {
        assert!(game.move_piece("PlayerA", (0, 0), (3, 3), 1).is_err());
    }
    assert_eq!(game.active_player().name(), "PlayerA");
    assert_eq!(game.move_piece("PlayerA", (0, 0), (0, 1), 1), Ok(MoveOutcome::Moved));
}
