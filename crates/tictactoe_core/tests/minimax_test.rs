//! Game-theoretic properties of the optimal strategy.

use tictactoe_core::strategy::minimax;
use tictactoe_core::{Board, Cell, Game, GameState, Mark, Outcome, Player, Strategy};

/// Plays every legal human line against the computer, asserting the
/// computer never loses. Returns the number of finished matches seen.
fn explore(game: &Game, computer: Mark) -> usize {
    match game.state() {
        GameState::Finished(outcome) => {
            if let Some(winner) = outcome.winner() {
                assert_eq!(
                    winner.mark(),
                    computer,
                    "optimal player lost:\n{}",
                    game.board()
                );
            }
            return 1;
        }
        GameState::InProgress => {}
        GameState::Idle => panic!("explored an idle game"),
    }

    let mut finished = 0;
    let moves: Vec<_> = game.board().empty_cells().collect();
    for coord in moves {
        let mut next = game.clone();
        next.submit_move(coord.row(), coord.col())
            .expect("empty cell on a live board is a legal move");
        finished += explore(&next, computer);
    }
    finished
}

#[test]
fn test_optimal_vs_optimal_always_ties() {
    for _ in 0..10 {
        let mut game = Game::new();
        game.start_game(
            Player::computer("Deep", Mark::X, Strategy::Optimal),
            Player::computer("Blue", Mark::O, Strategy::Optimal),
        );
        assert_eq!(game.state(), &GameState::Finished(Outcome::Tie));
        assert_eq!(game.history().len(), 9);
    }
}

#[test]
fn test_optimal_never_loses_as_second_player() {
    let mut game = Game::new();
    game.start_game(
        Player::human("Adversary", Mark::X),
        Player::computer("Hal", Mark::O, Strategy::Optimal),
    );
    let finished = explore(&game, Mark::O);
    assert!(finished > 0);
}

#[test]
fn test_optimal_never_loses_as_first_player() {
    let mut game = Game::new();
    game.start_game(
        Player::computer("Hal", Mark::X, Strategy::Optimal),
        Player::human("Adversary", Mark::O),
    );
    let finished = explore(&game, Mark::X);
    assert!(finished > 0);
}

#[test]
fn test_corner_opening_forces_center_reply() {
    let mut board = Board::new();
    board.set_cell(0, 0, Cell::Occupied(Mark::X)).unwrap();

    let reply = minimax::select_move(&board, Mark::O).unwrap();
    assert_eq!((reply.row(), reply.col()), (1, 1));

    // Every other reply loses against best play.
    for coord in board.empty_cells() {
        let mut trial = board.clone();
        trial.set(coord, Cell::Occupied(Mark::O));
        let value = -minimax::evaluate_position(&trial, Mark::X);
        if coord == reply {
            assert_eq!(value, minimax::TIE_SCORE);
        } else {
            assert_eq!(value, minimax::LOSS_SCORE, "reply {coord} should lose");
        }
    }
}

#[test]
fn test_select_move_preserves_board() {
    // Walk one self-play line and snapshot the board around every search.
    let mut board = Board::new();
    let mut mark = Mark::X;
    while board.evaluate_outcome().is_none() {
        let before = board.clone();
        let coord = minimax::select_move(&board, mark).unwrap();
        assert_eq!(board, before);
        assert!(board.is_empty(coord));
        board.set(coord, Cell::Occupied(mark));
        mark = mark.opponent();
    }
}
