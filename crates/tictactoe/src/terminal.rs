//! Terminal presentation: renders notifications and reads human moves.

use std::io::{self, BufRead, Write};
use tictactoe_core::strategy::minimax;
use tictactoe_core::{
    Board, Cell, Coord, Game, GameError, GameEvent, GameObserver, Mark, Outcome,
};
use tracing::{error, instrument};

/// What the user typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at `(row, col)`.
    Move(usize, usize),
    /// Ask for the best move.
    Hint,
    /// Leave the match.
    Quit,
}

/// Parses a line of input.
///
/// Accepts a keypad digit `1`-`9`, a `row col` pair (space or comma
/// separated, zero-based), `h`/`hint` and `q`/`quit`. Out-of-range pairs
/// are passed through so the engine can reject them.
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "q" | "quit" | "exit" => return Some(Input::Quit),
        "h" | "hint" => return Some(Input::Hint),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [digit] => {
            let n: usize = digit.parse().ok()?;
            let coord = Coord::from_index(n.checked_sub(1)?)?;
            Some(Input::Move(coord.row(), coord.col()))
        }
        [row, col] => Some(Input::Move(row.parse().ok()?, col.parse().ok()?)),
        _ => None,
    }
}

/// Presenter that mirrors the board from notifications and draws it.
#[derive(Debug, Default)]
pub struct TerminalView {
    board: Board,
    json: bool,
}

impl TerminalView {
    /// Creates a view that draws the board, or prints JSON lines if `json`.
    pub fn new(json: bool) -> Self {
        Self {
            board: Board::new(),
            json,
        }
    }

    /// Board as seen through notifications.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Writes a prompt or status line. JSON mode keeps stdout for events.
    pub fn say(&self, text: &str) {
        if self.json {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }

    fn emit(&self, event: &GameEvent) {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => error!(error = %e, "Failed to encode event"),
        }
    }
}

impl GameObserver for TerminalView {
    fn on_cell_changed(&mut self, row: usize, col: usize, mark: Mark) {
        if let Err(e) = self.board.set_cell(row, col, Cell::Occupied(mark)) {
            error!(error = %e, "Notification for a cell off the board");
            return;
        }
        if self.json {
            self.emit(&GameEvent::CellChanged { row, col, mark });
        } else {
            println!("\n{mark} -> ({row}, {col})\n{}", self.board);
        }
    }

    fn on_game_over(&mut self, outcome: &Outcome) {
        if self.json {
            self.emit(&GameEvent::GameOver {
                outcome: outcome.clone(),
            });
        } else {
            println!("\nGame over: {outcome}");
        }
    }
}

/// Runs an interactive match until it finishes, input ends or the user quits.
#[instrument(skip_all)]
pub fn run_match<R: BufRead>(game: &mut Game<TerminalView>, input: R) -> io::Result<()> {
    if !game.observer().json && game.history().is_empty() {
        println!("{}", game.board());
    }

    let mut lines = input.lines();
    while game.is_in_progress() {
        let Some(player) = game.current_player() else {
            break;
        };
        let mark = player.mark();
        let prompt = format!("{player} to move [1-9, 'row col', h for hint, q to quit]: ");
        if game.observer().json {
            eprint!("{prompt}");
            io::stderr().flush()?;
        } else {
            print!("{prompt}");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        match parse_input(&line?) {
            Some(Input::Move(row, col)) => {
                if let Err(e) = game.submit_move(row, col) {
                    game.observer().say(&rejection_message(e));
                }
            }
            Some(Input::Hint) => {
                let text = hint(game.board(), mark);
                game.observer().say(&text);
            }
            Some(Input::Quit) => {
                game.observer().say("Match abandoned.");
                game.new_match();
            }
            None => game.observer().say("Unrecognized input."),
        }
    }
    Ok(())
}

fn rejection_message(error: GameError) -> String {
    match error {
        GameError::OutOfRange { .. } => format!("{error}. Rows and columns run 0-2."),
        GameError::CellOccupied { .. } => format!("{error}. Pick an empty cell."),
        GameError::NotInProgress | GameError::OutOfTurn => error.to_string(),
    }
}

fn hint(board: &Board, mark: Mark) -> String {
    let Some(coord) = minimax::select_move(board, mark) else {
        return "No moves left.".to_string();
    };
    let verdict = match minimax::evaluate_position(board, mark) {
        v if v > 0 => "winning",
        0 => "drawn",
        _ => "lost",
    };
    format!(
        "Best move: {} (keypad {}); position is {verdict} with best play.",
        coord,
        coord.index() + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_core::{GameState, Player, Strategy};

    #[test]
    fn test_parse_keypad_digits() {
        assert_eq!(parse_input("1"), Some(Input::Move(0, 0)));
        assert_eq!(parse_input(" 5 "), Some(Input::Move(1, 1)));
        assert_eq!(parse_input("9"), Some(Input::Move(2, 2)));
        assert_eq!(parse_input("0"), None);
        assert_eq!(parse_input("10"), None);
    }

    #[test]
    fn test_parse_pairs_and_commands() {
        assert_eq!(parse_input("2 1"), Some(Input::Move(2, 1)));
        assert_eq!(parse_input("0,2"), Some(Input::Move(0, 2)));
        assert_eq!(parse_input("4 4"), Some(Input::Move(4, 4)));
        assert_eq!(parse_input("Q"), Some(Input::Quit));
        assert_eq!(parse_input("hint"), Some(Input::Hint));
        assert_eq!(parse_input("a b"), None);
        assert_eq!(parse_input(""), None);
    }

    #[test]
    fn test_view_mirrors_engine_board() {
        let mut game = Game::with_seed(TerminalView::new(true), 5);
        game.start_game(
            Player::computer("R", Mark::X, Strategy::Random),
            Player::computer("Hal", Mark::O, Strategy::Optimal),
        );
        assert!(game.outcome().is_some());
        assert_eq!(game.observer().board(), game.board());
    }

    #[test]
    fn test_run_match_from_scripted_input() {
        let mut game = Game::with_seed(TerminalView::new(true), 1);
        game.start_game(
            Player::human("A", Mark::X),
            Player::computer("B", Mark::O, Strategy::Optimal),
        );
        let script = "h\n1\n1\nnonsense\n9\n8\n3\n4\n";
        run_match(&mut game, Cursor::new(script)).unwrap();
        assert_eq!(game.state(), &GameState::Finished(Outcome::Tie));
    }

    #[test]
    fn test_quit_returns_to_idle() {
        let mut game = Game::with_seed(TerminalView::new(true), 1);
        game.start_game(Player::human("A", Mark::X), Player::human("B", Mark::O));
        run_match(&mut game, Cursor::new("5\nq\n")).unwrap();
        assert_eq!(game.state(), &GameState::Idle);
    }
}
