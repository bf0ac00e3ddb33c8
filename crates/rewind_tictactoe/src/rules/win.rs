//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning triples in scan order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player owning the first complete triple in [`LINES`] order.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Returns the player holding all three squares of `line`, if any.
pub fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.player()
    } else {
        None
    }
}
