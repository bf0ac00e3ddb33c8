//! Monotonic board invariant: each move adds exactly one mark.

use super::super::{Board, History, Player, Position, Square};
use super::Invariant;

/// Invariant: the first board is empty and every later board equals its
/// predecessor plus exactly one new mark.
///
/// Marks are never removed or overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<History> for MonotonicBoardInvariant {
    fn holds(history: &History) -> bool {
        let moves = history.moves();
        let starts_empty = moves.first().is_none_or(|m| *m.board() == Board::new());
        starts_empty
            && moves
                .windows(2)
                .all(|w| added_mark(w[0].board(), w[1].board()).is_some())
    }

    fn description() -> &'static str {
        "Boards start empty and each move adds exactly one mark"
    }
}

/// Returns the single mark `after` adds to `before`, or `None` if the boards
/// differ in any other way.
pub(crate) fn added_mark(before: &Board, after: &Board) -> Option<(Position, Player)> {
    let mut added = None;
    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(player)) if added.is_none() => {
                added = Some((pos, player));
            }
            _ => return None,
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_new_mark_is_found() {
        let before = Board::new().with_mark(Position::Center, Player::X);
        let after = before.with_mark(Position::TopLeft, Player::O);
        assert_eq!(
            added_mark(&before, &after),
            Some((Position::TopLeft, Player::O))
        );
    }

    #[test]
    fn test_unchanged_board_adds_nothing() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(added_mark(&board, &board), None);
    }

    #[test]
    fn test_two_new_marks_rejected() {
        let after = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        assert_eq!(added_mark(&Board::new(), &after), None);
    }

    #[test]
    fn test_overwritten_mark_rejected() {
        let before = Board::new().with_mark(Position::Center, Player::X);
        let after = Board::new().with_mark(Position::Center, Player::O);
        assert_eq!(added_mark(&before, &after), None);
    }

    #[test]
    fn test_holds_through_play() {
        let history = History::new()
            .select(Position::Center)
            .select(Position::TopLeft);
        assert!(MonotonicBoardInvariant::holds(&history));
    }
}
