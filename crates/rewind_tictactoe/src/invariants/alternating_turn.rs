//! Alternating turn invariant: the player to move made each mark.

use super::super::History;
use super::Invariant;
use super::monotonic_board::added_mark;
use crate::rules::{next_player, winner};

/// Invariant: every move was played by the player to move, on a board that
/// was not already won.
///
/// Steps that do not add exactly one mark are left to
/// [`MonotonicBoardInvariant`](super::MonotonicBoardInvariant).
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history.moves().windows(2).all(|w| {
            let before = w[0].board();
            match added_mark(before, w[1].board()) {
                Some((_, player)) => winner(before).is_none() && player == next_player(before),
                None => true,
            }
        })
    }

    fn description() -> &'static str {
        "Players alternate and nobody moves after a win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryRecord;
    use crate::{Board, Move, MoveId, Player, Position};

    fn history_of(boards: &[Board]) -> History {
        let moves: Vec<Move> = boards
            .iter()
            .enumerate()
            .map(|(i, board)| Move::new(MoveId::new(i as u64), *board))
            .collect();
        History::from_record_unchecked(HistoryRecord {
            selected: MoveId::new(0),
            next_id: moves.len() as u64,
            moves,
        })
    }

    #[test]
    fn test_holds_through_play() {
        let history = History::new()
            .select(Position::Center)
            .select(Position::TopLeft)
            .select(Position::BottomRight);
        assert!(AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let history = history_of(&[
            Board::new(),
            Board::new().with_mark(Position::Center, Player::O),
        ]);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_move_after_win_violates() {
        let won = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::MiddleLeft, Player::O)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::MiddleRight, Player::O)
            .with_mark(Position::TopRight, Player::X);
        let after = won.with_mark(Position::Center, Player::O);
        let history = history_of(&[Board::new(), won, after]);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
