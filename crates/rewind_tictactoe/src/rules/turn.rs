//! Turn order.

use super::super::{Board, Player};

/// Returns whose turn it is: X on an even number of marks, O on an odd one.
pub fn next_player(board: &Board) -> Player {
    if board.occupied() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}
