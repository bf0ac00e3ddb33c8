//! Status classification.

use super::super::{Board, GameStatus};
use super::{is_full, next_player, winner};
use tracing::instrument;

/// Classifies `board` as won, drawn or still in progress.
///
/// A winner takes precedence over a full board.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(next_player(board))
    }
}
