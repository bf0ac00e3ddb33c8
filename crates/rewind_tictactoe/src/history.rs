//! Move-history engine.
//!
//! A [`History`] is an immutable value: every transition returns a new
//! history and leaves the receiver untouched. The sequence of moves is
//! linear; rewinding with [`History::jump_to`] only moves the selection,
//! and the abandoned future is discarded by the next [`History::select`].

use super::invariants::{HistoryInvariants, InvariantSet, describe};
use super::position::Position;
use super::rules::{next_player, status, winner};
use super::types::{Board, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Identifier of a move within a history.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct MoveId(u64);

impl MoveId {
    /// Wraps a raw id.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One snapshot in the history: the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    id: MoveId,
    board: Board,
}

impl Move {
    pub(crate) fn new(id: MoveId, board: Board) -> Self {
        Self { id, board }
    }

    /// Returns the move's id.
    pub fn id(&self) -> MoveId {
        self.id
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Error returned by history transitions and decoding.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// No move with this id exists in the history.
    #[display("Move {} not found in history", _0)]
    MoveNotFound(MoveId),

    /// A decoded history broke one or more invariants.
    #[display("History invariant violated: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for HistoryError {}

/// Largest id counter a decoded history may carry.
///
/// Leaves room for every id a history can issue after loading.
pub const MAX_STORED_NEXT_ID: u64 = u64::MAX / 2;

/// Ordered moves plus the currently selected one.
///
/// Invariants (see [`HistoryInvariants`]): the sequence is never empty, the
/// selected id is present, ids strictly increase below `next_id`, the first
/// board is empty and each later board adds one mark for the player to move,
/// never after a win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    moves: Vec<Move>,
    selected: MoveId,
    next_id: u64,
}

/// Unvalidated wire form of a [`History`].
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryRecord {
    pub(crate) moves: Vec<Move>,
    pub(crate) selected: MoveId,
    pub(crate) next_id: u64,
}

impl TryFrom<HistoryRecord> for History {
    type Error = HistoryError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        if record.next_id > MAX_STORED_NEXT_ID {
            return Err(HistoryError::InvariantViolation(format!(
                "id counter {} exceeds {}",
                record.next_id, MAX_STORED_NEXT_ID
            )));
        }
        let history = Self::from_record_unchecked(record);
        HistoryInvariants::check_all(&history)
            .map_err(|violations| HistoryError::InvariantViolation(describe(&violations)))?;
        Ok(history)
    }
}

impl History {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    fn starting_at(next_id: u64) -> Self {
        let id = MoveId(next_id);
        Self {
            moves: vec![Move::new(id, Board::new())],
            selected: id,
            next_id: next_id + 1,
        }
    }

    pub(crate) fn from_record_unchecked(record: HistoryRecord) -> Self {
        Self {
            moves: record.moves,
            selected: record.selected,
            next_id: record.next_id,
        }
    }

    /// Returns all moves in chronological order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the id of the selected move.
    pub fn selected(&self) -> MoveId {
        self.selected
    }

    /// Returns the id the next move will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns true if a move with `id` is in the sequence.
    pub fn contains(&self, id: MoveId) -> bool {
        self.moves.iter().any(|m| m.id == id)
    }

    /// Index of the selected move in the sequence.
    pub fn selected_index(&self) -> usize {
        let index = self.moves.iter().position(|m| m.id == self.selected);
        debug_assert!(index.is_some(), "selected move missing from history");
        index.unwrap_or(self.moves.len() - 1)
    }

    /// Returns true when the selected move is the latest one.
    pub fn is_at_latest(&self) -> bool {
        self.selected_index() + 1 == self.moves.len()
    }

    /// Returns the board of the selected move.
    pub fn current_board(&self) -> &Board {
        &self.moves[self.selected_index()].board
    }

    /// Returns the status of the selected board.
    pub fn status(&self) -> GameStatus {
        status(self.current_board())
    }

    /// Plays the next player's mark at `pos`.
    ///
    /// Returns an unchanged copy when the current board is already won or
    /// `pos` is occupied. If the selection was rewound, moves after it are
    /// dropped before the new move is appended. The new move is selected.
    #[instrument(skip(self), fields(selected = %self.selected, len = self.moves.len()))]
    pub fn select(&self, pos: Position) -> Self {
        let board = self.current_board();

        if let Some(winner) = winner(board) {
            debug!(%winner, "Game already decided, ignoring select");
            return self.clone();
        }
        if !board.is_empty(pos) {
            debug!("Square occupied, ignoring select");
            return self.clone();
        }

        let player = next_player(board);
        let next_board = board.with_mark(pos, player);

        let keep = self.selected_index() + 1;
        if keep < self.moves.len() {
            debug!(discarded = self.moves.len() - keep, "Discarding abandoned moves");
        }

        let id = MoveId(self.next_id);
        let mut moves = self.moves[..keep].to_vec();
        moves.push(Move::new(id, next_board));

        let history = Self {
            moves,
            selected: id,
            next_id: self.next_id + 1,
        };
        debug!(%player, move_id = %id, "Move appended");
        assert_invariants(&history);
        history
    }

    /// Discards every move and starts over from an empty board.
    ///
    /// The new starting move gets an id this history has never issued.
    #[instrument(skip(self), fields(len = self.moves.len()))]
    pub fn restart(&self) -> Self {
        let history = Self::starting_at(self.next_id);
        assert_invariants(&history);
        history
    }

    /// Selects the move with `id` without changing the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveNotFound`] if `id` is not in the history.
    #[instrument(skip(self), fields(selected = %self.selected))]
    pub fn jump_to(&self, id: MoveId) -> Result<Self, HistoryError> {
        if !self.contains(id) {
            debug!("Jump target not in history");
            return Err(HistoryError::MoveNotFound(id));
        }

        Ok(Self {
            selected: id,
            ..self.clone()
        })
    }

    /// Entries for a navigable move list, one per move.
    pub fn entries(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        self.moves.iter().enumerate().map(|(index, m)| MoveEntry {
            index,
            id: m.id,
            is_current: m.id == self.selected,
        })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics in debug builds if `history` breaks an invariant.
fn assert_invariants(history: &History) {
    debug_assert!(
        HistoryInvariants::check_all(history).is_ok(),
        "History invariants violated: {:?}",
        HistoryInvariants::check_all(history)
    );
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    /// Position in the sequence; 0 is the starting board.
    pub index: usize,
    /// Id to pass to [`History::jump_to`].
    pub id: MoveId,
    /// Whether this is the selected move.
    pub is_current: bool,
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.index == 0 {
            write!(f, "Go to game start")?;
        } else {
            write!(f, "Go to move #{}", self.index)?;
        }
        if self.is_current {
            write!(f, " (current)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_new_history_has_one_empty_move() {
        let history = History::new();
        assert_eq!(history.moves().len(), 1);
        assert_eq!(history.selected(), history.moves()[0].id());
        assert_eq!(history.current_board(), &Board::new());
        assert!(history.is_at_latest());
    }

    #[test]
    fn test_select_appends_and_selects() {
        let history = History::new().select(Position::TopLeft);

        assert_eq!(history.moves().len(), 2);
        assert_eq!(history.selected(), history.moves()[1].id());
        assert_eq!(
            history.current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_select_occupied_is_noop() {
        let history = History::new().select(Position::Center);
        assert_eq!(history.select(Position::Center), history);
    }

    #[test]
    fn test_select_does_not_touch_receiver() {
        let history = History::new();
        let _ = history.select(Position::Center);
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_jump_keeps_sequence() {
        let history = History::new()
            .select(Position::Center)
            .select(Position::TopLeft);
        let jumped = history
            .jump_to(history.moves()[0].id())
            .expect("start move exists");

        assert_eq!(jumped.moves(), history.moves());
        assert!(!jumped.is_at_latest());
        assert_eq!(jumped.current_board(), &Board::new());
    }

    #[test]
    fn test_jump_unknown_id() {
        let history = History::new();
        assert_eq!(
            history.jump_to(MoveId::new(42)),
            Err(HistoryError::MoveNotFound(MoveId::new(42)))
        );
    }

    #[test]
    fn test_entry_labels() {
        let history = History::new()
            .select(Position::Center)
            .select(Position::TopLeft);
        let history = history
            .jump_to(history.moves()[1].id())
            .expect("move 1 exists");

        let labels: Vec<String> = history.entries().map(|e| e.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "Go to move #1 (current)",
                "Go to move #2",
            ]
        );
    }
}
