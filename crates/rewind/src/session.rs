//! A game bound to a store.

use derive_more::{Display, Error, From};
use rewind_tictactoe::{History, HistoryError, MoveId, Position};
use tracing::{info, instrument};

use crate::store::{KeyValueStore, PersistentState, StoreError};

/// A player intent, as issued by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Mark a cell for the player to move.
    Select(Position),
    /// Rewind or fast-forward to a move.
    JumpTo(MoveId),
    /// Start a new game.
    Restart,
}

/// Failure while applying an intent.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The store rejected a read or write.
    #[display("{}", _0)]
    Store(StoreError),
    /// The engine rejected the intent.
    #[display("{}", _0)]
    History(HistoryError),
}

/// Move history loaded from a store and saved back after every intent.
#[derive(Debug)]
pub struct GameSession<S> {
    store: S,
    state: PersistentState<History>,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Opens the game saved under `key`, or a fresh one if none is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    #[instrument(skip(store))]
    pub fn open(store: S, key: &str) -> Result<Self, StoreError> {
        let state = PersistentState::load(&store, key, History::new)?;
        info!(moves = state.value().moves().len(), "Session opened");
        Ok(Self { store, state })
    }

    /// Returns the current history.
    pub fn history(&self) -> &History {
        self.state.value()
    }

    /// Applies `intent` and persists the resulting history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::History`] for an unknown jump target and
    /// [`SessionError::Store`] if saving fails. The session keeps its
    /// previous history in both cases.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) -> Result<&History, SessionError> {
        let current = self.state.value();
        let next = match intent {
            Intent::Select(pos) => current.select(pos),
            Intent::JumpTo(id) => current.jump_to(id)?,
            Intent::Restart => current.restart(),
        };

        self.state.set(&mut self.store, next)?;
        Ok(self.state.value())
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }
}
