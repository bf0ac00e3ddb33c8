//! Rewind tic-tac-toe - pure move-history engine
//!
//! A tic-tac-toe game whose every position stays reachable: the history
//! records one board snapshot per move, any snapshot can be selected again,
//! and playing from a rewound snapshot discards the abandoned future.
//!
//! # Architecture
//!
//! - **History**: immutable move sequence plus the selected move
//! - **Rules**: pure functions deriving turn, winner and status from a board
//! - **Invariants**: composable checks run after transitions and on decode
//! - **Fetch**: request lifecycle status machine
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameStatus, History, Player, Position};
//!
//! let history = History::new()
//!     .select(Position::TopLeft)
//!     .select(Position::Center);
//! assert_eq!(history.status(), GameStatus::InProgress(Player::X));
//!
//! let start = history.moves()[0].id();
//! let rewound = history.jump_to(start).unwrap().select(Position::BottomRight);
//! assert_eq!(rewound.moves().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod fetch;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Board and players
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Move history
pub use history::{History, HistoryError, MAX_STORED_NEXT_ID, Move, MoveEntry, MoveId};

// Crate-level exports - Rules
pub use rules::{is_full, next_player, status, winner};

// Crate-level exports - Fetch lifecycle
pub use fetch::{FetchAction, FetchState, FetchStatus};
