//! Rewind - a persistent command-line front end for the move-history engine
//!
//! Each invocation loads the saved history, applies one intent, writes the
//! result back and prints the new position.
//!
//! # Architecture
//!
//! - **Store**: string-keyed persistence collaborator and the
//!   storage-backed [`PersistentState`]
//! - **Session**: binds a [`History`](rewind_tictactoe::History) to a store
//! - **Config**: TOML settings for where games are saved
//! - **View**: plain-text rendering of board, status and move list

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;
mod store;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, RewindConfig};

// Crate-level exports - Persistence
pub use store::{DirStore, KeyValueStore, MemoryStore, PersistentState, StoreError};

// Crate-level exports - Sessions
pub use session::{GameSession, Intent, SessionError};

// Crate-level exports - Views
pub use view::{render, render_moves};
