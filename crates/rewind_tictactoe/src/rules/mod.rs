//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here is stored:
//! turn order, winner and status are always recomputed from the squares.

pub mod draw;
pub mod status;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use status::status;
pub use turn::next_player;
pub use win::{LINES, winner};
