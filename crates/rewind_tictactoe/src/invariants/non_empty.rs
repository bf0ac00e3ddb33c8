//! A history always has at least its initial move.

use super::super::History;
use super::Invariant;

/// Invariant: the move sequence is never empty.
pub struct NonEmptyInvariant;

impl Invariant<History> for NonEmptyInvariant {
    fn holds(history: &History) -> bool {
        !history.moves().is_empty()
    }

    fn description() -> &'static str {
        "History contains at least one move"
    }
}
