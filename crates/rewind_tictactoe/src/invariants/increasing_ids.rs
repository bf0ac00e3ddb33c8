//! Move ids are allocated in order and never reused.

use super::super::History;
use super::Invariant;

/// Invariant: ids strictly increase along the sequence and all of them are
/// below the history's id counter.
///
/// Together these guarantee that the next allocated id is fresh.
pub struct IncreasingIdsInvariant;

impl Invariant<History> for IncreasingIdsInvariant {
    fn holds(history: &History) -> bool {
        let moves = history.moves();
        let increasing = moves.windows(2).all(|w| w[0].id() < w[1].id());
        let below_counter = moves
            .last()
            .is_none_or(|last| last.id().value() < history.next_id());
        increasing && below_counter
    }

    fn description() -> &'static str {
        "Move ids strictly increase and stay below the id counter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_across_restart() {
        let played = History::new().select(Position::Center);
        let restarted = played.restart();

        assert!(IncreasingIdsInvariant::holds(&restarted));
        assert!(restarted.moves()[0].id() > played.moves()[1].id());
    }
}
