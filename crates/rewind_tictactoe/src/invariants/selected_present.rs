//! The selected pointer always resolves.

use super::super::History;
use super::Invariant;

/// Invariant: the selected id names a move in the sequence.
pub struct SelectedPresentInvariant;

impl Invariant<History> for SelectedPresentInvariant {
    fn holds(history: &History) -> bool {
        history.contains(history.selected())
    }

    fn description() -> &'static str {
        "The selected move is present in the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_jump() {
        let history = History::new()
            .select(Position::Center)
            .select(Position::TopLeft);
        let first = history.moves()[0].id();
        let jumped = history.jump_to(first).expect("first move exists");

        assert!(SelectedPresentInvariant::holds(&jumped));
        assert_eq!(jumped.selected(), first);
    }
}
