//! First-class invariants for move histories.
//!
//! Invariants are logical properties that must hold for every [`History`]
//! the engine hands out. They are checked after each transition in debug
//! builds and always when a history is decoded from storage.

use super::History;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Implements [`InvariantSet`] for a tuple of invariants.
macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

mod alternating_turn;
mod increasing_ids;
mod monotonic_board;
mod non_empty;
mod selected_present;

pub use alternating_turn::AlternatingTurnInvariant;
pub use increasing_ids::IncreasingIdsInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use non_empty::NonEmptyInvariant;
pub use selected_present::SelectedPresentInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    NonEmptyInvariant,
    SelectedPresentInvariant,
    IncreasingIdsInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
);

/// Joins violation descriptions into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
