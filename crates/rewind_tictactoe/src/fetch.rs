//! Request lifecycle status machine.
//!
//! Tracks one asynchronous lookup from the caller's point of view. The
//! reducer is total: every action is valid in every state, so there is no
//! "unknown action" failure mode.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Coarse lifecycle label, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum FetchStatus {
    /// Nothing requested yet.
    Idle,
    /// Request in flight.
    Pending,
    /// Request succeeded.
    Resolved,
    /// Request failed.
    Rejected,
}

/// Lifecycle state with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchState<T, E> {
    /// Nothing requested yet.
    Idle,
    /// Request in flight; any previous payload or error is cleared.
    Pending,
    /// Request succeeded with data.
    Resolved(T),
    /// Request failed with an error.
    Rejected(E),
}

/// Event fed to [`FetchState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchAction<T, E> {
    /// A request was issued.
    Start,
    /// The request returned data.
    Resolve(T),
    /// The request failed.
    Reject(E),
}

impl<T, E> FetchAction<T, E> {
    fn status(&self) -> FetchStatus {
        match self {
            FetchAction::Start => FetchStatus::Pending,
            FetchAction::Resolve(_) => FetchStatus::Resolved,
            FetchAction::Reject(_) => FetchStatus::Rejected,
        }
    }
}

impl<T, E> FetchState<T, E> {
    /// Applies `action`, consuming the previous state.
    ///
    /// The next state depends only on the action: `Start` always yields
    /// `Pending`, `Resolve` yields `Resolved`, `Reject` yields `Rejected`.
    #[instrument(skip_all, fields(from = %self.status(), to = %action.status()))]
    pub fn reduce(self, action: FetchAction<T, E>) -> Self {
        debug!("Fetch state transition");
        match action {
            FetchAction::Start => FetchState::Pending,
            FetchAction::Resolve(data) => FetchState::Resolved(data),
            FetchAction::Reject(error) => FetchState::Rejected(error),
        }
    }

    /// Returns the payload-free status.
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Pending => FetchStatus::Pending,
            FetchState::Resolved(_) => FetchStatus::Resolved,
            FetchState::Rejected(_) => FetchStatus::Rejected,
        }
    }

    /// Returns true before any request was made.
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    /// Returns true while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// Returns the resolved data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Resolved(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the rejection error, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            FetchState::Rejected(error) => Some(error),
            _ => None,
        }
    }
}

impl<T, E> Default for FetchState<T, E> {
    fn default() -> Self {
        FetchState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = FetchState<&'static str, String>;

    #[test]
    fn test_default_is_idle() {
        let state = State::default();
        assert!(state.is_idle());
        assert_eq!(state.status().to_string(), "idle");
    }

    #[test]
    fn test_start_resolve() {
        let state = State::default().reduce(FetchAction::Start);
        assert!(state.is_pending());

        let state = state.reduce(FetchAction::Resolve("pikachu"));
        assert_eq!(state.data(), Some(&"pikachu"));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_start_reject() {
        let state = State::default()
            .reduce(FetchAction::Start)
            .reduce(FetchAction::Reject("not found".to_string()));

        assert_eq!(state.status(), FetchStatus::Rejected);
        assert_eq!(state.error().map(String::as_str), Some("not found"));
        assert_eq!(state.data(), None);
    }

    #[test]
    fn test_restart_clears_previous_payload() {
        let resolved = State::Resolved("mew");
        let pending = resolved.reduce(FetchAction::Start);
        assert_eq!(pending, State::Pending);
        assert_eq!(pending.data(), None);

        let rejected = State::Rejected("boom".to_string());
        assert_eq!(rejected.reduce(FetchAction::Start), State::Pending);
    }

    #[test]
    fn test_status_labels() {
        let labels: Vec<String> = <FetchStatus as strum::IntoEnumIterator>::iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(labels, vec!["idle", "pending", "resolved", "rejected"]);
    }
}
