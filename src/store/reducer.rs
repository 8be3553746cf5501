//! Reducer trait for store state transitions.

use super::action::Action;
use super::state::StateRecord;

/// Pure state transition: `(State, Action) -> State`.
///
/// Reducers are the only place state changes. They must not perform side
/// effects; effects run after the dispatch and re-enter the store with a
/// completion action of their own.
pub trait Reducer {
    /// The state record this reducer operates on.
    type State: StateRecord;

    /// The action type this reducer handles.
    type Action: Action;

    /// Apply `action` to `state` and return the successor state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
