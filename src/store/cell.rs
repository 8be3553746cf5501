//! State container shared between a store and its effects.

use tokio::sync::watch;

use super::reducer::Reducer;
use super::state::StateRecord;

/// Holds one feature's state record and applies reducers to it.
///
/// Built on a `watch` channel: writes replace the record wholesale and
/// notify subscribers, reads borrow the current record. Reducer application
/// runs inside the channel's own lock, so it is exclusive per store and a
/// reader can never observe a partially-applied transition. Effects must
/// not hold the lock across an await; they read a snapshot, suspend, and
/// re-enter through another dispatch.
pub struct StateCell<S: StateRecord> {
    tx: watch::Sender<S>,
}

impl<S: StateRecord> StateCell<S> {
    /// Create a cell holding the initial state.
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone of the current state record.
    pub fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Run a selector against the current state without cloning the record.
    pub fn with<R>(&self, read: impl FnOnce(&S) -> R) -> R {
        read(&self.tx.borrow())
    }

    /// Apply a reducer to the current state and notify subscribers.
    ///
    /// Returns the resulting record so callers can capture values (such as
    /// the generation counter) atomically with the transition.
    pub fn dispatch<R>(&self, action: R::Action) -> S
    where
        R: Reducer<State = S>,
    {
        let mut next = S::default();
        self.tx.send_modify(|state| {
            let prev = std::mem::take(state);
            *state = R::reduce(prev, action);
            next = state.clone();
        });
        next
    }

    /// Apply a reducer only if `applies` holds for the state at apply time.
    ///
    /// The predicate runs inside the same critical section as the reducer,
    /// which is what makes it safe against completions racing each other.
    /// Subscribers are notified only when the action was applied. Returns
    /// whether it was.
    pub fn dispatch_if<R>(&self, action: R::Action, applies: impl FnOnce(&S) -> bool) -> bool
    where
        R: Reducer<State = S>,
    {
        let mut applied = false;
        self.tx.send_if_modified(|state| {
            if !applies(state) {
                return false;
            }
            let prev = std::mem::take(state);
            *state = R::reduce(prev, action);
            applied = true;
            true
        });
        applied
    }

    /// Subscribe to state replacements.
    ///
    /// The receiver observes every applied dispatch; a consumer that only
    /// cares about certain fields can compare records (`PartialEq`) and
    /// skip recomputation when nothing it reads has changed.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}
