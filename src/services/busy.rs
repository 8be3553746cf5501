//! Shared busy indicator capability.

use std::sync::Arc;

use scopeguard::ScopeGuard;

/// Coarse application-wide activity indicator.
///
/// Implementations are expected to count: overlapping effects call `begin`
/// more than once and the indicator stays on until every one of them has
/// called `end`.
pub trait BusyIndicator: Send + Sync {
    fn begin(&self);
    fn end(&self);
}

/// Holds the busy indicator on for the lifetime of the guard.
///
/// `end` runs on drop, so the indicator is released on every exit path of
/// an effect, including early returns and discarded completions.
pub struct BusyGuard {
    _release: ScopeGuard<Arc<dyn BusyIndicator>, fn(Arc<dyn BusyIndicator>)>,
}

impl BusyGuard {
    pub fn begin(busy: Arc<dyn BusyIndicator>) -> Self {
        busy.begin();
        let release: fn(Arc<dyn BusyIndicator>) = |busy| busy.end();
        Self {
            _release: scopeguard::guard(busy, release),
        }
    }
}
