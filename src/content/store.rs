//! Feature store for page content.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::services::Alert;
use crate::store::StateCell;

use super::action::ContentAction;
use super::gateway::ContentGateway;
use super::reducer::ContentReducer;
use super::state::{ContentEntry, ContentModel, ContentState, ContentStatus};

/// Caches page content per key.
///
/// Every entry carries its own lifecycle, so the store has no loading flag
/// of its own and never touches the shared busy indicator.
pub struct ContentStore {
    state: StateCell<ContentState>,
    gateway: Arc<dyn ContentGateway>,
    alert: Arc<dyn Alert>,
}

impl ContentStore {
    pub fn new(gateway: Arc<dyn ContentGateway>, alert: Arc<dyn Alert>) -> Self {
        Self {
            state: StateCell::new(ContentState::default()),
            gateway,
            alert,
        }
    }

    /// Make sure content for `key` is available, fetching it if needed.
    ///
    /// Loaded and in-flight keys are left alone. Keys that settled empty or
    /// failed are fetched again.
    pub async fn show_content(&self, key: &str) {
        let settled = self.state.with(|state| {
            matches!(
                state.status(key),
                Some(ContentStatus::Loaded | ContentStatus::Loading)
            )
        });
        if !settled {
            self.get_content(key).await;
        }
    }

    /// Drop whatever is cached for `key` and fetch it again.
    pub async fn refresh_content(&self, key: &str) {
        self.get_content(key).await;
    }

    async fn get_content(&self, key: &str) {
        let snapshot = self
            .state
            .dispatch::<ContentReducer>(ContentAction::FetchStarted {
                key: key.to_string(),
            });
        let generation = snapshot.generation(key);
        debug!(key, generation, "content fetch launched");

        match self.gateway.fetch_content(key).await {
            Ok(model) => self.get_content_success(key, generation, model),
            Err(err) => self.get_content_error(key, generation, err),
        }
    }

    /// Completion half of `get_content`. Applies only if no newer fetch
    /// for the key was launched since this one, so the entry always ends
    /// up holding the latest launch's result.
    fn get_content_success(&self, key: &str, generation: u64, model: ContentModel) {
        let applied = self.state.dispatch_if::<ContentReducer>(
            ContentAction::FetchSucceeded {
                key: key.to_string(),
                model,
            },
            |state| state.generation(key) == generation,
        );
        if applied {
            debug!(key, generation, "content fetch applied");
        } else {
            debug!(key, generation, "stale content fetch result discarded");
        }
    }

    fn get_content_error(&self, key: &str, generation: u64, err: GatewayError) {
        warn!(key, %err, "content fetch failed");
        let applied = self.state.dispatch_if::<ContentReducer>(
            ContentAction::FetchFailed {
                key: key.to_string(),
                cause: err.to_string(),
            },
            |state| state.generation(key) == generation,
        );
        if applied {
            self.alert
                .show_error(&format!("Error. Unable to get content for {key}"));
        } else {
            debug!(key, generation, "stale content fetch failure discarded");
        }
    }

    // Selectors.

    /// Entry for `key`, or `None` when nothing has been requested for it.
    pub fn content_by_key(&self, key: &str) -> Option<ContentEntry> {
        self.state.with(|state| state.entry(key).cloned())
    }

    pub fn model(&self, key: &str) -> Option<ContentModel> {
        self.state.with(|state| state.model(key).cloned())
    }

    pub fn is_content_loading(&self, key: &str) -> bool {
        self.state.with(|state| state.is_loading(key))
    }

    pub fn is_content_loaded(&self, key: &str) -> bool {
        self.state.with(|state| state.is_loaded(key))
    }

    pub fn is_content_empty(&self, key: &str) -> bool {
        self.state.with(|state| state.is_empty(key))
    }

    pub fn is_content_error(&self, key: &str) -> bool {
        self.state.with(|state| state.is_error(key))
    }

    /// Cause of the last failure for `key`, if it is in the error state.
    pub fn error_message(&self, key: &str) -> Option<String> {
        self.state
            .with(|state| state.error_message(key).map(str::to_string))
    }

    /// Current state snapshot.
    pub fn state(&self) -> ContentState {
        self.state.get()
    }

    /// Subscribe to state replacements.
    pub fn watch(&self) -> watch::Receiver<ContentState> {
        self.state.subscribe()
    }
}
