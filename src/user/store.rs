//! Feature store for the user page.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::services::{routes, Alert, BusyGuard, BusyIndicator, Navigator};
use crate::store::StateCell;

use super::action::UserAction;
use super::gateway::UserGateway;
use super::reducer::UserReducer;
use super::state::{User, UserId, UserState};

/// Read-only view of the user selection for downstream features.
///
/// Stores that scope themselves to the selected user depend on this
/// capability instead of on [`UserStore`] itself.
pub trait UserSelection: Send + Sync {
    fn selected_user_id(&self) -> Option<UserId>;
}

/// Owns the user list and the user selection.
pub struct UserStore {
    state: StateCell<UserState>,
    gateway: Arc<dyn UserGateway>,
    alert: Arc<dyn Alert>,
    busy: Arc<dyn BusyIndicator>,
    navigator: Arc<dyn Navigator>,
}

impl UserStore {
    pub fn new(
        gateway: Arc<dyn UserGateway>,
        alert: Arc<dyn Alert>,
        busy: Arc<dyn BusyIndicator>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            state: StateCell::new(UserState::default()),
            gateway,
            alert,
            busy,
            navigator,
        }
    }

    /// Make sure the user list is available, fetching it if needed.
    ///
    /// A list that is already loaded or already being fetched is left
    /// alone, so landing on the page twice costs one request.
    pub async fn show_users(&self) {
        if self.state.with(UserState::is_empty) {
            self.get_users().await;
        }
    }

    /// Throw the current list away and fetch it again.
    pub async fn refresh_users(&self) {
        self.get_users().await;
    }

    async fn get_users(&self) {
        let snapshot = self.state.dispatch::<UserReducer>(UserAction::FetchStarted);
        let generation = snapshot.generation;
        debug!(generation, "user fetch launched");

        let _busy = BusyGuard::begin(Arc::clone(&self.busy));
        match self.gateway.fetch_users().await {
            Ok(users) => self.get_users_success(generation, users),
            Err(err) => self.get_users_error(generation, err),
        }
    }

    /// Completion half of `get_users`. Applies only if no newer fetch has
    /// started since this one was launched.
    fn get_users_success(&self, generation: u64, users: Vec<User>) {
        let applied = self
            .state
            .dispatch_if::<UserReducer>(UserAction::FetchSucceeded { users }, |state| {
                state.generation == generation
            });
        if applied {
            debug!(generation, "user fetch applied");
        } else {
            debug!(generation, "stale user fetch result discarded");
        }
    }

    fn get_users_error(&self, generation: u64, err: GatewayError) {
        warn!(generation, %err, "user fetch failed");
        let applied = self
            .state
            .dispatch_if::<UserReducer>(UserAction::FetchFailed, |state| {
                state.generation == generation
            });
        if applied {
            self.alert
                .show_error(&format!("Error. Unable to get users. {err}"));
        } else {
            debug!(generation, "stale user fetch failure discarded");
        }
    }

    /// Select `user_id` and move to the posts page.
    ///
    /// An id that is not in the current list is a silent no-op: the
    /// selection stays put and no navigation happens.
    pub fn select_user(&self, user_id: UserId) {
        let applied = self
            .state
            .dispatch_if::<UserReducer>(UserAction::Select { user_id }, |state| {
                state.contains(user_id)
            });
        if applied {
            debug!(user_id, "user selected");
            self.navigator.go_to(routes::POSTS);
        } else {
            debug!(user_id, "ignored selection of unknown user");
        }
    }

    // Selectors.

    pub fn users(&self) -> Vec<User> {
        self.state.with(|state| state.users.clone())
    }

    pub fn is_users_loading(&self) -> bool {
        self.state.with(|state| state.is_loading)
    }

    pub fn is_users_loaded(&self) -> bool {
        self.state.with(UserState::is_loaded)
    }

    pub fn is_users_empty(&self) -> bool {
        self.state.with(UserState::is_empty)
    }

    pub fn has_selected_user(&self) -> bool {
        self.state.with(UserState::has_selected_user)
    }

    pub fn selected_user(&self) -> Option<User> {
        self.state.with(|state| state.selected_user().cloned())
    }

    pub fn selected_user_name(&self) -> Option<String> {
        self.state.with(UserState::selected_user_name)
    }

    /// Current state snapshot.
    pub fn state(&self) -> UserState {
        self.state.get()
    }

    /// Subscribe to state replacements.
    pub fn watch(&self) -> watch::Receiver<UserState> {
        self.state.subscribe()
    }
}

impl UserSelection for UserStore {
    fn selected_user_id(&self) -> Option<UserId> {
        self.state.with(|state| state.selected_user_id)
    }
}
