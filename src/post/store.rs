//! Feature store for the post pages.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::services::{routes, Alert, BusyGuard, BusyIndicator, Navigator};
use crate::store::StateCell;
use crate::user::{UserId, UserSelection};

use super::action::PostAction;
use super::gateway::PostGateway;
use super::reducer::PostReducer;
use super::state::{Post, PostId, PostState};

/// Owns the post list and the post editor for the selected user.
///
/// The store is scoped to whatever user is selected upstream: it reads the
/// selection through [`UserSelection`] and starts over whenever the
/// selection it last fetched for has changed.
pub struct PostStore {
    state: StateCell<PostState>,
    gateway: Arc<dyn PostGateway>,
    alert: Arc<dyn Alert>,
    busy: Arc<dyn BusyIndicator>,
    navigator: Arc<dyn Navigator>,
    user_selection: Arc<dyn UserSelection>,
}

impl PostStore {
    pub fn new(
        gateway: Arc<dyn PostGateway>,
        alert: Arc<dyn Alert>,
        busy: Arc<dyn BusyIndicator>,
        navigator: Arc<dyn Navigator>,
        user_selection: Arc<dyn UserSelection>,
    ) -> Self {
        Self {
            state: StateCell::new(PostState::default()),
            gateway,
            alert,
            busy,
            navigator,
            user_selection,
        }
    }

    /// Make sure the post list matches the upstream user selection.
    ///
    /// A changed selection resets the store and fetches the new user's
    /// posts. An unchanged selection fetches only if there is nothing
    /// usable and nothing in flight. No selection is a no-op.
    pub async fn show_posts(&self) {
        let Some(user_id) = self.user_selection.selected_user_id() else {
            debug!("no user selected, nothing to show");
            return;
        };

        let parent = self.state.with(|state| state.parent_user_id);
        if parent != Some(user_id) {
            debug!(user_id, "upstream selection changed, starting over");
            self.state
                .dispatch::<PostReducer>(PostAction::ResetForUser { user_id });
            self.get_posts(user_id).await;
            return;
        }

        if self.state.with(PostState::is_empty) {
            self.get_posts(user_id).await;
        }
    }

    /// Throw the current list away and fetch it again for the same user.
    pub async fn refresh_posts(&self) {
        let Some(user_id) = self.state.with(|state| state.parent_user_id) else {
            debug!("nothing fetched yet, nothing to refresh");
            return;
        };
        self.get_posts(user_id).await;
    }

    async fn get_posts(&self, user_id: UserId) {
        let snapshot = self.state.dispatch::<PostReducer>(PostAction::FetchStarted);
        let generation = snapshot.generation;
        debug!(user_id, generation, "post fetch launched");

        let _busy = BusyGuard::begin(Arc::clone(&self.busy));
        match self.gateway.fetch_posts(user_id).await {
            Ok(posts) => self.get_posts_success(generation, posts),
            Err(err) => self.get_posts_error(generation, user_id, err),
        }
    }

    /// Completion half of `get_posts`. Applies only if the store was not
    /// reset and no newer fetch started since this one was launched.
    fn get_posts_success(&self, generation: u64, posts: Vec<Post>) {
        let applied = self
            .state
            .dispatch_if::<PostReducer>(PostAction::FetchSucceeded { posts }, |state| {
                state.generation == generation
            });
        if applied {
            debug!(generation, "post fetch applied");
        } else {
            debug!(generation, "stale post fetch result discarded");
        }
    }

    fn get_posts_error(&self, generation: u64, user_id: UserId, err: GatewayError) {
        warn!(user_id, %err, "post fetch failed");
        let applied = self
            .state
            .dispatch_if::<PostReducer>(PostAction::FetchFailed, |state| {
                state.generation == generation
            });
        if applied {
            self.alert.show_error(&format!(
                "Error. Unable to get posts for user {user_id}. {err}"
            ));
        } else {
            debug!(generation, "stale post fetch failure discarded");
        }
    }

    /// Select `post_id` and move to the edit page.
    ///
    /// An id that is not in the current list is a silent no-op: the
    /// selection stays put and no navigation happens. Selecting drops any
    /// previous working copy.
    pub fn select_post(&self, post_id: PostId) {
        let applied = self
            .state
            .dispatch_if::<PostReducer>(PostAction::Select { post_id }, |state| {
                state.contains(post_id)
            });
        if applied {
            debug!(post_id, "post selected");
            self.navigator.go_to(routes::POST_EDIT);
        } else {
            debug!(post_id, "ignored selection of unknown post");
        }
    }

    /// Stage a working copy of `post` for editing.
    pub fn set_draft(&self, post: Post) {
        self.state
            .dispatch::<PostReducer>(PostAction::SetDraft { post });
    }

    /// Send the staged draft to the gateway and fold the committed entity
    /// back into the list.
    ///
    /// Consumers are expected to check [`PostState::is_save_disabled`]
    /// first, but a save without a staged draft is still recovered: it
    /// settles as a failed update.
    pub async fn update_post(&self) {
        let snapshot = self.state.dispatch::<PostReducer>(PostAction::UpdateStarted);
        let generation = snapshot.generation;

        let _busy = BusyGuard::begin(Arc::clone(&self.busy));
        let Some(draft) = snapshot.draft else {
            warn!("update requested with no draft staged");
            self.update_post_error(generation, None);
            return;
        };

        let post_id = draft.id;
        debug!(post_id, generation, "post update launched");
        match self.gateway.update_post(draft).await {
            Ok(post) => self.update_post_success(generation, post),
            Err(err) => self.update_post_error(generation, Some((post_id, err))),
        }
    }

    /// Completion half of `update_post`. A discarded completion keeps its
    /// alert and navigation to itself; the reset that discarded it already
    /// cleared the updating flag.
    fn update_post_success(&self, generation: u64, post: Post) {
        let post_id = post.id;
        let applied = self
            .state
            .dispatch_if::<PostReducer>(PostAction::UpdateSucceeded { post }, |state| {
                state.generation == generation
            });
        if applied {
            debug!(post_id, "post update applied");
            self.alert.show_info("Successfully updated post");
            self.navigator.go_to(routes::POSTS);
        } else {
            debug!(post_id, generation, "stale post update result discarded");
        }
    }

    fn update_post_error(&self, generation: u64, failure: Option<(PostId, GatewayError)>) {
        let applied = self
            .state
            .dispatch_if::<PostReducer>(PostAction::UpdateFailed, |state| {
                state.generation == generation
            });
        if !applied {
            debug!(generation, "stale post update failure discarded");
            return;
        }

        let message = match failure {
            Some((post_id, err)) => {
                warn!(post_id, %err, "post update failed");
                format!("Error occurred. Unable to update post {post_id}. {err}")
            }
            None => "Error occurred. Unable to update post.".to_string(),
        };
        self.alert.show_error(&message);
    }

    // Selectors.

    pub fn posts(&self) -> Vec<Post> {
        self.state.with(|state| state.posts.clone())
    }

    pub fn is_posts_loading(&self) -> bool {
        self.state.with(|state| state.is_loading)
    }

    pub fn is_posts_loaded(&self) -> bool {
        self.state.with(PostState::is_loaded)
    }

    pub fn is_posts_empty(&self) -> bool {
        self.state.with(PostState::is_empty)
    }

    pub fn is_post_updating(&self) -> bool {
        self.state.with(|state| state.is_updating)
    }

    pub fn has_selected_post(&self) -> bool {
        self.state.with(PostState::has_selected_post)
    }

    pub fn selected_post_id(&self) -> Option<PostId> {
        self.state.with(|state| state.selected_post_id)
    }

    pub fn selected_post(&self) -> Option<Post> {
        self.state.with(|state| state.selected_post().cloned())
    }

    pub fn draft(&self) -> Option<Post> {
        self.state.with(|state| state.draft.clone())
    }

    pub fn is_save_disabled(&self) -> bool {
        self.state.with(PostState::is_save_disabled)
    }

    /// Whether a user is selected upstream. Forwarded so post pages do not
    /// have to depend on the user feature.
    pub fn has_selected_user(&self) -> bool {
        self.user_selection.selected_user_id().is_some()
    }

    /// Current state snapshot.
    pub fn state(&self) -> PostState {
        self.state.get()
    }

    /// Subscribe to state replacements.
    pub fn watch(&self) -> watch::Receiver<PostState> {
        self.state.subscribe()
    }
}
