//! Consumer surface for the post pages.

use std::sync::Arc;

use super::state::{Post, PostId};
use super::store::PostStore;

/// Pass-through adapter components use instead of the store.
///
/// Holds no logic and no state of its own.
pub struct PostFacade {
    store: Arc<PostStore>,
}

impl PostFacade {
    pub fn new(store: Arc<PostStore>) -> Self {
        Self { store }
    }

    pub async fn show_posts(&self) {
        self.store.show_posts().await;
    }

    pub fn select_post(&self, post_id: PostId) {
        self.store.select_post(post_id);
    }

    pub fn set_draft(&self, post: Post) {
        self.store.set_draft(post);
    }

    pub async fn update_post(&self) {
        self.store.update_post().await;
    }

    pub fn posts(&self) -> Vec<Post> {
        self.store.posts()
    }

    pub fn is_posts_loading(&self) -> bool {
        self.store.is_posts_loading()
    }

    pub fn is_posts_loaded(&self) -> bool {
        self.store.is_posts_loaded()
    }

    pub fn is_posts_empty(&self) -> bool {
        self.store.is_posts_empty()
    }

    pub fn is_post_updating(&self) -> bool {
        self.store.is_post_updating()
    }

    pub fn has_selected_post(&self) -> bool {
        self.store.has_selected_post()
    }

    pub fn selected_post_id(&self) -> Option<PostId> {
        self.store.selected_post_id()
    }

    pub fn selected_post(&self) -> Option<Post> {
        self.store.selected_post()
    }

    pub fn draft(&self) -> Option<Post> {
        self.store.draft()
    }

    pub fn is_save_disabled(&self) -> bool {
        self.store.is_save_disabled()
    }

    pub fn has_selected_user(&self) -> bool {
        self.store.has_selected_user()
    }
}
