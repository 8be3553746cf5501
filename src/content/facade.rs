//! Consumer surface for page content.

use std::sync::Arc;

use super::state::{ContentEntry, ContentModel};
use super::store::ContentStore;

/// Pass-through adapter components use instead of the store.
///
/// Holds no logic and no state of its own; it only narrows the store to
/// what page components actually need.
pub struct ContentFacade {
    store: Arc<ContentStore>,
}

impl ContentFacade {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub async fn show_content(&self, key: &str) {
        self.store.show_content(key).await;
    }

    pub fn content_by_key(&self, key: &str) -> Option<ContentEntry> {
        self.store.content_by_key(key)
    }

    pub fn model(&self, key: &str) -> Option<ContentModel> {
        self.store.model(key)
    }

    pub fn is_content_loading(&self, key: &str) -> bool {
        self.store.is_content_loading(key)
    }

    pub fn is_content_loaded(&self, key: &str) -> bool {
        self.store.is_content_loaded(key)
    }

    pub fn is_content_empty(&self, key: &str) -> bool {
        self.store.is_content_empty(key)
    }

    pub fn is_content_error(&self, key: &str) -> bool {
        self.store.is_content_error(key)
    }

    pub fn content_error_message(&self, key: &str) -> Option<String> {
        self.store.error_message(key)
    }
}
