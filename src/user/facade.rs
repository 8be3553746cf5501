//! Consumer surface for the user page.

use std::sync::Arc;

use super::state::{User, UserId};
use super::store::{UserSelection, UserStore};

/// Pass-through adapter components use instead of the store.
///
/// Holds no logic and no state of its own.
pub struct UserFacade {
    store: Arc<UserStore>,
}

impl UserFacade {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub async fn show_users(&self) {
        self.store.show_users().await;
    }

    pub fn select_user(&self, user_id: UserId) {
        self.store.select_user(user_id);
    }

    pub fn users(&self) -> Vec<User> {
        self.store.users()
    }

    pub fn is_users_loading(&self) -> bool {
        self.store.is_users_loading()
    }

    pub fn is_users_loaded(&self) -> bool {
        self.store.is_users_loaded()
    }

    pub fn is_users_empty(&self) -> bool {
        self.store.is_users_empty()
    }

    pub fn has_selected_user(&self) -> bool {
        self.store.has_selected_user()
    }

    pub fn selected_user_id(&self) -> Option<UserId> {
        self.store.selected_user_id()
    }

    pub fn selected_user_name(&self) -> Option<String> {
        self.store.selected_user_name()
    }
}
