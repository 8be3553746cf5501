//! State for the user page.

use serde::{Deserialize, Serialize};

use crate::store::StateRecord;

/// Identifier for a [`User`].
pub type UserId = u64;

/// A user as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Display name, `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Feature state for the user page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserState {
    pub users: Vec<User>,
    pub selected_user_id: Option<UserId>,
    pub is_loading: bool,
    /// Bumped whenever the list is thrown away for a new fetch. A
    /// completion captured under an older generation no longer applies.
    pub generation: u64,
}

impl StateRecord for UserState {}

impl UserState {
    /// Nothing usable and nothing in flight.
    pub fn is_empty(&self) -> bool {
        !self.is_loading && self.users.is_empty()
    }

    /// At least one user present and nothing in flight.
    pub fn is_loaded(&self) -> bool {
        !self.is_loading && !self.users.is_empty()
    }

    pub fn has_selected_user(&self) -> bool {
        self.selected_user_id.is_some()
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.selected_user_id
            .and_then(|id| self.users.iter().find(|user| user.id == id))
    }

    /// Display name of the selected user, if one is selected.
    pub fn selected_user_name(&self) -> Option<String> {
        self.selected_user().map(User::full_name)
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.users.iter().any(|user| user.id == user_id)
    }
}
