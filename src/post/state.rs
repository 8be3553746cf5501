//! State for the post pages.

use serde::{Deserialize, Serialize};

use crate::store::StateRecord;
use crate::user::UserId;

/// Identifier for a [`Post`].
pub type PostId = u64;

/// A post as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// Feature state for the post list and the post editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostState {
    pub posts: Vec<Post>,
    pub selected_post_id: Option<PostId>,
    /// Working copy being edited, staged by the consumer and sent to the
    /// gateway on save. Independent of the committed entry in `posts`.
    pub draft: Option<Post>,
    /// The user the current list was fetched for.
    pub parent_user_id: Option<UserId>,
    pub is_loading: bool,
    pub is_updating: bool,
    /// Bumped whenever the list is thrown away for a new fetch or a new
    /// parent user. A completion captured under an older generation no
    /// longer applies.
    pub generation: u64,
}

impl StateRecord for PostState {}

impl PostState {
    /// Nothing usable and nothing in flight.
    pub fn is_empty(&self) -> bool {
        !self.is_loading && self.posts.is_empty()
    }

    /// At least one post present and nothing in flight.
    pub fn is_loaded(&self) -> bool {
        !self.is_loading && !self.posts.is_empty()
    }

    pub fn has_selected_post(&self) -> bool {
        self.selected_post_id.is_some()
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_post_id
            .and_then(|id| self.posts.iter().find(|post| post.id == id))
    }

    pub fn contains(&self, post_id: PostId) -> bool {
        self.posts.iter().any(|post| post.id == post_id)
    }

    /// Whether saving is pointless or unsafe right now.
    ///
    /// Saving is disabled while an update is in flight, while the list is
    /// not loaded, when nothing is selected or staged, and when the draft
    /// is identical to the committed entry.
    pub fn is_save_disabled(&self) -> bool {
        let selected = self.selected_post();
        self.is_updating
            || !self.is_loaded()
            || selected.is_none()
            || self.draft.is_none()
            || self.draft.as_ref() == selected
    }
}
