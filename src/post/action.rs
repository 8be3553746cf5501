//! Actions for the post pages.

use crate::store::Action;
use crate::user::UserId;

use super::state::{Post, PostId};

/// Everything that can change the post state.
#[derive(Debug)]
pub enum PostAction {
    /// The upstream user selection changed; start over for `user_id`.
    ResetForUser { user_id: UserId },
    /// A posts fetch has been launched; previous results no longer count.
    FetchStarted,
    /// The gateway resolved the post list.
    FetchSucceeded { posts: Vec<Post> },
    /// The gateway failed to resolve the post list.
    FetchFailed,
    /// The consumer picked a post from the list.
    Select { post_id: PostId },
    /// The consumer staged a working copy for editing.
    SetDraft { post: Post },
    /// An update of the staged draft has been launched.
    UpdateStarted,
    /// The gateway committed the update and returned the stored entity.
    UpdateSucceeded { post: Post },
    /// The gateway failed to commit the update.
    UpdateFailed,
}

impl Action for PostAction {}
