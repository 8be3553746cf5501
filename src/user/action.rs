//! Actions for the user page.

use crate::store::Action;

use super::state::{User, UserId};

/// Everything that can change the user state.
#[derive(Debug)]
pub enum UserAction {
    /// A users fetch has been launched; previous results no longer count.
    FetchStarted,
    /// The gateway resolved the user collection.
    FetchSucceeded { users: Vec<User> },
    /// The gateway failed to resolve the user collection.
    FetchFailed,
    /// The consumer picked a user from the list.
    Select { user_id: UserId },
}

impl Action for UserAction {}
