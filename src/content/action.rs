//! Actions for the page content cache.

use crate::store::Action;

use super::state::ContentModel;

/// Everything that can change the content cache.
#[derive(Debug)]
pub enum ContentAction {
    /// A fetch for `key` has been launched.
    FetchStarted { key: String },
    /// The gateway resolved content for `key`.
    FetchSucceeded { key: String, model: ContentModel },
    /// The gateway failed to resolve content for `key`.
    FetchFailed { key: String, cause: String },
}

impl Action for ContentAction {}
