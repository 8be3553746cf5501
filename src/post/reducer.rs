//! Reducer for the post pages.

use crate::store::Reducer;

use super::action::PostAction;
use super::state::{Post, PostState};

pub struct PostReducer;

impl Reducer for PostReducer {
    type State = PostState;
    type Action = PostAction;

    fn reduce(state: PostState, action: PostAction) -> PostState {
        match action {
            // A new parent invalidates everything, including in-flight
            // work: the generation bump discards late completions and the
            // flags they would have cleared are forced off here.
            PostAction::ResetForUser { user_id } => PostState {
                parent_user_id: Some(user_id),
                generation: state.generation + 1,
                ..PostState::default()
            },
            PostAction::FetchStarted => PostState {
                posts: Vec::new(),
                selected_post_id: None,
                draft: None,
                parent_user_id: state.parent_user_id,
                is_loading: true,
                is_updating: false,
                generation: state.generation + 1,
            },
            PostAction::FetchSucceeded { posts } => PostState {
                posts,
                is_loading: false,
                ..state
            },
            PostAction::FetchFailed => PostState {
                is_loading: false,
                ..state
            },
            // An id that is not in the list cannot become the selection.
            // Changing the selection drops the old working copy.
            PostAction::Select { post_id } => {
                if state.contains(post_id) {
                    PostState {
                        selected_post_id: Some(post_id),
                        draft: None,
                        ..state
                    }
                } else {
                    state
                }
            }
            PostAction::SetDraft { post } => PostState {
                draft: Some(post),
                ..state
            },
            PostAction::UpdateStarted => PostState {
                is_updating: true,
                ..state
            },
            PostAction::UpdateSucceeded { post } => {
                let PostState {
                    posts,
                    selected_post_id,
                    draft,
                    parent_user_id,
                    is_loading,
                    generation,
                    ..
                } = state;

                let updated_id = post.id;
                let mut posts: Vec<Post> = posts
                    .into_iter()
                    .filter(|existing| existing.id != updated_id)
                    .collect();
                posts.push(post);
                posts.sort_by_key(|post| post.id);

                // A selection that no longer resolves goes away, and the
                // working copy tied to it goes with it.
                let selected_post_id =
                    selected_post_id.filter(|id| posts.iter().any(|post| post.id == *id));
                let draft = if selected_post_id.is_some() { draft } else { None };

                PostState {
                    posts,
                    selected_post_id,
                    draft,
                    parent_user_id,
                    is_loading,
                    is_updating: false,
                    generation,
                }
            }
            PostAction::UpdateFailed => PostState {
                is_updating: false,
                ..state
            },
        }
    }
}
