//! Reducer for the user page.

use crate::store::Reducer;

use super::action::UserAction;
use super::state::UserState;

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Action = UserAction;

    fn reduce(state: UserState, action: UserAction) -> UserState {
        match action {
            // The old list is gone, so the selection pointing into it goes
            // with it.
            UserAction::FetchStarted => UserState {
                users: Vec::new(),
                selected_user_id: None,
                is_loading: true,
                generation: state.generation + 1,
            },
            UserAction::FetchSucceeded { users } => UserState {
                users,
                is_loading: false,
                ..state
            },
            UserAction::FetchFailed => UserState {
                is_loading: false,
                ..state
            },
            // An id that is not in the list cannot become the selection.
            UserAction::Select { user_id } => {
                if state.contains(user_id) {
                    UserState {
                        selected_user_id: Some(user_id),
                        ..state
                    }
                } else {
                    state
                }
            }
        }
    }
}
