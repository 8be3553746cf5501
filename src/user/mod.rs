//! User feature: the user list and the current user selection.

mod action;
mod facade;
mod gateway;
mod reducer;
mod state;
mod store;

pub use action::UserAction;
pub use facade::UserFacade;
pub use gateway::UserGateway;
pub use reducer::UserReducer;
pub use state::{User, UserId, UserState};
pub use store::{UserSelection, UserStore};
