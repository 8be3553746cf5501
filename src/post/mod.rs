//! Post feature: the post list and editor for the selected user.

mod action;
mod facade;
mod gateway;
mod reducer;
mod state;
mod store;

pub use action::PostAction;
pub use facade::PostFacade;
pub use gateway::PostGateway;
pub use reducer::PostReducer;
pub use state::{Post, PostId, PostState};
pub use store::PostStore;
