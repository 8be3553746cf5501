//! Page content feature: a keyed cache of free-form content payloads.

mod action;
mod facade;
mod gateway;
mod reducer;
mod state;
mod store;

pub use action::ContentAction;
pub use facade::ContentFacade;
pub use gateway::ContentGateway;
pub use reducer::ContentReducer;
pub use state::{ContentEntry, ContentModel, ContentState, ContentStatus};
pub use store::ContentStore;
