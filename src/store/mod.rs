//! Store architecture primitives.
//!
//! Base traits and the state container every feature store is built from.
//! State only ever changes through one path:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selector
//!    ↑                               │
//!    └────────── Effect ←────────────┘
//! ```
//!
//! - **State**: immutable record of everything a feature's view needs
//! - **Action**: a named entry point that triggers a state change
//! - **Reducer**: pure function that transforms state based on actions
//! - **Effect**: impure follow-up (gateway calls, alerts, navigation) that
//!   re-enters the store through a completion action
//! - **Selector**: pure derivation of a value from the current state

mod action;
mod cell;
mod reducer;
mod state;

pub use action::Action;
pub use cell::StateCell;
pub use reducer::Reducer;
pub use state::StateRecord;
