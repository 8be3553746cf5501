//! Per-feature state stores with one-way data flow.
//!
//! Each feature owns a single state record behind a [`store::StateCell`].
//! Consumers call actions, actions dispatch through a pure reducer, async
//! effects re-enter the store the same way when their gateway call
//! settles, and selectors read derived values back out. Components talk to
//! a logic-free facade per feature rather than to the stores directly.
//!
//! Side effects other than state live behind the capability traits in
//! [`services`] and the per-feature gateway traits, so every store can be
//! driven in tests with recording fakes.

pub mod content;
pub mod error;
pub mod post;
pub mod services;
pub mod store;
pub mod user;
