//! Capabilities the stores reach out through.
//!
//! Everything a store does beyond its own state goes through one of these
//! traits: notifying the user, driving the shared busy indicator, moving
//! between pages. Stores hold them as `Arc<dyn _>` so tests can substitute
//! recording fakes. Data access has its own per-feature gateway traits next
//! to the stores that use them.

mod alert;
mod busy;
mod nav;

pub use alert::Alert;
pub use busy::{BusyGuard, BusyIndicator};
pub use nav::{routes, Navigator};
