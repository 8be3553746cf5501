//! Base trait for feature state records.

/// Marker trait for the single value a store holds.
///
/// A record is replaced wholesale by every reduce, never patched in
/// place, so `Clone` and `PartialEq` are enough for readers to detect a
/// change structurally. `Default` is the value a freshly built store
/// starts from.
pub trait StateRecord: Clone + PartialEq + Default + Send + Sync + 'static {}
