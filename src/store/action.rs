//! Base trait for store actions.

/// Marker trait for the inputs a store accepts.
///
/// Every state change starts as an action: a consumer request (show,
/// select, save), the completion of a gateway call, or a reset driven by
/// an upstream selection change. The reducer is the only consumer.
pub trait Action: Send + 'static {}
