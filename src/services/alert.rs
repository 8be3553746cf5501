//! User notification capability.

/// Presents one-line messages to the user.
///
/// Fire and forget: implementations decide how a message surfaces (toast,
/// status line, dialog) and stores never observe an outcome.
pub trait Alert: Send + Sync {
    fn show_error(&self, message: &str);
    fn show_info(&self, message: &str);
    fn show_warning(&self, message: &str);
}
