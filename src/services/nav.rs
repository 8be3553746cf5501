//! Navigation capability.

/// Performs one-way transitions to named locations.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}

/// Locations the stores navigate to.
pub mod routes {
    /// Post list for the selected user.
    pub const POSTS: &str = "/post";

    /// Edit form for the selected post.
    pub const POST_EDIT: &str = "/post/edit";
}
