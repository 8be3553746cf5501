//! Data access seam for posts.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::user::UserId;

use super::state::Post;

/// Fetches and updates posts.
#[async_trait]
pub trait PostGateway: Send + Sync {
    /// Posts authored by `user_id`.
    async fn fetch_posts(&self, user_id: UserId) -> Result<Vec<Post>, GatewayError>;

    /// Persist `post`; resolves to the version the backend stored.
    async fn update_post(&self, post: Post) -> Result<Post, GatewayError>;
}
