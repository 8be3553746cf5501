//! Data access seam for users.

use async_trait::async_trait;

use crate::error::GatewayError;

use super::state::User;

/// Fetches the user collection.
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, GatewayError>;
}
