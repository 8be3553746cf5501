//! Data access seam for page content.

use async_trait::async_trait;

use crate::error::GatewayError;

use super::state::ContentModel;

/// Fetches page content from wherever it lives.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Resolve the content payload for `key`.
    ///
    /// An empty payload is a valid result (the page exists but has nothing
    /// in it yet); an unknown key is a failure.
    async fn fetch_content(&self, key: &str) -> Result<ContentModel, GatewayError>;
}
