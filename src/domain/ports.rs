use crate::utils::error::Result;
use async_trait::async_trait;

/// Runs the external fetch command for a single list entry.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, entry: &str) -> Result<()>;
}
