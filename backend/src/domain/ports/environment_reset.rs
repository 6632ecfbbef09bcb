//! Driving port used by end-to-end suites to start from a clean slate.

use async_trait::async_trait;

use crate::domain::Error;

/// Clears every account and blog.
#[async_trait]
pub trait EnvironmentReset: Send + Sync {
    /// Empty the account and blog stores.
    async fn reset(&self) -> Result<(), Error>;
}
