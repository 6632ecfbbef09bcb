//! Environment reset used by end-to-end suites.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{AccountRepository, BlogRepository, EnvironmentReset};

/// Clears both stores. Blog sequence counters keep increasing.
#[derive(Clone)]
pub struct ResetService<A, B> {
    accounts: Arc<A>,
    blogs: Arc<B>,
}

impl<A, B> ResetService<A, B> {
    /// Create a reset service over the account and blog stores.
    pub fn new(accounts: Arc<A>, blogs: Arc<B>) -> Self {
        Self { accounts, blogs }
    }
}

#[async_trait]
impl<A, B> EnvironmentReset for ResetService<A, B>
where
    A: AccountRepository,
    B: BlogRepository,
{
    async fn reset(&self) -> Result<(), Error> {
        self.blogs
            .clear()
            .await
            .map_err(|err| Error::internal(format!("failed to clear blogs: {err}")))?;
        self.accounts
            .clear()
            .await
            .map_err(|err| Error::internal(format!("failed to clear accounts: {err}")))?;
        info!("environment reset");
        Ok(())
    }
}
