//! Driving port for blog mutations.

use async_trait::async_trait;

use crate::domain::{Blog, BlogDraft, BlogId, Error, Identity};

/// Blog mutation use-cases. Every call requires an authenticated identity.
#[async_trait]
pub trait BlogCommand: Send + Sync {
    /// Create a blog owned by `identity` with zero likes.
    async fn create(&self, identity: &Identity, draft: BlogDraft) -> Result<Blog, Error>;

    /// Add one like to any blog; `NotFound` when it does not exist.
    async fn like(&self, identity: &Identity, id: BlogId) -> Result<Blog, Error>;

    /// Delete a blog. `NotFound` when absent, `Forbidden` when `identity` is
    /// not its creator.
    async fn delete(&self, identity: &Identity, id: BlogId) -> Result<(), Error>;
}
