//! Driving port for blog reads.

use async_trait::async_trait;

use crate::domain::{Blog, BlogId, Error};

/// Read-only blog use-cases. No identity is needed to read.
#[async_trait]
pub trait BlogQuery: Send + Sync {
    /// Every blog, most liked first, insertion order among ties.
    async fn list(&self) -> Result<Vec<Blog>, Error>;

    /// A single blog; `NotFound` when it does not exist.
    async fn get(&self, id: BlogId) -> Result<Blog, Error>;
}
