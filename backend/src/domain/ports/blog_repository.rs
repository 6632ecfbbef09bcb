//! Port abstraction for blog persistence adapters and their errors.
//!
//! The repository owns the insertion-order counter and stamps it while the
//! blog is published, so visibility order and `sequence` order agree even when
//! creates race.

use async_trait::async_trait;

use crate::domain::{Blog, BlogId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by blog repository adapters.
    pub enum BlogRepositoryError {
        /// A blog with the same identifier is already stored.
        DuplicateId { id: String } => "blog already stored: {id}",
        /// Query or mutation failed during execution.
        Query { message: String } => "blog repository query failed: {message}",
    }
}

/// Blog Store contract.
///
/// ## Atomicity
/// - `record_like` increments under the adapter's write guard, so concurrent
///   likes are never lost.
/// - `insert` assigns the sequence and publishes the blog under one guard; it
///   publishes a complete blog or nothing.
/// - `record_like` only touches stored blogs; once `remove` returns, later
///   likes observe `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Store a newly created blog and return it with its insertion-order
    /// marker. Markers are never reused, including across
    /// [`BlogRepository::clear`].
    async fn insert(&self, blog: Blog) -> Result<Blog, BlogRepositoryError>;

    /// Fetch a blog by id.
    async fn find(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Atomically add one like; `None` when the blog does not exist.
    async fn record_like(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Remove a blog; `false` when it was already gone.
    async fn remove(&self, id: BlogId) -> Result<bool, BlogRepositoryError>;

    /// Snapshot of every stored blog, in no particular order.
    async fn all(&self) -> Result<Vec<Blog>, BlogRepositoryError>;

    /// Remove every blog.
    async fn clear(&self) -> Result<(), BlogRepositoryError>;
}
