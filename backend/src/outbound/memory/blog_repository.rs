//! In-memory `BlogRepository` adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{BlogRepository, BlogRepositoryError};
use crate::domain::{Blog, BlogId};

#[derive(Debug, Default)]
struct Table {
    blogs: HashMap<BlogId, Blog>,
    // Survives `clear` so markers are never reused.
    last_sequence: u64,
}

/// Blog table keyed by id, plus the insertion-order counter, behind one lock.
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    table: RwLock<Table>,
}

impl InMemoryBlogRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> BlogRepositoryError {
    BlogRepositoryError::query("blog table lock poisoned")
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn insert(&self, blog: Blog) -> Result<Blog, BlogRepositoryError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        if table.blogs.contains_key(&blog.id()) {
            return Err(BlogRepositoryError::duplicate_id(blog.id().to_string()));
        }
        table.last_sequence += 1;
        let stored = blog.with_sequence(table.last_sequence);
        table.blogs.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.blogs.get(&id).cloned())
    }

    async fn record_like(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        Ok(table.blogs.get_mut(&id).map(|blog| {
            blog.add_like();
            blog.clone()
        }))
    }

    async fn remove(&self, id: BlogId) -> Result<bool, BlogRepositoryError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        Ok(table.blogs.remove(&id).is_some())
    }

    async fn all(&self) -> Result<Vec<Blog>, BlogRepositoryError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.blogs.values().cloned().collect())
    }

    async fn clear(&self) -> Result<(), BlogRepositoryError> {
        self.table.write().map_err(|_| poisoned())?.blogs.clear();
        Ok(())
    }
}
