//! Blog use-cases: creation, likes, creator-only deletion and listing.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{BlogCommand, BlogQuery, BlogRepository, BlogRepositoryError};
use crate::domain::{Blog, BlogDraft, BlogId, Error, Identity, can_delete, order_for};

/// Blog service implementing the blog command and query ports.
#[derive(Clone)]
pub struct BlogService<R> {
    blogs: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> BlogService<R> {
    /// Create a new service over the given blog store.
    pub fn new(blogs: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { blogs, clock }
    }
}

fn map_repository_error(error: BlogRepositoryError) -> Error {
    error!(%error, "blog repository failed");
    match error {
        BlogRepositoryError::DuplicateId { id } => {
            Error::internal(format!("blog id collision: {id}"))
        }
        BlogRepositoryError::Query { message } => {
            Error::internal(format!("blog repository error: {message}"))
        }
    }
}

fn blog_not_found(id: BlogId) -> Error {
    Error::not_found(format!("blog not found: {id}"))
}

#[async_trait]
impl<R> BlogCommand for BlogService<R>
where
    R: BlogRepository,
{
    async fn create(&self, identity: &Identity, draft: BlogDraft) -> Result<Blog, Error> {
        let blog = Blog::create(BlogId::random(), draft, identity, self.clock.utc());
        let blog = self
            .blogs
            .insert(blog)
            .await
            .map_err(map_repository_error)?;
        info!(blog_id = %blog.id(), creator = %identity.username(), "blog created");
        Ok(blog)
    }

    async fn like(&self, _identity: &Identity, id: BlogId) -> Result<Blog, Error> {
        self.blogs
            .record_like(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| blog_not_found(id))
    }

    async fn delete(&self, identity: &Identity, id: BlogId) -> Result<(), Error> {
        let blog = self
            .blogs
            .find(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| blog_not_found(id))?;

        if !can_delete(identity, &blog) {
            warn!(blog_id = %id, requester = %identity.username(), "delete refused");
            return Err(Error::forbidden("only the creator may delete this blog"));
        }

        // A concurrent delete may win between the lookup and the removal.
        if !self
            .blogs
            .remove(id)
            .await
            .map_err(map_repository_error)?
        {
            return Err(blog_not_found(id));
        }
        info!(blog_id = %id, "blog deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> BlogQuery for BlogService<R>
where
    R: BlogRepository,
{
    async fn list(&self) -> Result<Vec<Blog>, Error> {
        let blogs = self.blogs.all().await.map_err(map_repository_error)?;
        Ok(order_for(blogs))
    }

    async fn get(&self, id: BlogId) -> Result<Blog, Error> {
        self.blogs
            .find(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| blog_not_found(id))
    }
}

#[cfg(test)]
#[path = "blog_service_tests.rs"]
mod tests;
