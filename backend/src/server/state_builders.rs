//! Builders wiring the in-memory stores and domain services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use bloglist::domain::{AccountService, BlogService, ResetService};
use bloglist::inbound::http::state::{HttpState, HttpStatePorts};
use bloglist::outbound::memory::{InMemoryAccountRepository, InMemoryBlogRepository};

/// Build HTTP state over fresh in-memory stores.
///
/// Both services and the reset port share the same store instances so a
/// reset is visible to every handler.
pub(super) fn build_http_state(clock: Arc<dyn Clock>) -> web::Data<HttpState> {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let blogs = Arc::new(InMemoryBlogRepository::new());
    let account_service = Arc::new(AccountService::new(Arc::clone(&accounts)));
    let blog_service = Arc::new(BlogService::new(Arc::clone(&blogs), clock));

    web::Data::new(HttpState::new(HttpStatePorts {
        login: account_service.clone(),
        registration: account_service,
        blogs: blog_service.clone(),
        blogs_query: blog_service,
        reset: Arc::new(ResetService::new(accounts, blogs)),
    }))
}

/// HTTP state using the system clock.
pub(super) fn build_default_http_state() -> web::Data<HttpState> {
    build_http_state(Arc::new(DefaultClock))
}

#[cfg(test)]
mod tests {
    //! Wiring checks for the in-memory service graph.

    use super::*;
    use bloglist::domain::{BlogDraft, LoginCredentials, Registration};

    #[tokio::test]
    async fn reset_clears_state_seen_by_every_port() {
        let state = build_default_http_state();
        let registration = Registration::try_from_parts("test", "12345678").expect("registration");
        state
            .registration
            .register(&registration)
            .await
            .expect("register");
        let credentials = LoginCredentials::try_from_parts("test", "12345678").expect("creds");
        let identity = state.login.authenticate(&credentials).await.expect("login");
        let draft = BlogDraft::try_from_parts("Wes Bos", "Javascript and magic", "wesbos.com")
            .expect("draft");
        state.blogs.create(&identity, draft).await.expect("create");
        assert_eq!(state.blogs_query.list().await.expect("list").len(), 1);

        state.reset.reset().await.expect("reset");

        assert!(state.blogs_query.list().await.expect("list").is_empty());
        assert!(state.login.authenticate(&credentials).await.is_err());
    }
}
