//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BlogCommand, BlogQuery, EnvironmentReset, LoginService, RegistrationService,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Credential checks and session re-validation.
    pub login: Arc<dyn LoginService>,
    /// Account creation.
    pub registration: Arc<dyn RegistrationService>,
    /// Blog mutations: create, like, delete.
    pub blogs: Arc<dyn BlogCommand>,
    /// Blog reads: list and get.
    pub blogs_query: Arc<dyn BlogQuery>,
    /// Test-environment reset.
    pub reset: Arc<dyn EnvironmentReset>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential checks and session re-validation.
    pub login: Arc<dyn LoginService>,
    /// Account creation.
    pub registration: Arc<dyn RegistrationService>,
    /// Blog mutations: create, like, delete.
    pub blogs: Arc<dyn BlogCommand>,
    /// Blog reads: list and get.
    pub blogs_query: Arc<dyn BlogQuery>,
    /// Test-environment reset.
    pub reset: Arc<dyn EnvironmentReset>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bloglist::domain::{AccountService, BlogService, ResetService};
    /// use bloglist::inbound::http::state::{HttpState, HttpStatePorts};
    /// use bloglist::outbound::memory::{InMemoryAccountRepository, InMemoryBlogRepository};
    ///
    /// let accounts = Arc::new(InMemoryAccountRepository::new());
    /// let blogs = Arc::new(InMemoryBlogRepository::new());
    /// let account_service = Arc::new(AccountService::new(accounts.clone()));
    /// let blog_service = Arc::new(BlogService::new(blogs.clone(), Arc::new(mockable::DefaultClock)));
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     login: account_service.clone(),
    ///     registration: account_service,
    ///     blogs: blog_service.clone(),
    ///     blogs_query: blog_service,
    ///     reset: Arc::new(ResetService::new(accounts, blogs)),
    /// });
    /// let _login = state.login.clone();
    /// ```
    #[must_use]
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            registration,
            blogs,
            blogs_query,
            reset,
        } = ports;
        Self {
            login,
            registration,
            blogs,
            blogs_query,
            reset,
        }
    }
}
