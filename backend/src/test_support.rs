//! Test utilities for the bloglist crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`, via
//! the `test-support` feature). Everything here runs against the real domain
//! services over fresh in-memory stores.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use mockable::DefaultClock;
use serde_json::json;

use crate::Trace;
use crate::domain::{AccountService, BlogService, ResetService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::{configure_api, configure_testing};
use crate::outbound::memory::{InMemoryAccountRepository, InMemoryBlogRepository};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// HTTP state wired to real services over empty in-memory stores.
pub fn in_memory_http_state() -> HttpState {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let blogs = Arc::new(InMemoryBlogRepository::new());
    let account_service = Arc::new(AccountService::new(Arc::clone(&accounts)));
    let blog_service = Arc::new(BlogService::new(
        Arc::clone(&blogs),
        Arc::new(DefaultClock),
    ));

    HttpState::new(HttpStatePorts {
        login: account_service.clone(),
        registration: account_service,
        blogs: blog_service.clone(),
        blogs_query: blog_service,
        reset: Arc::new(ResetService::new(accounts, blogs)),
    })
}

/// Full application as served, with testing routes mounted.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(in_memory_http_state()))
        .wrap(Trace)
        .service(
            web::scope("/api")
                .wrap(test_session_middleware())
                .configure(configure_api)
                .configure(configure_testing),
        )
}

/// Extract the session cookie set on `response`.
///
/// # Panics
/// Panics when the response did not set a session cookie.
pub fn session_cookie(response: &ServiceResponse) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .unwrap_or_else(|| panic!("response did not set a session cookie"))
}

/// Register an account, returning the response status.
pub async fn register<S>(app: &S, username: &str, password: &str) -> u16
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    test::call_service(app, request).await.status().as_u16()
}

/// Log in and return the raw response.
pub async fn login<S>(app: &S, username: &str, password: &str) -> ServiceResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    test::call_service(app, request).await
}

/// Register (if needed) and log in, returning the session cookie.
///
/// # Panics
/// Panics when login fails.
pub async fn login_cookie<S>(app: &S, username: &str, password: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    register(app, username, password).await;
    let response = login(app, username, password).await;
    assert!(
        response.status().is_success(),
        "login for {username} failed with {}",
        response.status()
    );
    session_cookie(&response)
}
