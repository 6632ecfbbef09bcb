//! HTTP inbound adapter exposing REST endpoints.
//!
//! Routes are registered relative to the `/api` scope by [`configure_api`];
//! the reset endpoint lives in [`configure_testing`] so the server can mount
//! it only when end-to-end testing is enabled.

pub mod blogs;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
pub mod testing;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the user and blog endpoints on an `/api` scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use bloglist::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(users::register)
        .service(users::login)
        .service(users::logout)
        .service(users::current_user)
        .service(blogs::list_blogs)
        .service(blogs::create_blog)
        .service(blogs::get_blog)
        .service(blogs::like_blog)
        .service(blogs::delete_blog);
}

/// Register testing-only endpoints on an `/api` scope.
pub fn configure_testing(cfg: &mut web::ServiceConfig) {
    cfg.service(testing::reset);
}
