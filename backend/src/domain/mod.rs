//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed domain entities used by the API and
//! persistence layers, plus the use-case services that enforce the blog
//! list rules (unique usernames, opaque credential failures, creator-only
//! deletion, and likes-descending listing). Keep types immutable and document
//! invariants and serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User, UserId, Username — registered account identity.
//! - Identity — authenticated capability issued by login.
//! - Blog, BlogId, BlogDraft — shared blog entries.
//! - `can_delete` / `order_for` — authorisation gate and listing order.

pub mod account_service;
pub mod auth;
pub mod authorization;
pub mod blog;
pub mod blog_service;
pub mod error;
pub mod identity;
pub mod listing;
pub mod password;
pub mod ports;
pub mod reset_service;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, PASSWORD_MIN, Registration, RegistrationValidationError,
};
pub use self::authorization::can_delete;
pub use self::blog::{Blog, BlogDraft, BlogId, BlogValidationError, TEXT_FIELD_MAX};
pub use self::blog_service::BlogService;
pub use self::error::{Error, ErrorCode};
pub use self::identity::Identity;
pub use self::listing::order_for;
pub use self::password::{PasswordDigest, PasswordDigestError};
pub use self::reset_service::ResetService;
pub use self::trace_id::TraceId;
pub use self::user::{
    Account, USERNAME_MAX, USERNAME_MIN, User, UserId, UserValidationError, Username,
};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
