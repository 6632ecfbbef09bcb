//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`LoginService`, `RegistrationService`, `BlogCommand`,
//! `BlogQuery`, `EnvironmentReset`) are what inbound adapters call. Driven
//! ports (`AccountRepository`, `BlogRepository`) are what domain services
//! call; outbound adapters implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod blog_command;
mod blog_query;
mod blog_repository;
mod environment_reset;
mod login_service;
mod registration_service;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
pub use blog_command::BlogCommand;
pub use blog_query::BlogQuery;
#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogRepository, BlogRepositoryError};
pub use environment_reset::EnvironmentReset;
pub use login_service::LoginService;
pub use registration_service::RegistrationService;
