//! In-process stores backing the account and blog ports.
//!
//! Each store guards its table with a `std::sync::RwLock` and never holds the
//! guard across an `.await`. A poisoned lock is reported as a query error
//! instead of propagating the panic.

mod account_repository;
mod blog_repository;

pub use account_repository::InMemoryAccountRepository;
pub use blog_repository::InMemoryBlogRepository;
