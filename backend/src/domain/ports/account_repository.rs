//! Port abstraction for account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::user::{Account, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Another account already uses the username.
        DuplicateUsername { username: String } => "username already registered: {username}",
        /// Query or mutation failed during execution.
        Query { message: String } => "account repository query failed: {message}",
    }
}

/// Account Store contract.
///
/// Implementations must make the uniqueness check and the insert a single
/// atomic step: two concurrent inserts of the same username leave exactly
/// one account behind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account, rejecting taken usernames.
    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError>;

    /// Fetch an account by exact username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountRepositoryError>;

    /// Fetch an account by id; `None` once the account is gone.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Account>, AccountRepositoryError>;

    /// Remove every account.
    async fn clear(&self) -> Result<(), AccountRepositoryError>;
}
