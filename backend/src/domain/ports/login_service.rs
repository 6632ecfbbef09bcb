//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to authenticate credentials without knowing the
//! backing account store, which keeps HTTP handler tests deterministic.

use async_trait::async_trait;

use crate::domain::{Error, Identity, LoginCredentials};

/// Session Authenticator use-case.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and issue an identity.
    ///
    /// Unknown usernames and wrong passwords fail with the same
    /// [`crate::domain::ErrorCode::InvalidCredentials`] error and message.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Identity, Error>;

    /// Confirm that a previously issued identity still names a live account.
    ///
    /// Fails with [`crate::domain::ErrorCode::Unauthorized`] when the account
    /// was removed, or when its id now belongs to a different username.
    async fn resume(&self, claimed: &Identity) -> Result<Identity, Error>;
}
