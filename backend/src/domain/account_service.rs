//! Account registration and credential checks.
//!
//! [`AccountService`] backs both the registration and the login driving
//! ports. Login failures never reveal whether the username exists: unknown
//! users and wrong passwords produce the same error and message, and both
//! pay for one Argon2 verification.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, LoginService, RegistrationService,
};
use crate::domain::{
    Account, Error, Identity, LoginCredentials, PasswordDigest, Registration, User, UserId,
};

/// Message shared by every rejected login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid username or password";

/// Message returned when a session outlives its account.
pub const SESSION_EXPIRED_MESSAGE: &str = "session no longer valid; log in again";

/// Account service implementing registration and login.
#[derive(Clone)]
pub struct AccountService<R> {
    accounts: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new service over the given account store.
    pub fn new(accounts: Arc<R>) -> Self {
        Self { accounts }
    }
}

fn map_repository_error(error: AccountRepositoryError) -> Error {
    match error {
        AccountRepositoryError::DuplicateUsername { username } => {
            Error::duplicate_username(format!("username already taken: {username}"))
        }
        AccountRepositoryError::Query { message } => {
            error!(%message, "account repository failed");
            Error::internal(format!("account repository error: {message}"))
        }
    }
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Whether `password` matches the stored digest for `username`.
    ///
    /// Unknown usernames simply yield `false`. No state changes.
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, Error> {
        Ok(self
            .lookup(username, password)
            .await?
            .is_some())
    }

    async fn lookup(&self, username: &str, password: &str) -> Result<Option<Account>, Error> {
        let account = self
            .accounts
            .find_by_username(username)
            .await
            .map_err(map_repository_error)?;
        match account {
            Some(account) => Ok(account.password().matches(password).then_some(account)),
            None => {
                PasswordDigest::verify_placeholder(password);
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl<R> RegistrationService for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, registration: &Registration) -> Result<User, Error> {
        let user = User::new(UserId::random(), registration.username().clone());
        let digest = PasswordDigest::derive(registration.password()).map_err(|err| {
            error!(error = %err, "password hashing failed");
            Error::internal("failed to secure password")
        })?;
        let account = Account::new(user.clone(), digest);
        self.accounts
            .insert(&account)
            .await
            .map_err(map_repository_error)?;
        info!(user_id = %user.id(), username = %user.username(), "account registered");
        Ok(user)
    }
}

#[async_trait]
impl<R> LoginService for AccountService<R>
where
    R: AccountRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Identity, Error> {
        match self
            .lookup(credentials.username(), credentials.password())
            .await?
        {
            Some(account) => {
                info!(user_id = %account.user().id(), "login succeeded");
                Ok(Identity::for_user(account.user()))
            }
            None => {
                warn!("login rejected");
                Err(Error::invalid_credentials(INVALID_CREDENTIALS_MESSAGE))
            }
        }
    }

    async fn resume(&self, claimed: &Identity) -> Result<Identity, Error> {
        let account = self
            .accounts
            .find_by_id(claimed.user_id())
            .await
            .map_err(map_repository_error)?;
        match account {
            Some(account) if account.user().username() == claimed.username() => {
                Ok(Identity::for_user(account.user()))
            }
            _ => {
                warn!(user_id = %claimed.user_id(), "session names a missing account");
                Err(Error::unauthorized(SESSION_EXPIRED_MESSAGE))
            }
        }
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
