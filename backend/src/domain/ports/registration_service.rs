//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, Registration, User};

/// Account registration use-case.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create an account, failing with
    /// [`crate::domain::ErrorCode::DuplicateUsername`] when the name is taken.
    async fn register(&self, registration: &Registration) -> Result<User, Error>;
}
