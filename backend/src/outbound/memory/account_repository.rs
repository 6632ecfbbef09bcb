//! In-memory `AccountRepository` adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{Account, UserId};
use crate::domain::ports::{AccountRepository, AccountRepositoryError};

/// Account table keyed by exact username.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> AccountRepositoryError {
    AccountRepositoryError::query("account table lock poisoned")
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let username = account.user().username().as_ref().to_owned();
        let mut accounts = self.accounts.write().map_err(|_| poisoned())?;
        if accounts.contains_key(&username) {
            return Err(AccountRepositoryError::duplicate_username(username));
        }
        accounts.insert(username, account.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let accounts = self.accounts.read().map_err(|_| poisoned())?;
        Ok(accounts.get(username).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<Account>, AccountRepositoryError> {
        let accounts = self.accounts.read().map_err(|_| poisoned())?;
        Ok(accounts
            .values()
            .find(|account| account.user().id() == id)
            .cloned())
    }

    async fn clear(&self) -> Result<(), AccountRepositoryError> {
        self.accounts.write().map_err(|_| poisoned())?.clear();
        Ok(())
    }
}
