//! Authenticated identity capability.
//!
//! An [`Identity`] can only be minted inside this crate: by a successful
//! login, or by the HTTP session layer rehydrating an identity it previously
//! stored in its signed and encrypted cookie. Holding one is the proof that
//! blog mutations require.

use super::{User, UserId, Username};

/// Authenticated capability bound to exactly one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: UserId,
    username: Username,
}

impl Identity {
    pub(crate) fn new(user_id: UserId, username: Username) -> Self {
        Self { user_id, username }
    }

    pub(crate) fn for_user(user: &User) -> Self {
        Self::new(user.id().clone(), user.username().clone())
    }

    /// Account identifier of the authenticated user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Username of the authenticated user.
    pub fn username(&self) -> &Username {
        &self.username
    }
}
