//! Registered account model.
//!
//! A [`User`] is the public face of an account: a server-generated id and a
//! unique, immutable [`Username`]. The password digest travels separately in
//! [`Account`] so it can never be serialised by accident.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PasswordDigest;

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;
/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 32;

/// Validation errors returned by user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The user id is empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The user id is not a canonical UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The username is empty once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// The username is shorter than [`USERNAME_MIN`].
    #[error("username must be at least {min} characters")]
    UsernameTooShort {
        /// Required minimum.
        min: usize,
    },
    /// The username is longer than [`USERNAME_MAX`].
    #[error("username must be at most {max} characters")]
    UsernameTooLong {
        /// Allowed maximum.
        max: usize,
    },
    /// The username uses characters outside `[A-Za-z0-9._-]`.
    #[error("username may only contain letters, numbers, dots, dashes, or underscores")]
    UsernameInvalidCharacters,
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Unique login name chosen at registration.
///
/// ## Invariants
/// - Surrounding whitespace is trimmed before validation.
/// - Between [`USERNAME_MIN`] and [`USERNAME_MAX`] characters.
/// - ASCII letters, digits, `.`, `-` and `_` only, so two usernames that look
///   identical are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::Username;
    ///
    /// let name = Username::new("  test  ").expect("valid username");
    /// assert_eq!(name.as_ref(), "test");
    /// assert!(Username::new("no spaces").is_err());
    /// ```
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }

        let length = trimmed.chars().count();
        if length < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        if length > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }

        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.');
        if !trimmed.chars().all(allowed) {
            return Err(UserValidationError::UsernameInvalidCharacters);
        }

        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user as exposed to clients.
///
/// ## Invariants
/// - `id` is a valid UUID string.
/// - `username` satisfies [`Username`] validation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    username: Username,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, username: Username) -> Self {
        Self { id, username }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique login name.
    pub fn username(&self) -> &Username {
        &self.username
    }
}

/// Stored account: the public user plus its password digest.
///
/// Not serialisable, so the digest never reaches a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    user: User,
    password: PasswordDigest,
}

impl Account {
    /// Pair a user with the digest of their password.
    pub fn new(user: User, password: PasswordDigest) -> Self {
        Self { user, password }
    }

    /// Public user record.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Stored password digest.
    pub fn password(&self) -> &PasswordDigest {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case("", UserValidationError::EmptyId)]
    #[case("not-a-uuid", UserValidationError::InvalidId)]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
    fn user_id_rejects_invalid_values(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(UserId::new(raw).expect_err("invalid id"), expected);
    }

    #[rstest]
    #[case("   ", UserValidationError::EmptyUsername)]
    #[case("ab", UserValidationError::UsernameTooShort { min: USERNAME_MIN })]
    #[case("a-very-long-username-that-keeps-going", UserValidationError::UsernameTooLong { max: USERNAME_MAX })]
    #[case("bad name", UserValidationError::UsernameInvalidCharacters)]
    #[case("émile", UserValidationError::UsernameInvalidCharacters)]
    fn username_rejects_invalid_values(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(Username::new(raw).expect_err("invalid username"), expected);
    }

    #[rstest]
    #[case("test", "test")]
    #[case("  test2 ", "test2")]
    #[case("wes.bos_99-x", "wes.bos_99-x")]
    fn username_accepts_and_trims(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(Username::new(raw).expect("valid username").as_ref(), expected);
    }

    #[rstest]
    fn user_serialises_without_credentials() {
        let user = User::new(
            UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id"),
            Username::new("test").expect("fixture username"),
        );
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(
            value,
            json!({ "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "username": "test" })
        );
        assert!(value.get("password").is_none());
        let back: User = serde_json::from_value(value).expect("deserialise user");
        assert_eq!(back, user);
    }

    #[rstest]
    fn user_rejects_invalid_username_on_deserialise() {
        let payload: Value = json!({
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "username": "x"
        });
        assert!(serde_json::from_value::<User>(payload).is_err());
    }
}
