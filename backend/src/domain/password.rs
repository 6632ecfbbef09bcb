//! Argon2id password digests.
//!
//! Accounts never keep the caller's password. Registration stores a PHC
//! string (`$argon2id$v=19$...`) carrying the salt and parameters; login
//! re-derives and compares through [`PasswordVerifier`].

use std::fmt;
use std::sync::LazyLock;

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::rngs::OsRng;

/// Failure to derive a digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("password hashing failed: {message}")]
pub struct PasswordDigestError {
    message: String,
}

/// Digest compared against when no account matches, so rejected logins cost
/// the same whether or not the username exists.
static PLACEHOLDER: LazyLock<Option<PasswordDigest>> =
    LazyLock::new(|| PasswordDigest::derive("placeholder-for-unknown-accounts").ok());

/// One-way digest of an account password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    phc: String,
}

impl PasswordDigest {
    /// Digest `password` with a freshly generated salt.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::PasswordDigest;
    ///
    /// let digest = PasswordDigest::derive("12345678").expect("hashing succeeds");
    /// assert!(digest.matches("12345678"));
    /// assert!(!digest.matches("1234567"));
    /// ```
    pub fn derive(password: &str) -> Result<Self, PasswordDigestError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| PasswordDigestError {
                message: err.to_string(),
            })?
            .to_string();
        Ok(Self { phc })
    }

    /// Whether `candidate` is the password this digest was derived from.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        PasswordHash::new(&self.phc)
            .and_then(|parsed| Argon2::default().verify_password(candidate.as_bytes(), &parsed))
            .is_ok()
    }

    /// Spend one verification on a throwaway digest.
    pub(crate) fn verify_placeholder(candidate: &str) {
        if let Some(placeholder) = PLACEHOLDER.as_ref() {
            std::hint::black_box(placeholder.matches(candidate));
        }
    }
}

// Never print digest material.
impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}
