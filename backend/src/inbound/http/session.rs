//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations such as persisting or retrieving an
//! authenticated [`Identity`].

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::ports::LoginService;
use crate::domain::{Error, ErrorCode, Identity, UserId, Username};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const USERNAME_KEY: &str = "username";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist an authenticated identity in the session cookie.
    ///
    /// The session is renewed first so a pre-login cookie is never promoted.
    pub fn persist_identity(&self, identity: &Identity) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, identity.user_id().as_ref())
            .and_then(|()| self.0.insert(USERNAME_KEY, identity.username().as_ref()))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the identity stored in the session, if present and well formed.
    pub fn identity(&self) -> Result<Option<Identity>, Error> {
        let read = |key: &str| {
            self.0
                .get::<String>(key)
                .map_err(|error| Error::internal(format!("failed to read session: {error}")))
        };
        let (Some(raw_id), Some(raw_username)) = (read(USER_ID_KEY)?, read(USERNAME_KEY)?) else {
            return Ok(None);
        };
        match (UserId::new(raw_id), Username::new(raw_username)) {
            (Ok(user_id), Ok(username)) => Ok(Some(Identity::new(user_id, username))),
            (Err(error), _) | (_, Err(error)) => {
                warn!("invalid identity in session cookie: {error}");
                Ok(None)
            }
        }
    }

    /// Require an authenticated identity or return `401 Unauthorized`.
    pub fn require_identity(&self) -> Result<Identity, Error> {
        self.identity()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Require an identity whose account still exists.
    ///
    /// The cookie alone only proves a past login. A session whose account was
    /// removed is purged and answered with `401 Unauthorized`.
    pub async fn require_account(&self, login: &dyn LoginService) -> Result<Identity, Error> {
        let claimed = self.require_identity()?;
        login.resume(&claimed).await.inspect_err(|err| {
            if err.code() == ErrorCode::Unauthorized {
                self.purge();
            }
        })
    }

    /// Drop the session and expire its cookie. Safe to call without one.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
