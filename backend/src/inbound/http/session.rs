//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! An external login flow places the caller's user id and role in the
//! session cookie. Handlers only ever read that claim through
//! [`SessionContext`].

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const ROLE_KEY: &str = "role";

/// Role carried by the identity claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store an identity claim. Used by the login flow and by tests.
    pub fn persist_identity(&self, user_id: &UserId, role: Role) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .and_then(|()| self.0.insert(ROLE_KEY, role))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Current user id, if the cookie carries a well-formed one.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let raw = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.and_then(|raw| match UserId::new(raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                None
            }
        }))
    }

    /// Role stored alongside the user id. An unreadable role counts as
    /// plain user.
    pub fn role(&self) -> Role {
        match self.0.get::<Role>(ROLE_KEY) {
            Ok(Some(role)) => role,
            Ok(None) => Role::User,
            Err(error) => {
                warn!(%error, "unreadable role in session cookie");
                Role::User
            }
        }
    }

    /// Require an authenticated user id or return `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Require an admin principal: `401` without a claim, `403` for users.
    pub fn require_admin(&self) -> Result<UserId, Error> {
        let id = self.require_user_id()?;
        match self.role() {
            Role::Admin => Ok(id),
            Role::User => Err(Error::forbidden("admin access required")),
        }
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
