//! Access control gate: derives authorization state from a session subject
//! and its profile.
//!
//! The gate never fails on a missing or expired session; absence simply
//! derives to the anonymous state. Policy note: authenticated accounts that
//! are still awaiting approval may use the general surface — only the admin
//! surface checks beyond authentication, and it checks the role flag. The
//! approval flag is surfaced so clients can render the pending state.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Profile, Role, UserId};

/// Authorization level demanded by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Open to anonymous callers.
    Public,
    /// Requires a valid session subject.
    Authenticated,
    /// Requires a session subject whose profile carries [`Role::Admin`].
    Admin,
}

/// Derived authorization state for one request.
///
/// # Examples
/// ```
/// use backend::domain::AccessState;
///
/// let state = AccessState::anonymous();
/// assert!(!state.is_authenticated());
/// assert!(!state.is_approved());
/// assert!(!state.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AccessState {
    subject: Option<UserId>,
    profile: Option<Profile>,
}

impl AccessState {
    /// State for a caller without a session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            subject: None,
            profile: None,
        }
    }

    /// State for an authenticated caller and their loaded profile.
    ///
    /// A session can outlive its profile (e.g. the account was rejected
    /// after sign-in), so the profile stays optional even when a subject
    /// exists.
    #[must_use]
    pub fn authenticated(subject: UserId, profile: Option<Profile>) -> Self {
        Self {
            subject: Some(subject),
            profile,
        }
    }

    /// Session subject, when one exists.
    #[must_use]
    pub fn subject(&self) -> Option<&UserId> {
        self.subject.as_ref()
    }

    /// Loaded profile, when one exists.
    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Whether a session subject exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.subject.is_some()
    }

    /// Whether the profile has been approved by an admin.
    ///
    /// Always false without a session subject or profile.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.is_authenticated() && self.profile.as_ref().is_some_and(|p| p.approved)
    }

    /// Whether the profile carries the admin role.
    ///
    /// Always false without a session subject or profile.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_authenticated()
            && self
                .profile
                .as_ref()
                .is_some_and(|p| p.role == Role::Admin)
    }

    /// Require a session subject or fail with `401 Unauthorized`.
    pub fn require_authenticated(&self) -> Result<&UserId, Error> {
        self.subject
            .as_ref()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Require the admin role or fail.
    ///
    /// An anonymous caller receives `401 Unauthorized`; an authenticated
    /// non-admin receives `403 Forbidden`. Admin data must never be
    /// produced before this check passes.
    pub fn require_admin(&self) -> Result<&UserId, Error> {
        let subject = self.require_authenticated()?;
        if self.is_admin() {
            Ok(subject)
        } else {
            Err(Error::forbidden("admin role required"))
        }
    }

    /// Check this state against a route's declared level.
    pub fn require(&self, level: AccessLevel) -> Result<(), Error> {
        match level {
            AccessLevel::Public => Ok(()),
            AccessLevel::Authenticated => self.require_authenticated().map(|_| ()),
            AccessLevel::Admin => self.require_admin().map(|_| ()),
        }
    }
}

/// Derived access flags exposed to clients alongside the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessFlags {
    /// A session subject exists.
    pub authenticated: bool,
    /// The profile has been approved.
    pub approved: bool,
    /// The profile carries the admin role.
    pub admin: bool,
}

impl From<&AccessState> for AccessFlags {
    fn from(state: &AccessState) -> Self {
        Self {
            authenticated: state.is_authenticated(),
            approved: state.is_approved(),
            admin: state.is_admin(),
        }
    }
}
