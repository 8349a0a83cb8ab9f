//! Driving port for the admin approval workflow.
//!
//! Callers must already satisfy the admin gate before invoking any of these
//! operations; the port itself only encodes the state machine over one
//! profile row at a time. There are no batch transitions.

use async_trait::async_trait;

use crate::domain::{Error, Profile, Role, UserId};

/// Domain use-case port for managing the user directory.
#[async_trait]
pub trait UserAdministration: Send + Sync {
    /// List every profile, newest first.
    async fn list_users(&self) -> Result<Vec<Profile>, Error>;

    /// Transition a pending profile to approved. Role is untouched.
    async fn approve(&self, id: &UserId) -> Result<Profile, Error>;

    /// Reject a profile by deleting its row.
    ///
    /// A rejected profile no longer exists and cannot transition further.
    /// The delete is a single-row operation with no auth-system cleanup, so
    /// callers must not assume the record is gone when the call fails.
    async fn reject(&self, id: &UserId) -> Result<(), Error>;

    /// Replace the profile's role. All other fields are untouched.
    async fn change_role(&self, id: &UserId, role: Role) -> Result<Profile, Error>;
}

/// Fixture implementation for handler tests: an empty directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserAdministration;

#[async_trait]
impl UserAdministration for FixtureUserAdministration {
    async fn list_users(&self) -> Result<Vec<Profile>, Error> {
        Ok(Vec::new())
    }

    async fn approve(&self, id: &UserId) -> Result<Profile, Error> {
        Err(Error::not_found(format!("no profile with id {id}")))
    }

    async fn reject(&self, id: &UserId) -> Result<(), Error> {
        Err(Error::not_found(format!("no profile with id {id}")))
    }

    async fn change_role(&self, id: &UserId, _role: Role) -> Result<Profile, Error> {
        Err(Error::not_found(format!("no profile with id {id}")))
    }
}
