//! Driving port for registration and sign-in use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure. This makes HTTP handler tests deterministic because they
//! can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, Profile, Registration, Role, SignInCredentials, UserId};

/// Domain use-case port for account registration and authentication.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a pending (unapproved) account and return its profile.
    async fn register(&self, registration: Registration) -> Result<Profile, Error>;

    /// Validate credentials and return the authenticated profile.
    async fn sign_in(&self, credentials: SignInCredentials) -> Result<Profile, Error>;
}

/// In-memory authenticator used by handler tests.
///
/// `ada@example.com` / `password` authenticates successfully as an approved
/// admin with a fixed user id; anything else is rejected. Registration
/// succeeds for any valid payload and returns a pending profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAuthService;

/// Fixed subject produced by [`FixtureAuthService`].
pub const FIXTURE_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
const FIXTURE_EMAIL: &str = "ada@example.com";
const FIXTURE_PASSWORD: &str = "password";

fn fixture_profile(registration: Option<&Registration>) -> Result<Profile, Error> {
    let id = UserId::new(FIXTURE_USER_ID)
        .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
    let now = chrono::Utc::now();
    match registration {
        Some(registration) => Ok(Profile {
            id,
            email: registration.credentials().email().clone(),
            full_name: registration.full_name().map(ToOwned::to_owned),
            approved: false,
            role: Role::User,
            avatar_url: None,
            last_sign_in_at: None,
            created_at: now,
            updated_at: now,
        }),
        None => Ok(Profile {
            id,
            email: crate::domain::EmailAddress::new(FIXTURE_EMAIL)
                .map_err(|err| Error::internal(format!("invalid fixture email: {err}")))?,
            full_name: Some("Ada Lovelace".into()),
            approved: true,
            role: Role::Admin,
            avatar_url: None,
            last_sign_in_at: Some(now),
            created_at: now,
            updated_at: now,
        }),
    }
}

#[async_trait]
impl AuthService for FixtureAuthService {
    async fn register(&self, registration: Registration) -> Result<Profile, Error> {
        fixture_profile(Some(&registration))
    }

    async fn sign_in(&self, credentials: SignInCredentials) -> Result<Profile, Error> {
        if credentials.email().as_ref() == FIXTURE_EMAIL
            && credentials.password() == FIXTURE_PASSWORD
        {
            fixture_profile(None)
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
