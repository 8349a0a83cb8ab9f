//! Password-backed implementation of the [`AuthService`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::password::{hash_password, verify_password, PasswordError};
use crate::domain::ports::{store_call, AuthService, ProfileRepository};
use crate::domain::{Error, NewProfile, Profile, ProfilePatch, Registration, SignInCredentials};

/// Registration and sign-in over a profile repository.
///
/// Wrong email and wrong password produce the same uniform error so the
/// sign-in endpoint cannot be used to probe which addresses are registered.
#[derive(Clone)]
pub struct PasswordAuthService<P> {
    profiles: Arc<P>,
}

impl<P> PasswordAuthService<P> {
    /// Create a new service over the given profile repository.
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }
}

fn map_password_error(error: PasswordError) -> Error {
    Error::internal(error.to_string())
}

fn invalid_credentials() -> Error {
    Error::unauthorized("invalid credentials")
}

#[async_trait]
impl<P> AuthService for PasswordAuthService<P>
where
    P: ProfileRepository,
{
    async fn register(&self, registration: Registration) -> Result<Profile, Error> {
        let email = registration.credentials().email().clone();
        let existing = store_call(self.profiles.find_by_email(&email)).await?;
        if existing.is_some() {
            return Err(Error::conflict("email is already registered"));
        }

        let password_hash =
            hash_password(registration.credentials().password()).map_err(map_password_error)?;
        let profile = store_call(self.profiles.insert(NewProfile {
            email,
            password_hash,
            full_name: registration.full_name().map(ToOwned::to_owned),
        }))
        .await?;

        info!(user_id = %profile.id, "registered pending account");
        Ok(profile)
    }

    async fn sign_in(&self, credentials: SignInCredentials) -> Result<Profile, Error> {
        let Some(stored) =
            store_call(self.profiles.find_by_email(credentials.email())).await?
        else {
            return Err(invalid_credentials());
        };

        let matches = verify_password(credentials.password(), &stored.password_hash)
            .map_err(map_password_error)?;
        if !matches {
            return Err(invalid_credentials());
        }

        // The account may have been rejected between lookup and update; a
        // vanished row reads as bad credentials rather than an error.
        let updated = store_call(
            self.profiles
                .update(&stored.profile.id, ProfilePatch::signed_in_at(Utc::now())),
        )
        .await?;
        updated.ok_or_else(invalid_credentials)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{MockProfileRepository, ProfileCredentials, StoreError};
    use crate::domain::{EmailAddress, ErrorCode, Role, UserId};
    use rstest::rstest;

    fn profile(email: &str) -> Profile {
        Profile {
            id: UserId::random(),
            email: EmailAddress::new(email).expect("valid email"),
            full_name: None,
            approved: false,
            role: Role::User,
            avatar_url: None,
            last_sign_in_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn registration(email: &str) -> Registration {
        Registration::try_from_parts(email, "correct horse battery staple", None)
            .expect("valid registration")
    }

    fn credentials(email: &str, password: &str) -> SignInCredentials {
        SignInCredentials::try_from_parts(email, password).expect("valid credential shape")
    }

    #[tokio::test]
    async fn register_rejects_duplicate_emails() {
        let mut repo = MockProfileRepository::new();
        let existing = profile("ada@example.com");
        repo.expect_find_by_email().times(1).return_once(move |_| {
            Ok(Some(ProfileCredentials {
                profile: existing,
                password_hash: "$argon2id$stub".into(),
            }))
        });
        repo.expect_insert().times(0);

        let service = PasswordAuthService::new(Arc::new(repo));
        let err = service
            .register(registration("ada@example.com"))
            .await
            .expect_err("duplicate must fail");
        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_password() {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_email().times(1).return_once(|_| Ok(None));
        repo.expect_insert()
            .withf(|new_profile: &NewProfile| {
                new_profile.password_hash.starts_with("$argon2id$")
                    && new_profile.password_hash != "correct horse battery staple"
            })
            .times(1)
            .return_once(|new_profile| {
                let mut stored = profile(new_profile.email.as_ref());
                stored.full_name = new_profile.full_name;
                Ok(stored)
            });

        let service = PasswordAuthService::new(Arc::new(repo));
        let stored = service
            .register(registration("new@example.com"))
            .await
            .expect("registration succeeds");
        assert!(!stored.approved);
        assert_eq!(stored.role, Role::User);
    }

    #[tokio::test]
    async fn sign_in_rejects_unknown_emails_uniformly() {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_email().times(1).return_once(|_| Ok(None));

        let service = PasswordAuthService::new(Arc::new(repo));
        let err = service
            .sign_in(credentials("ghost@example.com", "whatever"))
            .await
            .expect_err("unknown email must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "invalid credentials");
    }

    #[tokio::test]
    async fn sign_in_verifies_the_stored_hash_and_records_the_timestamp() {
        let stored = profile("ada@example.com");
        let stored_id = stored.id;
        let hash = hash_password("open sesame").expect("hashing succeeds");

        let mut repo = MockProfileRepository::new();
        let lookup = stored.clone();
        repo.expect_find_by_email().times(1).return_once(move |_| {
            Ok(Some(ProfileCredentials {
                profile: lookup,
                password_hash: hash,
            }))
        });
        repo.expect_update()
            .withf(move |id, patch| *id == stored_id && patch.last_sign_in_at.is_some())
            .times(1)
            .return_once(move |_, patch| {
                let mut updated = stored;
                updated.last_sign_in_at = patch.last_sign_in_at;
                Ok(Some(updated))
            });

        let service = PasswordAuthService::new(Arc::new(repo));
        let signed_in = service
            .sign_in(credentials("ada@example.com", "open sesame"))
            .await
            .expect("sign-in succeeds");
        assert!(signed_in.last_sign_in_at.is_some());
    }

    #[tokio::test]
    async fn sign_in_rejects_a_wrong_password() {
        let stored = profile("ada@example.com");
        let hash = hash_password("open sesame").expect("hashing succeeds");

        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_email().times(1).return_once(move |_| {
            Ok(Some(ProfileCredentials {
                profile: stored,
                password_hash: hash,
            }))
        });
        repo.expect_update().times(0);

        let service = PasswordAuthService::new(Arc::new(repo));
        let err = service
            .sign_in(credentials("ada@example.com", "not sesame"))
            .await
            .expect_err("wrong password must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case(StoreError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(StoreError::query("boom"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn sign_in_surfaces_store_failures(
        #[case] failure: StoreError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(move |_| Err(failure));

        let service = PasswordAuthService::new(Arc::new(repo));
        let err = service
            .sign_in(credentials("ada@example.com", "pw"))
            .await
            .expect_err("store failure must surface");
        assert_eq!(err.code(), expected);
    }
}
