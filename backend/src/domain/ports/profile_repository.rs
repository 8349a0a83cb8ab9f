//! Port abstraction for profile persistence adapters.

use async_trait::async_trait;

use crate::domain::{EmailAddress, NewProfile, Profile, ProfilePatch, UserId};

use super::StoreError;

/// Profile row joined with its stored credential hash.
///
/// Only the sign-in path sees this type; everything else works with
/// [`Profile`], which never carries the hash.
#[derive(Debug, Clone)]
pub struct ProfileCredentials {
    /// The profile record.
    pub profile: Profile,
    /// Stored argon2id PHC string.
    pub password_hash: String,
}

/// Port for profile storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// List all profiles, newest first.
    async fn list(&self) -> Result<Vec<Profile>, StoreError>;

    /// Fetch a profile by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, StoreError>;

    /// Fetch a profile and its credential hash by email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<ProfileCredentials>, StoreError>;

    /// Insert a new profile with a generated id.
    ///
    /// Fails with [`StoreError::Conflict`] when the email is already
    /// registered.
    async fn insert(&self, profile: NewProfile) -> Result<Profile, StoreError>;

    /// Apply a column-wise patch, returning the updated row or `None` when
    /// the profile no longer exists.
    async fn update(
        &self,
        id: &UserId,
        patch: ProfilePatch,
    ) -> Result<Option<Profile>, StoreError>;

    /// Delete a profile, returning whether a row was removed.
    async fn delete(&self, id: &UserId) -> Result<bool, StoreError>;
}

/// Fixture implementation for tests that never touch profile storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileRepository;

#[async_trait]
impl ProfileRepository for FixtureProfileRepository {
    async fn list(&self) -> Result<Vec<Profile>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &UserId) -> Result<Option<Profile>, StoreError> {
        Ok(None)
    }

    async fn find_by_email(
        &self,
        _email: &EmailAddress,
    ) -> Result<Option<ProfileCredentials>, StoreError> {
        Ok(None)
    }

    async fn insert(&self, _profile: NewProfile) -> Result<Profile, StoreError> {
        Err(StoreError::query("fixture repository cannot insert"))
    }

    async fn update(
        &self,
        _id: &UserId,
        _patch: ProfilePatch,
    ) -> Result<Option<Profile>, StoreError> {
        Ok(None)
    }

    async fn delete(&self, _id: &UserId) -> Result<bool, StoreError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_repository_reports_absence_everywhere() {
        let repo = FixtureProfileRepository;
        assert!(repo.list().await.expect("list succeeds").is_empty());
        assert!(repo
            .find_by_id(&UserId::random())
            .await
            .expect("lookup succeeds")
            .is_none());
        assert!(!repo.delete(&UserId::random()).await.expect("delete succeeds"));
    }
}
