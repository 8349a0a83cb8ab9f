//! Port abstraction for favorite relation persistence adapters.

use async_trait::async_trait;

use crate::domain::{BusinessId, Favorite, UserId};

use super::StoreError;

/// Port for favorite relation storage.
///
/// The store holds a unique constraint on `(user_id, business_id)`; the
/// insert and delete operations are phrased so racing toggles converge
/// instead of erroring (see the toggle service).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Fetch the relation for a user/business pair, if present.
    async fn find_by_pair(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<Option<Favorite>, StoreError>;

    /// List a user's relations, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, StoreError>;

    /// Insert the relation for a pair.
    ///
    /// Returns `None` when the unique constraint reports the relation
    /// already exists (a concurrent toggle won the race).
    async fn insert(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<Option<Favorite>, StoreError>;

    /// Delete the relation for a pair, returning whether a row was removed.
    async fn delete_by_pair(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<bool, StoreError>;
}

/// Fixture implementation for tests that never touch favorite storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFavoriteRepository;

#[async_trait]
impl FavoriteRepository for FixtureFavoriteRepository {
    async fn find_by_pair(
        &self,
        _user_id: &UserId,
        _business_id: &BusinessId,
    ) -> Result<Option<Favorite>, StoreError> {
        Ok(None)
    }

    async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<Favorite>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<Option<Favorite>, StoreError> {
        Ok(Some(Favorite {
            id: uuid::Uuid::new_v4(),
            user_id: *user_id,
            business_id: *business_id,
            created_at: chrono::Utc::now(),
        }))
    }

    async fn delete_by_pair(
        &self,
        _user_id: &UserId,
        _business_id: &BusinessId,
    ) -> Result<bool, StoreError> {
        Ok(false)
    }
}
