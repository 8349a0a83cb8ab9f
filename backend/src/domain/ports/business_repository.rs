//! Port abstraction for business persistence adapters.
//!
//! There is deliberately no delete operation: businesses are retired by
//! moving them to the `Inactive` stage, never removed.

use async_trait::async_trait;

use crate::domain::{Business, BusinessFilter, BusinessId, BusinessPatch, NewBusiness};

use super::StoreError;

/// Port for business storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// List businesses matching the filter, newest first.
    async fn list(&self, filter: BusinessFilter) -> Result<Vec<Business>, StoreError>;

    /// Fetch a business by identifier.
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, StoreError>;

    /// Insert a new business with a generated id.
    async fn insert(&self, business: NewBusiness) -> Result<Business, StoreError>;

    /// Apply a column-wise patch, returning the updated row or `None` when
    /// the business does not exist.
    async fn update(
        &self,
        id: &BusinessId,
        patch: BusinessPatch,
    ) -> Result<Option<Business>, StoreError>;
}

/// Fixture implementation for tests that never touch business storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBusinessRepository;

#[async_trait]
impl BusinessRepository for FixtureBusinessRepository {
    async fn list(&self, _filter: BusinessFilter) -> Result<Vec<Business>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &BusinessId) -> Result<Option<Business>, StoreError> {
        Ok(None)
    }

    async fn insert(&self, _business: NewBusiness) -> Result<Business, StoreError> {
        Err(StoreError::query("fixture repository cannot insert"))
    }

    async fn update(
        &self,
        _id: &BusinessId,
        _patch: BusinessPatch,
    ) -> Result<Option<Business>, StoreError> {
        Ok(None)
    }
}
