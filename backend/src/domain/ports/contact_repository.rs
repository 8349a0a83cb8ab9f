//! Port abstraction for contact persistence adapters.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Contact, ContactFilter, ContactPatch, NewContact};

use super::StoreError;

/// Port for contact storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// List contacts matching the filter, newest first.
    async fn list(&self, filter: ContactFilter) -> Result<Vec<Contact>, StoreError>;

    /// Fetch a contact by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Contact>, StoreError>;

    /// Insert a new contact with a generated id.
    ///
    /// Fails with [`StoreError::Conflict`] when `business_id` references a
    /// business that does not exist.
    async fn insert(&self, contact: NewContact) -> Result<Contact, StoreError>;

    /// Apply a column-wise patch, returning the updated row or `None` when
    /// the contact does not exist.
    async fn update(&self, id: &Uuid, patch: ContactPatch)
        -> Result<Option<Contact>, StoreError>;
}

/// Fixture implementation for tests that never touch contact storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContactRepository;

#[async_trait]
impl ContactRepository for FixtureContactRepository {
    async fn list(&self, _filter: ContactFilter) -> Result<Vec<Contact>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &Uuid) -> Result<Option<Contact>, StoreError> {
        Ok(None)
    }

    async fn insert(&self, _contact: NewContact) -> Result<Contact, StoreError> {
        Err(StoreError::query("fixture repository cannot insert"))
    }

    async fn update(
        &self,
        _id: &Uuid,
        _patch: ContactPatch,
    ) -> Result<Option<Contact>, StoreError> {
        Ok(None)
    }
}
