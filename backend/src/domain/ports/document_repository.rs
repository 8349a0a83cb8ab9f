//! Port abstraction for document persistence adapters.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Document, DocumentFilter, NewDocument};

use super::StoreError;

/// Port for document storage and retrieval.
///
/// Documents are created on upload and listed per business; the current
/// scope has no rename or replace operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// List documents matching the filter, newest first.
    async fn list(&self, filter: DocumentFilter) -> Result<Vec<Document>, StoreError>;

    /// Fetch a document by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Document>, StoreError>;

    /// Record a new upload with a generated id.
    async fn insert(&self, document: NewDocument) -> Result<Document, StoreError>;
}

/// Fixture implementation for tests that never touch document storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDocumentRepository;

#[async_trait]
impl DocumentRepository for FixtureDocumentRepository {
    async fn list(&self, _filter: DocumentFilter) -> Result<Vec<Document>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &Uuid) -> Result<Option<Document>, StoreError> {
        Ok(None)
    }

    async fn insert(&self, _document: NewDocument) -> Result<Document, StoreError> {
        Err(StoreError::query("fixture repository cannot insert"))
    }
}
