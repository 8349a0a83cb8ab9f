//! PostgreSQL-backed `DocumentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{DocumentRepository, StoreError};
use crate::domain::{BusinessId, Document, DocumentFilter, DocumentKind, NewDocument, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DocumentRow, NewDocumentRow};
use super::pool::DbPool;
use super::schema::documents;

/// Diesel-backed implementation of the `DocumentRepository` port.
#[derive(Clone)]
pub struct DieselDocumentRepository {
    pool: DbPool,
}

impl DieselDocumentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_document(row: DocumentRow) -> Document {
    let kind = DocumentKind::parse(&row.kind).unwrap_or_else(|| {
        tracing::warn!(
            value = row.kind,
            document_id = %row.id,
            "unrecognised document kind, defaulting to note"
        );
        DocumentKind::Note
    });

    Document {
        id: row.id,
        business_id: row.business_id.map(BusinessId::from_uuid),
        name: row.name,
        kind,
        url: row.url,
        size: row.size,
        created_by: row.created_by.map(UserId::from_uuid),
        created_at: row.created_at,
    }
}

#[async_trait]
impl DocumentRepository for DieselDocumentRepository {
    async fn list(&self, filter: DocumentFilter) -> Result<Vec<Document>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = documents::table
            .order(documents::created_at.desc())
            .select(DocumentRow::as_select())
            .into_boxed();
        if let Some(business_id) = filter.business_id {
            query = query.filter(documents::business_id.eq(*business_id.as_uuid()));
        }

        let rows: Vec<DocumentRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_document).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Document>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DocumentRow> = documents::table
            .filter(documents::id.eq(id))
            .select(DocumentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_document))
    }

    async fn insert(&self, document: NewDocument) -> Result<Document, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewDocumentRow {
            id: Uuid::new_v4(),
            business_id: document.business_id.map(|id| *id.as_uuid()),
            name: &document.name,
            kind: document.kind.as_str(),
            url: document.url.as_deref(),
            size: document.size.as_deref(),
            created_by: document.created_by.map(|id| *id.as_uuid()),
        };

        let row: DocumentRow = diesel::insert_into(documents::table)
            .values(&new_row)
            .returning(DocumentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_document(row))
    }
}
