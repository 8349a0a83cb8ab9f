//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ContactRepository, StoreError};
use crate::domain::{BusinessId, Contact, ContactFilter, ContactPatch, NewContact, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ContactChangeset, ContactRow, NewContactRow};
use super::pool::DbPool;
use super::schema::contacts;

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_contact(row: ContactRow) -> Contact {
    Contact {
        id: row.id,
        business_id: row.business_id.map(BusinessId::from_uuid),
        name: row.name,
        email: row.email,
        phone: row.phone,
        position: row.position,
        avatar_url: row.avatar_url,
        notes: row.notes,
        created_by: row.created_by.map(UserId::from_uuid),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn patch_is_empty(patch: &ContactPatch) -> bool {
    patch.business_id.is_none()
        && patch.name.is_none()
        && patch.email.is_none()
        && patch.phone.is_none()
        && patch.position.is_none()
        && patch.avatar_url.is_none()
        && patch.notes.is_none()
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn list(&self, filter: ContactFilter) -> Result<Vec<Contact>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = contacts::table
            .order(contacts::created_at.desc())
            .select(ContactRow::as_select())
            .into_boxed();
        if let Some(business_id) = filter.business_id {
            query = query.filter(contacts::business_id.eq(*business_id.as_uuid()));
        }

        let rows: Vec<ContactRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_contact).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Contact>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = contacts::table
            .filter(contacts::id.eq(id))
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_contact))
    }

    async fn insert(&self, contact: NewContact) -> Result<Contact, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewContactRow {
            id: Uuid::new_v4(),
            business_id: contact.business_id.map(|id| *id.as_uuid()),
            name: &contact.name,
            email: contact.email.as_deref(),
            phone: contact.phone.as_deref(),
            position: contact.position.as_deref(),
            avatar_url: contact.avatar_url.as_deref(),
            notes: contact.notes.as_deref(),
            created_by: contact.created_by.map(|id| *id.as_uuid()),
        };

        let row: ContactRow = diesel::insert_into(contacts::table)
            .values(&new_row)
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_contact(row))
    }

    async fn update(
        &self,
        id: &Uuid,
        patch: ContactPatch,
    ) -> Result<Option<Contact>, StoreError> {
        if patch_is_empty(&patch) {
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = ContactChangeset {
            business_id: patch
                .business_id
                .map(|assignment| assignment.map(|id| *id.as_uuid())),
            name: patch.name.as_deref(),
            email: patch.email.as_deref(),
            phone: patch.phone.as_deref(),
            position: patch.position.as_deref(),
            avatar_url: patch.avatar_url.as_deref(),
            notes: patch.notes.as_deref(),
        };

        let row: Option<ContactRow> = diesel::update(contacts::table)
            .filter(contacts::id.eq(id))
            .set(&changeset)
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_contact))
    }
}
