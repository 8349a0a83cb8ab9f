//! PostgreSQL-backed `FavoriteRepository` implementation using Diesel ORM.
//!
//! The favorites table carries a unique index on `(user_id, business_id)`.
//! Insert uses `ON CONFLICT DO NOTHING` so a racing duplicate resolves to
//! `None` instead of an error, and delete reports the affected row count;
//! together these give the toggle service its convergence guarantees.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{FavoriteRepository, StoreError};
use crate::domain::{BusinessId, Favorite, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FavoriteRow, NewFavoriteRow};
use super::pool::DbPool;
use super::schema::favorites;

/// Diesel-backed implementation of the `FavoriteRepository` port.
#[derive(Clone)]
pub struct DieselFavoriteRepository {
    pool: DbPool,
}

impl DieselFavoriteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_favorite(row: FavoriteRow) -> Favorite {
    Favorite {
        id: row.id,
        user_id: UserId::from_uuid(row.user_id),
        business_id: BusinessId::from_uuid(row.business_id),
        created_at: row.created_at,
    }
}

#[async_trait]
impl FavoriteRepository for DieselFavoriteRepository {
    async fn find_by_pair(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<Option<Favorite>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<FavoriteRow> = favorites::table
            .filter(favorites::user_id.eq(user_id.as_uuid()))
            .filter(favorites::business_id.eq(business_id.as_uuid()))
            .select(FavoriteRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_favorite))
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FavoriteRow> = favorites::table
            .filter(favorites::user_id.eq(user_id.as_uuid()))
            .order(favorites::created_at.desc())
            .select(FavoriteRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_favorite).collect())
    }

    async fn insert(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<Option<Favorite>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewFavoriteRow {
            id: Uuid::new_v4(),
            user_id: *user_id.as_uuid(),
            business_id: *business_id.as_uuid(),
        };

        let row: Option<FavoriteRow> = diesel::insert_into(favorites::table)
            .values(&new_row)
            .on_conflict((favorites::user_id, favorites::business_id))
            .do_nothing()
            .returning(FavoriteRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_favorite))
    }

    async fn delete_by_pair(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<bool, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            favorites::table
                .filter(favorites::user_id.eq(user_id.as_uuid()))
                .filter(favorites::business_id.eq(business_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    #[rstest]
    fn rows_convert_to_domain_favorites() {
        let user_id = Uuid::new_v4();
        let business_id = Uuid::new_v4();
        let favorite = row_to_favorite(FavoriteRow {
            id: Uuid::new_v4(),
            user_id,
            business_id,
            created_at: Utc::now(),
        });
        assert_eq!(*favorite.user_id.as_uuid(), user_id);
        assert_eq!(*favorite.business_id.as_uuid(), business_id);
    }
}
