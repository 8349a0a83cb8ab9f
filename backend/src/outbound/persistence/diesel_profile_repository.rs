//! PostgreSQL-backed `ProfileRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ProfileCredentials, ProfileRepository, StoreError};
use crate::domain::{EmailAddress, NewProfile, Profile, ProfilePatch, Role, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewProfileRow, ProfileChangeset, ProfileRow};
use super::pool::DbPool;
use super::schema::profiles;

/// Diesel-backed implementation of the `ProfileRepository` port.
#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row to a domain profile.
///
/// Stored values are validated on the way out: an unparseable email or an
/// unrecognised role string is logged and mapped to a safe fallback rather
/// than trusted blindly or allowed to panic.
fn row_to_profile(row: ProfileRow) -> Result<Profile, StoreError> {
    let email = EmailAddress::new(&row.email).map_err(|err| {
        StoreError::query(format!("stored email for {} is invalid: {err}", row.id))
    })?;
    let role = Role::parse(&row.role).unwrap_or_else(|| {
        tracing::warn!(
            value = row.role,
            profile_id = %row.id,
            "unrecognised role value, defaulting to User"
        );
        Role::User
    });

    Ok(Profile {
        id: UserId::from_uuid(row.id),
        email,
        full_name: row.full_name,
        approved: row.approved,
        role,
        avatar_url: row.avatar_url,
        last_sign_in_at: row.last_sign_in_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn row_to_credentials(row: ProfileRow) -> Result<ProfileCredentials, StoreError> {
    let password_hash = row.password_hash.clone();
    Ok(ProfileCredentials {
        profile: row_to_profile(row)?,
        password_hash,
    })
}

#[async_trait]
impl ProfileRepository for DieselProfileRepository {
    async fn list(&self) -> Result<Vec<Profile>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProfileRow> = profiles::table
            .order(profiles::created_at.desc())
            .select(ProfileRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_profile).collect()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProfileRow> = profiles::table
            .filter(profiles::id.eq(id.as_uuid()))
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_profile).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<ProfileCredentials>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProfileRow> = profiles::table
            .filter(profiles::email.eq(email.as_ref()))
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_credentials).transpose()
    }

    async fn insert(&self, profile: NewProfile) -> Result<Profile, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewProfileRow {
            id: Uuid::new_v4(),
            email: profile.email.as_ref(),
            password_hash: &profile.password_hash,
            full_name: profile.full_name.as_deref(),
            approved: false,
            role: Role::User.as_str(),
        };

        let row: ProfileRow = diesel::insert_into(profiles::table)
            .values(&new_row)
            .returning(ProfileRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_profile(row)
    }

    async fn update(
        &self,
        id: &UserId,
        patch: ProfilePatch,
    ) -> Result<Option<Profile>, StoreError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = ProfileChangeset {
            approved: patch.approved,
            role: patch.role.map(|role| role.as_str()),
            full_name: patch.full_name.as_deref(),
            avatar_url: patch.avatar_url.as_deref(),
            last_sign_in_at: patch.last_sign_in_at,
        };

        let row: Option<ProfileRow> = diesel::update(profiles::table)
            .filter(profiles::id.eq(id.as_uuid()))
            .set(&changeset)
            .returning(ProfileRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_profile).transpose()
    }

    async fn delete(&self, id: &UserId) -> Result<bool, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(profiles::table.filter(profiles::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
