//! PostgreSQL-backed `ActivityRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ActivityRepository, StoreError};
use crate::domain::{Activity, ActivityFilter, ActivityKind, BusinessId, NewActivity, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ActivityRow, NewActivityRow};
use super::pool::DbPool;
use super::schema::activities;

/// Diesel-backed implementation of the `ActivityRepository` port.
#[derive(Clone)]
pub struct DieselActivityRepository {
    pool: DbPool,
}

impl DieselActivityRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_activity(row: ActivityRow) -> Activity {
    let kind = ActivityKind::parse(&row.kind).unwrap_or_else(|| {
        tracing::warn!(
            value = row.kind,
            activity_id = %row.id,
            "unrecognised activity kind, defaulting to note"
        );
        ActivityKind::Note
    });

    Activity {
        id: row.id,
        business_id: row.business_id.map(BusinessId::from_uuid),
        contact_id: row.contact_id,
        kind,
        content: row.content,
        date: row.date,
        created_by: row.created_by.map(UserId::from_uuid),
        created_at: row.created_at,
    }
}

#[async_trait]
impl ActivityRepository for DieselActivityRepository {
    async fn list(&self, filter: ActivityFilter) -> Result<Vec<Activity>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = activities::table
            .order(activities::date.desc())
            .select(ActivityRow::as_select())
            .into_boxed();
        if let Some(business_id) = filter.business_id {
            query = query.filter(activities::business_id.eq(*business_id.as_uuid()));
        }
        if let Some(contact_id) = filter.contact_id {
            query = query.filter(activities::contact_id.eq(contact_id));
        }

        let rows: Vec<ActivityRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_activity).collect())
    }

    async fn insert(&self, activity: NewActivity) -> Result<Activity, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewActivityRow {
            id: Uuid::new_v4(),
            business_id: activity.business_id.map(|id| *id.as_uuid()),
            contact_id: activity.contact_id,
            kind: activity.kind.as_str(),
            content: &activity.content,
            date: activity.date,
            created_by: activity.created_by.map(|id| *id.as_uuid()),
        };

        let row: ActivityRow = diesel::insert_into(activities::table)
            .values(&new_row)
            .returning(ActivityRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_activity(row))
    }
}
