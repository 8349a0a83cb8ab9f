//! PostgreSQL-backed `BusinessRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BusinessRepository, StoreError};
use crate::domain::{
    Business, BusinessFilter, BusinessId, BusinessPatch, BusinessStatus, NewBusiness, UserId,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BusinessChangeset, BusinessRow, NewBusinessRow};
use super::pool::DbPool;
use super::schema::businesses;

/// Diesel-backed implementation of the `BusinessRepository` port.
#[derive(Clone)]
pub struct DieselBusinessRepository {
    pool: DbPool,
}

impl DieselBusinessRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row to a domain business.
fn row_to_business(row: BusinessRow) -> Business {
    let status = BusinessStatus::parse(&row.status).unwrap_or_else(|| {
        tracing::warn!(
            value = row.status,
            business_id = %row.id,
            "unrecognised status value, defaulting to Researching"
        );
        BusinessStatus::Researching
    });

    Business {
        id: BusinessId::from_uuid(row.id),
        name: row.name,
        industry: row.industry,
        status,
        revenue: row.revenue,
        employees: row.employees,
        logo_url: row.logo_url,
        website: row.website,
        email: row.email,
        phone: row.phone,
        address: row.address,
        description: row.description,
        founded_year: row.founded_year,
        created_by: row.created_by.map(UserId::from_uuid),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn patch_is_empty(patch: &BusinessPatch) -> bool {
    patch.name.is_none()
        && patch.industry.is_none()
        && patch.status.is_none()
        && patch.revenue.is_none()
        && patch.employees.is_none()
        && patch.logo_url.is_none()
        && patch.website.is_none()
        && patch.email.is_none()
        && patch.phone.is_none()
        && patch.address.is_none()
        && patch.description.is_none()
        && patch.founded_year.is_none()
}

#[async_trait]
impl BusinessRepository for DieselBusinessRepository {
    async fn list(&self, filter: BusinessFilter) -> Result<Vec<Business>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = businesses::table
            .order(businesses::created_at.desc())
            .select(BusinessRow::as_select())
            .into_boxed();
        if let Some(status) = filter.status {
            query = query.filter(businesses::status.eq(status.as_str()));
        }

        let rows: Vec<BusinessRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_business).collect())
    }

    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BusinessRow> = businesses::table
            .filter(businesses::id.eq(id.as_uuid()))
            .select(BusinessRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_business))
    }

    async fn insert(&self, business: NewBusiness) -> Result<Business, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewBusinessRow {
            id: Uuid::new_v4(),
            name: &business.name,
            industry: business.industry.as_deref(),
            status: business.status.as_str(),
            revenue: business.revenue.as_deref(),
            employees: business.employees,
            logo_url: business.logo_url.as_deref(),
            website: business.website.as_deref(),
            email: business.email.as_deref(),
            phone: business.phone.as_deref(),
            address: business.address.as_deref(),
            description: business.description.as_deref(),
            founded_year: business.founded_year,
            created_by: business.created_by.map(|id| *id.as_uuid()),
        };

        let row: BusinessRow = diesel::insert_into(businesses::table)
            .values(&new_row)
            .returning(BusinessRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_business(row))
    }

    async fn update(
        &self,
        id: &BusinessId,
        patch: BusinessPatch,
    ) -> Result<Option<Business>, StoreError> {
        if patch_is_empty(&patch) {
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = BusinessChangeset {
            name: patch.name.as_deref(),
            industry: patch.industry.as_deref(),
            status: patch.status.map(|status| status.as_str()),
            revenue: patch.revenue.as_deref(),
            employees: patch.employees,
            logo_url: patch.logo_url.as_deref(),
            website: patch.website.as_deref(),
            email: patch.email.as_deref(),
            phone: patch.phone.as_deref(),
            address: patch.address.as_deref(),
            description: patch.description.as_deref(),
            founded_year: patch.founded_year,
        };

        let row: Option<BusinessRow> = diesel::update(businesses::table)
            .filter(businesses::id.eq(id.as_uuid()))
            .set(&changeset)
            .returning(BusinessRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_business))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn row(status: &str) -> BusinessRow {
        BusinessRow {
            id: Uuid::new_v4(),
            name: "Acme Corporation".to_owned(),
            industry: Some("Technology".to_owned()),
            status: status.to_owned(),
            revenue: Some("$75M".to_owned()),
            employees: Some(350),
            logo_url: None,
            website: None,
            email: None,
            phone: None,
            address: None,
            description: None,
            founded_year: Some(1999),
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    #[case("Partner", BusinessStatus::Partner)]
    #[case("Inactive", BusinessStatus::Inactive)]
    fn rows_convert_with_known_statuses(#[case] stored: &str, #[case] expected: BusinessStatus) {
        let business = row_to_business(row(stored));
        assert_eq!(business.status, expected);
        assert_eq!(business.name, "Acme Corporation");
    }

    #[rstest]
    fn unknown_statuses_fall_back_to_researching() {
        let business = row_to_business(row("Signed"));
        assert_eq!(business.status, BusinessStatus::Researching);
    }

    #[rstest]
    fn empty_patches_are_detected() {
        assert!(patch_is_empty(&BusinessPatch::default()));
        assert!(!patch_is_empty(&BusinessPatch {
            status: Some(BusinessStatus::Partner),
            ..BusinessPatch::default()
        }));
    }
}
