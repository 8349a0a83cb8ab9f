//! Port abstraction for the append-only activity log.

use async_trait::async_trait;

use crate::domain::{Activity, ActivityFilter, NewActivity};

use super::StoreError;

/// Port for activity log storage.
///
/// The log is append-only: entries are immutable once written, so the port
/// exposes no update or delete operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// List entries matching the filter, most recent first.
    async fn list(&self, filter: ActivityFilter) -> Result<Vec<Activity>, StoreError>;

    /// Append a new entry with a generated id.
    async fn insert(&self, activity: NewActivity) -> Result<Activity, StoreError>;
}

/// Fixture implementation for tests that never touch the activity log.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureActivityRepository;

#[async_trait]
impl ActivityRepository for FixtureActivityRepository {
    async fn list(&self, _filter: ActivityFilter) -> Result<Vec<Activity>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert(&self, _activity: NewActivity) -> Result<Activity, StoreError> {
        Err(StoreError::query("fixture repository cannot insert"))
    }
}
