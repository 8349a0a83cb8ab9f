//! Favorite relation: a user's star on a business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{BusinessId, UserId};

/// A favorite marking between a user and a business.
///
/// ## Invariants
/// - At most one relation exists per `(user_id, business_id)` pair; the
///   store enforces this with a unique constraint because concurrent
///   toggles cannot be serialised client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning user.
    #[schema(value_type = String)]
    pub user_id: UserId,
    /// Starred business.
    #[schema(value_type = String)]
    pub business_id: BusinessId,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteToggle {
    /// The relation now exists.
    Added,
    /// The relation no longer exists.
    Removed,
}

impl FavoriteToggle {
    /// Whether the business is favorited after the toggle.
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        matches!(self, Self::Added)
    }
}
