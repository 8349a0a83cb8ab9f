//! Contact records: people attached to (or independent of) a business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{BusinessId, UserId};

/// A person in the contact directory.
///
/// `business_id`, when set, must reference an existing business; the
/// foreign key in the store enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning business, if any.
    #[schema(value_type = Option<String>)]
    pub business_id: Option<BusinessId>,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Profile that created the record.
    #[schema(value_type = Option<String>)]
    pub created_by: Option<UserId>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Seed values for inserting a new contact.
#[derive(Debug, Clone)]
pub struct NewContact {
    /// Owning business, if any.
    pub business_id: Option<BusinessId>,
    /// Display name (required).
    pub name: String,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Profile creating the record.
    pub created_by: Option<UserId>,
}

/// Column-wise patch applied by the edit forms.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    /// Reassign to a business (or detach with `Some(None)`).
    pub business_id: Option<Option<BusinessId>>,
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New job title.
    pub position: Option<String>,
    /// New avatar URL.
    pub avatar_url: Option<String>,
    /// New notes.
    pub notes: Option<String>,
}

/// Listing filter for contact queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Restrict to contacts of one business.
    pub business_id: Option<BusinessId>,
}
