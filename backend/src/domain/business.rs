//! Business records tracked through the partnership pipeline.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::UserId;

/// Validation errors raised when constructing business primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessValidationError {
    /// The identifier was empty or not a valid UUID.
    InvalidId,
    /// The business name was empty once trimmed.
    EmptyName,
}

impl fmt::Display for BusinessValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "business id must be a valid UUID"),
            Self::EmptyName => write!(f, "business name must not be empty"),
        }
    }
}

impl std::error::Error for BusinessValidationError {}

/// Stable business identifier stored as a UUID. Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(Uuid);

impl BusinessId {
    /// Validate and construct a [`BusinessId`] from string input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, BusinessValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| BusinessValidationError::InvalidId)
    }

    /// Construct a [`BusinessId`] from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random [`BusinessId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pipeline stage of a business relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum BusinessStatus {
    /// Early research, no outreach yet.
    Researching,
    /// Outreach in progress.
    Contacting,
    /// Terms under negotiation.
    Negotiating,
    /// Signed partner.
    Partner,
    /// Dormant relationship.
    Inactive,
}

impl BusinessStatus {
    /// All stages in board-column order.
    pub const ALL: [Self; 5] = [
        Self::Researching,
        Self::Contacting,
        Self::Negotiating,
        Self::Partner,
        Self::Inactive,
    ];

    /// Stable string form stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Researching => "Researching",
            Self::Contacting => "Contacting",
            Self::Negotiating => "Negotiating",
            Self::Partner => "Partner",
            Self::Inactive => "Inactive",
        }
    }

    /// Parse the stored string form, if recognised.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A business tracked in the pipeline.
///
/// Businesses are never hard-deleted in the current scope; dormant records
/// move to [`BusinessStatus::Inactive`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    /// Stable identifier.
    #[schema(value_type = String, example = "7c9e6679-7425-40de-944b-e07fc1f90ae7")]
    pub id: BusinessId,
    /// Display name.
    pub name: String,
    /// Industry label.
    pub industry: Option<String>,
    /// Pipeline stage.
    pub status: BusinessStatus,
    /// Free-form revenue figure, e.g. `"$75M"`.
    pub revenue: Option<String>,
    /// Headcount.
    pub employees: Option<i32>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Public website.
    pub website: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Year the business was founded.
    pub founded_year: Option<i32>,
    /// Profile that created the record.
    #[schema(value_type = Option<String>)]
    pub created_by: Option<UserId>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Seed values for inserting a new business.
#[derive(Debug, Clone)]
pub struct NewBusiness {
    /// Display name (required, non-empty).
    pub name: String,
    /// Industry label.
    pub industry: Option<String>,
    /// Initial pipeline stage.
    pub status: BusinessStatus,
    /// Free-form revenue figure.
    pub revenue: Option<String>,
    /// Headcount.
    pub employees: Option<i32>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Public website.
    pub website: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Year the business was founded.
    pub founded_year: Option<i32>,
    /// Profile creating the record.
    pub created_by: Option<UserId>,
}

impl NewBusiness {
    /// Build a minimally populated record, validating the name.
    pub fn named(
        name: impl Into<String>,
        created_by: Option<UserId>,
    ) -> Result<Self, BusinessValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BusinessValidationError::EmptyName);
        }
        Ok(Self {
            name,
            industry: None,
            status: BusinessStatus::Researching,
            revenue: None,
            employees: None,
            logo_url: None,
            website: None,
            email: None,
            phone: None,
            address: None,
            description: None,
            founded_year: None,
            created_by,
        })
    }
}

/// Column-wise patch applied by the edit forms.
#[derive(Debug, Clone, Default)]
pub struct BusinessPatch {
    /// New display name.
    pub name: Option<String>,
    /// New industry label.
    pub industry: Option<String>,
    /// New pipeline stage.
    pub status: Option<BusinessStatus>,
    /// New revenue figure.
    pub revenue: Option<String>,
    /// New headcount.
    pub employees: Option<i32>,
    /// New logo URL.
    pub logo_url: Option<String>,
    /// New website.
    pub website: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
    /// New postal address.
    pub address: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New founding year.
    pub founded_year: Option<i32>,
}

/// Listing filter for business queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusinessFilter {
    /// Restrict to one pipeline stage.
    pub status: Option<BusinessStatus>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BusinessStatus::Researching, "Researching")]
    #[case(BusinessStatus::Contacting, "Contacting")]
    #[case(BusinessStatus::Negotiating, "Negotiating")]
    #[case(BusinessStatus::Partner, "Partner")]
    #[case(BusinessStatus::Inactive, "Inactive")]
    fn status_strings_round_trip(#[case] status: BusinessStatus, #[case] text: &str) {
        assert_eq!(status.as_str(), text);
        assert_eq!(BusinessStatus::parse(text), Some(status));
    }

    #[rstest]
    fn unknown_status_strings_do_not_parse() {
        assert_eq!(BusinessStatus::parse("Signed"), None);
    }

    #[rstest]
    fn new_business_rejects_blank_names() {
        let err = NewBusiness::named("   ", None).expect_err("blank name must fail");
        assert_eq!(err, BusinessValidationError::EmptyName);
    }

    #[rstest]
    fn new_business_defaults_to_researching() {
        let business = NewBusiness::named("Acme Corporation", None).expect("valid name");
        assert_eq!(business.status, BusinessStatus::Researching);
    }
}
