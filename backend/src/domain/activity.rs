//! Activity log entries: the immutable interaction history.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{BusinessId, UserId};

/// Interaction type of a logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Free-form note.
    Note,
    /// Email exchange.
    Email,
    /// Phone call.
    Call,
    /// Meeting.
    Meeting,
}

impl ActivityKind {
    /// Stable string form stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Email => "email",
            Self::Call => "call",
            Self::Meeting => "meeting",
        }
    }

    /// Parse the stored string form, if recognised.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "note" => Some(Self::Note),
            "email" => Some(Self::Email),
            "call" => Some(Self::Call),
            "meeting" => Some(Self::Meeting),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged interaction, conceptually tied to a business or a contact.
///
/// Activities are append-only: there is no update or delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Stable identifier.
    pub id: Uuid,
    /// Related business, if any.
    #[schema(value_type = Option<String>)]
    pub business_id: Option<BusinessId>,
    /// Related contact, if any.
    pub contact_id: Option<Uuid>,
    /// Interaction type.
    pub kind: ActivityKind,
    /// Entry body.
    pub content: String,
    /// When the interaction happened.
    pub date: Option<DateTime<Utc>>,
    /// Profile that logged the entry.
    #[schema(value_type = Option<String>)]
    pub created_by: Option<UserId>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Seed values for appending a new log entry.
#[derive(Debug, Clone)]
pub struct NewActivity {
    /// Related business, if any.
    pub business_id: Option<BusinessId>,
    /// Related contact, if any.
    pub contact_id: Option<Uuid>,
    /// Interaction type.
    pub kind: ActivityKind,
    /// Entry body (required).
    pub content: String,
    /// When the interaction happened.
    pub date: Option<DateTime<Utc>>,
    /// Profile logging the entry.
    pub created_by: Option<UserId>,
}

/// Listing filter for activity queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Restrict to one business.
    pub business_id: Option<BusinessId>,
    /// Restrict to one contact.
    pub contact_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ActivityKind::Note, "note")]
    #[case(ActivityKind::Email, "email")]
    #[case(ActivityKind::Call, "call")]
    #[case(ActivityKind::Meeting, "meeting")]
    fn kind_strings_round_trip(#[case] kind: ActivityKind, #[case] text: &str) {
        assert_eq!(kind.as_str(), text);
        assert_eq!(ActivityKind::parse(text), Some(kind));
    }

    #[rstest]
    fn unknown_kind_strings_do_not_parse() {
        assert_eq!(ActivityKind::parse("fax"), None);
    }
}
