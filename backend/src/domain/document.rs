//! Document records created on upload.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{BusinessId, UserId};

/// File category of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// PDF file.
    Pdf,
    /// Word-processor document.
    Doc,
    /// Raster or vector image.
    Image,
    /// Spreadsheet.
    Spreadsheet,
    /// Plain note.
    Note,
}

impl DocumentKind {
    /// Stable string form stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Image => "image",
            Self::Spreadsheet => "spreadsheet",
            Self::Note => "note",
        }
    }

    /// Parse the stored string form, if recognised.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "image" => Some(Self::Image),
            "spreadsheet" => Some(Self::Spreadsheet),
            "note" => Some(Self::Note),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded document, optionally attached to a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning business, if any.
    #[schema(value_type = Option<String>)]
    pub business_id: Option<BusinessId>,
    /// Display name.
    pub name: String,
    /// File category.
    pub kind: DocumentKind,
    /// Storage URL.
    pub url: Option<String>,
    /// Human-readable size, e.g. `"2.4 MB"`.
    pub size: Option<String>,
    /// Profile that uploaded the document.
    #[schema(value_type = Option<String>)]
    pub created_by: Option<UserId>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Seed values for recording a new upload.
#[derive(Debug, Clone)]
pub struct NewDocument {
    /// Owning business, if any.
    pub business_id: Option<BusinessId>,
    /// Display name (required).
    pub name: String,
    /// File category.
    pub kind: DocumentKind,
    /// Storage URL.
    pub url: Option<String>,
    /// Human-readable size.
    pub size: Option<String>,
    /// Profile uploading the document.
    pub created_by: Option<UserId>,
}

/// Listing filter for document queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Restrict to documents of one business.
    pub business_id: Option<BusinessId>,
}
