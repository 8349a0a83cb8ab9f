//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{activities, businesses, contacts, documents, favorites, profiles};

/// Row struct for reading from the profiles table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub approved: bool,
    pub role: String,
    pub avatar_url: Option<String>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new profile records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub(crate) struct NewProfileRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub full_name: Option<&'a str>,
    pub approved: bool,
    pub role: &'a str,
}

/// Changeset struct for partially updating profile records.
///
/// `None` fields are skipped by Diesel's changeset generation, which is
/// what makes the domain's patch semantics hold at the SQL layer.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = profiles)]
pub(crate) struct ProfileChangeset<'a> {
    pub approved: Option<bool>,
    pub role: Option<&'a str>,
    pub full_name: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Business models
// ---------------------------------------------------------------------------

/// Row struct for reading from the businesses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = businesses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BusinessRow {
    pub id: Uuid,
    pub name: String,
    pub industry: Option<String>,
    pub status: String,
    pub revenue: Option<String>,
    pub employees: Option<i32>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub founded_year: Option<i32>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new business records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = businesses)]
pub(crate) struct NewBusinessRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub industry: Option<&'a str>,
    pub status: &'a str,
    pub revenue: Option<&'a str>,
    pub employees: Option<i32>,
    pub logo_url: Option<&'a str>,
    pub website: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub description: Option<&'a str>,
    pub founded_year: Option<i32>,
    pub created_by: Option<Uuid>,
}

/// Changeset struct for partially updating business records.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = businesses)]
pub(crate) struct BusinessChangeset<'a> {
    pub name: Option<&'a str>,
    pub industry: Option<&'a str>,
    pub status: Option<&'a str>,
    pub revenue: Option<&'a str>,
    pub employees: Option<i32>,
    pub logo_url: Option<&'a str>,
    pub website: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub description: Option<&'a str>,
    pub founded_year: Option<i32>,
}

// ---------------------------------------------------------------------------
// Contact models
// ---------------------------------------------------------------------------

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: Uuid,
    pub business_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub avatar_url: Option<String>,
    pub notes: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub id: Uuid,
    pub business_id: Option<Uuid>,
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub position: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub created_by: Option<Uuid>,
}

/// Changeset struct for partially updating contact records.
///
/// `business_id` is double-optional so an explicit detach (`Some(None)`)
/// writes SQL `NULL` while an omitted field leaves the column untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = contacts)]
pub(crate) struct ContactChangeset<'a> {
    pub business_id: Option<Option<Uuid>>,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub position: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
    pub notes: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Document models
// ---------------------------------------------------------------------------

/// Row struct for reading from the documents table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DocumentRow {
    pub id: Uuid,
    pub business_id: Option<Uuid>,
    pub name: String,
    pub kind: String,
    pub url: Option<String>,
    pub size: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for recording new uploads.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = documents)]
pub(crate) struct NewDocumentRow<'a> {
    pub id: Uuid,
    pub business_id: Option<Uuid>,
    pub name: &'a str,
    pub kind: &'a str,
    pub url: Option<&'a str>,
    pub size: Option<&'a str>,
    pub created_by: Option<Uuid>,
}

// ---------------------------------------------------------------------------
// Activity models
// ---------------------------------------------------------------------------

/// Row struct for reading from the activities table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ActivityRow {
    pub id: Uuid,
    pub business_id: Option<Uuid>,
    pub contact_id: Option<Uuid>,
    pub kind: String,
    pub content: String,
    pub date: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for appending log entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activities)]
pub(crate) struct NewActivityRow<'a> {
    pub id: Uuid,
    pub business_id: Option<Uuid>,
    pub contact_id: Option<Uuid>,
    pub kind: &'a str,
    pub content: &'a str,
    pub date: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
}

// ---------------------------------------------------------------------------
// Favorite models
// ---------------------------------------------------------------------------

/// Row struct for reading from the favorites table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavoriteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating favorite relations.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favorites)]
pub(crate) struct NewFavoriteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_id: Uuid,
}
