//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Registered user profiles.
    ///
    /// `approved` starts false and is only flipped by admin callers;
    /// `password_hash` never leaves the persistence layer.
    profiles (id) {
        /// Primary key: UUID v4 identifier, equal to the session subject.
        id -> Uuid,
        /// Sign-in email address (unique, lowercased).
        email -> Varchar,
        /// Argon2id PHC string.
        password_hash -> Varchar,
        /// Optional display name.
        full_name -> Nullable<Varchar>,
        /// Admin approval flag.
        approved -> Bool,
        /// Platform role ("User" or "Admin").
        role -> Varchar,
        /// Optional avatar image URL.
        avatar_url -> Nullable<Varchar>,
        /// Most recent successful sign-in.
        last_sign_in_at -> Nullable<Timestamptz>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Businesses tracked through the partnership pipeline.
    businesses (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name.
        name -> Varchar,
        /// Industry label.
        industry -> Nullable<Varchar>,
        /// Pipeline stage string.
        status -> Varchar,
        /// Free-form revenue figure.
        revenue -> Nullable<Varchar>,
        /// Headcount.
        employees -> Nullable<Int4>,
        /// Logo image URL.
        logo_url -> Nullable<Varchar>,
        /// Public website.
        website -> Nullable<Varchar>,
        /// Contact email.
        email -> Nullable<Varchar>,
        /// Contact phone number.
        phone -> Nullable<Varchar>,
        /// Postal address.
        address -> Nullable<Varchar>,
        /// Free-form description.
        description -> Nullable<Text>,
        /// Year the business was founded.
        founded_year -> Nullable<Int4>,
        /// Creating profile, kept on profile deletion as null.
        created_by -> Nullable<Uuid>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// People in the contact directory.
    contacts (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning business.
        business_id -> Nullable<Uuid>,
        /// Display name.
        name -> Varchar,
        /// Email address.
        email -> Nullable<Varchar>,
        /// Phone number.
        phone -> Nullable<Varchar>,
        /// Job title.
        position -> Nullable<Varchar>,
        /// Avatar image URL.
        avatar_url -> Nullable<Varchar>,
        /// Free-form notes.
        notes -> Nullable<Text>,
        /// Creating profile.
        created_by -> Nullable<Uuid>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Uploaded documents.
    documents (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning business.
        business_id -> Nullable<Uuid>,
        /// Display name.
        name -> Varchar,
        /// File category string ("pdf", "doc", "image", "spreadsheet", "note").
        kind -> Varchar,
        /// Storage URL.
        url -> Nullable<Varchar>,
        /// Human-readable size.
        size -> Nullable<Varchar>,
        /// Uploading profile.
        created_by -> Nullable<Uuid>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only activity log.
    activities (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Related business.
        business_id -> Nullable<Uuid>,
        /// Related contact.
        contact_id -> Nullable<Uuid>,
        /// Interaction type string ("note", "email", "call", "meeting").
        kind -> Varchar,
        /// Entry body.
        content -> Text,
        /// When the interaction happened.
        date -> Nullable<Timestamptz>,
        /// Logging profile.
        created_by -> Nullable<Uuid>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Favorite relations between users and businesses.
    ///
    /// A unique index on `(user_id, business_id)` enforces at most one
    /// relation per pair; racing toggles rely on it.
    favorites (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning user.
        user_id -> Uuid,
        /// Starred business.
        business_id -> Uuid,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(contacts -> businesses (business_id));
diesel::joinable!(documents -> businesses (business_id));
diesel::joinable!(activities -> businesses (business_id));
diesel::joinable!(activities -> contacts (contact_id));
diesel::joinable!(favorites -> businesses (business_id));
diesel::joinable!(favorites -> profiles (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    activities, businesses, contacts, documents, favorites, profiles,
);
