//! Application user profile: the platform-level record behind a session.
//!
//! A profile is distinct from the raw authentication session: the session
//! only proves who the caller is, while the profile carries the approval
//! flag and role that drive authorization decisions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors raised when constructing profile primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    /// The identifier was empty or not a valid UUID.
    InvalidId,
    /// The email address was empty once trimmed.
    EmptyEmail,
    /// The email address lacks the minimal user@host shape.
    InvalidEmail,
    /// The full name was provided but blank once trimmed.
    BlankFullName,
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like user@host"),
            Self::BlankFullName => write!(f, "full name must not be blank"),
        }
    }
}

impl std::error::Error for ProfileValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from string input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ProfileValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| ProfileValidationError::InvalidId)
    }

    /// Construct a [`UserId`] from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random [`UserId`].
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalised email address used for sign-in lookups.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace and lowercased.
/// - Contains an `@` with non-empty local part and host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl AsRef<str>) -> Result<Self, ProfileValidationError> {
        let normalized = email.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ProfileValidationError::EmptyEmail);
        }
        let mut parts = normalized.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let host = parts.next().unwrap_or_default();
        if local.is_empty() || host.is_empty() {
            return Err(ProfileValidationError::InvalidEmail);
        }
        Ok(Self(normalized))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ProfileValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Platform role attached to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    /// Regular platform user.
    User,
    /// Administrator allowed to manage the user directory.
    Admin,
}

impl Role {
    /// Stable string form stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }

    /// Parse the stored string form, if recognised.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "User" => Some(Self::User),
            "Admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalise an optional full name, rejecting blank-but-present values.
pub fn normalize_full_name(
    full_name: Option<String>,
) -> Result<Option<String>, ProfileValidationError> {
    match full_name {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ProfileValidationError::BlankFullName);
            }
            Ok(Some(trimmed.to_owned()))
        }
    }
}

/// Application user profile.
///
/// ## Invariants
/// - `id` matches the authenticated session subject that created it.
/// - `approved` defaults to `false` on registration and is only ever
///   flipped by admin-role callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Stable identifier, equal to the session subject.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    /// Sign-in email address.
    #[schema(value_type = String, example = "ada@example.com")]
    pub email: EmailAddress,
    /// Optional display name collected at registration.
    pub full_name: Option<String>,
    /// Whether an admin has approved this account.
    pub approved: bool,
    /// Platform role.
    pub role: Role,
    /// Optional avatar image URL.
    pub avatar_url: Option<String>,
    /// Most recent successful sign-in, if any.
    pub last_sign_in_at: Option<DateTime<Utc>>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Whether this profile carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Seed values for inserting a new profile.
///
/// The password hash is produced by [`crate::domain::password`] before the
/// record ever reaches a store adapter; raw secrets never cross the port
/// boundary.
#[derive(Debug, Clone)]
pub struct NewProfile {
    /// Sign-in email address (unique).
    pub email: EmailAddress,
    /// Argon2id PHC string for the account secret.
    pub password_hash: String,
    /// Optional display name.
    pub full_name: Option<String>,
}

/// Column-wise patch for updating a profile.
///
/// `None` fields are left untouched by the store adapter, mirroring the
/// partial-update payloads the store accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    /// New approval flag.
    pub approved: Option<bool>,
    /// New role.
    pub role: Option<Role>,
    /// New display name.
    pub full_name: Option<String>,
    /// New avatar URL.
    pub avatar_url: Option<String>,
    /// Sign-in timestamp to record.
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl ProfilePatch {
    /// Patch that flips the approval flag on.
    #[must_use]
    pub fn approve() -> Self {
        Self {
            approved: Some(true),
            ..Self::default()
        }
    }

    /// Patch that replaces the role and nothing else.
    #[must_use]
    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    /// Patch that records a successful sign-in.
    #[must_use]
    pub fn signed_in_at(at: DateTime<Utc>) -> Self {
        Self {
            last_sign_in_at: Some(at),
            ..Self::default()
        }
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", ProfileValidationError::EmptyEmail)]
    #[case("   ", ProfileValidationError::EmptyEmail)]
    #[case("no-at-sign", ProfileValidationError::InvalidEmail)]
    #[case("@host", ProfileValidationError::InvalidEmail)]
    #[case("user@", ProfileValidationError::InvalidEmail)]
    fn invalid_emails_are_rejected(
        #[case] input: &str,
        #[case] expected: ProfileValidationError,
    ) {
        let err = EmailAddress::new(input).expect_err("invalid email must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  Ada@Example.COM  ", "ada@example.com")]
    #[case("bob@host", "bob@host")]
    fn emails_are_trimmed_and_lowercased(#[case] input: &str, #[case] expected: &str) {
        let email = EmailAddress::new(input).expect("valid email");
        assert_eq!(email.as_ref(), expected);
    }

    #[rstest]
    fn user_id_rejects_non_uuid_input() {
        let err = UserId::new("not-a-uuid").expect_err("must fail");
        assert_eq!(err, ProfileValidationError::InvalidId);
    }

    #[rstest]
    #[case("User", Some(Role::User))]
    #[case("Admin", Some(Role::Admin))]
    #[case("superuser", None)]
    fn role_parses_stored_strings(#[case] input: &str, #[case] expected: Option<Role>) {
        assert_eq!(Role::parse(input), expected);
    }

    #[rstest]
    fn full_name_normalisation_rejects_blank_values() {
        let err = normalize_full_name(Some("   ".into())).expect_err("blank name must fail");
        assert_eq!(err, ProfileValidationError::BlankFullName);
        assert_eq!(
            normalize_full_name(Some("  Ada Lovelace ".into())).expect("valid"),
            Some("Ada Lovelace".to_owned())
        );
        assert_eq!(normalize_full_name(None).expect("valid"), None);
    }

    #[rstest]
    fn approve_patch_touches_only_the_approval_flag() {
        let patch = ProfilePatch::approve();
        assert_eq!(patch.approved, Some(true));
        assert_eq!(patch.role, None);
        assert_eq!(patch.full_name, None);
        assert_eq!(patch.last_sign_in_at, None);
    }
}
