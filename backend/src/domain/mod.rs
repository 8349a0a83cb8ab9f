//! Domain primitives, aggregates, and use-case services.
//!
//! Purpose: define strongly typed domain entities used by the API and
//! persistence layers, plus the workflow services that implement the
//! driving ports in [`ports`]. Keep types immutable and document
//! invariants and serialisation contracts (serde) in each type's Rustdoc.

pub mod access;
pub mod activity;
pub mod admin_service;
pub mod auth;
pub mod board;
pub mod business;
pub mod contact;
pub mod document;
pub mod error;
pub mod favorite;
pub mod favorites_service;
pub mod password;
pub mod password_auth;
pub mod ports;
pub mod profile;
pub mod trace_id;

pub use self::access::{AccessFlags, AccessLevel, AccessState};
pub use self::activity::{Activity, ActivityFilter, ActivityKind, NewActivity};
pub use self::admin_service::UserAdministrationService;
pub use self::auth::{AuthValidationError, Registration, SignInCredentials, PASSWORD_MIN};
pub use self::board::{BoardColumn, BusinessBoard};
pub use self::business::{
    Business, BusinessFilter, BusinessId, BusinessPatch, BusinessStatus, BusinessValidationError,
    NewBusiness,
};
pub use self::contact::{Contact, ContactFilter, ContactPatch, NewContact};
pub use self::document::{Document, DocumentFilter, DocumentKind, NewDocument};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::favorite::{Favorite, FavoriteToggle};
pub use self::favorites_service::FavoritesService;
pub use self::password_auth::PasswordAuthService;
pub use self::profile::{
    EmailAddress, NewProfile, Profile, ProfilePatch, ProfileValidationError, Role, UserId,
};
pub use self::trace_id::{TraceId, TRACE_ID_HEADER};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
