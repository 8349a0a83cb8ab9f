//! Domain ports and supporting types for the hexagonal boundary.

mod activity_repository;
mod auth_service;
mod business_repository;
mod contact_repository;
mod document_repository;
mod favorite_repository;
mod favorites;
mod profile_repository;
mod store;
mod user_administration;

#[cfg(test)]
pub use activity_repository::MockActivityRepository;
pub use activity_repository::{ActivityRepository, FixtureActivityRepository};
pub use auth_service::{AuthService, FixtureAuthService, FIXTURE_USER_ID};
#[cfg(test)]
pub use business_repository::MockBusinessRepository;
pub use business_repository::{BusinessRepository, FixtureBusinessRepository};
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, FixtureContactRepository};
#[cfg(test)]
pub use document_repository::MockDocumentRepository;
pub use document_repository::{DocumentRepository, FixtureDocumentRepository};
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
pub use favorite_repository::{FavoriteRepository, FixtureFavoriteRepository};
pub use favorites::{Favorites, FixtureFavorites};
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
pub use profile_repository::{FixtureProfileRepository, ProfileCredentials, ProfileRepository};
pub use store::{map_store_error, store_call, StoreError, STORE_CALL_TIMEOUT};
pub use user_administration::{FixtureUserAdministration, UserAdministration};
