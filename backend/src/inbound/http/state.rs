//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases and repositories) and remain testable
//! without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ActivityRepository, AuthService, BusinessRepository, ContactRepository, DocumentRepository,
    Favorites, ProfileRepository, UserAdministration,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration and sign-in use-cases.
    pub auth: Arc<dyn AuthService>,
    /// Profile lookups for the access gate.
    pub profiles: Arc<dyn ProfileRepository>,
    /// Business CRUD.
    pub businesses: Arc<dyn BusinessRepository>,
    /// Contact CRUD.
    pub contacts: Arc<dyn ContactRepository>,
    /// Document uploads and listings.
    pub documents: Arc<dyn DocumentRepository>,
    /// Activity log.
    pub activities: Arc<dyn ActivityRepository>,
    /// Favorite toggle workflow.
    pub favorites: Arc<dyn Favorites>,
    /// Admin approval workflow.
    pub admin: Arc<dyn UserAdministration>,
}

impl HttpState {
    /// Bundle state entirely from fixtures; used by handler tests that only
    /// exercise routing, sessions, and validation.
    #[must_use]
    pub fn fixtures() -> Self {
        use crate::domain::ports::{
            FixtureActivityRepository, FixtureAuthService, FixtureBusinessRepository,
            FixtureContactRepository, FixtureDocumentRepository, FixtureFavorites,
            FixtureProfileRepository, FixtureUserAdministration,
        };

        Self {
            auth: Arc::new(FixtureAuthService),
            profiles: Arc::new(FixtureProfileRepository),
            businesses: Arc::new(FixtureBusinessRepository),
            contacts: Arc::new(FixtureContactRepository),
            documents: Arc::new(FixtureDocumentRepository),
            activities: Arc::new(FixtureActivityRepository),
            favorites: Arc::new(FixtureFavorites),
            admin: Arc::new(FixtureUserAdministration),
        }
    }
}
