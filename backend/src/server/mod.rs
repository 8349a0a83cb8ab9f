//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_session::{
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
    SessionMiddleware,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::{
    FavoritesService, PasswordAuthService, UserAdministrationService,
};
use backend::inbound::http::activities::{create_activity, list_activities};
use backend::inbound::http::admin::{approve_user, change_user_role, list_users, reject_user};
use backend::inbound::http::auth::{login, logout, me, register};
use backend::inbound::http::businesses::{
    business_board, create_business, get_business, list_businesses, list_favorites,
    toggle_favorite, update_business,
};
use backend::inbound::http::contacts::{create_contact, get_contact, list_contacts, update_contact};
use backend::inbound::http::documents::{create_document, list_documents};
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::state::HttpState;
use backend::middleware::Trace;
use backend::outbound::persistence::{
    DieselActivityRepository, DieselBusinessRepository, DieselContactRepository,
    DieselDocumentRepository, DieselFavoriteRepository, DieselProfileRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

/// Build the HTTP state from configuration.
///
/// Uses Diesel-backed adapters when a pool is available, otherwise falls
/// back to the fixtures so the server can still boot for local API
/// exploration without a database.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let profiles = Arc::new(DieselProfileRepository::new(pool.clone()));
            let businesses = Arc::new(DieselBusinessRepository::new(pool.clone()));
            let favorites = Arc::new(DieselFavoriteRepository::new(pool.clone()));

            HttpState {
                auth: Arc::new(PasswordAuthService::new(profiles.clone())),
                admin: Arc::new(UserAdministrationService::new(profiles.clone())),
                favorites: Arc::new(FavoritesService::new(favorites, businesses.clone())),
                profiles,
                businesses,
                contacts: Arc::new(DieselContactRepository::new(pool.clone())),
                documents: Arc::new(DieselDocumentRepository::new(pool.clone())),
                activities: Arc::new(DieselActivityRepository::new(pool.clone())),
            }
        }
        None => HttpState::fixtures(),
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(register)
        .service(login)
        .service(logout)
        .service(me)
        .service(list_businesses)
        .service(business_board)
        .service(create_business)
        .service(get_business)
        .service(update_business)
        .service(toggle_favorite)
        .service(list_favorites)
        .service(list_contacts)
        .service(create_contact)
        .service(get_contact)
        .service(update_contact)
        .service(list_documents)
        .service(create_document)
        .service(list_activities)
        .service(create_activity)
        .service(list_users)
        .service(approve_user)
        .service(change_user_role)
        .service(reject_user);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is
///   initialised.
/// - `config`: pre-built [`ServerConfig`] containing session and binding
///   settings plus the optional database pool.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
