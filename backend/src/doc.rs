//! OpenAPI surface assembled with Utoipa.
//!
//! Served by Swagger UI at `/docs` in debug builds; tooling can dump the
//! JSON from [`ApiDoc::openapi`].

use utoipa::OpenApi;

/// Public OpenAPI document covering the versioned API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CRM backend",
        description = "Business relationship management API: businesses, \
                       contacts, documents, activity log, favorites, and \
                       user administration."
    ),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::me,
        crate::inbound::http::businesses::list_businesses,
        crate::inbound::http::businesses::business_board,
        crate::inbound::http::businesses::create_business,
        crate::inbound::http::businesses::get_business,
        crate::inbound::http::businesses::update_business,
        crate::inbound::http::businesses::toggle_favorite,
        crate::inbound::http::businesses::list_favorites,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::documents::list_documents,
        crate::inbound::http::documents::create_document,
        crate::inbound::http::activities::list_activities,
        crate::inbound::http::activities::create_activity,
        crate::inbound::http::admin::list_users,
        crate::inbound::http::admin::approve_user,
        crate::inbound::http::admin::change_user_role,
        crate::inbound::http::admin::reject_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::Error,
        crate::domain::ErrorCode,
        crate::domain::Profile,
        crate::domain::Role,
        crate::domain::AccessFlags,
        crate::domain::Business,
        crate::domain::BusinessStatus,
        crate::domain::BusinessBoard,
        crate::domain::BoardColumn,
        crate::domain::Contact,
        crate::domain::Document,
        crate::domain::DocumentKind,
        crate::domain::Activity,
        crate::domain::ActivityKind,
        crate::domain::Favorite,
        crate::domain::FavoriteToggle,
        crate::inbound::http::auth::RegisterRequest,
        crate::inbound::http::auth::LoginRequest,
        crate::inbound::http::auth::SessionResponse,
        crate::inbound::http::businesses::CreateBusinessRequest,
        crate::inbound::http::businesses::UpdateBusinessRequest,
        crate::inbound::http::businesses::FavoriteToggleResponse,
        crate::inbound::http::contacts::CreateContactRequest,
        crate::inbound::http::contacts::UpdateContactRequest,
        crate::inbound::http::documents::CreateDocumentRequest,
        crate::inbound::http::activities::CreateActivityRequest,
        crate::inbound::http::admin::ChangeRoleRequest,
    ))
)]
pub struct ApiDoc;
