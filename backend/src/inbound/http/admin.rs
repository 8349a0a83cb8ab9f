//! Admin panel API handlers: the user directory and approval workflow.
//!
//! ```text
//! GET    /api/v1/admin/users
//! POST   /api/v1/admin/users/{id}/approve
//! PUT    /api/v1/admin/users/{id}/role {"role":"Admin"}
//! DELETE /api/v1/admin/users/{id}
//! ```
//!
//! Every handler derives the caller's access state and passes the admin
//! gate before touching any port, so no directory data is ever produced
//! for a non-admin — not even transiently.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, Profile, Role, UserId};
use crate::inbound::http::gate::access_state;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Role change request body.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRoleRequest {
    /// Role to assign.
    pub role: Role,
}

async fn require_admin(
    state: &HttpState,
    session: &SessionContext,
) -> Result<UserId, Error> {
    let access = access_state(session, state.profiles.as_ref()).await?;
    access.require_admin().copied()
}

/// List the user directory, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    responses(
        (status = 200, description = "Profiles", body = [Profile]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listUsers"
)]
#[get("/admin/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Profile>>> {
    require_admin(&state, &session).await?;
    let users = state.admin.list_users().await?;
    Ok(web::Json(users))
}

/// Approve a pending account. The role is untouched.
#[utoipa::path(
    post,
    path = "/api/v1/admin/users/{id}/approve",
    params(("id" = Uuid, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Approved profile", body = Profile),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "approveUser"
)]
#[post("/admin/users/{id}/approve")]
pub async fn approve_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Profile>> {
    require_admin(&state, &session).await?;
    let id = UserId::from_uuid(path.into_inner());
    let profile = state.admin.approve(&id).await?;
    Ok(web::Json(profile))
}

/// Replace an account's role. All other fields are untouched.
#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}/role",
    params(("id" = Uuid, Path, description = "Profile id")),
    request_body = ChangeRoleRequest,
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "changeUserRole"
)]
#[put("/admin/users/{id}/role")]
pub async fn change_user_role(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<ChangeRoleRequest>,
) -> ApiResult<web::Json<Profile>> {
    require_admin(&state, &session).await?;
    let id = UserId::from_uuid(path.into_inner());
    let profile = state.admin.change_role(&id, payload.role).await?;
    Ok(web::Json(profile))
}

/// Reject an account by deleting its profile.
///
/// The delete is a single-row operation: on failure the caller must not
/// assume the record is gone, and should re-list instead.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/users/{id}",
    params(("id" = Uuid, Path, description = "Profile id")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "rejectUser"
)]
#[delete("/admin/users/{id}")]
pub async fn reject_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state, &session).await?;
    let id = UserId::from_uuid(path.into_inner());
    state.admin.reject(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
