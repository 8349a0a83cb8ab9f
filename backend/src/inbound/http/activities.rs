//! Activity log API handlers.
//!
//! ```text
//! GET  /api/v1/activities?businessId=...&contactId=...
//! POST /api/v1/activities
//! ```

use actix_web::{get, post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::store_call;
use crate::domain::{
    Activity, ActivityFilter, ActivityKind, BusinessId, Error, NewActivity,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Listing query parameters.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ActivityListQuery {
    /// Restrict the listing to one business.
    pub business_id: Option<Uuid>,
    /// Restrict the listing to one contact.
    pub contact_id: Option<Uuid>,
}

/// Log entry creation request body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    /// Interaction type.
    pub kind: ActivityKind,
    /// Entry body (required, non-empty).
    pub content: String,
    /// Related business.
    #[serde(default)]
    pub business_id: Option<Uuid>,
    /// Related contact.
    #[serde(default)]
    pub contact_id: Option<Uuid>,
    /// When the interaction happened; defaults to now.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// List activity log entries, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/v1/activities",
    params(ActivityListQuery),
    responses(
        (status = 200, description = "Activities", body = [Activity]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["activities"],
    operation_id = "listActivities"
)]
#[get("/activities")]
pub async fn list_activities(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ActivityListQuery>,
) -> ApiResult<web::Json<Vec<Activity>>> {
    session.require_user_id()?;
    let filter = ActivityFilter {
        business_id: query.business_id.map(BusinessId::from_uuid),
        contact_id: query.contact_id,
    };
    let activities = store_call(state.activities.list(filter)).await?;
    Ok(web::Json(activities))
}

/// Append a log entry. Entries are immutable once written.
#[utoipa::path(
    post,
    path = "/api/v1/activities",
    request_body = CreateActivityRequest,
    responses(
        (status = 201, description = "Entry appended", body = Activity),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 409, description = "Referenced record missing", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["activities"],
    operation_id = "createActivity"
)]
#[post("/activities")]
pub async fn create_activity(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateActivityRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();

    if payload.content.trim().is_empty() {
        return Err(Error::invalid_request("activity content must not be empty")
            .with_details(json!({ "field": "content", "code": "empty_content" })));
    }
    if payload.business_id.is_none() && payload.contact_id.is_none() {
        return Err(Error::invalid_request(
            "activity must reference a business or a contact",
        )
        .with_details(json!({ "field": "businessId", "code": "missing_reference" })));
    }

    let activity = NewActivity {
        business_id: payload.business_id.map(BusinessId::from_uuid),
        contact_id: payload.contact_id,
        kind: payload.kind,
        content: payload.content,
        date: Some(payload.date.unwrap_or_else(Utc::now)),
        created_by: Some(user_id),
    };

    let created = store_call(state.activities.insert(activity)).await?;
    Ok(HttpResponse::Created().json(created))
}
