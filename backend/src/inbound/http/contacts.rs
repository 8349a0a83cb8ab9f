//! Contact API handlers.
//!
//! ```text
//! GET  /api/v1/contacts?businessId=...
//! POST /api/v1/contacts
//! GET  /api/v1/contacts/{id}
//! PUT  /api/v1/contacts/{id}
//! ```

use actix_web::{get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::store_call;
use crate::domain::{
    BusinessId, Contact, ContactFilter, ContactPatch, Error, NewContact,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Listing query parameters.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ContactListQuery {
    /// Restrict the listing to one business.
    pub business_id: Option<Uuid>,
}

/// Contact creation request body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    /// Display name (required, non-empty).
    pub name: String,
    /// Owning business.
    #[serde(default)]
    pub business_id: Option<Uuid>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Contact update request body; absent fields are left untouched.
///
/// `businessId` uses a double option on the wire: omitted = untouched,
/// `null` = detach from the business, value = reassign.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Reassign or detach the owning business.
    #[serde(default, deserialize_with = "deserialize_double_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub business_id: Option<Option<Uuid>>,
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// New job title.
    #[serde(default)]
    pub position: Option<String>,
    /// New avatar URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// New notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Distinguish an omitted field (untouched) from an explicit `null`
/// (detach): omitted deserializes to `None` via the field default, while a
/// present value, including `null`, lands in `Some`.
fn deserialize_double_option<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Uuid>::deserialize(deserializer).map(Some)
}

fn contact_not_found(id: Uuid) -> Error {
    Error::not_found(format!("no contact with id {id}"))
}

fn require_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::invalid_request("contact name must not be empty")
            .with_details(json!({ "field": "name", "code": "empty_name" })));
    }
    Ok(())
}

/// List contacts, optionally filtered by business.
#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    params(ContactListQuery),
    responses(
        (status = 200, description = "Contacts", body = [Contact]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ContactListQuery>,
) -> ApiResult<web::Json<Vec<Contact>>> {
    session.require_user_id()?;
    let filter = ContactFilter {
        business_id: query.business_id.map(BusinessId::from_uuid),
    };
    let contacts = store_call(state.contacts.list(filter)).await?;
    Ok(web::Json(contacts))
}

/// Create a contact.
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 409, description = "Referenced business missing", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateContactRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();
    require_name(&payload.name)?;

    let contact = NewContact {
        business_id: payload.business_id.map(BusinessId::from_uuid),
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        position: payload.position,
        avatar_url: payload.avatar_url,
        notes: payload.notes,
        created_by: Some(user_id),
    };

    let created = store_call(state.contacts.insert(contact)).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch one contact.
#[utoipa::path(
    get,
    path = "/api/v1/contacts/{id}",
    params(("id" = Uuid, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact", body = Contact),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Contact>> {
    session.require_user_id()?;
    let id = path.into_inner();
    let contact = store_call(state.contacts.find_by_id(&id))
        .await?
        .ok_or_else(|| contact_not_found(id))?;
    Ok(web::Json(contact))
}

/// Patch one contact.
#[utoipa::path(
    put,
    path = "/api/v1/contacts/{id}",
    params(("id" = Uuid, Path, description = "Contact id")),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Updated contact", body = Contact),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/contacts/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateContactRequest>,
) -> ApiResult<web::Json<Contact>> {
    session.require_user_id()?;
    let id = path.into_inner();
    let payload = payload.into_inner();

    if let Some(name) = payload.name.as_deref() {
        require_name(name)?;
    }

    let patch = ContactPatch {
        business_id: payload.business_id.map(|b| b.map(BusinessId::from_uuid)),
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        position: payload.position,
        avatar_url: payload.avatar_url,
        notes: payload.notes,
    };

    let updated = store_call(state.contacts.update(&id, patch))
        .await?
        .ok_or_else(|| contact_not_found(id))?;
    Ok(web::Json(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::auth::LoginRequest;
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web, App};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::fixtures()))
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(crate::inbound::http::auth::login)
                    .service(list_contacts)
                    .service(create_contact)
                    .service(get_contact)
                    .service(update_contact),
            )
    }

    async fn login_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> actix_web::cookie::Cookie<'static> {
        let login_req = actix_test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(&LoginRequest {
                email: "ada@example.com".into(),
                password: "password".into(),
            })
            .to_request();
        let login_res = actix_test::call_service(app, login_req).await;
        login_res
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    #[actix_web::test]
    async fn listing_rejects_anonymous_callers() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/contacts")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_rejects_blank_names() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/contacts")
                .cookie(cookie)
                .set_json(serde_json::json!({ "name": "  " }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn missing_contact_is_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/contacts/7c9e6679-7425-40de-944b-e07fc1f90ae7")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
