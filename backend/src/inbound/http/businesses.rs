//! Business API handlers.
//!
//! ```text
//! GET  /api/v1/businesses?status=Partner
//! GET  /api/v1/businesses/board
//! POST /api/v1/businesses
//! GET  /api/v1/businesses/{id}
//! PUT  /api/v1/businesses/{id}
//! POST /api/v1/businesses/{id}/favorite
//! GET  /api/v1/favorites
//! ```

use actix_web::{get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::store_call;
use crate::domain::{
    Business, BusinessBoard, BusinessFilter, BusinessId, BusinessPatch, BusinessStatus, Error,
    Favorite, FavoriteToggle, NewBusiness,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Listing query parameters.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BusinessListQuery {
    /// Restrict the listing to one pipeline stage.
    pub status: Option<String>,
}

/// Business creation request body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessRequest {
    /// Display name (required, non-empty).
    pub name: String,
    /// Industry label.
    #[serde(default)]
    pub industry: Option<String>,
    /// Initial pipeline stage; defaults to `Researching`.
    #[serde(default)]
    pub status: Option<BusinessStatus>,
    /// Free-form revenue figure.
    #[serde(default)]
    pub revenue: Option<String>,
    /// Headcount.
    #[serde(default)]
    pub employees: Option<i32>,
    /// Logo image URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Public website.
    #[serde(default)]
    pub website: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Year the business was founded.
    #[serde(default)]
    pub founded_year: Option<i32>,
}

/// Business update request body; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New industry label.
    #[serde(default)]
    pub industry: Option<String>,
    /// New pipeline stage.
    #[serde(default)]
    pub status: Option<BusinessStatus>,
    /// New revenue figure.
    #[serde(default)]
    pub revenue: Option<String>,
    /// New headcount.
    #[serde(default)]
    pub employees: Option<i32>,
    /// New logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// New website.
    #[serde(default)]
    pub website: Option<String>,
    /// New contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// New contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// New postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New founding year.
    #[serde(default)]
    pub founded_year: Option<i32>,
}

/// Favorite toggle response body.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggleResponse {
    /// What the toggle did.
    pub status: FavoriteToggle,
    /// Whether the business is a favorite after the toggle.
    pub favorite: bool,
}

fn parse_status_filter(raw: Option<&str>) -> Result<Option<BusinessStatus>, Error> {
    raw.map(|value| {
        BusinessStatus::parse(value).ok_or_else(|| {
            Error::invalid_request(format!("unknown business status: {value}"))
                .with_details(json!({ "field": "status", "code": "unknown_status" }))
        })
    })
    .transpose()
}

fn business_not_found(id: BusinessId) -> Error {
    Error::not_found(format!("no business with id {id}"))
}

/// List businesses, optionally filtered by pipeline stage.
#[utoipa::path(
    get,
    path = "/api/v1/businesses",
    params(BusinessListQuery),
    responses(
        (status = 200, description = "Businesses", body = [Business]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["businesses"],
    operation_id = "listBusinesses"
)]
#[get("/businesses")]
pub async fn list_businesses(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<BusinessListQuery>,
) -> ApiResult<web::Json<Vec<Business>>> {
    session.require_user_id()?;
    let status = parse_status_filter(query.status.as_deref())?;
    let businesses = store_call(state.businesses.list(BusinessFilter { status })).await?;
    Ok(web::Json(businesses))
}

/// Return all businesses grouped into status-board columns.
#[utoipa::path(
    get,
    path = "/api/v1/businesses/board",
    responses(
        (status = 200, description = "Status board", body = BusinessBoard),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["businesses"],
    operation_id = "businessBoard"
)]
#[get("/businesses/board")]
pub async fn business_board(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<BusinessBoard>> {
    session.require_user_id()?;
    let businesses = store_call(state.businesses.list(BusinessFilter::default())).await?;
    Ok(web::Json(BusinessBoard::group(businesses)))
}

/// Create a business.
#[utoipa::path(
    post,
    path = "/api/v1/businesses",
    request_body = CreateBusinessRequest,
    responses(
        (status = 201, description = "Business created", body = Business),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["businesses"],
    operation_id = "createBusiness"
)]
#[post("/businesses")]
pub async fn create_business(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateBusinessRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();

    let mut business = NewBusiness::named(payload.name, Some(user_id)).map_err(|err| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "name", "code": "empty_name" }))
    })?;
    if let Some(status) = payload.status {
        business.status = status;
    }
    business.industry = payload.industry;
    business.revenue = payload.revenue;
    business.employees = payload.employees;
    business.logo_url = payload.logo_url;
    business.website = payload.website;
    business.email = payload.email;
    business.phone = payload.phone;
    business.address = payload.address;
    business.description = payload.description;
    business.founded_year = payload.founded_year;

    let created = store_call(state.businesses.insert(business)).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch one business.
#[utoipa::path(
    get,
    path = "/api/v1/businesses/{id}",
    params(("id" = Uuid, Path, description = "Business id")),
    responses(
        (status = 200, description = "Business", body = Business),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["businesses"],
    operation_id = "getBusiness"
)]
#[get("/businesses/{id}")]
pub async fn get_business(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Business>> {
    session.require_user_id()?;
    let id = BusinessId::from_uuid(path.into_inner());
    let business = store_call(state.businesses.find_by_id(&id))
        .await?
        .ok_or_else(|| business_not_found(id))?;
    Ok(web::Json(business))
}

/// Patch one business.
#[utoipa::path(
    put,
    path = "/api/v1/businesses/{id}",
    params(("id" = Uuid, Path, description = "Business id")),
    request_body = UpdateBusinessRequest,
    responses(
        (status = 200, description = "Updated business", body = Business),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["businesses"],
    operation_id = "updateBusiness"
)]
#[put("/businesses/{id}")]
pub async fn update_business(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateBusinessRequest>,
) -> ApiResult<web::Json<Business>> {
    session.require_user_id()?;
    let id = BusinessId::from_uuid(path.into_inner());
    let payload = payload.into_inner();

    if let Some(name) = payload.name.as_deref() {
        if name.trim().is_empty() {
            return Err(Error::invalid_request("business name must not be empty")
                .with_details(json!({ "field": "name", "code": "empty_name" })));
        }
    }

    let patch = BusinessPatch {
        name: payload.name,
        industry: payload.industry,
        status: payload.status,
        revenue: payload.revenue,
        employees: payload.employees,
        logo_url: payload.logo_url,
        website: payload.website,
        email: payload.email,
        phone: payload.phone,
        address: payload.address,
        description: payload.description,
        founded_year: payload.founded_year,
    };

    let updated = store_call(state.businesses.update(&id, patch))
        .await?
        .ok_or_else(|| business_not_found(id))?;
    Ok(web::Json(updated))
}

/// Toggle the caller's favorite marking on a business.
///
/// Toggling twice returns the relation to its original state; concurrent
/// toggles from two sessions converge on the store's unique constraint.
#[utoipa::path(
    post,
    path = "/api/v1/businesses/{id}/favorite",
    params(("id" = Uuid, Path, description = "Business id")),
    responses(
        (status = 200, description = "Toggle outcome", body = FavoriteToggleResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["businesses"],
    operation_id = "toggleFavorite"
)]
#[post("/businesses/{id}/favorite")]
pub async fn toggle_favorite(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<FavoriteToggleResponse>> {
    let user_id = session.require_user_id()?;
    let business_id = BusinessId::from_uuid(path.into_inner());
    let status = state.favorites.toggle(&user_id, &business_id).await?;
    Ok(web::Json(FavoriteToggleResponse {
        status,
        favorite: status.is_favorite(),
    }))
}

/// List the caller's favorite relations.
#[utoipa::path(
    get,
    path = "/api/v1/favorites",
    responses(
        (status = 200, description = "Favorites", body = [Favorite]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["businesses"],
    operation_id = "listFavorites"
)]
#[get("/favorites")]
pub async fn list_favorites(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Favorite>>> {
    let user_id = session.require_user_id()?;
    let favorites = state.favorites.list_for_user(&user_id).await?;
    Ok(web::Json(favorites))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::auth::LoginRequest;
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web, App};
    use rstest::rstest;
    use serde_json::Value;

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
                    .service(list_businesses)
                    .service(business_board)
                    .service(create_business)
                    .service(get_business)
                    .service(update_business)
                    .service(toggle_favorite)
                    .service(list_favorites),
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
        assert!(login_res.status().is_success());
        login_res
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    #[rstest]
    #[case("/api/v1/businesses")]
    #[case("/api/v1/businesses/board")]
    #[case("/api/v1/favorites")]
    #[actix_web::test]
    async fn listings_reject_anonymous_callers(#[case] uri: &str) {
        let app = actix_test::init_service(test_app()).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn listing_rejects_unknown_status_values() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/businesses?status=Signed")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn board_always_renders_every_column() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/businesses/board")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body: Value = actix_test::read_body_json(response).await;
        let columns = body
            .get("columns")
            .and_then(Value::as_array)
            .expect("columns array");
        assert_eq!(columns.len(), 5);
    }

    #[actix_web::test]
    async fn create_rejects_blank_names() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/businesses")
                .cookie(cookie)
                .set_json(serde_json::json!({ "name": "   " }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn missing_business_is_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/businesses/7c9e6679-7425-40de-944b-e07fc1f90ae7")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn toggle_reports_the_new_state() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/businesses/7c9e6679-7425-40de-944b-e07fc1f90ae7/favorite")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("status").and_then(Value::as_str), Some("added"));
        assert_eq!(body.get("favorite").and_then(Value::as_bool), Some(true));
    }
}
