//! Document API handlers.
//!
//! ```text
//! GET  /api/v1/documents?businessId=...
//! POST /api/v1/documents
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::store_call;
use crate::domain::{BusinessId, Document, DocumentFilter, DocumentKind, Error, NewDocument};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Listing query parameters.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListQuery {
    /// Restrict the listing to one business.
    pub business_id: Option<Uuid>,
}

/// Upload registration request body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    /// Display name (required, non-empty).
    pub name: String,
    /// File category.
    pub kind: DocumentKind,
    /// Owning business.
    #[serde(default)]
    pub business_id: Option<Uuid>,
    /// Storage URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Human-readable size, e.g. `"2.4 MB"`.
    #[serde(default)]
    pub size: Option<String>,
}

/// List documents, optionally filtered by business.
#[utoipa::path(
    get,
    path = "/api/v1/documents",
    params(DocumentListQuery),
    responses(
        (status = 200, description = "Documents", body = [Document]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["documents"],
    operation_id = "listDocuments"
)]
#[get("/documents")]
pub async fn list_documents(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<DocumentListQuery>,
) -> ApiResult<web::Json<Vec<Document>>> {
    session.require_user_id()?;
    let filter = DocumentFilter {
        business_id: query.business_id.map(BusinessId::from_uuid),
    };
    let documents = store_call(state.documents.list(filter)).await?;
    Ok(web::Json(documents))
}

/// Record an upload.
#[utoipa::path(
    post,
    path = "/api/v1/documents",
    request_body = CreateDocumentRequest,
    responses(
        (status = 201, description = "Document recorded", body = Document),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 409, description = "Referenced business missing", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["documents"],
    operation_id = "createDocument"
)]
#[post("/documents")]
pub async fn create_document(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateDocumentRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();

    if payload.name.trim().is_empty() {
        return Err(Error::invalid_request("document name must not be empty")
            .with_details(json!({ "field": "name", "code": "empty_name" })));
    }

    let document = NewDocument {
        business_id: payload.business_id.map(BusinessId::from_uuid),
        name: payload.name,
        kind: payload.kind,
        url: payload.url,
        size: payload.size,
        created_by: Some(user_id),
    };

    let created = store_call(state.documents.insert(document)).await?;
    Ok(HttpResponse::Created().json(created))
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
                    .service(list_documents)
                    .service(create_document),
            )
    }

    #[actix_web::test]
    async fn listing_rejects_anonymous_callers() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/documents")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_rejects_unknown_kinds_at_the_boundary() {
        let app = actix_test::init_service(test_app()).await;
        let login_req = actix_test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(&LoginRequest {
                email: "ada@example.com".into(),
                password: "password".into(),
            })
            .to_request();
        let login_res = actix_test::call_service(&app, login_req).await;
        let cookie = login_res
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned();

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/documents")
                .cookie(cookie)
                .set_json(serde_json::json!({ "name": "Q3 deck", "kind": "archive" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
