//! Auth API handlers.
//!
//! ```text
//! POST /api/v1/auth/register {"email":"ada@example.com","password":"...","fullName":"Ada"}
//! POST /api/v1/auth/login    {"email":"ada@example.com","password":"..."}
//! POST /api/v1/auth/logout
//! GET  /api/v1/auth/me
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    AccessFlags, AccessState, AuthValidationError, Error, Profile, Registration,
    SignInCredentials,
};
use crate::inbound::http::gate::access_state;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Registration request body for `POST /api/v1/auth/register`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Sign-in email address.
    pub email: String,
    /// Account secret.
    pub password: String,
    /// Optional display name.
    #[serde(default)]
    pub full_name: Option<String>,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = AuthValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password, value.full_name)
    }
}

/// Login request body for `POST /api/v1/auth/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Sign-in email address.
    pub email: String,
    /// Account secret.
    pub password: String,
}

impl TryFrom<LoginRequest> for SignInCredentials {
    type Error = AuthValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

/// Session payload: the caller's profile plus derived access flags.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// The caller's profile.
    pub profile: Profile,
    /// Derived authorization flags.
    pub access: AccessFlags,
}

impl SessionResponse {
    fn for_profile(profile: Profile) -> Self {
        let state = AccessState::authenticated(profile.id, Some(profile.clone()));
        Self {
            access: AccessFlags::from(&state),
            profile,
        }
    }
}

fn map_auth_validation_error(err: AuthValidationError) -> Error {
    match err {
        AuthValidationError::Email(inner) => Error::invalid_request(inner.to_string())
            .with_details(json!({ "field": "email", "code": "invalid_email" })),
        AuthValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
        AuthValidationError::PasswordTooShort { min } => {
            Error::invalid_request(format!("password must be at least {min} characters"))
                .with_details(json!({ "field": "password", "code": "password_too_short" }))
        }
        AuthValidationError::BlankFullName => Error::invalid_request("full name must not be blank")
            .with_details(json!({ "field": "fullName", "code": "blank_full_name" })),
    }
}

/// Register a new account and establish a session.
///
/// New accounts start pending: `approved` stays false until an admin
/// approves them, but the session is established immediately so the client
/// can show the pending state.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = SessionResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration =
        Registration::try_from(payload.into_inner()).map_err(map_auth_validation_error)?;
    let profile = state.auth.register(registration).await?;
    session.persist_user(&profile.id)?;
    Ok(HttpResponse::Created().json(SessionResponse::for_profile(profile)))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SessionResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        SignInCredentials::try_from(payload.into_inner()).map_err(map_auth_validation_error)?;
    let profile = state.auth.sign_in(credentials).await?;
    session.persist_user(&profile.id)?;
    Ok(HttpResponse::Ok().json(SessionResponse::for_profile(profile)))
}

/// Drop the caller's session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/auth/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    session.purge();
    Ok(HttpResponse::NoContent().finish())
}

/// Return the caller's profile and derived access flags.
///
/// A session whose profile no longer exists (e.g. the account was rejected
/// after sign-in) reads as unauthenticated so clients return to login.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "currentSession"
)]
#[get("/auth/me")]
pub async fn me(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SessionResponse>> {
    let access = access_state(&session, state.profiles.as_ref()).await?;
    access.require_authenticated()?;
    let profile = access
        .profile()
        .cloned()
        .ok_or_else(|| Error::unauthorized("account no longer exists"))?;
    Ok(web::Json(SessionResponse::for_profile(profile)))
}

#[cfg(test)]
mod tests {
    use super::*;
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
                    .service(register)
                    .service(login)
                    .service(logout)
                    .service(me),
            )
    }

    #[rstest]
    #[case("not-an-email", "password", "email", "invalid_email")]
    #[case("ada@example.com", "", "password", "empty_password")]
    #[actix_web::test]
    async fn login_rejects_invalid_payloads(
        #[case] email: &str,
        #[case] password: &str,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(&LoginRequest {
                email: email.into(),
                password: password.into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        let details = value
            .get("details")
            .and_then(|v| v.as_object())
            .expect("details present");
        assert_eq!(details.get("field").and_then(Value::as_str), Some(field));
        assert_eq!(details.get("code").and_then(Value::as_str), Some(code));
    }

    #[actix_web::test]
    async fn login_rejects_wrong_credentials_with_unauthorised_status() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(&LoginRequest {
                email: "ada@example.com".into(),
                password: "wrong-password".into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("invalid credentials")
        );
    }

    #[actix_web::test]
    async fn login_returns_profile_and_access_flags() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(&LoginRequest {
                email: "ada@example.com".into(),
                password: "password".into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let cookie_set = response
            .response()
            .cookies()
            .any(|cookie| cookie.name() == "session");
        assert!(cookie_set, "session cookie must be set");

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.pointer("/access/authenticated").and_then(Value::as_bool),
            Some(true)
        );
        assert!(body.pointer("/profile/email").is_some());
        assert!(
            body.pointer("/profile/passwordHash").is_none(),
            "credential hashes must never be serialized"
        );
    }

    #[actix_web::test]
    async fn register_rejects_short_passwords() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(&RegisterRequest {
                email: "new@example.com".into(),
                password: "short".into(),
                full_name: None,
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn register_creates_a_pending_session() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(&RegisterRequest {
                email: "new@example.com".into(),
                password: "correct horse battery staple".into(),
                full_name: Some("New User".into()),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.pointer("/profile/approved").and_then(Value::as_bool),
            Some(false)
        );
        assert_eq!(
            body.pointer("/access/approved").and_then(Value::as_bool),
            Some(false)
        );
    }

    #[actix_web::test]
    async fn logout_requires_a_session() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/logout")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn me_requires_a_session() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/auth/me")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
