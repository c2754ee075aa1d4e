//! Account API handlers.
//!
//! ```text
//! POST /api/v1/signup {"email":"ada@example.com","password":"secret1","displayName":"Ada"}
//! POST /api/v1/login  {"email":"ada@example.com","password":"secret1"}
//! POST /api/v1/logout
//! GET  /api/v1/me
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::IdentityError;
use crate::domain::{AuthValidationError, Credentials, Error, SignUp, User};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Sign-up request body for `POST /api/v1/signup`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Email address used as the sign-in identifier.
    pub email: String,
    /// Password; at least six characters.
    pub password: String,
    /// Optional display name shown alongside activity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Login request body for `POST /api/v1/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address for the account.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Authenticated user as returned by the account endpoints.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Stable user identifier.
    pub id: String,
    /// Normalised email address.
    pub email: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().to_string(),
            display_name: user.display_name().map(ToString::to_string),
        }
    }
}

fn map_auth_validation_error(err: AuthValidationError) -> Error {
    let field = match err {
        AuthValidationError::Email(_) => "email",
        AuthValidationError::EmptyPassword | AuthValidationError::PasswordTooShort { .. } => {
            "password"
        }
        AuthValidationError::DisplayName(_) => "displayName",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

fn map_identity_error(err: IdentityError) -> Error {
    match err {
        IdentityError::InvalidCredentials => Error::unauthorized(err.to_string()),
        IdentityError::EmailTaken => Error::conflict(err.to_string()),
        IdentityError::Unavailable { .. } => Error::service_unavailable(err.to_string()),
    }
}

/// Create an account and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse, headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 503, description = "Identity provider unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<SignUpRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let request = SignUp::try_from_parts(
        &payload.email,
        &payload.password,
        payload.display_name.as_deref(),
    )
    .map_err(map_auth_validation_error)?;

    let user = state
        .identity
        .register(&request)
        .await
        .map_err(map_identity_error)?;
    session.persist_user(user.id())?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Authenticate an existing account and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserResponse, headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 503, description = "Identity provider unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let credentials = Credentials::try_from_parts(&payload.email, &payload.password)
        .map_err(map_auth_validation_error)?;

    let user = state
        .identity
        .sign_in(&credentials)
        .await
        .map_err(map_identity_error)?;
    session.persist_user(user.id())?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Drop the session, signing the user out.
///
/// Idempotent: a request without a session still succeeds.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 204, description = "Signed out")
    ),
    tags = ["accounts"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

/// Return the currently signed-in user.
#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not signed in", body = Error),
        (status = 503, description = "Identity provider unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "currentUser"
)]
#[get("/me")]
pub async fn me(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<UserResponse>> {
    let user_id = session.require_user_id()?;
    let user = state
        .identity
        .find_user(&user_id)
        .await
        .map_err(map_identity_error)?;
    match user {
        Some(user) => Ok(web::Json(UserResponse::from(user))),
        None => {
            // The account behind the session is gone; treat the session as
            // stale rather than reporting a server fault.
            session.clear();
            Err(Error::unauthorized("login required"))
        }
    }
}
