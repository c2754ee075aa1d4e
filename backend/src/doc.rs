//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST surface: account endpoints, pitch endpoints, the shared error
//! envelope, and the session cookie security scheme. Debug builds serve the
//! generated document at `/api-docs/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::accounts::{LoginRequest, SignUpRequest, UserResponse};
use crate::inbound::http::pitches::{PitchResponse, SubmitPitchRequest};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/signup or /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Pitch portal API",
        description = "HTTP interface for pitch submission, voting, and the ranked pitch list."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::signup,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::accounts::me,
        crate::inbound::http::pitches::list_pitches,
        crate::inbound::http::pitches::submit_pitch,
        crate::inbound::http::pitches::cast_vote,
    ),
    components(schemas(
        Error,
        ErrorCode,
        SignUpRequest,
        LoginRequest,
        UserResponse,
        SubmitPitchRequest,
        PitchResponse,
    )),
    tags(
        (name = "accounts", description = "Account creation and session management"),
        (name = "pitches", description = "Pitch submission, voting, and the ranked list")
    )
)]
pub struct ApiDoc;
