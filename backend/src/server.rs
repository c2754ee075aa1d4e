//! Server construction and middleware wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_session::{
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
    SessionMiddleware,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use crate::domain::{PitchBoardService, PitchSubmissionService, VotingService};
use crate::inbound::http::accounts::{login, logout, me, signup};
use crate::inbound::http::pitches::{cast_vote, list_pitches, submit_pitch};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{MemoryIdentityProvider, MemoryPitchStore};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration from resolved settings.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Wire the in-process adapters into the handler dependency bundle.
///
/// One store instance backs submission, voting, and the board so every flow
/// observes the same records.
#[must_use]
pub fn build_http_state() -> HttpState {
    let store = Arc::new(MemoryPitchStore::new());
    HttpState::new(
        Arc::new(MemoryIdentityProvider::new()),
        Arc::new(PitchSubmissionService::new(Arc::clone(&store))),
        Arc::new(VotingService::new(Arc::clone(&store))),
        Arc::new(PitchBoardService::new(store)),
    )
}

#[derive(Clone)]
struct AppDependencies {
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
        .service(signup)
        .service(login)
        .service(logout)
        .service(me)
        .service(list_pitches)
        .service(submit_pitch)
        .service(cast_vote);

    let app = App::new().app_data(http_state).service(api);

    #[cfg(debug_assertions)]
    let app = app.route(
        "/api-docs/openapi.json",
        web::get().to(|| async {
            use utoipa::OpenApi;
            web::Json(crate::doc::ApiDoc::openapi())
        }),
    );

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state());
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use serde_json::Value;

    fn deps() -> AppDependencies {
        AppDependencies {
            http_state: web::Data::new(build_http_state()),
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
        }
    }

    #[actix_web::test]
    async fn assembled_app_serves_the_full_flow() {
        let app = actix_test::init_service(build_app(deps())).await;

        let signup_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/signup")
                .set_json(serde_json::json!({
                    "email": "ada@example.com",
                    "password": "secret1"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(signup_res.status(), actix_web::http::StatusCode::CREATED);
        let cookie = signup_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie")
            .into_owned();

        let submit_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/pitches")
                .cookie(cookie.clone())
                .set_json(serde_json::json!({
                    "title": "Solar kettle",
                    "founder": "Ada",
                    "summary": "Boils water with sunlight",
                    "videoUrl": "https://youtu.be/abc123"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(submit_res.status(), actix_web::http::StatusCode::CREATED);
        let body = actix_test::read_body(submit_res).await;
        let pitch: Value = serde_json::from_slice(&body).expect("pitch payload");
        let pitch_id = pitch.get("id").and_then(Value::as_str).expect("pitch id");

        let vote_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/v1/pitches/{pitch_id}/votes"))
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(vote_res.status(), actix_web::http::StatusCode::OK);

        let list_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/pitches")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(list_res.status().is_success());
        let body = actix_test::read_body(list_res).await;
        let listed: Value = serde_json::from_slice(&body).expect("list payload");
        let first = &listed.as_array().expect("array")[0];
        assert_eq!(first.get("votes").and_then(Value::as_u64), Some(1));
        assert_eq!(
            first.get("videoUrl").and_then(Value::as_str),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[actix_web::test]
    async fn config_reports_its_bind_address() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().expect("valid address");
        let config = ServerConfig::new(Key::generate(), true, SameSite::Lax, addr);
        assert_eq!(config.bind_addr(), addr);
    }
}
