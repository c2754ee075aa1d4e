//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::web;

use crate::domain::{PitchBoardService, PitchSubmissionService, VotingService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{MemoryIdentityProvider, MemoryPitchStore};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Wire the in-memory adapters into an [`HttpState`] for end-to-end handler
/// tests.
pub fn test_state() -> web::Data<HttpState> {
    let store = Arc::new(MemoryPitchStore::new());
    web::Data::new(HttpState::new(
        Arc::new(MemoryIdentityProvider::new()),
        Arc::new(PitchSubmissionService::new(Arc::clone(&store))),
        Arc::new(VotingService::new(Arc::clone(&store))),
        Arc::new(PitchBoardService::new(store)),
    ))
}
