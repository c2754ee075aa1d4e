//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{IdentityProvider, PitchBoard, PitchSubmission, VoteCasting};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Account registration and sign-in.
    pub identity: Arc<dyn IdentityProvider>,
    /// Pitch submission flow.
    pub submission: Arc<dyn PitchSubmission>,
    /// Vote casting flow.
    pub voting: Arc<dyn VoteCasting>,
    /// Ranked pitch list retrieval.
    pub board: Arc<dyn PitchBoard>,
}

impl HttpState {
    /// Bundle the four ports the HTTP surface depends on.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        submission: Arc<dyn PitchSubmission>,
        voting: Arc<dyn VoteCasting>,
        board: Arc<dyn PitchBoard>,
    ) -> Self {
        Self {
            identity,
            submission,
            voting,
            board,
        }
    }
}
