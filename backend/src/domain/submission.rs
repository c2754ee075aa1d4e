//! Pitch submission flow.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use super::pitch::{NewPitch, Pitch, PitchValidationError};
use super::ports::{PitchStore, PitchStoreError, PitchSubmission, SubmitPitch};
use super::user::UserId;
use super::Error;

/// Submission service implementing the [`PitchSubmission`] driving port.
///
/// Takes the authenticated user's identifier as an explicit parameter; there
/// is no ambient current-user state anywhere in the domain.
#[derive(Clone)]
pub struct PitchSubmissionService<S> {
    store: Arc<S>,
}

impl<S> PitchSubmissionService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> PitchSubmissionService<S>
where
    S: PitchStore,
{
    fn map_store_error(error: PitchStoreError) -> Error {
        // Store failures are retryable from the client's point of view, so
        // carry the adapter message instead of redacting it behind an
        // internal error.
        Error::service_unavailable(error.to_string())
    }

    fn map_validation_error(error: PitchValidationError) -> Error {
        let field = match error {
            PitchValidationError::EmptyTitle => "title",
            PitchValidationError::EmptyFounder => "founder",
            PitchValidationError::EmptySummary => "summary",
        };
        Error::invalid_request(error.to_string())
            .with_details(json!({ "field": field, "code": format!("empty_{field}") }))
    }
}

#[async_trait]
impl<S> PitchSubmission for PitchSubmissionService<S>
where
    S: PitchStore,
{
    async fn submit(&self, request: SubmitPitch, submitted_by: UserId) -> Result<Pitch, Error> {
        let draft = NewPitch::try_from_parts(
            &request.title,
            &request.founder,
            &request.summary,
            &request.video_url,
            submitted_by,
        )
        .map_err(Self::map_validation_error)?;

        self.store.insert(draft).await.map_err(|error| {
            warn!(error = %error, "pitch insert failed");
            Self::map_store_error(error)
        })
    }
}
