//! Pitch API handlers.
//!
//! ```text
//! GET  /api/v1/pitches
//! POST /api/v1/pitches {"title":"...","founder":"...","summary":"...","videoUrl":"..."}
//! POST /api/v1/pitches/{id}/votes
//! ```
//!
//! Every route requires an authenticated session; unauthenticated requests
//! receive the standard 401 envelope.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{SubmitPitch, VoteOutcome};
use crate::domain::{Error, Pitch, PitchId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Submission request body for `POST /api/v1/pitches`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPitchRequest {
    /// Pitch title; required.
    pub title: String,
    /// Founder name; required.
    pub founder: String,
    /// Pitch summary; required.
    pub summary: String,
    /// Optional YouTube link in any recognised form.
    #[serde(default)]
    pub video_url: String,
}

impl From<SubmitPitchRequest> for SubmitPitch {
    fn from(value: SubmitPitchRequest) -> Self {
        Self {
            title: value.title,
            founder: value.founder,
            summary: value.summary,
            video_url: value.video_url,
        }
    }
}

/// Stored pitch as returned by the pitch endpoints.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PitchResponse {
    /// Stable pitch identifier.
    pub id: String,
    /// Pitch title.
    pub title: String,
    /// Founder name.
    pub founder: String,
    /// Pitch summary.
    pub summary: String,
    /// Normalised embed URL, when the submitted link was recognised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Identifier of the submitting user.
    pub created_by: String,
    /// Current vote tally.
    pub votes: u32,
    /// Creation timestamp in RFC 3339 form.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Pitch> for PitchResponse {
    fn from(pitch: Pitch) -> Self {
        Self {
            id: pitch.id().to_string(),
            title: pitch.title().to_owned(),
            founder: pitch.founder().to_owned(),
            summary: pitch.summary().to_owned(),
            video_url: pitch.video_url().map(|url| url.as_ref().to_owned()),
            created_by: pitch.created_by().to_string(),
            votes: pitch.votes(),
            created_at: pitch.created_at(),
        }
    }
}

/// List every pitch ordered by vote count descending.
#[utoipa::path(
    get,
    path = "/api/v1/pitches",
    responses(
        (status = 200, description = "Ranked pitches", body = [PitchResponse]),
        (status = 401, description = "Not signed in", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["pitches"],
    operation_id = "listPitches"
)]
#[get("/pitches")]
pub async fn list_pitches(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PitchResponse>>> {
    session.require_user_id()?;
    let pitches = state.board.ranked().await?;
    Ok(web::Json(
        pitches.into_iter().map(PitchResponse::from).collect(),
    ))
}

/// Submit a new pitch on behalf of the signed-in user.
#[utoipa::path(
    post,
    path = "/api/v1/pitches",
    request_body = SubmitPitchRequest,
    responses(
        (status = 201, description = "Pitch stored", body = PitchResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["pitches"],
    operation_id = "submitPitch"
)]
#[post("/pitches")]
pub async fn submit_pitch(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<SubmitPitchRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let pitch = state
        .submission
        .submit(payload.into_inner().into(), user_id)
        .await?;
    Ok(HttpResponse::Created().json(PitchResponse::from(pitch)))
}

/// Cast the signed-in user's vote for a pitch.
///
/// At most one vote per user per pitch; a repeat vote is a 409 conflict and
/// a vote for a pitch that no longer exists is a 404. Neither writes.
#[utoipa::path(
    post,
    path = "/api/v1/pitches/{id}/votes",
    params(
        ("id" = String, Path, description = "Pitch identifier")
    ),
    responses(
        (status = 200, description = "Vote recorded", body = PitchResponse),
        (status = 401, description = "Not signed in", body = Error),
        (status = 404, description = "Pitch no longer exists", body = Error),
        (status = 409, description = "Already voted", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["pitches"],
    operation_id = "castVote"
)]
#[post("/pitches/{id}/votes")]
pub async fn cast_vote(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let pitch_id = PitchId::new(path.into_inner())
        .map_err(|_| Error::invalid_request("pitch id must be a valid UUID"))?;

    match state.voting.cast_vote(&pitch_id, &user_id).await? {
        VoteOutcome::Recorded(pitch) => Ok(HttpResponse::Ok().json(PitchResponse::from(pitch))),
        VoteOutcome::AlreadyVoted => Err(Error::conflict("you already voted for this pitch")),
        VoteOutcome::PitchMissing => Err(Error::not_found("this pitch no longer exists")),
    }
}
