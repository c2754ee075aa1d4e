//! Voting flow: at most one vote per user per pitch.
//!
//! A read-check-write sequence here would let two concurrent voters read the
//! same tally and lose one write. The check and the increment are therefore
//! a single [`PitchStore::register_vote`] call executed under the store's
//! write serialization, so the tally always equals the voter count.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::pitch::PitchId;
use super::ports::{PitchStore, PitchStoreError, VoteCasting, VoteOutcome};
use super::user::UserId;
use super::Error;

/// Voting service implementing the [`VoteCasting`] driving port.
#[derive(Clone)]
pub struct VotingService<S> {
    store: Arc<S>,
}

impl<S> VotingService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> VotingService<S>
where
    S: PitchStore,
{
    fn map_store_error(error: PitchStoreError) -> Error {
        Error::service_unavailable(error.to_string())
    }
}

#[async_trait]
impl<S> VoteCasting for VotingService<S>
where
    S: PitchStore,
{
    async fn cast_vote(&self, pitch: &PitchId, voter: &UserId) -> Result<VoteOutcome, Error> {
        let outcome = self
            .store
            .register_vote(pitch, voter)
            .await
            .map_err(|error| {
                warn!(pitch = %pitch, error = %error, "vote registration failed");
                Self::map_store_error(error)
            })?;

        match &outcome {
            VoteOutcome::Recorded(updated) => {
                debug!(pitch = %pitch, votes = updated.votes(), "vote recorded");
            }
            VoteOutcome::AlreadyVoted => {
                debug!(pitch = %pitch, "repeat vote rejected");
            }
            VoteOutcome::PitchMissing => {
                // Stale list entry: the pitch vanished between render and
                // click. Not an error; the adapter decides how to present it.
                debug!(pitch = %pitch, "vote on missing pitch ignored");
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockPitchStore;
    use crate::domain::{ErrorCode, NewPitch, Pitch};
    use chrono::Utc;

    fn stored_pitch(voters: &[UserId]) -> Pitch {
        let draft = NewPitch::try_from_parts("X", "Y", "Z", "", UserId::random())
            .expect("valid draft");
        let mut pitch = Pitch::from_draft(PitchId::random(), draft, Utc::now());
        for voter in voters {
            pitch.record_vote(voter.clone());
        }
        pitch
    }

    #[tokio::test]
    async fn first_time_vote_is_recorded() {
        let voter = UserId::random();
        let existing = vec![UserId::random(), UserId::random(), UserId::random()];
        let mut updated = stored_pitch(&existing);
        updated.record_vote(voter.clone());

        let mut store = MockPitchStore::new();
        let expected = updated.clone();
        store
            .expect_register_vote()
            .times(1)
            .return_once(move |_, _| Ok(VoteOutcome::Recorded(expected)));

        let service = VotingService::new(Arc::new(store));
        let outcome = service
            .cast_vote(updated.id(), &voter)
            .await
            .expect("vote succeeds");

        match outcome {
            VoteOutcome::Recorded(pitch) => {
                assert_eq!(pitch.votes(), 4);
                assert_eq!(pitch.voted_by().len(), 4);
                assert!(pitch.has_vote_from(&voter));
            }
            other => panic!("expected recorded vote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn repeat_vote_passes_rejection_through() {
        let mut store = MockPitchStore::new();
        store
            .expect_register_vote()
            .times(1)
            .return_once(|_, _| Ok(VoteOutcome::AlreadyVoted));

        let service = VotingService::new(Arc::new(store));
        let outcome = service
            .cast_vote(&PitchId::random(), &UserId::random())
            .await
            .expect("rejection is not an error");
        assert_eq!(outcome, VoteOutcome::AlreadyVoted);
    }

    #[tokio::test]
    async fn vote_on_missing_pitch_is_not_an_error() {
        let mut store = MockPitchStore::new();
        store
            .expect_register_vote()
            .times(1)
            .return_once(|_, _| Ok(VoteOutcome::PitchMissing));

        let service = VotingService::new(Arc::new(store));
        let outcome = service
            .cast_vote(&PitchId::random(), &UserId::random())
            .await
            .expect("missing pitch is a quiet outcome");
        assert_eq!(outcome, VoteOutcome::PitchMissing);
    }

    #[tokio::test]
    async fn store_failure_maps_to_service_unavailable() {
        let mut store = MockPitchStore::new();
        store
            .expect_register_vote()
            .times(1)
            .return_once(|_, _| Err(PitchStoreError::connection("timed out")));

        let service = VotingService::new(Arc::new(store));
        let error = service
            .cast_vote(&PitchId::random(), &UserId::random())
            .await
            .expect_err("store failure surfaces");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }
}
