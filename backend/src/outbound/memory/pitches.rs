//! In-memory pitch store.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{PitchStore, PitchStoreError, VoteOutcome};
use crate::domain::{NewPitch, Pitch, PitchId, UserId};

/// Pitch collection held in process memory.
///
/// Records keep insertion order, which doubles as the store's enumeration
/// order for listing and tie-breaking. All mutation happens under one lock,
/// so [`PitchStore::register_vote`] is genuinely atomic: the membership
/// check and the increment cannot interleave with another voter.
#[derive(Debug, Default)]
pub struct MemoryPitchStore {
    records: Mutex<Vec<Pitch>>,
}

impl MemoryPitchStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Pitch>>, PitchStoreError> {
        self.records
            .lock()
            .map_err(|_| PitchStoreError::connection("pitch store lock poisoned"))
    }
}

#[async_trait]
impl PitchStore for MemoryPitchStore {
    async fn insert(&self, draft: NewPitch) -> Result<Pitch, PitchStoreError> {
        let pitch = Pitch::from_draft(PitchId::random(), draft, Utc::now());
        let mut records = self.lock()?;
        records.push(pitch.clone());
        Ok(pitch)
    }

    async fn find_all(&self) -> Result<Vec<Pitch>, PitchStoreError> {
        let records = self.lock()?;
        Ok(records.clone())
    }

    async fn find_by_id(&self, id: &PitchId) -> Result<Option<Pitch>, PitchStoreError> {
        let records = self.lock()?;
        Ok(records.iter().find(|pitch| pitch.id() == id).cloned())
    }

    async fn register_vote(
        &self,
        id: &PitchId,
        voter: &UserId,
    ) -> Result<VoteOutcome, PitchStoreError> {
        let mut records = self.lock()?;
        let Some(pitch) = records.iter_mut().find(|pitch| pitch.id() == id) else {
            return Ok(VoteOutcome::PitchMissing);
        };
        if pitch.has_vote_from(voter) {
            return Ok(VoteOutcome::AlreadyVoted);
        }
        pitch.record_vote(voter.clone());
        Ok(VoteOutcome::Recorded(pitch.clone()))
    }
}
