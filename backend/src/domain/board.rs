//! Ranked pitch list retrieval.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::pitch::Pitch;
use super::ports::{PitchBoard, PitchStore, PitchStoreError};
use super::Error;

/// Board service implementing the [`PitchBoard`] driving port.
///
/// Each call is a full re-fetch followed by a client-side sort; the store
/// offers no query ordering and the portal is small enough not to need one.
#[derive(Clone)]
pub struct PitchBoardService<S> {
    store: Arc<S>,
}

impl<S> PitchBoardService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> PitchBoardService<S>
where
    S: PitchStore,
{
    fn map_store_error(error: PitchStoreError) -> Error {
        Error::service_unavailable(error.to_string())
    }
}

#[async_trait]
impl<S> PitchBoard for PitchBoardService<S>
where
    S: PitchStore,
{
    async fn ranked(&self) -> Result<Vec<Pitch>, Error> {
        let mut pitches = self.store.find_all().await.map_err(|error| {
            warn!(error = %error, "pitch listing failed");
            Self::map_store_error(error)
        })?;

        // Stable sort: ties keep the store's enumeration order, so the
        // ranking is deterministic for a fixed underlying collection.
        pitches.sort_by(|a, b| b.votes().cmp(&a.votes()));
        Ok(pitches)
    }
}
