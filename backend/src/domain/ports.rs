//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the domain expects to talk to the two external
//! collaborators (the Identity Provider and the Document Store holding pitch
//! records). Driving ports are the use-cases HTTP handlers depend on. Each
//! driven port exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;

use super::auth::{Credentials, SignUp};
use super::pitch::{NewPitch, Pitch, PitchId};
use super::user::{User, UserId};
use super::Error as DomainError;

/// Errors surfaced by the pitch store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchStoreError {
    /// Store connectivity failures.
    #[error("pitch store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// A write was rejected or lost.
    #[error("pitch store write failed: {message}")]
    Write {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// A read query failed during execution.
    #[error("pitch store query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl PitchStoreError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for write failures.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Errors surfaced by the Identity Provider adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// No account matches the supplied email/password pair.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// An account already exists for the supplied email.
    #[error("an account already exists for this email")]
    EmailTaken,
    /// The provider is unreachable or failed internally.
    #[error("identity provider unavailable: {message}")]
    Unavailable {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl IdentityError {
    /// Helper for provider outages.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Result of the store's atomic vote registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The voter was appended and the tally incremented by exactly one.
    Recorded(Pitch),
    /// The voter was already present; nothing was written.
    AlreadyVoted,
    /// No pitch exists under the given identifier; nothing was written.
    PitchMissing,
}

/// Persistence port for the pitch collection (Document Store boundary).
///
/// `register_vote` is deliberately part of this port rather than a
/// read-modify-write sequence in the flow: the membership check and the
/// increment execute under the adapter's write serialization, so two
/// concurrent first-time voters can never lose an update.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PitchStore: Send + Sync {
    /// Insert a draft, assigning an identifier and returning the stored
    /// record.
    async fn insert(&self, draft: NewPitch) -> Result<Pitch, PitchStoreError>;

    /// Fetch every pitch in the store's enumeration order.
    async fn find_all(&self) -> Result<Vec<Pitch>, PitchStoreError>;

    /// Fetch one pitch by identifier.
    async fn find_by_id(&self, id: &PitchId) -> Result<Option<Pitch>, PitchStoreError>;

    /// Atomically add the voter to the pitch's voter set and, if newly
    /// added, increment the tally.
    async fn register_vote(
        &self,
        id: &PitchId,
        voter: &UserId,
    ) -> Result<VoteOutcome, PitchStoreError>;
}

/// Authentication port (Identity Provider boundary).
///
/// Sign-out is session-side only and needs no provider call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and return the signed-in user.
    async fn register(&self, signup: &SignUp) -> Result<User, IdentityError>;

    /// Authenticate an existing account.
    async fn sign_in(&self, credentials: &Credentials) -> Result<User, IdentityError>;

    /// Resolve a user handle from a session-held identifier.
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, IdentityError>;
}

/// Raw submission payload as received from the client form.
///
/// Field validation happens inside the submission flow so every caller gets
/// the same `invalid_request` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPitch {
    /// Pitch title; required.
    pub title: String,
    /// Founder name; required.
    pub founder: String,
    /// Pitch summary; required.
    pub summary: String,
    /// Optional video link in any recognised YouTube form.
    pub video_url: String,
}

/// Driving port for the pitch submission flow.
#[async_trait]
pub trait PitchSubmission: Send + Sync {
    /// Validate the payload and insert a new pitch on behalf of
    /// `submitted_by`.
    async fn submit(
        &self,
        request: SubmitPitch,
        submitted_by: UserId,
    ) -> Result<Pitch, DomainError>;
}

/// Driving port for the voting flow.
#[async_trait]
pub trait VoteCasting: Send + Sync {
    /// Attempt to register exactly one vote from `voter` for `pitch`.
    async fn cast_vote(&self, pitch: &PitchId, voter: &UserId)
        -> Result<VoteOutcome, DomainError>;
}

/// Driving port for ranked pitch list retrieval.
#[async_trait]
pub trait PitchBoard: Send + Sync {
    /// Fetch every pitch ordered by vote count descending; ties keep the
    /// store's enumeration order.
    async fn ranked(&self) -> Result<Vec<Pitch>, DomainError>;
}
