//! Domain primitives, aggregates, and flow services.
//!
//! Purpose: define strongly typed entities for the voting portal and the
//! three flows operating on them (submission, voting, board retrieval).
//! Types are immutable apart from vote registration; invariants and
//! serialisation contracts live in each type's Rustdoc.

pub mod auth;
pub mod board;
pub mod error;
pub mod pitch;
pub mod ports;
pub mod submission;
pub mod user;
pub mod video;
pub mod voting;

pub use self::auth::{AuthValidationError, Credentials, SignUp, PASSWORD_MIN};
pub use self::board::PitchBoardService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::pitch::{NewPitch, Pitch, PitchId, PitchValidationError};
pub use self::submission::PitchSubmissionService;
pub use self::user::{DisplayName, EmailAddress, User, UserId, UserValidationError};
pub use self::video::{normalize_youtube_url, EmbedUrl};
pub use self::voting::VotingService;

/// Convenient result alias for domain flows.
pub type DomainResult<T> = Result<T, Error>;
