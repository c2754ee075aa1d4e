//! In-process adapters standing in for the hosted collaborators.
//!
//! The portal's Identity Provider and Document Store are external services
//! whose internals are out of scope; these adapters implement the same
//! ports against process memory so the application runs, and is tested,
//! without live infrastructure.

mod identity;
mod pitches;

pub use identity::MemoryIdentityProvider;
pub use pitches::MemoryPitchStore;
