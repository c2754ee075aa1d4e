//! HTTP inbound adapter exposing the REST surface.

pub mod accounts;
pub mod error;
pub mod pitches;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
