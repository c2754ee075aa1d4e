//! Pitch portal backend.
//!
//! Hexagonal layout: `domain` holds the entities, ports, and flow services;
//! `inbound::http` adapts them to a REST surface; `outbound::memory` stands
//! in for the hosted identity and document-store collaborators; `server`
//! assembles the application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
