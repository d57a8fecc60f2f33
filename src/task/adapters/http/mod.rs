//! HTTP adapter for the remote task collaborator.

mod client;
mod wire;

pub use client::HttpTaskCollaborator;
