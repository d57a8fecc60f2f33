//! In-memory adapter for the collaborator port.

mod collaborator;

pub use collaborator::{InMemoryCollaborator, RecordedRequest};
