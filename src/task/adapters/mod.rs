//! Adapter implementations of the collaborator port.

pub mod http;
pub mod memory;
