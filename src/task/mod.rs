//! Task state synchronization for taskdesk.
//!
//! This module keeps a local task cache consistent with the remote
//! collaborator across load, create, update, status-advance, and delete
//! operations. The cache is replaced wholesale after every load, create,
//! or status update, and pruned locally after a confirmed delete. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
