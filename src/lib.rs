//! Taskdesk: a task-manager client over a remote HTTP collaborator.
//!
//! This crate keeps a local, in-memory cache of tasks consistent with a
//! remote HTTP service that is the sole source of truth for them. A single
//! board controller owns the cache and the edit selection, performs every
//! network call, and refreshes or prunes local state after each mutation.
//! Rendering layers are pure and communicate user intent through explicit
//! commands.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interface to the remote collaborator
//! - **Adapters**: Concrete implementations of the port (HTTP, in-memory)
//! - **Services**: The board controller orchestrating synchronization
//!
//! # Modules
//!
//! - [`config`]: Collaborator endpoint configuration
//! - [`task`]: Task model, collaborator port, adapters, and board controller
//! - [`ui`]: Pure rendering and intent capture for the form and list views

pub mod config;
pub mod task;
pub mod ui;
