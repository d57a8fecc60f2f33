//! Application services for task state synchronization.

mod board;

pub use board::{OperationOutcome, TaskBoard, TaskCommand};
