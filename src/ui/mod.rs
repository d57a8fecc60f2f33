//! Pure rendering and intent capture for the form and list views.
//!
//! Nothing in this module performs network calls or retains task state
//! beyond its own input bindings; user intent is handed to the board
//! controller as [`crate::task::services::TaskCommand`] values.

pub mod form;
pub mod list;

pub use form::TaskForm;
pub use list::{TaskRow, rows};
