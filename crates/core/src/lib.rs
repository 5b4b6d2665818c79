//! Domain logic shared across the Rivera workspace.
//!
//! Pure types and functions only: no I/O, no async, no database access.
//! The portfolio form state machine and the image-list operations live here
//! so they can be exercised without a running server.

pub mod brand;
pub mod error;
pub mod portfolio;
pub mod slug;
pub mod types;
