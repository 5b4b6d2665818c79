//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - DTOs for inserts and updates

pub mod admin_user;
pub mod inquiry;
pub mod project;
pub mod session;
