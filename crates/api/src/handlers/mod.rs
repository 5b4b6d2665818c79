//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the repositories in `rivera_db` and to the image
//! storage layer in `rivera_storage`, mapping errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod admin_projects;
pub mod auth;
pub mod inquiries;
pub mod projects;
pub mod site;
