//! Authentication middleware extractors.
//!
//! - [`auth::AuthAdmin`] -- Extracts the authenticated admin from a JWT Bearer
//!   token and checks that the owning session is still live.

pub mod auth;
