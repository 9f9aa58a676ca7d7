//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the dashboard account behind a Bearer token.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireEditor`] -- requires `editor` or `admin`.

pub mod auth;
pub mod rbac;
