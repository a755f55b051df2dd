//! Authentication and role-based access.
//!
//! Flow Overview: login and registration store the returned bearer token in the
//! session. Protected routes resolve the current user with `GET /user` and run
//! the role gate against the route's allow-list; the dashboard sidebar filters
//! its links with the same role sets. Logout clears the token even when the API
//! call fails. This module must avoid logging tokens or passwords.

pub(crate) mod client;
pub(crate) mod gate;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod nav;
pub(crate) mod role;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{RequireAccess, RequireRole};
