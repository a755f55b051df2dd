//! Shared frontend utilities for API access, session storage, configuration,
//! errors, and build metadata.
//!
//! ## Request Flow
//!
//! 1. **Session:** the bearer token lives in the `token` cookie behind a single
//!    [`session::Session`] handle created at the app root.
//! 2. **Client:** [`api::ApiClient`] reads that token on every call and sends it as
//!    `Authorization: Bearer <token>`; without a token the header is left out and
//!    the API decides.
//! 3. **Errors:** non-2xx answers and transport failures come back as [`AppError`]
//!    for the calling page to render.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging tokens
//! or passwords.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod json;
pub(crate) mod session;
#[cfg(test)]
pub(crate) mod testing;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

pub(crate) use api::{ApiClient, Method, Transport, path_id, with_query};
pub(crate) use errors::AppError;
pub(crate) use session::Session;

/// Client type used by the browser build.
#[cfg(target_arch = "wasm32")]
pub(crate) type HttpClient = ApiClient<api::BrowserTransport>;
